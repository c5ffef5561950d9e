use hybrid_common::DialogId;
use tracing::debug;

use super::{DialogPresenter, DialogRequest};
use crate::ipc::{js_hide_dialog, js_show_dialog, Outbox};

/// Draws dialogs as a modal overlay inside the hosted document.
///
/// The overlay is built by the bridge initialization script; its buttons
/// reply with a `dialog_reply` envelope carrying the dialog id.
#[derive(Clone)]
pub struct InPagePresenter {
    outbox: Outbox,
}

impl InPagePresenter {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }
}

impl DialogPresenter for InPagePresenter {
    fn present(&mut self, id: &DialogId, request: &DialogRequest) {
        debug!(dialog_id = %id, message_len = request.message().len(), "presenting dialog");
        self.outbox.push(js_show_dialog(id, request));
    }

    fn dismiss(&mut self, id: &DialogId) {
        self.outbox.push(js_hide_dialog(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_and_dismiss_queue_scripts() {
        let outbox = Outbox::new();
        let mut presenter = InPagePresenter::new(outbox.clone());
        let id = DialogId::from("d-7".to_string());

        presenter.present(
            &id,
            &DialogRequest::Confirm {
                message: "Proceed?".into(),
            },
        );
        presenter.dismiss(&id);

        let scripts = outbox.drain();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].contains("_showDialog"));
        assert!(scripts[0].contains("\"Proceed?\""));
        assert!(scripts[1].contains("_hideDialog(\"d-7\")"));
    }
}
