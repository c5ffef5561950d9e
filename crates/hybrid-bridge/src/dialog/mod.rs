//! Dialog-style requests from the page (alert, confirm, prompt).
//!
//! The page's call stays pending until the user answers. The dispatcher
//! holds the continuation, a [`DialogPresenter`] shows the modal, and the
//! user's choice comes back as a [`DialogAction`].

mod in_page;
mod pending;

pub use in_page::InPagePresenter;
pub use pending::PendingDialogs;

use hybrid_common::DialogId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DialogRequest {
    Alert {
        message: String,
    },
    Confirm {
        message: String,
    },
    Prompt {
        message: String,
        #[serde(default)]
        default_text: Option<String>,
    },
}

impl DialogRequest {
    pub fn message(&self) -> &str {
        match self {
            Self::Alert { message } | Self::Confirm { message } | Self::Prompt { message, .. } => {
                message
            }
        }
    }
}

/// What the user did with a presented dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// The single affordance of an alert.
    Acknowledge,
    Accept,
    Reject,
    /// Prompt accepted with the entered text (possibly empty).
    Submit(String),
    /// Dialog dismissed without an answer.
    Cancel,
}

impl DialogAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Acknowledge => "acknowledge",
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Submit(_) => "submit",
            Self::Cancel => "cancel",
        }
    }
}

/// Presents modals to the user. Implemented by the host shell.
pub trait DialogPresenter {
    fn present(&mut self, id: &DialogId, request: &DialogRequest);

    /// Remove a modal that is no longer waiting for an answer.
    fn dismiss(&mut self, _id: &DialogId) {}
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_request_parses_without_default() {
        let req: DialogRequest =
            serde_json::from_str(r#"{"type":"prompt","message":"Name?"}"#).unwrap();
        assert_eq!(
            req,
            DialogRequest::Prompt {
                message: "Name?".into(),
                default_text: None
            }
        );
        assert_eq!(req.message(), "Name?");
    }

    #[test]
    fn unknown_dialog_type_is_rejected() {
        assert!(serde_json::from_str::<DialogRequest>(r#"{"type":"print","message":"x"}"#).is_err());
    }
}
