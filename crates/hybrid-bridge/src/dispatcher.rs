//! Routes page messages to native handlers and dialog requests to the
//! presenter.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use hybrid_common::{BridgeError, DialogId};
use tracing::{debug, info};

use crate::channel::{Channel, Message};
use crate::continuation::Continuation;
use crate::dialog::{DialogAction, DialogPresenter, DialogRequest, PendingDialogs};

/// Native behaviour behind one channel.
pub trait ChannelHandler {
    /// Handle a message. `Some` is sent back to the page on the same channel.
    fn handle(&mut self, message: &Message) -> Option<serde_json::Value>;
}

/// Writes one diagnostic record per message.
pub struct LogHandler;

impl ChannelHandler for LogHandler {
    fn handle(&mut self, message: &Message) -> Option<serde_json::Value> {
        info!(channel = %message.channel, payload = %message.payload, "bridge message");
        None
    }
}

/// Answers every message with `"pong"`.
pub struct PingHandler;

impl ChannelHandler for PingHandler {
    fn handle(&mut self, _message: &Message) -> Option<serde_json::Value> {
        Some(serde_json::Value::String("pong".into()))
    }
}

fn default_handler(channel: Channel) -> Box<dyn ChannelHandler> {
    match channel {
        Channel::Log => Box::new(LogHandler),
        Channel::Ping => Box::new(PingHandler),
    }
}

pub struct BridgeDispatcher {
    handlers: HashMap<Channel, Box<dyn ChannelHandler>>,
    presenter: Box<dyn DialogPresenter>,
    pending: PendingDialogs,
}

impl BridgeDispatcher {
    /// Create a dispatcher with the default handler for every channel.
    /// `dialog_timeout` of `None` lets dialogs wait indefinitely.
    pub fn new(presenter: Box<dyn DialogPresenter>, dialog_timeout: Option<Duration>) -> Self {
        let handlers = Channel::ALL
            .iter()
            .map(|c| (*c, default_handler(*c)))
            .collect();
        Self {
            handlers,
            presenter,
            pending: PendingDialogs::new(dialog_timeout),
        }
    }

    /// Replace the handler behind `channel`.
    pub fn set_handler(&mut self, channel: Channel, handler: Box<dyn ChannelHandler>) {
        self.handlers.insert(channel, handler);
    }

    /// Route a message to its channel handler.
    pub fn on_message(&mut self, message: &Message) -> Option<serde_json::Value> {
        let handler = self.handlers.get_mut(&message.channel)?;
        let reply = handler.handle(message);
        debug!(channel = %message.channel, replied = reply.is_some(), "message dispatched");
        reply
    }

    /// Present an alert. `done` fires once the user acknowledges it.
    pub fn alert(&mut self, message: impl Into<String>, done: Continuation<()>) -> DialogId {
        let id = DialogId::new();
        self.pending.insert_alert(id.clone(), done);
        self.presenter.present(
            &id,
            &DialogRequest::Alert {
                message: message.into(),
            },
        );
        id
    }

    /// Present an accept/reject choice. `done(true)` on accept, `done(false)`
    /// on reject.
    pub fn confirm(&mut self, message: impl Into<String>, done: Continuation<bool>) -> DialogId {
        let id = DialogId::new();
        self.pending.insert_confirm(id.clone(), done);
        self.presenter.present(
            &id,
            &DialogRequest::Confirm {
                message: message.into(),
            },
        );
        id
    }

    /// Ask for text. Submitting non-empty text yields it; submitting empty
    /// text yields `default_text`; cancelling yields `None`.
    pub fn prompt(
        &mut self,
        message: impl Into<String>,
        default_text: Option<String>,
        done: Continuation<Option<String>>,
    ) -> DialogId {
        let id = DialogId::new();
        self.pending
            .insert_prompt(id.clone(), default_text.clone(), done);
        self.presenter.present(
            &id,
            &DialogRequest::Prompt {
                message: message.into(),
                default_text,
            },
        );
        id
    }

    /// Deliver the user's answer to dialog `id`.
    pub fn respond(&mut self, id: &DialogId, action: DialogAction) -> Result<(), BridgeError> {
        self.pending.resolve(id, action)
    }

    /// Resolve overdue dialogs with their fallbacks and take their modals down.
    pub fn expire_overdue(&mut self, now: Instant) -> usize {
        let expired = self.pending.expire(now);
        for id in &expired {
            self.presenter.dismiss(id);
        }
        expired.len()
    }

    /// Resolve every pending dialog with its fallback. Used on teardown.
    pub fn cancel_all(&mut self) -> usize {
        self.pending.clear()
    }

    pub fn pending_dialogs(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::dialog::testing::RecordingPresenter;

    fn dispatcher() -> (BridgeDispatcher, RecordingPresenter) {
        let presenter = RecordingPresenter::default();
        let d = BridgeDispatcher::new(Box::new(presenter.clone()), None);
        (d, presenter)
    }

    struct Recording(Arc<Mutex<Vec<Message>>>);

    impl ChannelHandler for Recording {
        fn handle(&mut self, message: &Message) -> Option<serde_json::Value> {
            self.0.lock().unwrap().push(message.clone());
            None
        }
    }

    #[test]
    fn log_channel_has_no_reply() {
        let (mut d, _) = dispatcher();
        assert_eq!(d.on_message(&Message::new(Channel::Log, "hello")), None);
    }

    #[test]
    fn ping_channel_replies_pong() {
        let (mut d, _) = dispatcher();
        assert_eq!(
            d.on_message(&Message::new(Channel::Ping, serde_json::Value::Null)),
            Some(serde_json::json!("pong"))
        );
    }

    #[test]
    fn custom_handler_receives_payload() {
        let (mut d, _) = dispatcher();
        let seen = Arc::new(Mutex::new(Vec::new()));
        d.set_handler(Channel::Log, Box::new(Recording(Arc::clone(&seen))));

        d.on_message(&Message::new(Channel::Log, serde_json::json!({"a": 1})));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].payload, serde_json::json!({"a": 1}));
    }

    #[test]
    fn alert_fires_done_on_acknowledge() {
        let (mut d, presenter) = dispatcher();
        let (done, mut rx) = Continuation::oneshot("alert");

        let id = d.alert("Saved", done);
        assert_eq!(presenter.presented.lock().unwrap().len(), 1);
        assert!(rx.try_recv().is_err());

        d.respond(&id, DialogAction::Acknowledge).unwrap();
        assert!(rx.try_recv().is_ok());
        assert_eq!(d.pending_dialogs(), 0);
    }

    #[test]
    fn confirm_reject_fires_false_exactly_once() {
        let (mut d, _) = dispatcher();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let done = Continuation::new("confirm", move |v: bool| sink.lock().unwrap().push(v));

        let id = d.confirm("Proceed?", done);
        d.respond(&id, DialogAction::Reject).unwrap();
        assert!(d.respond(&id, DialogAction::Accept).is_err());
        d.cancel_all();

        assert_eq!(*calls.lock().unwrap(), vec![false]);
    }

    #[test]
    fn confirm_accept_fires_true() {
        let (mut d, presenter) = dispatcher();
        let (done, mut rx) = Continuation::oneshot("confirm");
        d.confirm("Proceed?", done);

        d.respond(&presenter.last_id(), DialogAction::Accept).unwrap();
        assert!(rx.try_recv().unwrap());
    }

    #[test]
    fn prompt_empty_text_yields_exact_default() {
        let (mut d, _) = dispatcher();
        let (done, mut rx) = Continuation::oneshot("prompt");
        let id = d.prompt("Name?", Some("  guest ".into()), done);

        d.respond(&id, DialogAction::Submit(String::new())).unwrap();
        assert_eq!(rx.try_recv().unwrap(), Some("  guest ".to_string()));
    }

    #[test]
    fn prompt_entered_text_ignores_default() {
        let (mut d, _) = dispatcher();
        let (done, mut rx) = Continuation::oneshot("prompt");
        let id = d.prompt("Name?", Some("guest".into()), done);

        d.respond(&id, DialogAction::Submit("Ada".into())).unwrap();
        assert_eq!(rx.try_recv().unwrap(), Some("Ada".to_string()));
    }

    #[test]
    fn prompt_cancel_yields_none() {
        let (mut d, _) = dispatcher();
        let (done, mut rx) = Continuation::oneshot("prompt");
        let id = d.prompt("Name?", Some("guest".into()), done);

        d.respond(&id, DialogAction::Cancel).unwrap();
        assert_eq!(rx.try_recv().unwrap(), None);
    }

    #[test]
    fn prompt_request_carries_default_to_presenter() {
        let (mut d, presenter) = dispatcher();
        let (done, _rx) = Continuation::oneshot("prompt");
        d.prompt("Name?", Some("guest".into()), done);

        let presented = presenter.presented.lock().unwrap();
        assert_eq!(
            presented[0].1,
            DialogRequest::Prompt {
                message: "Name?".into(),
                default_text: Some("guest".into())
            }
        );
        drop(presented);
        d.cancel_all();
    }

    #[test]
    fn overdue_dialogs_expire_and_are_dismissed() {
        let presenter = RecordingPresenter::default();
        let mut d =
            BridgeDispatcher::new(Box::new(presenter.clone()), Some(Duration::from_secs(5)));
        let (done, mut rx) = Continuation::oneshot("confirm");
        let id = d.confirm("Proceed?", done);

        assert_eq!(d.expire_overdue(Instant::now()), 0);
        assert_eq!(d.expire_overdue(Instant::now() + Duration::from_secs(6)), 1);

        assert!(!rx.try_recv().unwrap());
        assert_eq!(*presenter.dismissed.lock().unwrap(), vec![id]);
    }
}
