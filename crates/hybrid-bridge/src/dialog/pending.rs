use std::collections::HashMap;
use std::time::{Duration, Instant};

use hybrid_common::{BridgeError, ContinuationMisuseError, DialogId};
use tracing::{debug, warn};

use super::DialogAction;
use crate::continuation::Continuation;

enum Waiting {
    Alert(Continuation<()>),
    Confirm(Continuation<bool>),
    Prompt {
        default_text: Option<String>,
        done: Continuation<Option<String>>,
    },
}

impl Waiting {
    fn expects(&self) -> &'static str {
        match self {
            Self::Alert(_) => "acknowledge",
            Self::Confirm(_) => "accept or reject",
            Self::Prompt { .. } => "submit or cancel",
        }
    }

    fn fire_fallback(self) {
        match self {
            Self::Alert(done) => done.resume_with_fallback(),
            Self::Confirm(done) => done.resume_with_fallback(),
            Self::Prompt { done, .. } => done.resume_with_fallback(),
        }
    }
}

struct Entry {
    waiting: Waiting,
    deadline: Option<Instant>,
}

/// Dialogs presented to the user and not yet answered.
///
/// Each continuation is given its fallback on insertion (alert `()`,
/// confirm `false`, prompt absent) so a timeout or teardown still resolves
/// the page's call.
#[derive(Default)]
pub struct PendingDialogs {
    entries: HashMap<DialogId, Entry>,
    timeout: Option<Duration>,
}

impl PendingDialogs {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            entries: HashMap::new(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &DialogId) -> bool {
        self.entries.contains_key(id)
    }

    pub(crate) fn insert_alert(&mut self, id: DialogId, done: Continuation<()>) {
        let done = if done.has_fallback() { done } else { done.with_fallback(()) };
        self.insert(id, Waiting::Alert(done));
    }

    pub(crate) fn insert_confirm(&mut self, id: DialogId, done: Continuation<bool>) {
        let done = if done.has_fallback() { done } else { done.with_fallback(false) };
        self.insert(id, Waiting::Confirm(done));
    }

    pub(crate) fn insert_prompt(
        &mut self,
        id: DialogId,
        default_text: Option<String>,
        done: Continuation<Option<String>>,
    ) {
        let done = if done.has_fallback() { done } else { done.with_fallback(None) };
        self.insert(id, Waiting::Prompt { default_text, done });
    }

    fn insert(&mut self, id: DialogId, waiting: Waiting) {
        let deadline = self.timeout.map(|t| Instant::now() + t);
        self.entries.insert(id, Entry { waiting, deadline });
    }

    /// Resolve dialog `id` with the user's action.
    ///
    /// An action that does not fit the dialog leaves it pending.
    pub fn resolve(&mut self, id: &DialogId, action: DialogAction) -> Result<(), BridgeError> {
        let entry = self
            .entries
            .remove(id)
            .ok_or_else(|| ContinuationMisuseError::AlreadyResolved(id.to_string()))?;

        match (entry.waiting, action) {
            (Waiting::Alert(done), DialogAction::Acknowledge)
            | (Waiting::Alert(done), DialogAction::Accept)
            | (Waiting::Alert(done), DialogAction::Cancel) => done.resume(()),
            (Waiting::Confirm(done), DialogAction::Accept) => done.resume(true),
            (Waiting::Confirm(done), DialogAction::Reject)
            | (Waiting::Confirm(done), DialogAction::Cancel) => done.resume(false),
            (Waiting::Prompt { default_text, done }, DialogAction::Submit(text)) => {
                done.resume(if text.is_empty() { default_text } else { Some(text) })
            }
            (Waiting::Prompt { default_text, done }, DialogAction::Accept) => {
                done.resume(default_text)
            }
            (Waiting::Prompt { done, .. }, DialogAction::Cancel) => done.resume(None),
            (waiting, action) => {
                let expected = waiting.expects();
                self.entries.insert(
                    id.clone(),
                    Entry {
                        waiting,
                        deadline: entry.deadline,
                    },
                );
                return Err(BridgeError::DialogActionMismatch {
                    id: id.to_string(),
                    expected,
                    got: action.name(),
                });
            }
        }

        debug!(dialog_id = %id, "dialog resolved");
        Ok(())
    }

    /// Fire the fallback of every dialog whose deadline is at or before
    /// `now`. Returns the expired ids.
    pub fn expire(&mut self, now: Instant) -> Vec<DialogId> {
        let expired: Vec<DialogId> = self
            .entries
            .iter()
            .filter(|(_, e)| e.deadline.is_some_and(|d| d <= now))
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            if let Some(entry) = self.entries.remove(id) {
                warn!(dialog_id = %id, "dialog timed out, resolving with fallback");
                entry.waiting.fire_fallback();
            }
        }
        expired
    }

    /// Resolve everything still pending with its fallback.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        for (_, entry) in self.entries.drain() {
            entry.waiting.fire_fallback();
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_accept_and_reject() {
        let mut pending = PendingDialogs::new(None);
        let (yes, mut yes_rx) = Continuation::oneshot("confirm");
        let (no, mut no_rx) = Continuation::oneshot("confirm");
        let a = DialogId::new();
        let b = DialogId::new();
        pending.insert_confirm(a.clone(), yes);
        pending.insert_confirm(b.clone(), no);

        pending.resolve(&a, DialogAction::Accept).unwrap();
        pending.resolve(&b, DialogAction::Reject).unwrap();

        assert!(yes_rx.try_recv().unwrap());
        assert!(!no_rx.try_recv().unwrap());
        assert!(pending.is_empty());
    }

    #[test]
    fn second_reply_is_already_resolved() {
        let mut pending = PendingDialogs::new(None);
        let (done, _rx) = Continuation::oneshot("confirm");
        let id = DialogId::new();
        pending.insert_confirm(id.clone(), done);

        pending.resolve(&id, DialogAction::Accept).unwrap();
        let err = pending.resolve(&id, DialogAction::Reject).unwrap_err();

        assert!(matches!(
            err,
            BridgeError::Continuation(ContinuationMisuseError::AlreadyResolved(_))
        ));
    }

    #[test]
    fn mismatched_action_keeps_dialog_pending() {
        let mut pending = PendingDialogs::new(None);
        let (done, mut rx) = Continuation::oneshot("confirm");
        let id = DialogId::new();
        pending.insert_confirm(id.clone(), done);

        let err = pending
            .resolve(&id, DialogAction::Submit("x".into()))
            .unwrap_err();
        assert!(matches!(err, BridgeError::DialogActionMismatch { got: "submit", .. }));
        assert!(pending.contains(&id));
        assert!(rx.try_recv().is_err());

        pending.resolve(&id, DialogAction::Accept).unwrap();
        assert!(rx.try_recv().unwrap());
    }

    #[test]
    fn prompt_accept_without_text_yields_default() {
        let mut pending = PendingDialogs::new(None);
        let (done, mut rx) = Continuation::oneshot("prompt");
        let id = DialogId::new();
        pending.insert_prompt(id.clone(), Some("guest".into()), done);

        pending.resolve(&id, DialogAction::Accept).unwrap();
        assert_eq!(rx.try_recv().unwrap(), Some("guest".to_string()));
    }

    #[test]
    fn expire_fires_fallbacks_only_for_overdue_dialogs() {
        let mut pending = PendingDialogs::new(Some(Duration::from_secs(30)));
        let (confirm, mut confirm_rx) = Continuation::oneshot("confirm");
        let (prompt, mut prompt_rx) = Continuation::oneshot("prompt");
        let a = DialogId::new();
        let b = DialogId::new();
        pending.insert_confirm(a.clone(), confirm);
        pending.insert_prompt(b.clone(), Some("d".into()), prompt);

        assert!(pending.expire(Instant::now()).is_empty());
        assert_eq!(pending.len(), 2);

        let mut expired = pending.expire(Instant::now() + Duration::from_secs(31));
        expired.sort_by(|x, y| x.as_str().cmp(y.as_str()));
        let mut want = vec![a, b];
        want.sort_by(|x, y| x.as_str().cmp(y.as_str()));
        assert_eq!(expired, want);

        assert!(!confirm_rx.try_recv().unwrap());
        assert_eq!(prompt_rx.try_recv().unwrap(), None);
        assert!(pending.is_empty());
    }

    #[test]
    fn no_timeout_never_expires() {
        let mut pending = PendingDialogs::new(None);
        let (done, _rx) = Continuation::oneshot("alert");
        pending.insert_alert(DialogId::new(), done);
        assert!(pending
            .expire(Instant::now() + Duration::from_secs(86_400))
            .is_empty());
        assert_eq!(pending.clear(), 1);
    }

    #[test]
    fn caller_fallback_is_kept() {
        let mut pending = PendingDialogs::new(None);
        let (done, mut rx) = Continuation::oneshot("confirm");
        pending.insert_confirm(DialogId::new(), done.with_fallback(true));
        pending.clear();
        assert!(rx.try_recv().unwrap());
    }
}
