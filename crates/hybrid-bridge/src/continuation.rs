//! Single-use continuations that resolve a pending cross-boundary call.
//!
//! A [`Continuation`] is consumed by [`Continuation::resume`], so resolving
//! twice does not compile. Dropping one unresolved is the remaining misuse:
//! it fires the fallback value if one was given, and trips a debug assertion
//! otherwise.

use hybrid_common::ContinuationMisuseError;
use tokio::sync::oneshot;
use tracing::{error, warn};

type Sink<T> = Box<dyn FnOnce(T) + Send>;

pub struct Continuation<T: Send + 'static> {
    label: &'static str,
    sink: Option<Sink<T>>,
    fallback: Option<T>,
}

impl<T: Send + 'static> Continuation<T> {
    /// Wrap a callback. `label` names the call in diagnostics.
    pub fn new(label: &'static str, sink: impl FnOnce(T) + Send + 'static) -> Self {
        Self {
            label,
            sink: Some(Box::new(sink)),
            fallback: None,
        }
    }

    /// A continuation paired with the receiving half of a one-shot channel.
    pub fn oneshot(label: &'static str) -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        let continuation = Self::new(label, move |value| {
            // Receiver gone means nobody is waiting any more.
            let _ = tx.send(value);
        });
        (continuation, rx)
    }

    /// Value delivered if this continuation is dropped or times out unresolved.
    pub fn with_fallback(mut self, value: T) -> Self {
        self.fallback = Some(value);
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Resolve the pending call with `value`.
    pub fn resume(mut self, value: T) {
        if let Some(sink) = self.sink.take() {
            sink(value);
        }
    }

    /// Resolve with the fallback value. Without one, this is the same as
    /// dropping the continuation unresolved.
    pub fn resume_with_fallback(mut self) {
        if let Some(value) = self.fallback.take() {
            if let Some(sink) = self.sink.take() {
                sink(value);
            }
        }
    }
}

impl<T: Send + 'static> Drop for Continuation<T> {
    fn drop(&mut self) {
        let Some(sink) = self.sink.take() else {
            return;
        };
        let err = ContinuationMisuseError::Dropped(self.label.to_string());
        match self.fallback.take() {
            Some(value) => {
                warn!(error = %err, "resolving with fallback");
                sink(value);
            }
            None => {
                error!(error = %err, "pending call left unresolved");
                debug_assert!(std::thread::panicking(), "{err}");
            }
        }
    }
}

impl<T: Send + 'static> std::fmt::Debug for Continuation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Continuation")
            .field("label", &self.label)
            .field("resolved", &self.sink.is_none())
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}
