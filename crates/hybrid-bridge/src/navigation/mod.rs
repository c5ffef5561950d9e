//! Per-attempt navigation gate.
//!
//! Every navigation attempt runs `Idle -> Deciding -> Allowed | Cancelled`.
//! The decision is handed back once through a [`Continuation`]; the next
//! attempt starts over from `Idle`. Load lifecycle notifications are passed
//! to a [`NavigationObserver`].

mod observer;
mod policy;

pub use observer::{ErrorPageObserver, LoggingObserver, NavigationObserver};
pub use policy::{is_navigation_allowed, policy_for, AllowAll, NavigationPolicy, PrefixAllowList};

use std::sync::{Arc, Mutex};

use hybrid_common::NavigationError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::continuation::Continuation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDecision {
    Allow,
    Cancel,
}

impl NavigationDecision {
    pub fn is_allowed(self) -> bool {
        self == Self::Allow
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    Idle,
    Deciding,
    Allowed,
    Cancelled,
}

/// Load lifecycle notifications from the host surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Started { url: String },
    Committed { url: String },
    Finished { url: String },
    Failed(NavigationError),
    ProvisionalFailed(NavigationError),
}

pub struct NavigationGate {
    policy: Box<dyn NavigationPolicy>,
    observer: Box<dyn NavigationObserver>,
    state: NavigationState,
    attempts: u64,
}

/// The gate shared between the event loop and the surface's navigation hook.
pub type SharedGate = Arc<Mutex<NavigationGate>>;

impl NavigationGate {
    pub fn new(policy: Box<dyn NavigationPolicy>) -> Self {
        Self {
            policy,
            observer: Box::new(LoggingObserver),
            state: NavigationState::Idle,
            attempts: 0,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn NavigationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn into_shared(self) -> SharedGate {
        Arc::new(Mutex::new(self))
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Decide one navigation attempt to `target`, resolving `done` once.
    pub fn decide(&mut self, target: &str, done: Continuation<NavigationDecision>) {
        self.attempts += 1;
        self.state = NavigationState::Deciding;
        let decision = self.policy.decide(target);
        self.state = match decision {
            NavigationDecision::Allow => NavigationState::Allowed,
            NavigationDecision::Cancel => NavigationState::Cancelled,
        };

        if decision.is_allowed() {
            debug!(attempt = self.attempts, url = %target, "navigation allowed");
        } else {
            warn!(attempt = self.attempts, url = %target, "navigation cancelled by policy");
        }
        done.resume(decision);
    }

    /// Pass a lifecycle notification to the observer. Failures are reported,
    /// never retried.
    pub fn notify(&mut self, event: NavigationEvent) {
        match &event {
            NavigationEvent::Started { url } => self.observer.on_started(url),
            NavigationEvent::Committed { url } => self.observer.on_committed(url),
            NavigationEvent::Finished { url } => self.observer.on_finished(url),
            NavigationEvent::Failed(err) => self.observer.on_failed(err),
            NavigationEvent::ProvisionalFailed(err) => self.observer.on_provisional_failed(err),
        }
    }
}

/// Decide synchronously through a shared gate. For host hooks that must
/// return the decision instead of taking a continuation. A poisoned gate
/// cancels.
pub fn decide_now(gate: &SharedGate, target: &str) -> NavigationDecision {
    let (done, mut rx) = Continuation::oneshot("navigation");
    let done = done.with_fallback(NavigationDecision::Cancel);
    match gate.lock() {
        Ok(mut gate) => gate.decide(target, done),
        Err(_) => drop(done),
    }
    rx.try_recv().unwrap_or(NavigationDecision::Cancel)
}
