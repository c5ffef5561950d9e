//! The bridge: registry, dispatcher and navigation gate behind one facade.

use std::time::Instant;

use hybrid_common::{ConfigError, Result};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::channel::{Channel, Message};
use crate::continuation::Continuation;
use crate::dialog::DialogRequest;
use crate::dispatcher::BridgeDispatcher;
use crate::ipc::{js_dispatch, js_resolve, IpcEnvelope, Outbox};
use crate::navigation::{decide_now, NavigationDecision, NavigationEvent, NavigationGate, SharedGate};
use crate::registry::BridgeRegistry;
use crate::surface::HostSurface;

pub struct Bridge {
    registry: BridgeRegistry,
    dispatcher: BridgeDispatcher,
    gate: SharedGate,
    outbox: Outbox,
}

impl Bridge {
    /// `outbox` must be the queue the dispatcher's presenter writes to, so
    /// one flush delivers modals and results in order.
    pub fn new(dispatcher: BridgeDispatcher, gate: NavigationGate, outbox: Outbox) -> Self {
        Self {
            registry: BridgeRegistry::new(),
            dispatcher,
            gate: gate.into_shared(),
            outbox,
        }
    }

    pub fn registry(&self) -> &BridgeRegistry {
        &self.registry
    }

    pub fn dispatcher_mut(&mut self) -> &mut BridgeDispatcher {
        &mut self.dispatcher
    }

    pub fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    /// The gate, for the surface's navigation hook.
    pub fn navigation_gate(&self) -> SharedGate {
        SharedGate::clone(&self.gate)
    }

    /// Register channels with the surface. Fails once a load has started.
    pub fn register<S, I>(&mut self, surface: &mut S, channels: I) -> Result<()>
    where
        S: HostSurface + ?Sized,
        I: IntoIterator<Item = Channel>,
    {
        self.registry.register(surface, channels)
    }

    /// Validate `raw` and load it as the entry document. Happens once per
    /// view; the registry is sealed when the surface accepts the load.
    pub fn load<S>(&mut self, surface: &mut S, raw: &str) -> Result<Url>
    where
        S: HostSurface + ?Sized,
    {
        if self.registry.is_loaded() {
            return Err(ConfigError::AlreadyLoaded(raw.to_string()).into());
        }
        let url = Url::parse(raw.trim())
            .map_err(|e| ConfigError::InvalidUrl(format!("{raw}: {e}")))?;
        surface.load(&url)?;
        self.registry.mark_loaded();
        info!(url = %url, channels = self.registry.len(), "loading document");
        Ok(url)
    }

    /// Deliver a message on a registered channel. A reply, if the channel
    /// produces one, is queued for the page.
    pub fn invoke(&mut self, channel: &str, payload: Value) -> Result<Option<Value>> {
        let channel = self.registry.resolve(channel)?;
        let reply = self.dispatcher.on_message(&Message::new(channel, payload));
        if let Some(reply) = &reply {
            self.outbox.push(js_dispatch(channel.as_str(), reply));
        }
        Ok(reply)
    }

    /// Handle one raw IPC body from the page.
    pub fn handle_ipc(&mut self, body: &str) -> Result<()> {
        match IpcEnvelope::from_json(body)? {
            IpcEnvelope::Message { channel, payload } => {
                self.invoke(&channel, payload)?;
            }
            IpcEnvelope::Dialog { ticket, dialog } => self.open_dialog(ticket, dialog),
            IpcEnvelope::DialogReply { id, action, text } => {
                self.dispatcher.respond(&id, action.into_action(text))?;
            }
        }
        Ok(())
    }

    fn open_dialog(&mut self, ticket: String, request: DialogRequest) {
        debug!(ticket = %ticket, "dialog requested by page");
        match request {
            DialogRequest::Alert { message } => {
                let done = self.page_continuation(ticket, "alert", |()| Value::Null);
                self.dispatcher.alert(message, done);
            }
            DialogRequest::Confirm { message } => {
                let done = self.page_continuation(ticket, "confirm", Value::Bool);
                self.dispatcher.confirm(message, done);
            }
            DialogRequest::Prompt {
                message,
                default_text,
            } => {
                let done = self.page_continuation(ticket, "prompt", |text: Option<String>| {
                    text.map(Value::String).unwrap_or(Value::Null)
                });
                self.dispatcher.prompt(message, default_text, done);
            }
        }
    }

    /// A continuation that resolves the page promise `ticket` on the next flush.
    fn page_continuation<T, F>(&self, ticket: String, label: &'static str, encode: F) -> Continuation<T>
    where
        T: Send + 'static,
        F: FnOnce(T) -> Value + Send + 'static,
    {
        let outbox = self.outbox.clone();
        Continuation::new(label, move |value| {
            outbox.push(js_resolve(&ticket, &encode(value)));
        })
    }

    /// Decide a navigation attempt through the gate.
    pub fn decide_navigation(&self, target: &str) -> NavigationDecision {
        decide_now(&self.gate, target)
    }

    /// Pass a load notification to the gate. A new top-level document
    /// first settles whatever the previous one left pending.
    pub fn notify_navigation(&mut self, event: NavigationEvent) {
        if let NavigationEvent::Started { url } = &event {
            self.retire_document(url);
        }
        match self.gate.lock() {
            Ok(mut gate) => gate.notify(event),
            Err(_) => warn!("navigation gate poisoned, dropping notification"),
        }
    }

    /// Resolve dialogs opened by the departing document with their
    /// fallbacks, then discard every queued script. Those scripts target a
    /// document that no longer exists and would otherwise resolve tickets in
    /// its successor.
    fn retire_document(&mut self, next_url: &str) {
        let settled = self.dispatcher.cancel_all();
        let discarded = self.outbox.drain().len();
        if settled > 0 || discarded > 0 {
            debug!(url = %next_url, settled, discarded, "previous document retired");
        }
    }

    /// Time out overdue dialogs.
    pub fn expire_dialogs(&mut self, now: Instant) -> usize {
        self.dispatcher.expire_overdue(now)
    }

    /// Evaluate every queued script on the surface, in order.
    pub fn flush<S>(&self, surface: &S) -> usize
    where
        S: HostSurface + ?Sized,
    {
        let scripts = self.outbox.drain();
        for script in &scripts {
            if let Err(e) = surface.evaluate_script(script) {
                warn!(error = %e, "failed to deliver script to page");
            }
        }
        scripts.len()
    }

    /// Resolve pending dialogs with their fallbacks. Call before the surface
    /// goes away.
    pub fn shutdown(&mut self) {
        let cancelled = self.dispatcher.cancel_all();
        if cancelled > 0 {
            info!(cancelled, "pending dialogs resolved on shutdown");
        }
        self.outbox.drain();
    }
}
