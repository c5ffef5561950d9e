//! The `wry` implementation of [`crate::HostSurface`].
//!
//! `WebViewManager` builds the single top-level view and funnels engine
//! callbacks into an event queue the host event loop drains.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use crate::channel::Channel;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use handlers::{admit_ipc, new_window_event};
pub use types::WebViewConfig;

pub(crate) type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;
pub(crate) type ChannelSet = Arc<Mutex<BTreeSet<Channel>>>;

pub struct WebViewManager {
    /// Events are pushed here for the main event loop to consume.
    pub(crate) events: EventSink,
    /// Channels attached to the message pipe. Shared with the handle.
    pub(crate) channels: ChannelSet,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            channels: Arc::new(Mutex::new(BTreeSet::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
