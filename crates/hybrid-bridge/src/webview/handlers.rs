use std::collections::BTreeSet;

use tracing::{debug, info, warn};
use wry::WebViewBuilder;

use crate::channel::Channel;
use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::IpcEnvelope;
use crate::navigation::{decide_now, SharedGate};

use super::{ChannelSet, EventSink, WebViewManager};

// =============================================================================
// IPC ADMISSION
// =============================================================================

/// Whether an IPC body from the page should reach the bridge.
///
/// Malformed envelopes are dropped. Channel messages are admitted only for
/// channels attached to the surface; dialog traffic always passes.
pub fn admit_ipc(body: &str, channels: &BTreeSet<Channel>) -> bool {
    match IpcEnvelope::from_json(body) {
        Ok(IpcEnvelope::Message { channel, .. }) => {
            channels.iter().any(|c| c.as_str() == channel)
        }
        Ok(_) => true,
        Err(_) => false,
    }
}

fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        channels: ChannelSet,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();
            let admitted = channels
                .lock()
                .map(|set| admit_ipc(&body, &set))
                .unwrap_or(false);
            if !admitted {
                warn!(body_len = body.len(), "IPC message dropped");
                return;
            }

            debug!(body_len = body.len(), "IPC message from page");
            push(&events, WebViewEvent::IpcMessage { body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            push(&events, WebViewEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        gate: SharedGate,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| decide_now(&gate, &url).is_allowed())
    }

    /// New windows are never created; see [`new_window_event`].
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        open_automatically: bool,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            if let Some(event) = new_window_event(url, open_automatically) {
                push(&events, event);
            }
            false
        })
    }
}

/// What a `window.open` request turns into.
///
/// With `open_automatically` the URL is queued for the host to load into the
/// existing view, replacing the current document after the navigation gate
/// allows it. Otherwise the request is dropped and nothing navigates.
pub fn new_window_event(url: String, open_automatically: bool) -> Option<WebViewEvent> {
    if open_automatically {
        info!(url = %url, "new window request redirected to main view");
        Some(WebViewEvent::NewWindowRequested { url })
    } else {
        warn!(url = %url, "new window request dropped");
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================
