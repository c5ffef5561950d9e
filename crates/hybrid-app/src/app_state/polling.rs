//! Drains engine events into the bridge and flushes scripts back out.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use hybrid_bridge::{NavigationEvent, PageLoadState, WebViewEvent};

use super::core::HybridApp;
use super::types::POLL_INTERVAL;

impl HybridApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.bridge.expire_dialogs(now);
            self.flush_outbox();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    pub(super) fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            self.handle_webview_event(event);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::IpcMessage { body } => {
                if let Err(e) = self.bridge.handle_ipc(&body) {
                    tracing::warn!("IPC message rejected: {e}");
                }
            }

            WebViewEvent::PageLoad { state, url } => match state {
                PageLoadState::Started => {
                    self.bridge
                        .notify_navigation(NavigationEvent::Started { url });
                }
                PageLoadState::Finished => {
                    // The engine reports no separate commit; a finished
                    // load implies one.
                    self.bridge.notify_navigation(NavigationEvent::Committed {
                        url: url.clone(),
                    });
                    self.bridge
                        .notify_navigation(NavigationEvent::Finished { url });
                    self.reveal_view();
                }
            },

            WebViewEvent::TitleChanged { title } => {
                if let Some(window) = &self.window {
                    window.set_title(&title);
                }
                if let Some(view) = self.view.as_mut() {
                    view.set_title(title);
                }
            }

            WebViewEvent::NewWindowRequested { url } => {
                if let Some(view) = self.view.as_mut() {
                    if let Err(e) = view.load_url(&url) {
                        tracing::warn!(url = %url, "Failed to open requested window in place: {e}");
                    }
                }
            }
        }
    }

    fn reveal_view(&mut self) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        match view.reveal() {
            Ok(true) => tracing::debug!("Web view revealed after first load"),
            Ok(false) => {}
            Err(e) => tracing::warn!("Failed to show web view: {e}"),
        }
    }

    /// Evaluate every queued script in the page.
    pub(super) fn flush_outbox(&mut self) {
        let Some(view) = self.view.as_ref() else {
            return;
        };
        let sent = self.bridge.flush(view);
        if sent > 0 {
            tracing::trace!(sent, "Outbox flushed");
        }
    }
}
