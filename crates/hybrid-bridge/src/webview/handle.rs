use hybrid_common::BridgeError;
use url::Url;
use wry::WebView;

use crate::channel::Channel;
use crate::surface::HostSurface;

use super::ChannelSet;

/// The top-level view. Owns the `wry::WebView` and the engine context it
/// was built from.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) _context: wry::WebContext,
    pub(super) channels: ChannelSet,
    pub(super) current_url: String,
    pub(super) current_title: String,
    pub(super) revealed: bool,
}

fn host_err(e: wry::Error) -> BridgeError {
    BridgeError::Host(e.to_string())
}

impl WebViewHandle {
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    /// Navigate to a URL. Goes through the navigation gate like any other
    /// attempt.
    pub fn load_url(&mut self, url: &str) -> Result<(), BridgeError> {
        self.current_url = url.to_string();
        self.webview.load_url(url).map_err(host_err)
    }

    /// Set the view bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), BridgeError> {
        self.webview.set_bounds(bounds).map_err(host_err)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), BridgeError> {
        self.webview.set_visible(visible).map_err(host_err)
    }

    /// Show the view the first time a load finishes. Returns whether this
    /// call revealed it.
    pub fn reveal(&mut self) -> Result<bool, BridgeError> {
        if self.revealed {
            return Ok(false);
        }
        self.set_visible(true)?;
        self.revealed = true;
        Ok(true)
    }

    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

impl HostSurface for WebViewHandle {
    fn register_channel(&mut self, channel: Channel) -> Result<(), BridgeError> {
        self.channels
            .lock()
            .map_err(|_| BridgeError::Host("channel set poisoned".into()))?
            .insert(channel);
        Ok(())
    }

    fn load(&mut self, url: &Url) -> Result<(), BridgeError> {
        self.load_url(url.as_str())
    }

    fn evaluate_script(&self, js: &str) -> Result<(), BridgeError> {
        self.webview.evaluate_script(js).map_err(host_err)
    }
}
