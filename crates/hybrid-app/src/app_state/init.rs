//! Window creation, web view setup and the initial load.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use hybrid_bridge::{
    parse_channels, Bridge, HostSurface, NavigationEvent, SessionPool, WebViewConfig,
};
use hybrid_common::{BridgeError, NavigationError};
use hybrid_config::ShellConfig;

use super::core::HybridApp;

/// Full-window bounds for the view.
pub(super) fn view_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size();
    wry::Rect {
        position: wry::dpi::PhysicalPosition::new(0, 0).into(),
        size: wry::dpi::PhysicalSize::new(size.width, size.height).into(),
    }
}

impl HybridApp {
    /// Create the window and the web view.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let session = SessionPool::init(self.config.webview.data_directory().map(Into::into));
        let view_config = WebViewConfig::from(&self.config.webview);
        let view = match self.webviews.create(
            window.as_ref(),
            view_bounds(&window),
            &view_config,
            self.bridge.navigation_gate(),
            session,
        ) {
            Ok(view) => view,
            Err(e) => {
                tracing::error!("Failed to create web view: {e}");
                return false;
            }
        };

        self.view = Some(view);
        self.window = Some(window);
        tracing::info!("Window and web view created");
        true
    }

    /// Register the configured channels, then load the entry document.
    /// Runs once; the registry is sealed afterwards.
    pub(super) fn start_bridge(&mut self) -> Result<(), BridgeError> {
        let Some(view) = self.view.as_mut() else {
            return Ok(());
        };
        start_bridge_on(&mut self.bridge, view, &self.config, &self.entry_url)
    }
}

/// Register channels and load the entry document on `surface`.
///
/// A channel list or entry URL the bridge cannot use is an error. A load the
/// surface refuses is reported to the navigation observer instead.
pub(super) fn start_bridge_on<S>(
    bridge: &mut Bridge,
    surface: &mut S,
    config: &ShellConfig,
    entry_url: &str,
) -> Result<(), BridgeError>
where
    S: HostSurface + ?Sized,
{
    let channels = parse_channels(&config.bridge.channels)?;
    bridge.register(surface, channels)?;

    match bridge.load(surface, entry_url) {
        Ok(url) => {
            tracing::info!(url = %url, "Entry document requested");
            Ok(())
        }
        Err(e @ BridgeError::Config(_)) => Err(e),
        Err(e) => {
            bridge.notify_navigation(NavigationEvent::ProvisionalFailed(NavigationError::new(
                entry_url,
                e.to_string(),
            )));
            Ok(())
        }
    }
}
