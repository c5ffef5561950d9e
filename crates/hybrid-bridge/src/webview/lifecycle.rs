use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::{init_script, ScriptOptions};
use crate::navigation::SharedGate;
use crate::session::SessionPool;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the view as a child of `window`, positioned at `bounds`.
    ///
    /// Nothing is loaded yet: register channels on the returned handle, then
    /// load through the bridge.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: &WebViewConfig,
        gate: SharedGate,
        session: &SessionPool,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut context = session.web_context();
        let script = init_script(ScriptOptions {
            ignore_viewport_scale_limits: config.ignore_viewport_scale_limits,
        });

        let mut builder = WebViewBuilder::with_web_context(&mut context)
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_visible(!config.suppress_incremental_rendering)
            .with_initialization_script(&script);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(
            builder,
            Arc::clone(&self.events),
            Arc::clone(&self.channels),
        );
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_navigation_handler(builder, gate);
        builder = Self::attach_new_window_handler(
            builder,
            Arc::clone(&self.events),
            config.open_windows_automatically,
        );

        let webview = builder.build_as_child(window)?;

        debug!(
            hidden = config.suppress_incremental_rendering,
            data_directory = ?session.data_directory(),
            "WebView created"
        );

        Ok(WebViewHandle {
            webview,
            _context: context,
            channels: Arc::clone(&self.channels),
            current_url: "about:blank".to_string(),
            current_title: String::new(),
            revealed: !config.suppress_incremental_rendering,
        })
    }
}
