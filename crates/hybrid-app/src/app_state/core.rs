//! HybridApp struct definition and constructor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use hybrid_bridge::navigation::{policy_for, ErrorPageObserver, LoggingObserver, NavigationObserver};
use hybrid_bridge::{
    Bridge, BridgeDispatcher, InPagePresenter, NavigationGate, Outbox, WebViewHandle,
    WebViewManager,
};
use hybrid_config::ShellConfig;

/// Top-level application state.
pub struct HybridApp {
    pub(super) config: ShellConfig,
    pub(super) entry_url: String,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // The single top-level view
    pub(super) webviews: WebViewManager,
    pub(super) view: Option<WebViewHandle>,

    pub(super) bridge: Bridge,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

/// Wire the bridge from config. Modals and results share one outbox.
pub(super) fn build_bridge(config: &ShellConfig) -> Bridge {
    let outbox = Outbox::new();

    let timeout = match config.bridge.dialog_timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(u64::from(secs))),
    };
    let presenter = InPagePresenter::new(outbox.clone());
    let dispatcher = BridgeDispatcher::new(Box::new(presenter), timeout);

    let observer: Box<dyn NavigationObserver> = if config.navigation.show_error_page {
        Box::new(ErrorPageObserver::new(outbox.clone()))
    } else {
        Box::new(LoggingObserver)
    };
    let gate = NavigationGate::new(policy_for(config.navigation.allowed_prefixes.clone()))
        .with_observer(observer);

    Bridge::new(dispatcher, gate, outbox)
}

impl HybridApp {
    pub fn new(config: ShellConfig, entry_url: String) -> Self {
        let bridge = build_bridge(&config);
        Self {
            config,
            entry_url,
            window: None,
            webviews: WebViewManager::new(),
            view: None,
            bridge,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
