//! Graceful shutdown: settle pending dialogs, then drop the view.

use super::core::HybridApp;

impl HybridApp {
    /// Order matters:
    /// 1. Resolve pending dialogs with their fallbacks
    /// 2. Destroy the web view
    /// 3. Release the window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.bridge.shutdown();
        self.view = None;
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
