//! Configuration schema types for the hybrid shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod app;
mod bridge;
mod navigation;
mod system;
mod webview;
mod window;

pub use app::*;
pub use bridge::*;
pub use navigation::*;
pub use system::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the shell.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ShellConfig {
    pub app: AppConfig,
    pub webview: WebViewSettings,
    pub bridge: BridgeConfig,
    pub navigation: NavigationConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
