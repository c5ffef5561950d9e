//! Browser-engine settings applied when the view is built.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Let scripts open additional windows without a user gesture.
    pub javascript_can_open_windows_automatically: bool,
    /// Keep the view hidden until the first page has fully loaded.
    pub suppress_incremental_rendering: bool,
    /// Let the user zoom even when the page's viewport meta forbids it.
    pub ignore_viewport_scale_limits: bool,
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// Engine data directory (cookies, storage). Absent or empty uses the
    /// engine default.
    pub data_directory: Option<PathBuf>,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            javascript_can_open_windows_automatically: true,
            suppress_incremental_rendering: true,
            ignore_viewport_scale_limits: true,
            devtools: false,
            user_agent: Some("HybridShell/0.1".to_string()),
            data_directory: None,
        }
    }
}

impl WebViewSettings {
    /// The configured data directory, with an empty path treated as unset.
    pub fn data_directory(&self) -> Option<&Path> {
        self.data_directory
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
