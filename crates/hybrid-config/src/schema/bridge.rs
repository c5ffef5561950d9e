//! Native/web bridge configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Channel names registered before the first load.
    pub channels: Vec<String>,
    /// Seconds before an unanswered dialog resolves with its fallback
    /// (valid range: 0-3600, 0 disables).
    pub dialog_timeout_secs: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channels: vec!["log".into(), "ping".into()],
            dialog_timeout_secs: 120,
        }
    }
}
