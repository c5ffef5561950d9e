//! Application entry configuration.

use serde::{Deserialize, Serialize};

/// What the single full-screen view loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote web application URL, loaded once per view lifecycle.
    pub entry_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            entry_url: "https://example.com/".into(),
        }
    }
}
