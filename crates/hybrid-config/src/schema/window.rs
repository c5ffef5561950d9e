//! Host window configuration types.

use serde::{Deserialize, Serialize};

/// Window that hosts the full-screen view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 200-8192).
    pub width: u32,
    /// Initial logical height (valid range: 200-8192).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hybrid Shell".into(),
            width: 390,
            height: 844,
        }
    }
}
