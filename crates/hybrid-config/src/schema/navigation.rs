//! Navigation policy configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// URL prefixes the view may navigate to. Empty allows everything.
    pub allowed_prefixes: Vec<String>,
    /// Replace the view content with an error page when a load fails.
    pub show_error_page: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            allowed_prefixes: Vec::new(),
            show_error_page: true,
        }
    }
}
