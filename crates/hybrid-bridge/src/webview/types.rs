use hybrid_config::schema::WebViewSettings;

/// Engine settings for the top-level view.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Script may open windows without a user gesture. Such requests load
    /// into the same view.
    pub open_windows_automatically: bool,
    /// Keep the view hidden until the first load finishes.
    pub suppress_incremental_rendering: bool,
    /// Let the user zoom past the page's viewport limits.
    pub ignore_viewport_scale_limits: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: Some("HybridShell/0.1".to_string()),
            open_windows_automatically: true,
            suppress_incremental_rendering: true,
            ignore_viewport_scale_limits: true,
        }
    }
}

impl From<&WebViewSettings> for WebViewConfig {
    fn from(s: &WebViewSettings) -> Self {
        Self {
            devtools: s.devtools || cfg!(debug_assertions),
            user_agent: s.user_agent.clone(),
            open_windows_automatically: s.javascript_can_open_windows_automatically,
            suppress_incremental_rendering: s.suppress_incremental_rendering,
            ignore_viewport_scale_limits: s.ignore_viewport_scale_limits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_carry_over() {
        let settings = WebViewSettings {
            javascript_can_open_windows_automatically: false,
            suppress_incremental_rendering: false,
            ignore_viewport_scale_limits: false,
            user_agent: None,
            ..WebViewSettings::default()
        };
        let config = WebViewConfig::from(&settings);
        assert!(!config.open_windows_automatically);
        assert!(!config.suppress_incremental_rendering);
        assert!(!config.ignore_viewport_scale_limits);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn defaults_enable_all_host_settings() {
        let config = WebViewConfig::default();
        assert!(config.open_windows_automatically);
        assert!(config.suppress_incremental_rendering);
        assert!(config.ignore_viewport_scale_limits);
    }
}
