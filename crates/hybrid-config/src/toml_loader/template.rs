//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Hybrid Shell Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[app]
# Remote web application loaded into the full-screen view.
entry_url = "https://example.com/"

[webview]
# javascript_can_open_windows_automatically = true
# suppress_incremental_rendering = true   # show the view only once loaded
# ignore_viewport_scale_limits = true     # allow pinch zoom regardless of <meta viewport>
# devtools = false
# user_agent = "HybridShell/0.1"
# data_directory = "/path/to/engine/data" # shared by every view in the process

[bridge]
# channels = ["log", "ping"]
# dialog_timeout_secs = 120               # 0-3600, 0 disables

[navigation]
# allowed_prefixes = []                   # empty allows every navigation
# show_error_page = true

[window]
# title = "Hybrid Shell"
# width = 390                             # 200-8192
# height = 844                            # 200-8192

[logging]
# level = "info"                          # trace, debug, info, warn, error
"##
}
