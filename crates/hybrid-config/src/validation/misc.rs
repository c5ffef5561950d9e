//! Validation for navigation and window sections.

use crate::schema::ShellConfig;

use super::helpers::validate_range;

pub(crate) fn validate_navigation(errors: &mut Vec<String>, config: &ShellConfig) {
    for prefix in &config.navigation.allowed_prefixes {
        if prefix.trim().is_empty() {
            errors.push("navigation.allowed_prefixes: empty prefix".to_string());
        }
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 8192);
    validate_range(errors, "window.height", config.window.height, 200, 8192);
}
