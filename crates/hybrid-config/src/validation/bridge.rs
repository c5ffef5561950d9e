//! Bridge section validation: channel names and dialog timeout.

use std::collections::HashSet;

use hybrid_common::Channel;

use crate::schema::ShellConfig;

use super::helpers::validate_range;

/// Every channel must be one the bridge knows, listed once.
pub(crate) fn validate_channels(errors: &mut Vec<String>, config: &ShellConfig) {
    let mut seen = HashSet::new();
    for name in &config.bridge.channels {
        if name.parse::<Channel>().is_err() {
            let known: Vec<&str> = Channel::ALL.iter().map(|c| c.as_str()).collect();
            errors.push(format!(
                "bridge.channels: '{name}' is not a known channel (expected one of: {})",
                known.join(", ")
            ));
        }
        if !seen.insert(name.as_str()) {
            errors.push(format!("bridge.channels: '{name}' is listed more than once"));
        }
    }
}

pub(crate) fn validate_dialog_timeout(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(
        errors,
        "bridge.dialog_timeout_secs",
        config.bridge.dialog_timeout_secs,
        0,
        3600,
    );
}
