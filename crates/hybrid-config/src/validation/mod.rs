//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod bridge;
mod entry;
mod helpers;
mod misc;


use crate::schema::ShellConfig;
use hybrid_common::ConfigError;

pub use entry::{parse_entry_url, ALLOWED_ENTRY_SCHEMES};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    entry::validate_entry(&mut errors, config);
    bridge::validate_channels(&mut errors, config);
    bridge::validate_dialog_timeout(&mut errors, config);
    misc::validate_navigation(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
