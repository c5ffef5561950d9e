//! Hybrid shell configuration.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so a partial (or empty) config file works out of the box.
//!
//! ```rust,no_run
//! use hybrid_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ShellConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use hybrid_common::ConfigError;

/// Load config from `path`, or from the platform default location when
/// `path` is `None`, and validate it.
///
/// Unlike [`toml_loader::load_from_path`], validation failures are returned
/// as errors: the shell refuses to start on a bad entry URL rather than
/// loading nothing.
pub fn load_config(path: Option<&Path>) -> Result<ShellConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
