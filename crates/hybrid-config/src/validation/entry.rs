//! Entry URL validation.

use hybrid_common::ConfigError;
use url::Url;

use crate::schema::ShellConfig;

/// Schemes the shell is willing to load as its entry document.
pub const ALLOWED_ENTRY_SCHEMES: &[&str] = &["http", "https", "file"];

/// Parse an entry URL, rejecting anything the shell cannot load.
pub fn parse_entry_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(format!("{raw}: {e}")))?;
    if !ALLOWED_ENTRY_SCHEMES.contains(&url.scheme()) {
        return Err(ConfigError::InvalidUrl(format!(
            "{raw}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    Ok(url)
}

pub(crate) fn validate_entry(errors: &mut Vec<String>, config: &ShellConfig) {
    if let Err(e) = parse_entry_url(&config.app.entry_url) {
        errors.push(format!("app.entry_url: {e}"));
    }
}
