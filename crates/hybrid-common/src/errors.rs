use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("invalid entry url: {0}")]
    InvalidUrl(String),

    #[error("channel '{0}' registered after the first load")]
    RegisteredAfterLoad(String),

    #[error("channel '{0}' is not registered")]
    UnregisteredChannel(String),

    #[error("unknown channel name: {0}")]
    UnknownChannel(String),

    #[error("entry document already loaded, refusing {0}")]
    AlreadyLoaded(String),
}

/// A failed navigation as reported by the host surface. Observed, never acted
/// upon by the bridge itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("navigation to {url} failed: {message}")]
pub struct NavigationError {
    pub url: String,
    pub message: String,
}

impl NavigationError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContinuationMisuseError {
    #[error("continuation {0} was already resolved")]
    AlreadyResolved(String),

    #[error("continuation '{0}' dropped without being resumed")]
    Dropped(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Continuation(#[from] ContinuationMisuseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("dialog {id} expects {expected}, got {got}")]
    DialogActionMismatch {
        id: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("ipc error: {0}")]
    Ipc(String),

    #[error("host surface error: {0}")]
    Host(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::InvalidUrl("not a url".into());
        assert_eq!(err.to_string(), "invalid entry url: not a url");

        let err = ConfigError::RegisteredAfterLoad("log".into());
        assert_eq!(
            err.to_string(),
            "channel 'log' registered after the first load"
        );

        let err = ConfigError::UnregisteredChannel("ping".into());
        assert_eq!(err.to_string(), "channel 'ping' is not registered");

        let err = ConfigError::AlreadyLoaded("https://example.com/".into());
        assert_eq!(
            err.to_string(),
            "entry document already loaded, refusing https://example.com/"
        );
    }

    #[test]
    fn navigation_error_display() {
        let err = NavigationError::new("https://example.com/", "host unreachable");
        assert_eq!(
            err.to_string(),
            "navigation to https://example.com/ failed: host unreachable"
        );
    }

    #[test]
    fn continuation_error_display() {
        let err = ContinuationMisuseError::AlreadyResolved("abc".into());
        assert_eq!(err.to_string(), "continuation abc was already resolved");

        let err = ContinuationMisuseError::Dropped("confirm".into());
        assert_eq!(
            err.to_string(),
            "continuation 'confirm' dropped without being resumed"
        );
    }

    #[test]
    fn bridge_error_from_config() {
        let err: BridgeError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, BridgeError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn bridge_error_from_navigation() {
        let err: BridgeError = NavigationError::new("about:blank", "cancelled").into();
        assert!(matches!(err, BridgeError::Navigation(_)));
    }

    #[test]
    fn bridge_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BridgeError = io_err.into();
        assert!(matches!(err, BridgeError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn bridge_error_other_variants() {
        let err = BridgeError::DialogActionMismatch {
            id: "d1".into(),
            expected: "accept or reject",
            got: "submit",
        };
        assert_eq!(err.to_string(), "dialog d1 expects accept or reject, got submit");

        let err = BridgeError::Ipc("truncated json".into());
        assert_eq!(err.to_string(), "ipc error: truncated json");

        let err = BridgeError::Host("webview gone".into());
        assert_eq!(err.to_string(), "host surface error: webview gone");
    }
}
