use hybrid_common::NavigationError;
use tracing::{debug, warn};

use crate::ipc::{js_error_page, Outbox};

/// Receives load lifecycle notifications. Every hook defaults to a no-op.
pub trait NavigationObserver: Send {
    fn on_started(&mut self, _url: &str) {}
    fn on_committed(&mut self, _url: &str) {}
    fn on_finished(&mut self, _url: &str) {}
    fn on_failed(&mut self, _error: &NavigationError) {}
    fn on_provisional_failed(&mut self, _error: &NavigationError) {}
}

/// Logs every notification.
pub struct LoggingObserver;

impl NavigationObserver for LoggingObserver {
    fn on_started(&mut self, url: &str) {
        debug!(url = %url, "navigation started");
    }

    fn on_committed(&mut self, url: &str) {
        debug!(url = %url, "navigation committed");
    }

    fn on_finished(&mut self, url: &str) {
        debug!(url = %url, "navigation finished");
    }

    fn on_failed(&mut self, error: &NavigationError) {
        warn!(url = %error.url, error = %error.message, "navigation failed");
    }

    fn on_provisional_failed(&mut self, error: &NavigationError) {
        warn!(url = %error.url, error = %error.message, "provisional navigation failed");
    }
}

/// Logs like [`LoggingObserver`] and shows an error page on failure.
pub struct ErrorPageObserver {
    outbox: Outbox,
}

impl ErrorPageObserver {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }

    fn show(&self, error: &NavigationError) {
        self.outbox
            .push(js_error_page("This page couldn't be loaded", &error.to_string()));
    }
}

impl NavigationObserver for ErrorPageObserver {
    fn on_started(&mut self, url: &str) {
        LoggingObserver.on_started(url);
    }

    fn on_committed(&mut self, url: &str) {
        LoggingObserver.on_committed(url);
    }

    fn on_finished(&mut self, url: &str) {
        LoggingObserver.on_finished(url);
    }

    fn on_failed(&mut self, error: &NavigationError) {
        LoggingObserver.on_failed(error);
        self.show(error);
    }

    fn on_provisional_failed(&mut self, error: &NavigationError) {
        LoggingObserver.on_provisional_failed(error);
        self.show(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_queued_on_failures_only() {
        let outbox = Outbox::new();
        let mut observer = ErrorPageObserver::new(outbox.clone());

        observer.on_started("https://example.com/");
        observer.on_finished("https://example.com/");
        assert!(outbox.is_empty());

        observer.on_provisional_failed(&NavigationError::new("https://example.com/", "offline"));
        observer.on_failed(&NavigationError::new("https://example.com/b", "reset"));

        let scripts = outbox.drain();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].contains("offline"));
        assert!(scripts[1].contains("reset"));
    }
}
