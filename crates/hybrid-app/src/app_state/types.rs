use std::time::Duration;

/// How often engine events are drained and the outbox flushed.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
