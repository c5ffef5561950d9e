//! Channels and the messages sent through them.

use hybrid_common::ConfigError;

pub use hybrid_common::Channel;

/// Parse configured channel names into channels.
pub fn parse_channels<S: AsRef<str>>(names: &[S]) -> Result<Vec<Channel>, ConfigError> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

/// A message from the hosted page. The payload has no fixed schema; the
/// handler that owns the channel decides what it accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub channel: Channel,
    pub payload: serde_json::Value,
}

impl Message {
    pub fn new(channel: Channel, payload: impl Into<serde_json::Value>) -> Self {
        Self {
            channel,
            payload: payload.into(),
        }
    }
}
