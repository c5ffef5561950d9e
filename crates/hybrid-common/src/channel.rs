//! The closed set of bridge channels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A named entry point the hosted page may invoke.
///
/// The set is closed: a page can only reach native code through one of
/// these, and only once the channel has been registered with the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// One-way diagnostic message; logged, never answered.
    Log,
    /// Round-trip check; answered with `"pong"`.
    Ping,
}

impl Channel {
    pub const ALL: &'static [Channel] = &[Channel::Log, Channel::Ping];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Ping => "ping",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownChannel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for channel in Channel::ALL {
            assert_eq!(channel.as_str().parse::<Channel>().unwrap(), *channel);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "eval".parse::<Channel>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownChannel(ref n) if n == "eval"));
        // case-sensitive
        assert!("LOG".parse::<Channel>().is_err());
    }

    #[test]
    fn channel_serializes_as_its_name() {
        assert_eq!(serde_json::to_string(&Channel::Log).unwrap(), "\"log\"");
    }
}
