//! The set of channels a page may invoke.

use std::collections::BTreeSet;

use hybrid_common::{BridgeError, ConfigError};
use tracing::debug;

use crate::channel::Channel;
use crate::surface::HostSurface;

/// Registered channels. Registration is only possible until the first load;
/// the set then stays fixed for the life of the view.
#[derive(Debug, Default)]
pub struct BridgeRegistry {
    channels: BTreeSet<Channel>,
    loaded: bool,
}

impl BridgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `channels` with the surface. Channels already registered are
    /// skipped, so each reaches the surface exactly once.
    pub fn register<S, I>(&mut self, surface: &mut S, channels: I) -> Result<(), BridgeError>
    where
        S: HostSurface + ?Sized,
        I: IntoIterator<Item = Channel>,
    {
        let channels: Vec<Channel> = channels.into_iter().collect();
        if self.loaded {
            let names: Vec<&str> = channels.iter().map(|c| c.as_str()).collect();
            return Err(ConfigError::RegisteredAfterLoad(names.join(", ")).into());
        }

        for channel in channels {
            if self.channels.insert(channel) {
                surface.register_channel(channel)?;
                debug!(channel = %channel, "channel registered");
            }
        }
        Ok(())
    }

    /// Seal the registry. Called when the first load starts.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }

    /// Look up a registered channel by the name the page used.
    pub fn resolve(&self, name: &str) -> Result<Channel, ConfigError> {
        name.parse::<Channel>()
            .ok()
            .filter(|c| self.contains(*c))
            .ok_or_else(|| ConfigError::UnregisteredChannel(name.to_string()))
    }

    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.channels.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
