//! The hosting surface the bridge drives.
//!
//! The browser engine owns rendering, networking and script execution. The
//! bridge only needs these three operations from it; everything inbound
//! (messages, navigation attempts, load notifications) arrives as calls on
//! [`crate::Bridge`].

use hybrid_common::BridgeError;
use url::Url;

use crate::channel::Channel;

pub trait HostSurface {
    /// Attach a channel to the surface's message pipe. Messages naming a
    /// channel that was never attached are dropped by the surface.
    fn register_channel(&mut self, channel: Channel) -> Result<(), BridgeError>;

    /// Start loading `url` as the top-level document.
    fn load(&mut self, url: &Url) -> Result<(), BridgeError>;

    /// Run a script in the current document.
    fn evaluate_script(&self, js: &str) -> Result<(), BridgeError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// In-memory surface that records every call.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub channels: Vec<Channel>,
        pub loads: Vec<String>,
        pub scripts: RefCell<Vec<String>>,
        /// Fail every load, as an engine rejecting the request would.
        pub refuse_load: bool,
    }

    impl HostSurface for RecordingSurface {
        fn register_channel(&mut self, channel: Channel) -> Result<(), BridgeError> {
            self.channels.push(channel);
            Ok(())
        }

        fn load(&mut self, url: &Url) -> Result<(), BridgeError> {
            if self.refuse_load {
                return Err(BridgeError::Host(format!("load of {url} refused")));
            }
            self.loads.push(url.to_string());
            Ok(())
        }

        fn evaluate_script(&self, js: &str) -> Result<(), BridgeError> {
            self.scripts.borrow_mut().push(js.to_string());
            Ok(())
        }
    }
}
