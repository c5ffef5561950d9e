pub mod channel;
pub mod errors;
pub mod id;

pub use channel::Channel;
pub use errors::{BridgeError, ConfigError, ContinuationMisuseError, NavigationError};
pub use id::{new_correlation_id, new_id, DialogId};

pub type Result<T> = std::result::Result<T, BridgeError>;
