//! Native side of the hybrid shell bridge.
//!
//! Provides:
//! - A registry of named message channels, sealed once the document loads
//! - A dispatcher routing channel messages and dialog requests
//!   (alert / confirm / prompt) to native handlers
//! - One-shot continuations for every asynchronous answer
//! - A per-attempt navigation gate with pluggable policy and observers
//! - The `wry` surface the bridge drives

pub mod bridge;
pub mod channel;
pub mod continuation;
pub mod dialog;
pub mod dispatcher;
pub mod events;
pub mod ipc;
pub mod navigation;
pub mod registry;
pub mod session;
pub mod surface;
pub mod webview;

pub use bridge::Bridge;
pub use channel::{parse_channels, Channel, Message};
pub use continuation::Continuation;
pub use dialog::{DialogAction, DialogPresenter, DialogRequest, InPagePresenter, PendingDialogs};
pub use dispatcher::{BridgeDispatcher, ChannelHandler, LogHandler, PingHandler};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcEnvelope, Outbox, ReplyAction};
pub use navigation::{
    NavigationDecision, NavigationEvent, NavigationGate, NavigationPolicy, NavigationState,
    SharedGate,
};
pub use registry::BridgeRegistry;
pub use session::SessionPool;
pub use surface::HostSurface;
pub use webview::{WebViewConfig, WebViewHandle, WebViewManager};
