//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the web view and the bridge.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::HybridApp;
