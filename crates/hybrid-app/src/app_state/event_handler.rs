//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::HybridApp;
use super::init::view_bounds;

impl ApplicationHandler for HybridApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        if let Err(e) = self.start_bridge() {
            tracing::error!("Bridge startup failed: {e}");
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.flush_outbox();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_view_bounds();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl HybridApp {
    /// Keep the view covering the whole window.
    fn sync_view_bounds(&self) {
        let (Some(window), Some(view)) = (&self.window, &self.view) else {
            return;
        };
        if let Err(e) = view.set_bounds(view_bounds(window)) {
            tracing::warn!("Failed to resize web view: {e}");
        }
    }
}
