use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::device::RenderError;
use crate::render::RenderCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo binary.
pub trait App {
    /// Called once, after the window and GPU context exist.
    ///
    /// Build pipelines and buffers here. An error aborts the runtime and
    /// propagates out of `Runtime::run`.
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<(), RenderError> {
        let _ = ctx;
        Ok(())
    }

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
