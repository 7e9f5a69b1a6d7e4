//! Trigon play: one triangle on a red background, kept alive by the event loop.
//!
//! The whole scene is hard-coded: a 400x400 window, a BGRA8 surface, a clear
//! to opaque red, and a single draw of the built-in triangle. Every fallible
//! acquisition step reports a typed error that lands in `main`.

use anyhow::Result;
use winit::dpi::LogicalSize;

use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::device::{GpuInit, RenderError};
use trigon_engine::logging::{LoggingConfig, init_logging};
use trigon_engine::paint::ColorRgba;
use trigon_engine::render::{RenderCtx, TriangleRenderer};
use trigon_engine::window::{Runtime, RuntimeConfig};

/// Background for everything the triangle does not cover.
const CLEAR_COLOR: ColorRgba = ColorRgba::new(1.0, 0.0, 0.0, 1.0);

const WINDOW_SIZE: f64 = 400.0;

#[derive(Default)]
struct PlayApp {
    triangle: Option<TriangleRenderer>,
}

impl App for PlayApp {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<(), RenderError> {
        self.triangle = Some(TriangleRenderer::new(ctx)?);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(triangle) = self.triangle.as_ref() else {
            log::error!("renderer missing; initialization did not run");
            return AppControl::Exit;
        };

        ctx.render(|target| triangle.render(target, CLEAR_COLOR))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "trigon play".to_string(),
        initial_size: LogicalSize::new(WINDOW_SIZE, WINDOW_SIZE),
    };

    let gpu_init = GpuInit {
        preferred_format: wgpu::TextureFormat::Bgra8Unorm,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, PlayApp::default())
}
