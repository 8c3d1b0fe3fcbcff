use std::time::{Duration, Instant};

use druid::piet::{ImageFormat, InterpolationMode};
use druid::widget::prelude::*;
use druid::RenderContext;

use crate::frame::render_wireframe;
use crate::graphics::PixelCanvas;
use crate::state::Rotation;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Spinning wireframe cube widget
pub struct CubeWidget {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
}

impl CubeWidget {
    pub fn new() -> Self {
        CubeWidget {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
        }
    }

    fn track_fps(&mut self) {
        self.frames_since_last_update += 1;
        let elapsed = self.last_fps_calculation.elapsed();
        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frames_since_last_update as f64 / elapsed.as_secs_f64();
            tracing::debug!("rendering at {fps:.1} fps");
            self.frames_since_last_update = 0;
            self.last_fps_calculation = Instant::now();
        }
    }
}

impl Widget<Rotation> for CubeWidget {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut Rotation, _env: &Env) {
        match event {
            Event::WindowConnected => {
                ctx.request_timer(FRAME_INTERVAL);
            }
            Event::Timer(_) => {
                // The visible frame advances after it has been presented, so
                // the first paint shows the cube at angles (0, 0).
                *data = data.advanced();
                ctx.request_paint();
                ctx.request_timer(FRAME_INTERVAL);
            }
            _ => {}
        }
    }

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _event: &LifeCycle, _data: &Rotation, _env: &Env) {
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &Rotation, _data: &Rotation, _env: &Env) {}

    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &Rotation,
        _env: &Env,
    ) -> Size {
        bc.max()
    }

    /// Renders the cube into a software frame buffer and presents it.
    fn paint(&mut self, ctx: &mut PaintCtx, data: &Rotation, _env: &Env) {
        self.track_fps();

        let size = ctx.size();
        let width = size.width as usize;
        let height = size.height as usize;

        let mut canvas = PixelCanvas::new(width, height);
        render_wireframe(data, &mut canvas);

        let image = ctx
            .make_image(width, height, canvas.pixels(), ImageFormat::RgbaSeparate)
            .unwrap();
        ctx.draw_image(&image, size.to_rect(), InterpolationMode::NearestNeighbor);
    }
}
