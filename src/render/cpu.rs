use crate::foundation::core::Rect;
use crate::foundation::error::{MazeError, MazeResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::plan::{DrawOp, FramePlan, FrameScene, compile_scene};

/// CPU raster backend powered by `vello_cpu`.
///
/// The render context is kept between frames and only rebuilt when the canvas size changes.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("settings", &self.settings)
            .field("has_ctx", &self.ctx.is_some())
            .finish()
    }
}

impl CpuBackend {
    /// Create a backend drawing with `settings`.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }

    /// Rasterize an already compiled plan.
    pub fn execute_plan(&mut self, plan: &FramePlan) -> MazeResult<FrameRGBA> {
        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| MazeError::render("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| MazeError::render("canvas height exceeds u16"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        for op in &plan.ops {
            draw_op(&mut ctx, op);
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl RenderBackend for CpuBackend {
    fn render(&mut self, scene: &FrameScene<'_>) -> MazeResult<FrameRGBA> {
        let plan = compile_scene(scene, &self.settings)?;
        self.execute_plan(&plan)
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    match op {
        DrawOp::FillRect { rect, color } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            ctx.fill_rect(&rect_to_cpu(*rect));
        }
    }
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
