use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{MazeError, MazeResult};
use crate::render::plan::FrameScene;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha** by default. The `premultiplied` flag makes this explicit at
/// API boundaries; sinks that write straight-alpha formats unpremultiply first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as stored, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// A renderer that turns a [`FrameScene`] into pixels.
///
/// Calls are blocking; the session never asks for the next frame before the previous one has been
/// returned, which keeps output in strict step order.
pub trait RenderBackend {
    /// Rasterize one scene.
    fn render(&mut self, scene: &FrameScene<'_>) -> MazeResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Output size, stroke widths and palette used when compiling a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Side length of the square output frame in pixels.
    pub size_px: u32,
    /// Thickness of wall segments.
    pub wall_width_px: f64,
    /// Thickness of the frame outline stroke; half of it falls inside the canvas.
    pub outline_width_px: f64,
    /// Canvas fill.
    pub background: Rgba8,
    /// Wall segments.
    pub wall: Rgba8,
    /// Canvas outline.
    pub outline: Rgba8,
    /// Start cell tint.
    pub start: Rgba8,
    /// End cell tint.
    pub end: Rgba8,
    /// Trail marks; translucent so repeated visits build up.
    pub path: Rgba8,
    /// Walker square.
    pub player: Rgba8,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size_px: 1080,
            wall_width_px: 2.0,
            outline_width_px: 4.0,
            background: Rgba8::opaque(0, 0, 0),
            wall: Rgba8::opaque(0, 0, 255),
            outline: Rgba8::opaque(0, 0, 255),
            start: Rgba8::opaque(0, 128, 0),
            end: Rgba8::opaque(255, 0, 0),
            path: Rgba8::new(0, 255, 0, 0x11),
            player: Rgba8::opaque(255, 255, 255),
        }
    }
}

impl RenderSettings {
    /// Return settings with a different output size.
    pub fn with_size(mut self, size_px: u32) -> Self {
        self.size_px = size_px;
        self
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        Canvas::square(self.size_px)
    }

    /// Reject sizes the rasterizer cannot handle.
    pub fn validate(&self) -> MazeResult<()> {
        if self.size_px == 0 || self.size_px > u32::from(u16::MAX) {
            return Err(MazeError::validation(format!(
                "frame size must be in 1..={}, got {}",
                u16::MAX,
                self.size_px
            )));
        }
        if !(self.wall_width_px.is_finite() && self.wall_width_px >= 0.0)
            || !(self.outline_width_px.is_finite() && self.outline_width_px >= 0.0)
        {
            return Err(MazeError::validation(
                "stroke widths must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> MazeResult<Box<dyn RenderBackend>> {
    settings.validate()?;
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}
