use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MazeError, MazeResult};
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

/// Sink contract for consuming rendered frames in step order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, starting
/// at 0, and each call returns before the next frame is produced.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> MazeResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MazeResult<()>;
    /// Called once after the last frame of a successful run.
    fn end(&mut self) -> MazeResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> MazeResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MazeResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> MazeResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Options for [`PngSequenceSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngSequenceOpts {
    /// Output directory. Created if missing; every file in it is removed at `begin`.
    pub dir: PathBuf,
    /// Zero-padded width of the frame number in file names.
    pub digits: usize,
}

impl Default for PngSequenceOpts {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            digits: 5,
        }
    }
}

/// Writes each frame as `<dir>/<index>.png` with a zero-padded index.
#[derive(Debug)]
pub struct PngSequenceSink {
    opts: PngSequenceOpts,
    cfg: Option<SinkConfig>,
    written: u64,
}

impl PngSequenceSink {
    /// Create a sink writing into `opts.dir`.
    pub fn new(opts: PngSequenceOpts) -> Self {
        Self {
            opts,
            cfg: None,
            written: 0,
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.opts.dir
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.written
    }

    /// File path used for frame `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.opts
            .dir
            .join(format!("{:0width$}.png", idx.0, width = self.opts.digits))
    }

    fn clear_dir(&self) -> MazeResult<()> {
        let dir = &self.opts.dir;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory '{}'", dir.display()))?;
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("list output directory '{}'", dir.display()))?;
        for entry in entries {
            let path = entry
                .with_context(|| format!("list output directory '{}'", dir.display()))?
                .path();
            if path.is_file() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("remove stale frame '{}'", path.display()))?;
            }
        }
        Ok(())
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> MazeResult<()> {
        self.clear_dir()?;
        self.cfg = Some(cfg);
        self.written = 0;
        tracing::debug!(dir = %self.opts.dir.display(), "cleared output directory");
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MazeResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| MazeError::render("png sink received a frame before begin"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(MazeError::render(format!(
                "frame {} is {}x{}, sink expects {}x{}",
                idx.0, frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let mut data = frame.data.clone();
        if frame.premultiplied {
            unpremultiply_in_place(&mut data);
        }
        let img = image::RgbaImage::from_raw(frame.width, frame.height, data)
            .ok_or_else(|| MazeError::render("invalid rgba buffer size"))?;

        let path = self.frame_path(idx);
        img.save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> MazeResult<()> {
        tracing::info!(
            frames = self.written,
            dir = %self.opts.dir.display(),
            "wrote frame sequence"
        );
        Ok(())
    }
}

/// Convert premultiplied RGBA8 to straight alpha in place.
pub fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
