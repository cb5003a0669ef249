use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramefxError, FramefxResult};
use crate::raster::frame::Frame;

/// Write one frame as an RGBA PNG, creating parent directories as needed.
pub fn write_png(path: &Path, frame: &Frame) -> FramefxResult<()> {
    frame.validate()?;
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("failed to write png '{}'", path.display()))?;
    Ok(())
}

/// Writes every frame to `<dir>/<prefix><index:05>.png`.
#[derive(Clone, Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
    cfg: Option<SinkConfig>,
}

impl PngSequenceSink {
    /// Sink writing into `dir` with the default `frame_` prefix.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(dir, "frame_")
    }

    /// Sink writing into `dir` with a custom file-name prefix.
    pub fn with_prefix(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
            cfg: None,
        }
    }

    /// Path the frame with index `idx` is written to.
    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}{:05}.png", self.prefix, idx.0))
    }

    /// Files written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> FramefxResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create png directory '{}'", self.dir.display()))?;
        self.written.clear();
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> FramefxResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| FramefxError::encode("png sink not started"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(FramefxError::invalid_frame(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.path_for(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> FramefxResult<()> {
        tracing::debug!(count = self.written.len(), dir = %self.dir.display(), "png sequence written");
        self.cfg = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
