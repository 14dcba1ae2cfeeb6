use std::path::{Path, PathBuf};

use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{FramecastError, FramecastResult},
    render::FrameRGBA,
};

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Composition being rendered.
    pub composition: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// `push_frame` is called in strictly increasing `FrameIndex` order within the requested range.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FramecastResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FramecastResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FramecastResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FramecastResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Writes each frame as `frame_NNNNN.png` (straight alpha) into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    written: u64,
    last: Option<FrameIndex>,
}

impl PngSequenceSink {
    /// Sink writing into `dir`; the directory is created on `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: 0,
            last: None,
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of files written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// File name used for frame `idx`.
    pub fn file_name(idx: FrameIndex) -> String {
        format!("frame_{:05}.png", idx.0)
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            FramecastError::Other(anyhow::Error::new(e).context(format!(
                "failed to create output dir '{}'",
                self.dir.display()
            )))
        })?;
        tracing::debug!(
            comp = %cfg.composition,
            dir = %self.dir.display(),
            "png sequence started"
        );
        self.written = 0;
        self.last = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FramecastResult<()> {
        if let Some(last) = self.last
            && idx.0 <= last.0
        {
            return Err(FramecastError::render(format!(
                "frame {} pushed after frame {}",
                idx.0, last.0
            )));
        }

        let path = self.dir.join(Self::file_name(idx));
        image::save_buffer_with_format(
            &path,
            &frame.to_straight(),
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| {
            FramecastError::Other(
                anyhow::Error::new(e).context(format!("failed to write '{}'", path.display())),
            )
        })?;

        self.written += 1;
        self.last = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> FramecastResult<()> {
        tracing::debug!(written = self.written, "png sequence finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
