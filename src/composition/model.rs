use crate::{
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{FramecastError, FramecastResult},
    timeline::sequencer::Sequencer,
};

/// Registry-facing description of a composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositionInfo {
    /// Unique identifier.
    pub id: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Frame rate.
    pub fps: Fps,
    /// Total length in frames.
    pub duration_in_frames: u64,
}

/// A named, validated timeline: surface, frame rate, length, and the scenes laid out on it.
///
/// Compositions are built once and never mutated; evaluation borrows them immutably, so one
/// instance can be shared across render threads.
#[derive(Clone, Debug)]
pub struct Composition {
    id: String,
    canvas: Canvas,
    fps: Fps,
    duration: FrameIndex,
    sequencer: Sequencer,
}

impl Composition {
    /// Validate and build a composition.
    ///
    /// Windows must end within `duration_in_frames`; uncovered stretches are allowed and logged.
    pub fn new(
        id: impl Into<String>,
        canvas: Canvas,
        fps: Fps,
        duration_in_frames: u64,
        sequencer: Sequencer,
    ) -> FramecastResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(FramecastError::validation("composition id must be non-empty"));
        }
        if fps.num == 0 || fps.den == 0 {
            return Err(FramecastError::validation("fps must have num>0 and den>0"));
        }
        if canvas.width == 0 || canvas.height == 0 {
            return Err(FramecastError::validation("canvas width/height must be > 0"));
        }
        if duration_in_frames == 0 {
            return Err(FramecastError::validation("duration must be > 0 frames"));
        }
        sequencer.validate()?;

        if let Some(slot) = sequencer
            .slots()
            .iter()
            .find(|s| s.window.end().0 > duration_in_frames)
        {
            return Err(FramecastError::validation(format!(
                "scene '{}' ends at frame {} past composition '{id}' duration {duration_in_frames}",
                slot.id,
                slot.window.end().0
            )));
        }

        for gap in sequencer.gaps(duration_in_frames) {
            tracing::warn!(
                composition = %id,
                start = gap.start.0,
                end = gap.end.0,
                "timeline range has no visible scene"
            );
        }

        Ok(Self {
            id,
            canvas,
            fps,
            duration: FrameIndex(duration_in_frames),
            sequencer,
        })
    }

    /// Identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Output surface.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Total length; valid frames are `0..duration`.
    pub fn duration(&self) -> FrameIndex {
        self.duration
    }

    /// Scene layout.
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Registry surface.
    pub fn info(&self) -> CompositionInfo {
        CompositionInfo {
            id: self.id.clone(),
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
            duration_in_frames: self.duration.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
