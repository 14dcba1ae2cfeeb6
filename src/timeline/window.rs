use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{FramecastError, FramecastResult},
};

/// Visible sub-range of a composition plus how early its scene is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineWindow {
    /// First visible frame.
    pub start: FrameIndex,
    /// Visible length in frames, > 0.
    pub length: u64,
    /// Frames mounted (invisibly) before `start`.
    #[serde(default)]
    pub premount: u64,
}

/// How a window relates to a given global frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum WindowPhase {
    /// Outside both the premount lead-in and the visible range.
    NotMounted,
    /// Mounted ahead of time; `local_frame` is negative.
    Premounted {
        /// Frame relative to the window start.
        local_frame: i64,
    },
    /// Inside `[start, start + length)`.
    Visible {
        /// Frame relative to the window start, `0..length`.
        local_frame: i64,
    },
}

impl WindowPhase {
    /// `true` for [`WindowPhase::Visible`].
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    /// Local frame when mounted.
    pub fn local_frame(self) -> Option<i64> {
        match self {
            Self::NotMounted => None,
            Self::Premounted { local_frame } | Self::Visible { local_frame } => Some(local_frame),
        }
    }
}

impl TimelineWindow {
    /// Window over `[start, start + length)` with no premount.
    pub fn new(start: u64, length: u64) -> FramecastResult<Self> {
        if length == 0 {
            return Err(FramecastError::validation(format!(
                "window at frame {start} must have length > 0"
            )));
        }
        if start.checked_add(length).is_none() {
            return Err(FramecastError::validation("window end overflows u64"));
        }
        Ok(Self {
            start: FrameIndex(start),
            length,
            premount: 0,
        })
    }

    /// Mount the scene `frames` frames before it becomes visible.
    pub fn with_premount(self, frames: u64) -> Self {
        Self {
            premount: frames,
            ..self
        }
    }

    /// One past the last visible frame.
    pub fn end(self) -> FrameIndex {
        FrameIndex(self.start.0.saturating_add(self.length))
    }

    /// Frames in which the scene is rendered.
    pub fn visible_range(self) -> FrameRange {
        FrameRange {
            start: self.start,
            end: self.end(),
        }
    }

    /// First frame in which the scene is mounted.
    pub fn mount_start(self) -> FrameIndex {
        FrameIndex(self.start.0.saturating_sub(self.premount))
    }

    /// Signed frame relative to the window start.
    pub fn local_frame(self, frame: FrameIndex) -> i64 {
        frame.0 as i64 - self.start.0 as i64
    }

    /// Classify `frame`.
    pub fn phase(self, frame: FrameIndex) -> WindowPhase {
        if self.visible_range().contains(frame) {
            WindowPhase::Visible {
                local_frame: self.local_frame(frame),
            }
        } else if frame.0 >= self.mount_start().0 && frame.0 < self.start.0 {
            WindowPhase::Premounted {
                local_frame: self.local_frame(frame),
            }
        } else {
            WindowPhase::NotMounted
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/window.rs"]
mod tests;
