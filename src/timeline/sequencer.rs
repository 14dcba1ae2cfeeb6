use std::{collections::HashSet, fmt, sync::Arc};

use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{FramecastError, FramecastResult},
    scene::Scene,
    timeline::window::{TimelineWindow, WindowPhase},
};

/// A scene bound to a timeline window.
#[derive(Clone)]
pub struct SceneSlot {
    /// Unique, non-empty identifier.
    pub id: String,
    /// When the scene is mounted and visible.
    pub window: TimelineWindow,
    /// Visible ranges on the same layer must not overlap.
    pub layer: u32,
    /// Renderer.
    pub scene: Arc<dyn Scene>,
}

impl fmt::Debug for SceneSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneSlot")
            .field("id", &self.id)
            .field("window", &self.window)
            .field("layer", &self.layer)
            .finish_non_exhaustive()
    }
}

/// A slot that is mounted at some frame.
#[derive(Clone, Copy, Debug)]
pub struct ActiveSlot<'a> {
    /// The mounted slot.
    pub slot: &'a SceneSlot,
    /// `Premounted` or `Visible`, never `NotMounted`.
    pub phase: WindowPhase,
}

/// Ordered scene windows over a persistent background.
#[derive(Clone, Default)]
pub struct Sequencer {
    background: Option<Arc<dyn Scene>>,
    slots: Vec<SceneSlot>,
}

impl fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequencer")
            .field("background", &self.background.is_some())
            .field("slots", &self.slots)
            .finish()
    }
}

impl Sequencer {
    /// Empty sequencer without a background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `scene` under every frame, with local frame equal to the global frame.
    pub fn with_background(mut self, scene: impl Scene + 'static) -> Self {
        self.background = Some(Arc::new(scene));
        self
    }

    /// Append a scene on layer 0.
    pub fn scene(
        self,
        id: impl Into<String>,
        window: TimelineWindow,
        scene: impl Scene + 'static,
    ) -> Self {
        self.scene_on_layer(id, 0, window, scene)
    }

    /// Append a scene on an explicit layer.
    pub fn scene_on_layer(
        mut self,
        id: impl Into<String>,
        layer: u32,
        window: TimelineWindow,
        scene: impl Scene + 'static,
    ) -> Self {
        self.slots.push(SceneSlot {
            id: id.into(),
            window,
            layer,
            scene: Arc::new(scene),
        });
        self
    }

    /// Persistent background, if any.
    pub fn background(&self) -> Option<&Arc<dyn Scene>> {
        self.background.as_ref()
    }

    /// Slots in declaration order.
    pub fn slots(&self) -> &[SceneSlot] {
        &self.slots
    }

    /// Check id uniqueness, window lengths, and same-layer overlap.
    pub fn validate(&self) -> FramecastResult<()> {
        let mut ids = HashSet::new();
        for s in &self.slots {
            if s.id.trim().is_empty() {
                return Err(FramecastError::validation("scene id must be non-empty"));
            }
            if !ids.insert(s.id.as_str()) {
                return Err(FramecastError::validation(format!(
                    "duplicate scene id '{}'",
                    s.id
                )));
            }
            if s.window.length == 0 {
                return Err(FramecastError::validation(format!(
                    "scene '{}' has an empty window",
                    s.id
                )));
            }
            if s.window.start.0.checked_add(s.window.length).is_none() {
                return Err(FramecastError::validation(format!(
                    "scene '{}' window end overflows u64",
                    s.id
                )));
            }
        }

        for (i, a) in self.slots.iter().enumerate() {
            for b in &self.slots[i + 1..] {
                if a.layer == b.layer
                    && a.window.visible_range().overlaps(b.window.visible_range())
                {
                    return Err(FramecastError::validation(format!(
                        "scenes '{}' and '{}' overlap on layer {}",
                        a.id, b.id, a.layer
                    )));
                }
            }
        }
        Ok(())
    }

    /// Slots mounted at `frame`, in declaration order.
    pub fn active(&self, frame: FrameIndex) -> impl Iterator<Item = ActiveSlot<'_>> {
        self.slots.iter().filter_map(move |slot| {
            let phase = slot.window.phase(frame);
            (phase != WindowPhase::NotMounted).then_some(ActiveSlot { slot, phase })
        })
    }

    /// The slot visible on layer 0 at `frame`.
    pub fn visible_at(&self, frame: FrameIndex) -> Option<ActiveSlot<'_>> {
        self.active(frame)
            .find(|a| a.slot.layer == 0 && a.phase.is_visible())
    }

    /// One past the last visible frame of any slot.
    pub fn end(&self) -> FrameIndex {
        FrameIndex(self.slots.iter().map(|s| s.window.end().0).max().unwrap_or(0))
    }

    /// Sum of all window lengths.
    pub fn covered_frames(&self) -> u64 {
        self.slots.iter().map(|s| s.window.length).sum()
    }

    /// Ranges of `[0, duration)` not covered by any layer-0 window.
    pub fn gaps(&self, duration: u64) -> Vec<FrameRange> {
        let mut ranges: Vec<FrameRange> = self
            .slots
            .iter()
            .filter(|s| s.layer == 0)
            .map(|s| s.window.visible_range())
            .collect();
        ranges.sort_by_key(|r| r.start.0);

        let mut out = Vec::new();
        let mut cursor = 0u64;
        for r in ranges {
            if r.start.0 > cursor {
                out.push(FrameRange {
                    start: FrameIndex(cursor),
                    end: FrameIndex(r.start.0.min(duration)),
                });
            }
            cursor = cursor.max(r.end.0);
            if cursor >= duration {
                break;
            }
        }
        if cursor < duration {
            out.push(FrameRange {
                start: FrameIndex(cursor),
                end: FrameIndex(duration),
            });
        }
        out.retain(|r| !r.is_empty());
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequencer.rs"]
mod tests;
