use crate::{
    composition::model::Composition,
    foundation::core::{Canvas, FrameIndex},
    foundation::error::{FramecastError, FramecastResult},
    scene::{SceneCtx, node::Node},
    timeline::window::WindowPhase,
};

/// Scene id reported for the persistent background layer.
pub const BACKGROUND_ID: &str = "background";

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything composited for one global frame.
pub struct FrameGraph {
    /// Composition id.
    pub composition: String,
    /// Evaluated global frame.
    pub frame: FrameIndex,
    /// Output surface.
    pub canvas: Canvas,
    /// Rendered layers in painter's order, background first.
    pub layers: Vec<EvaluatedLayer>,
    /// Scenes mounted ahead of their window; listed, never drawn.
    pub premounted: Vec<PremountedScene>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One composited scene.
pub struct EvaluatedLayer {
    /// Scene slot id, or [`BACKGROUND_ID`].
    pub scene_id: String,
    /// Frame the scene was rendered at.
    pub local_frame: i64,
    /// Visual tree.
    pub root: Node,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// A scene that is mounted but not yet visible.
pub struct PremountedScene {
    /// Scene slot id.
    pub scene_id: String,
    /// Negative local frame.
    pub local_frame: i64,
}

/// Stateless evaluator from composition timeline to frame graph.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(comp), fields(comp = comp.id()))]
    /// Evaluate one frame.
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> FramecastResult<FrameGraph> {
        if frame.0 >= comp.duration().0 {
            return Err(FramecastError::evaluation(format!(
                "frame {} is out of bounds for '{}' ({} frames)",
                frame.0,
                comp.id(),
                comp.duration().0
            )));
        }

        let seq = comp.sequencer();
        let mut layers = Vec::new();
        let mut premounted = Vec::new();

        if let Some(bg) = seq.background() {
            let ctx = SceneCtx {
                frame: frame.0 as i64,
                fps: comp.fps(),
                duration_in_frames: comp.duration().0,
                canvas: comp.canvas(),
            };
            layers.push(EvaluatedLayer {
                scene_id: BACKGROUND_ID.to_string(),
                local_frame: ctx.frame,
                root: bg.render(&ctx),
            });
        }

        for active in seq.active(frame) {
            match active.phase {
                WindowPhase::Visible { local_frame } => {
                    let ctx = SceneCtx {
                        frame: local_frame,
                        fps: comp.fps(),
                        duration_in_frames: active.slot.window.length,
                        canvas: comp.canvas(),
                    };
                    layers.push(EvaluatedLayer {
                        scene_id: active.slot.id.clone(),
                        local_frame,
                        root: active.slot.scene.render(&ctx),
                    });
                }
                WindowPhase::Premounted { local_frame } => premounted.push(PremountedScene {
                    scene_id: active.slot.id.clone(),
                    local_frame,
                }),
                WindowPhase::NotMounted => {}
            }
        }

        Ok(FrameGraph {
            composition: comp.id().to_string(),
            frame,
            canvas: comp.canvas(),
            layers,
            premounted,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
