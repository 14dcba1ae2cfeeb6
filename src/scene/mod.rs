pub mod motion;
pub(crate) mod node;

use crate::{
    foundation::core::{Canvas, Fps},
    scene::node::Node,
};

/// Timing and surface a scene renders against.
///
/// `frame` is local to the scene's window and goes negative while the scene is premounted.
/// `duration_in_frames` is the window length for sequenced scenes and the composition length for
/// the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneCtx {
    /// Local frame.
    pub frame: i64,
    /// Composition frame rate.
    pub fps: Fps,
    /// Length of the enclosing window.
    pub duration_in_frames: u64,
    /// Output surface.
    pub canvas: Canvas,
}

impl SceneCtx {
    /// Local frame as a float.
    pub fn t(&self) -> f64 {
        self.frame as f64
    }
}

/// A pure function from local frame to visual tree.
///
/// Implementations precompute their curves at construction time so `render` cannot fail and
/// returns identical trees for identical contexts.
pub trait Scene: Send + Sync {
    /// Build the visual tree for `ctx.frame`.
    fn render(&self, ctx: &SceneCtx) -> Node;
}

impl<F> Scene for F
where
    F: Fn(&SceneCtx) -> Node + Send + Sync,
{
    fn render(&self, ctx: &SceneCtx) -> Node {
        self(ctx)
    }
}
