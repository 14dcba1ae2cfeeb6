use super::*;
use crate::{
    composition::model::Composition,
    eval::evaluator::Evaluator,
    foundation::core::{Canvas, Fps, FrameIndex, Rgba8},
    scene::{SceneCtx, node::Node},
    timeline::{sequencer::Sequencer, window::TimelineWindow},
};

fn comp() -> Composition {
    let still = |_: &SceneCtx| Node::rect(10.0, 10.0).fill(Rgba8::rgb(255, 0, 0));
    let moving = |ctx: &SceneCtx| {
        Node::rect(10.0, 10.0)
            .fill(Rgba8::rgb(0, 255, 0))
            .at(ctx.frame as f64, 0.0)
    };
    let seq = Sequencer::new()
        .scene("still", TimelineWindow::new(0, 10).unwrap(), still)
        .scene("moving", TimelineWindow::new(10, 10).unwrap(), moving);
    Composition::new(
        "Fingerprint",
        Canvas {
            width: 32,
            height: 32,
        },
        Fps::new(30, 1).unwrap(),
        20,
        seq,
    )
    .unwrap()
}

fn fp(c: &Composition, f: u64) -> FrameFingerprint {
    fingerprint_graph(&Evaluator::eval_frame(c, FrameIndex(f)).unwrap()).unwrap()
}

#[test]
fn fingerprint_is_deterministic_for_same_graph() {
    let c = comp();
    assert_eq!(fp(&c, 3), fp(&c, 3));
}

#[test]
fn static_frames_share_a_fingerprint() {
    let c = comp();
    assert_eq!(fp(&c, 2), fp(&c, 7));
}

#[test]
fn fingerprint_changes_when_content_moves() {
    let c = comp();
    assert_ne!(fp(&c, 12), fp(&c, 13));
    assert_ne!(fp(&c, 9), fp(&c, 10));
}
