use super::*;
use crate::{
    foundation::core::{Fps, Rgba8},
    scene::node::Text,
    timeline::{sequencer::Sequencer, window::TimelineWindow},
};

fn stamp(ctx: &SceneCtx) -> Node {
    Node::from(Text::new(
        format!("{}/{}", ctx.frame, ctx.duration_in_frames),
        10.0,
        Rgba8::rgb(255, 255, 255),
    ))
}

fn comp() -> Composition {
    let seq = Sequencer::new()
        .with_background(stamp)
        .scene("intro", TimelineWindow::new(0, 30).unwrap().with_premount(10), stamp)
        .scene("main", TimelineWindow::new(30, 30).unwrap().with_premount(10), stamp);
    Composition::new(
        "Eval",
        Canvas {
            width: 64,
            height: 36,
        },
        Fps::new(30, 1).unwrap(),
        60,
        seq,
    )
    .unwrap()
}

fn label(layer: &EvaluatedLayer) -> &str {
    match &layer.root.kind {
        crate::scene::node::NodeKind::Text(t) => &t.content,
        _ => "",
    }
}

#[test]
fn background_comes_first_with_global_frame() {
    let g = Evaluator::eval_frame(&comp(), FrameIndex(45)).unwrap();
    assert_eq!(g.layers[0].scene_id, BACKGROUND_ID);
    assert_eq!(label(&g.layers[0]), "45/60");
    assert_eq!(g.layers[1].scene_id, "main");
    assert_eq!(label(&g.layers[1]), "15/30");
    assert_eq!(g.layers.len(), 2);
}

#[test]
fn premounted_scene_is_listed_not_rendered() {
    let g = Evaluator::eval_frame(&comp(), FrameIndex(25)).unwrap();
    let ids: Vec<_> = g.layers.iter().map(|l| l.scene_id.as_str()).collect();
    assert_eq!(ids, [BACKGROUND_ID, "intro"]);
    assert_eq!(
        g.premounted,
        [PremountedScene {
            scene_id: "main".to_string(),
            local_frame: -5,
        }]
    );
}

#[test]
fn out_of_bounds_frame_is_an_error() {
    let err = Evaluator::eval_frame(&comp(), FrameIndex(60)).unwrap_err();
    assert!(matches!(err, FramecastError::Evaluation(_)));
}

#[test]
fn evaluation_is_repeatable() {
    let c = comp();
    let a = Evaluator::eval_frame(&c, FrameIndex(12)).unwrap();
    let b = Evaluator::eval_frame(&c, FrameIndex(12)).unwrap();
    assert_eq!(a, b);
}
