use super::*;
use crate::{
    scene::{SceneCtx, node::Node},
    timeline::window::TimelineWindow,
};

fn blank(_: &SceneCtx) -> Node {
    Node::group()
}

fn canvas() -> Canvas {
    Canvas {
        width: 320,
        height: 180,
    }
}

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn info_mirrors_constructor_arguments() {
    let seq = Sequencer::new().scene("a", TimelineWindow::new(0, 60).unwrap(), blank);
    let comp = Composition::new("Demo", canvas(), fps30(), 60, seq).unwrap();
    assert_eq!(
        comp.info(),
        CompositionInfo {
            id: "Demo".to_string(),
            width: 320,
            height: 180,
            fps: fps30(),
            duration_in_frames: 60,
        }
    );
}

#[test]
fn rejects_bad_surfaces_and_lengths() {
    let zero_canvas = Canvas {
        width: 0,
        height: 10,
    };
    assert!(Composition::new("x", zero_canvas, fps30(), 10, Sequencer::new()).is_err());
    assert!(Composition::new("x", canvas(), fps30(), 0, Sequencer::new()).is_err());
    assert!(Composition::new("", canvas(), fps30(), 10, Sequencer::new()).is_err());
    let bad_fps = Fps { num: 0, den: 1 };
    assert!(Composition::new("x", canvas(), bad_fps, 10, Sequencer::new()).is_err());
}

#[test]
fn rejects_windows_past_the_end() {
    let seq = Sequencer::new().scene("a", TimelineWindow::new(50, 20).unwrap(), blank);
    let err = Composition::new("x", canvas(), fps30(), 60, seq).unwrap_err();
    assert!(err.to_string().contains("'a'"));
}

#[test]
fn gaps_are_allowed() {
    let seq = Sequencer::new().scene("a", TimelineWindow::new(10, 20).unwrap(), blank);
    let comp = Composition::new("x", canvas(), fps30(), 60, seq).unwrap();
    assert_eq!(comp.sequencer().gaps(60).len(), 2);
}

#[test]
fn overflowing_window_fails_instead_of_panicking() {
    let window = TimelineWindow {
        start: FrameIndex(u64::MAX - 1),
        length: 5,
        premount: 0,
    };
    let seq = Sequencer::new().scene("a", window, blank);
    let err = Composition::new("x", canvas(), fps30(), 100, seq).unwrap_err();
    assert!(matches!(err, FramecastError::Validation(_)));
}
