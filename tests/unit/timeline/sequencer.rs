use super::*;
use crate::scene::{SceneCtx, node::Node};

fn blank(_: &SceneCtx) -> Node {
    Node::group()
}

fn four_windows() -> Sequencer {
    Sequencer::new()
        .scene("a", TimelineWindow::new(0, 150).unwrap(), blank)
        .scene("b", TimelineWindow::new(150, 210).unwrap().with_premount(15), blank)
        .scene("c", TimelineWindow::new(360, 150).unwrap().with_premount(15), blank)
        .scene("d", TimelineWindow::new(510, 90).unwrap().with_premount(15), blank)
}

#[test]
fn frame_200_maps_into_second_window() {
    let seq = four_windows();
    seq.validate().unwrap();
    let v = seq.visible_at(FrameIndex(200)).unwrap();
    assert_eq!(v.slot.id, "b");
    assert_eq!(v.phase, WindowPhase::Visible { local_frame: 50 });
}

#[test]
fn frame_past_the_end_has_nothing_visible() {
    let seq = four_windows();
    assert!(seq.visible_at(FrameIndex(900)).is_none());
    assert_eq!(seq.active(FrameIndex(900)).count(), 0);
}

#[test]
fn premounted_slot_is_listed_beside_visible_one() {
    let seq = four_windows();
    let active: Vec<_> = seq.active(FrameIndex(350)).collect();
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].slot.id, "b");
    assert!(active[0].phase.is_visible());
    assert_eq!(active[1].slot.id, "c");
    assert_eq!(active[1].phase, WindowPhase::Premounted { local_frame: -10 });
}

#[test]
fn window_lengths_sum_to_timeline() {
    let seq = four_windows();
    assert_eq!(seq.covered_frames(), 600);
    assert_eq!(seq.end(), FrameIndex(600));
    assert!(seq.gaps(600).is_empty());
}

#[test]
fn gaps_report_uncovered_ranges() {
    let seq = Sequencer::new()
        .scene("a", TimelineWindow::new(10, 20).unwrap(), blank)
        .scene("b", TimelineWindow::new(40, 10).unwrap(), blank);
    let gaps = seq.gaps(60);
    let spans: Vec<_> = gaps.iter().map(|r| (r.start.0, r.end.0)).collect();
    assert_eq!(spans, [(0, 10), (30, 40), (50, 60)]);
}

#[test]
fn overlap_on_one_layer_is_rejected() {
    let seq = Sequencer::new()
        .scene("a", TimelineWindow::new(0, 100).unwrap(), blank)
        .scene("b", TimelineWindow::new(99, 10).unwrap(), blank);
    assert!(matches!(seq.validate(), Err(FramecastError::Validation(_))));

    let layered = Sequencer::new()
        .scene("a", TimelineWindow::new(0, 100).unwrap(), blank)
        .scene_on_layer("b", 1, TimelineWindow::new(50, 10).unwrap(), blank);
    layered.validate().unwrap();
}

#[test]
fn premount_may_overlap_previous_window() {
    let seq = Sequencer::new()
        .scene("a", TimelineWindow::new(0, 100).unwrap(), blank)
        .scene("b", TimelineWindow::new(100, 10).unwrap().with_premount(30), blank);
    seq.validate().unwrap();
}

#[test]
fn ids_must_be_unique_and_non_empty() {
    let dup = Sequencer::new()
        .scene("a", TimelineWindow::new(0, 10).unwrap(), blank)
        .scene("a", TimelineWindow::new(10, 10).unwrap(), blank);
    assert!(dup.validate().is_err());

    let empty = Sequencer::new().scene(" ", TimelineWindow::new(0, 10).unwrap(), blank);
    assert!(empty.validate().is_err());
}

#[test]
fn window_end_overflow_is_rejected() {
    let seq = Sequencer::new().scene(
        "a",
        TimelineWindow {
            start: FrameIndex(u64::MAX - 1),
            length: 5,
            premount: 0,
        },
        blank,
    );
    assert!(matches!(seq.validate(), Err(FramecastError::Validation(_))));
}
