use super::*;

#[test]
fn zero_length_is_rejected() {
    assert!(TimelineWindow::new(10, 0).is_err());
    assert!(TimelineWindow::new(u64::MAX, 2).is_err());
}

#[test]
fn phases_around_the_window() {
    let w = TimelineWindow::new(150, 210).unwrap().with_premount(15);
    assert_eq!(w.phase(FrameIndex(100)), WindowPhase::NotMounted);
    assert_eq!(
        w.phase(FrameIndex(135)),
        WindowPhase::Premounted { local_frame: -15 }
    );
    assert_eq!(
        w.phase(FrameIndex(149)),
        WindowPhase::Premounted { local_frame: -1 }
    );
    assert_eq!(
        w.phase(FrameIndex(150)),
        WindowPhase::Visible { local_frame: 0 }
    );
    assert_eq!(
        w.phase(FrameIndex(359)),
        WindowPhase::Visible { local_frame: 209 }
    );
    assert_eq!(w.phase(FrameIndex(360)), WindowPhase::NotMounted);
}

#[test]
fn premount_saturates_at_zero() {
    let w = TimelineWindow::new(0, 150).unwrap().with_premount(10);
    assert_eq!(w.mount_start(), FrameIndex(0));
    assert!(w.phase(FrameIndex(0)).is_visible());

    let w = TimelineWindow::new(5, 10).unwrap().with_premount(30);
    assert_eq!(w.mount_start(), FrameIndex(0));
    assert_eq!(w.phase(FrameIndex(0)).local_frame(), Some(-5));
}

#[test]
fn end_and_range_agree() {
    let w = TimelineWindow::new(360, 150).unwrap();
    assert_eq!(w.end(), FrameIndex(510));
    assert_eq!(w.visible_range().len_frames(), 150);
}
