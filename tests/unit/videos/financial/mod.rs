use super::*;
use crate::{
    foundation::core::FrameIndex,
    scene::{Scene, SceneCtx},
};

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn ctx(frame: i64, len: u64) -> SceneCtx {
    SceneCtx {
        frame,
        fps: fps(),
        duration_in_frames: len,
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
    }
}

#[test]
fn six_windows_cover_ninety_seconds() {
    let comp = composition().unwrap();
    assert_eq!(comp.id(), "FinancialVerificationVideo");
    assert_eq!(comp.duration(), FrameIndex(2700));
    let seq = comp.sequencer();
    assert_eq!(seq.slots().len(), 6);
    assert_eq!(seq.covered_frames(), 2700);
    assert!(seq.gaps(2700).is_empty());
    assert!(seq.slots().iter().all(|s| s.window.premount == 30));
    assert_eq!(seq.visible_at(FrameIndex(1799)).unwrap().slot.id, "comparison");
    assert_eq!(seq.visible_at(FrameIndex(1800)).unwrap().slot.id, "correction");
}

#[test]
fn excel_highlight_sweeps_first_rows() {
    let scene = ExcelScene::new(fps(), 450).unwrap();
    assert_eq!(scene.highlight_row(150), None);
    assert_eq!(scene.highlight_row(195), Some(0));
    assert_eq!(scene.highlight_row(205), Some(1));
    assert_eq!(scene.highlight_row(210), Some(2));
}

#[test]
fn excel_highlight_timing_follows_frame_rate() {
    let scene = ExcelScene::new(Fps::new(60, 1).unwrap(), 900).unwrap();
    assert_eq!(scene.highlight_row(300), None);
    assert_eq!(scene.highlight_row(390), Some(0));
    assert_eq!(scene.highlight_row(420), Some(2));
}

#[test]
fn extraction_fills_rows_progressively() {
    let scene = ExtractionScene::new(fps(), 450).unwrap();
    assert_eq!(scene.extracted_rows(0), 0);
    assert_eq!(scene.extracted_rows(210), 0);
    assert_eq!(scene.extracted_rows(360), 5);
    let mid = scene.extracted_rows(260);
    assert!(mid > 0 && mid < 5, "{mid}");
}

#[test]
fn comparison_reveal_runs_from_three_to_fourteen_seconds() {
    let scene = CompareScene::new(fps(), 600).unwrap();
    assert_eq!(scene.reveal_progress(90), 0.0);
    assert_eq!(scene.reveal_progress(420), 1.0);
    assert!((scene.reveal_progress(255) - 0.5).abs() < 1e-9);
}

#[test]
fn corrections_run_back_to_back() {
    let scene = CorrectionScene::new(fps(), 600).unwrap();
    assert_eq!(correction::correction_start(0), 60);
    assert_eq!(correction::correction_start(2), 360);
    assert_eq!(scene.progress(0, 180), 1.0);
    assert_eq!(scene.progress(1, 180), 0.0);
    assert_eq!(scene.progress(2, 480), 1.0);
    assert_eq!(scene.progress(3, 480), 0.0);
}

#[test]
fn closing_holds_to_the_last_frame() {
    let scene = ClosingScene::new(fps()).unwrap();
    assert_eq!(scene.render(&ctx(0, 300)).opacity, 0.0);
    assert_eq!(scene.render(&ctx(299, 300)).opacity, 1.0);
}

#[test]
fn every_scene_renders_finite_trees() {
    let scenes: Vec<(Box<dyn Scene>, u64)> = vec![
        (Box::new(IntroScene::new(fps(), 300).unwrap()), 300),
        (Box::new(ExcelScene::new(fps(), 450).unwrap()), 450),
        (Box::new(ExtractionScene::new(fps(), 450).unwrap()), 450),
        (Box::new(CompareScene::new(fps(), 600).unwrap()), 600),
        (Box::new(CorrectionScene::new(fps(), 600).unwrap()), 600),
        (Box::new(ClosingScene::new(fps()).unwrap()), 300),
    ];
    for (scene, len) in &scenes {
        for f in (-30..*len as i64).step_by(11) {
            let mut ok = true;
            scene.render(&ctx(f, *len)).walk(&mut |n| {
                ok &= n.transform.translate.x.is_finite()
                    && n.transform.translate.y.is_finite()
                    && n.transform.scale.x.is_finite();
            });
            assert!(ok, "frame {f}");
        }
    }
}
