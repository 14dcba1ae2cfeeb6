use super::*;
use crate::{
    foundation::core::FrameIndex,
    scene::{Scene, SceneCtx, node::Node},
};

fn ctx(frame: i64, len: u64) -> SceneCtx {
    SceneCtx {
        frame,
        fps: Fps::new(30, 1).unwrap(),
        duration_in_frames: len,
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
    }
}

fn all_finite(node: &Node) -> bool {
    let mut ok = true;
    node.walk(&mut |n| {
        let t = n.transform;
        ok &= t.translate.x.is_finite()
            && t.translate.y.is_finite()
            && t.scale.x.is_finite()
            && (0.0..=1.0).contains(&n.opacity);
    });
    ok
}

#[test]
fn windows_partition_the_timeline() {
    let comp = composition().unwrap();
    assert_eq!(comp.id(), "BueroNetzwerk");
    assert_eq!(comp.duration(), FrameIndex(600));
    let seq = comp.sequencer();
    let starts: Vec<u64> = seq.slots().iter().map(|s| s.window.start.0).collect();
    assert_eq!(starts, [0, 150, 360, 510]);
    assert_eq!(seq.covered_frames(), 600);
    assert!(seq.gaps(600).is_empty());
    assert_eq!(seq.visible_at(FrameIndex(200)).unwrap().slot.id, "topology");
}

#[test]
fn title_starts_hidden_and_fades_out() {
    let scene = TitleScene::new(Fps::new(30, 1).unwrap(), 150).unwrap();
    let first = scene.render(&ctx(0, 150));
    let icon = &first.children[8];
    assert_eq!(icon.transform.scale.x, 0.0);
    assert_eq!(first.children[9].opacity, 0.0);
    assert_eq!(first.opacity, 1.0);
    assert_eq!(scene.render(&ctx(150, 150)).opacity, 0.0);
    assert!((scene.render(&ctx(140, 150)).opacity - 0.5).abs() < 1e-9);
}

#[test]
fn topology_devices_settle() {
    let scene = TopologyScene::new(Fps::new(30, 1).unwrap(), 210).unwrap();
    let early = scene.render(&ctx(0, 210));
    assert_eq!(early.opacity, 0.0);
    let late = scene.render(&ctx(120, 210));
    assert_eq!(late.opacity, 1.0);
    // title, 12 links, 13 devices, legend
    assert_eq!(late.children.len(), 1 + 12 + 13 + 1);
    for dev in &late.children[13..26] {
        assert!((dev.transform.scale.x - 1.0).abs() < 0.01);
    }
}

#[test]
fn every_scene_renders_finite_trees() {
    let fps = Fps::new(30, 1).unwrap();
    let scenes: Vec<(Box<dyn Scene>, u64)> = vec![
        (Box::new(TitleScene::new(fps, 150).unwrap()), 150),
        (Box::new(TopologyScene::new(fps, 210).unwrap()), 210),
        (Box::new(InventoryScene::new(fps, 150).unwrap()), 150),
        (Box::new(IssuesScene::new(fps, 90).unwrap()), 90),
    ];
    for (scene, len) in &scenes {
        for f in (-15..*len as i64).step_by(7) {
            assert!(all_finite(&scene.render(&ctx(f, *len))), "frame {f}");
        }
    }
}
