use super::*;
use crate::foundation::core::{Canvas, Fps};

fn ctx(frame: i64) -> SceneCtx {
    SceneCtx {
        frame,
        fps: Fps::new(30, 1).unwrap(),
        duration_in_frames: 600,
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
    }
}

fn style(bottom_line: bool) -> BackgroundStyle {
    BackgroundStyle {
        grid_opacity: (0.02, 0.06),
        bottom_line,
    }
}

#[test]
fn grid_covers_canvas_every_sixty_pixels() {
    let bg = Background::new(600, style(false)).unwrap();
    let root = bg.render(&ctx(0));
    assert_eq!(root.children.len(), 4);
    let grid = &root.children[1];
    assert_eq!(grid.children.len(), 32 + 18);
    assert!((grid.opacity - 0.04).abs() < 1e-9);
}

#[test]
fn glow_drifts_then_clamps() {
    let bg = Background::new(600, style(true)).unwrap();
    let x_at = |f| bg.render(&ctx(f)).children[2].transform.translate.x;
    assert!((x_at(0) - 384.0).abs() < 1e-9);
    assert!((x_at(300) - 1536.0).abs() < 1e-9);
    assert!((x_at(600) - 768.0).abs() < 1e-9);
    assert!((x_at(900) - 768.0).abs() < 1e-9);
    assert_eq!(bg.render(&ctx(0)).children.len(), 5);
}

#[test]
fn renders_are_deterministic() {
    let bg = Background::new(600, style(false)).unwrap();
    assert_eq!(bg.render(&ctx(123)), bg.render(&ctx(123)));
}
