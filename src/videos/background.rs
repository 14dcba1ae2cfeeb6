//! Animated backdrop rendered under every scene.

use crate::{
    animation::interpolate::{InterpolateOptions, Interpolation},
    foundation::core::{Point, Rgba8},
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::wave,
        node::{GradientStop, Node, Paint},
    },
    videos::palette,
};

const GRID_STEP: f64 = 60.0;
const GLOW_RADIUS: f64 = 300.0;

/// Per-video tweaks of the shared backdrop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundStyle {
    /// Grid opacity oscillates between these bounds.
    pub grid_opacity: (f64, f64),
    /// Faint accent hairline along the bottom edge.
    pub bottom_line: bool,
}

/// Radial wash, breathing grid, drifting glow, and vignette.
#[derive(Clone, Debug)]
pub struct Background {
    style: BackgroundStyle,
    gradient_y: Interpolation,
    glow_x: Interpolation,
}

impl Background {
    /// Backdrop animated over a `duration_in_frames` composition.
    pub fn new(duration_in_frames: u64, style: BackgroundStyle) -> FramecastResult<Self> {
        let d = duration_in_frames as f64;
        Ok(Self {
            style,
            gradient_y: Interpolation::new(
                [0.0, d],
                [35.0, 55.0],
                InterpolateOptions::clamp_right(),
            )?,
            glow_x: Interpolation::new(
                [0.0, d * 0.5, d],
                [20.0, 80.0, 40.0],
                InterpolateOptions::clamp_right(),
            )?,
        })
    }
}

fn stop(offset: f64, color: Rgba8) -> GradientStop {
    GradientStop { offset, color }
}

/// Distance from `c` to the farthest canvas corner.
fn farthest_corner(c: Point, w: f64, h: f64) -> f64 {
    let dx = c.x.max(w - c.x);
    let dy = c.y.max(h - c.y);
    dx.hypot(dy)
}

impl Scene for Background {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let (w, h) = (f64::from(ctx.canvas.width), f64::from(ctx.canvas.height));
        let t = ctx.t();
        let fps = ctx.fps.as_f64();

        let wash_center = Point::new(w / 2.0, h * self.gradient_y.sample(t) / 100.0);
        let wash = Node::rect(w, h).fill(Paint::Radial {
            center: wash_center,
            radius: farthest_corner(wash_center, w, h),
            stops: vec![
                stop(0.0, palette::BG_SECONDARY),
                stop(0.7, palette::BG_PRIMARY),
                stop(1.0, palette::BG_DEEP),
            ],
        });

        let (lo, hi) = self.style.grid_opacity;
        let mut grid = Node::group().opacity(wave(t / (2.0 * fps), lo, hi));
        let mut x = 0.0;
        while x < w {
            grid = grid.child(Node::rect(1.0, h).fill(palette::ACCENT).at(x, 0.0));
            x += GRID_STEP;
        }
        let mut y = 0.0;
        while y < h {
            grid = grid.child(Node::rect(w, 1.0).fill(palette::ACCENT).at(0.0, y));
            y += GRID_STEP;
        }

        let glow = Node::circle(GLOW_RADIUS)
            .fill(Paint::Radial {
                center: Point::ORIGIN,
                radius: GLOW_RADIUS,
                stops: vec![
                    stop(0.0, palette::ACCENT_GLOW),
                    stop(0.7, Rgba8::TRANSPARENT),
                ],
            })
            .at(w * self.glow_x.sample(t) / 100.0, h * 0.3)
            .opacity(wave(t / (3.0 * fps), 0.04, 0.1));

        let center = Point::new(w / 2.0, h / 2.0);
        let vignette = Node::rect(w, h).fill(Paint::Radial {
            center,
            radius: farthest_corner(center, w, h),
            stops: vec![
                stop(0.4, Rgba8::TRANSPARENT),
                stop(1.0, Rgba8::rgba(0, 0, 0, 128)),
            ],
        });

        let mut root = Node::group()
            .child(wash)
            .child(grid)
            .child(glow)
            .child(vignette);
        if self.style.bottom_line {
            root = root.child(
                Node::rect(w, 1.0)
                    .fill(Paint::edge_fade(w, palette::with_hex_alpha(palette::ACCENT, 0x40)))
                    .at(0.0, h - 1.0)
                    .opacity(0.3),
            );
        }
        root
    }
}

#[cfg(test)]
#[path = "../../tests/unit/videos/background.rs"]
mod tests;
