use crate::{
    animation::{ease::Ease, interpolate::Interpolation, spring::Spring},
    foundation::core::{Fps, Point, Rgba8},
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{entrance, fade_out, mix, pop, ramp},
        node::{Node, Paint, Stroke, Text},
    },
    videos::{palette, widgets::particle},
};

const ICON: f64 = 70.0;
const GAP: f64 = 20.0;
const TITLE_PX: f64 = 56.0;
const SUBTITLE_PX: f64 = 22.0;
const SHIMMER_W: f64 = 100.0;

/// Title card with a shimmer sweep across the headline.
#[derive(Clone, Debug)]
pub struct IntroScene {
    title: Spring,
    subtitle: Spring,
    icon: Spring,
    divider: Interpolation,
    shimmer: Interpolation,
    particles: Interpolation,
    fade: Interpolation,
}

impl IntroScene {
    /// Precompute curves for a `length`-frame window.
    pub fn new(fps: Fps, length: u64) -> FramecastResult<Self> {
        Ok(Self {
            title: entrance(fps, 45)?,
            subtitle: entrance(fps, 30)?,
            icon: pop(fps, 24)?,
            divider: ramp(15, 60, 0.0, 400.0, Ease::OutQuad)?,
            shimmer: ramp(60, 120, -200.0, 1200.0, Ease::Linear)?,
            particles: ramp(30, 60, 0.0, 1.0, Ease::Linear)?,
            fade: fade_out(length, 30)?,
        })
    }
}

/// Circled check in a 24-unit box scaled to `size`.
fn verified_glyph(size: f64) -> Node {
    let k = size / 24.0;
    let stroke = Stroke::new(1.5, palette::ACCENT);
    Node::group()
        .child(Node::circle(10.0 * k).stroke(stroke).at(12.0 * k, 12.0 * k))
        .child(Node::line(2.0 * k, 2.0 * k, stroke).at(9.0 * k, 12.0 * k))
        .child(Node::line(4.0 * k, -4.0 * k, stroke).at(11.0 * k, 14.0 * k))
}

/// Light band sweeping across `[0, width]`; the part outside is cut off.
fn shimmer(x: f64, width: f64, height: f64) -> Option<Node> {
    let x0 = x.max(0.0);
    let x1 = (x + SHIMMER_W).min(width);
    (x1 > x0).then(|| {
        let start = x - x0;
        Node::rect(x1 - x0, height)
            .fill(Paint::fade_through(
                Point::new(start, 0.0),
                Point::new(start + SHIMMER_W, 0.0),
                Rgba8::rgba(255, 255, 255, 20),
            ))
            .at(x0, 0.0)
    })
}

impl Scene for IntroScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let fps = ctx.fps.as_f64();
        let cx = ctx.canvas.center_x();

        let particle_opacity = self.particles.at(f);
        let particles = (0..6).map(|i| {
            let fi = f64::from(i);
            let drift = ((ctx.t() + fi * 40.0) / (1.5 * fps)).sin() * 30.0;
            let y = 200.0 + f64::from(i % 3) * 200.0 + drift;
            let size = 3.0 + f64::from(i % 3) * 2.0;
            particle(
                300.0 + fi * 250.0,
                y,
                size,
                palette::ACCENT,
                particle_opacity * (0.15 + f64::from(i % 3) * 0.1),
            )
        });

        let title_line = TITLE_PX * 1.15;
        let title_h = title_line * 2.0;
        let sub_line = SUBTITLE_PX * 1.5;
        let column_h = ICON + 10.0 + GAP + title_h + GAP + 10.0 + GAP + sub_line * 2.0;
        let mut y = ctx.canvas.center_y() - column_h / 2.0;

        let icon = Node::group()
            .child(
                Node::rect(ICON, ICON)
                    .radius(16.0)
                    .fill(palette::ACCENT_DIM)
                    .stroke(Stroke::new(2.0, palette::ACCENT)),
            )
            .child(verified_glyph(36.0).at(17.0, 17.0))
            .at(cx - ICON / 2.0, y)
            .scaled_about(self.icon.sample(f - 9), ICON / 2.0, ICON / 2.0);
        y += ICON + 10.0 + GAP;

        let line1 = Text::new("Automated Financial", TITLE_PX, palette::TEXT_PRIMARY)
            .weight(800)
            .centered();
        let line2 = Text::new("Data Verification", TITLE_PX, palette::ACCENT)
            .weight(800)
            .centered();
        let title_w = line1.approx_width().max(line2.approx_width());
        let t = self.title.sample(f);
        let mut title = Node::group().child(
            Node::group()
                .child(Node::from(line1).at(title_w / 2.0, 0.0))
                .child(Node::from(line2).at(title_w / 2.0, title_line))
                .offset(0.0, mix(t, 30.0, 0.0))
                .opacity(t),
        );
        if let Some(band) = shimmer(self.shimmer.at(f), title_w, title_h) {
            title = title.child(band);
        }
        let title = title.at(cx - title_w / 2.0, y);
        y += title_h + GAP + 4.0;

        let lw = self.divider.at(f);
        let divider = Node::rect(lw, 2.0)
            .fill(Paint::edge_fade(lw, palette::ACCENT))
            .at(cx - lw / 2.0, y);
        y += 2.0 + 4.0 + GAP;

        let s = self.subtitle.sample(f - 36);
        let sub_text = |content: &str| {
            Text::new(content, SUBTITLE_PX, palette::TEXT_SECONDARY)
                .weight(300)
                .centered()
        };
        let subtitle = Node::group()
            .child(Node::from(sub_text("Ensuring accuracy between Bloomberg data")))
            .child(Node::from(sub_text("and official company reports")).at(0.0, sub_line))
            .at(cx, y + mix(s, 20.0, 0.0))
            .opacity(s);

        Node::group()
            .children(particles)
            .child(icon)
            .child(title)
            .child(divider)
            .child(subtitle)
            .opacity(self.fade.at(f))
    }
}
