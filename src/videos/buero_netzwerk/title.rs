use crate::{
    animation::{ease::Ease, interpolate::Interpolation, spring::Spring},
    foundation::core::Fps,
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{entrance, fade_out, mix, pop, ramp},
        node::{Node, Paint, Stroke, Text},
    },
    videos::{
        buero_netzwerk::data::TITLE_BADGES,
        palette,
        widgets::{Pill, centered_spans, line_height, particle},
    },
};

const ICON: f64 = 80.0;
const GAP: f64 = 16.0;
const TITLE_PX: f64 = 64.0;

/// Opening card: network glyph, title, address, and three fact badges.
#[derive(Clone, Debug)]
pub struct TitleScene {
    icon: Spring,
    title: Spring,
    subtitle: Spring,
    badges: Spring,
    divider: Interpolation,
    fade: Interpolation,
}

impl TitleScene {
    /// Precompute curves for a `length`-frame window.
    pub fn new(fps: Fps, length: u64) -> FramecastResult<Self> {
        Ok(Self {
            icon: pop(fps, 24)?,
            title: entrance(fps, 40)?,
            subtitle: entrance(fps, 30)?,
            badges: entrance(fps, 30)?,
            divider: ramp(15, 60, 0.0, 500.0, Ease::OutQuad)?,
            fade: fade_out(length, 20)?,
        })
    }
}

/// Outline of three boxes joined by a bus, in a 24-unit box scaled to `size`.
fn network_glyph(size: f64) -> Node {
    let k = size / 24.0;
    let stroke = Stroke::new(1.5, palette::ACCENT);
    let boxed = |x: f64, y: f64| {
        Node::rect(6.0 * k, 6.0 * k)
            .radius(k)
            .stroke(stroke)
            .at(x * k, y * k)
    };
    Node::group()
        .child(boxed(2.0, 2.0))
        .child(boxed(16.0, 2.0))
        .child(boxed(9.0, 16.0))
        .child(Node::line(0.0, 5.0 * k, stroke).at(5.0 * k, 8.0 * k))
        .child(Node::line(14.0 * k, 0.0, stroke).at(5.0 * k, 13.0 * k))
        .child(Node::line(0.0, -5.0 * k, stroke).at(19.0 * k, 13.0 * k))
        .child(Node::line(0.0, 3.0 * k, stroke).at(12.0 * k, 13.0 * k))
}

impl Scene for TitleScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let cx = ctx.canvas.center_x();

        let particles = (0..8).map(|i| {
            let fi = f64::from(i);
            let x = 200.0 + fi * 200.0;
            let y = 150.0 + f64::from(i % 4) * 180.0 + ((ctx.t() + fi * 30.0) / 25.0).sin() * 25.0;
            let size = 3.0 + f64::from(i % 3) * 2.0;
            particle(x, y, size, palette::ACCENT, 0.15 + f64::from(i % 3) * 0.08)
        });

        let title_h = TITLE_PX * 1.15;
        let sub_h = line_height(24.0);
        let badge_h = line_height(16.0) + 16.0;
        let column_h = ICON + GAP + title_h + GAP + 2.0 + GAP + sub_h + GAP + 12.0 + badge_h;
        let mut y = ctx.canvas.center_y() - column_h / 2.0;

        let icon_scale = self.icon.sample(f - 5);
        let icon = Node::group()
            .child(
                Node::rect(ICON, ICON)
                    .radius(20.0)
                    .fill(palette::ACCENT_DIM)
                    .stroke(Stroke::new(2.0, palette::ACCENT)),
            )
            .child(network_glyph(44.0).at(18.0, 18.0))
            .at(cx - ICON / 2.0, y)
            .scaled_about(icon_scale, ICON / 2.0, ICON / 2.0);
        y += ICON + GAP;

        let t = self.title.sample(f);
        let title = centered_spans(
            &[("B\u{fc}ro", palette::TEXT_PRIMARY), ("Netzwerk", palette::ACCENT)],
            TITLE_PX,
            800,
            cx,
            y,
        )
        .offset(0.0, mix(t, 30.0, 0.0))
        .opacity(t);
        y += title_h + GAP;

        let lw = self.divider.at(f);
        let divider = Node::rect(lw, 2.0)
            .fill(Paint::edge_fade(lw, palette::ACCENT))
            .at(cx - lw / 2.0, y);
        y += 2.0 + GAP;

        let s = self.subtitle.sample(f - 30);
        let subtitle = Node::from(
            Text::new("Hauptstrasse 12, 6210 Sursee", 24.0, palette::TEXT_SECONDARY)
                .weight(300)
                .centered(),
        )
        .at(cx, y + mix(s, 20.0, 0.0))
        .opacity(s);
        y += sub_h + GAP + 12.0;

        let pills: Vec<Pill> = TITLE_BADGES
            .iter()
            .map(|label| {
                Pill::new(
                    Text::new(*label, 16.0, palette::TEXT_SECONDARY),
                    (20.0, 8.0),
                    8.0,
                    palette::BG_CARD,
                    palette::BORDER,
                )
            })
            .collect();
        let row_w = pills.iter().map(|p| p.width).sum::<f64>() + GAP * (pills.len() - 1) as f64;
        let mut x = cx - row_w / 2.0;
        let mut badges = Node::group().opacity(self.badges.sample(f - 50));
        for p in pills {
            badges = badges.child(p.node.at(x, y));
            x += p.width + GAP;
        }

        Node::group()
            .children(particles)
            .child(icon)
            .child(title)
            .child(divider)
            .child(subtitle)
            .child(badges)
            .opacity(self.fade.at(f))
    }
}
