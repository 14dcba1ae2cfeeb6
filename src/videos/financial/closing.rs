use crate::{
    animation::{ease::Ease, interpolate::Interpolation, spring::Spring},
    foundation::core::Fps,
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{entrance, fade_in, mix, pop, ramp},
        node::{Node, Paint, Stroke, Text},
    },
    videos::{
        palette,
        widgets::{centered_spans, line_height},
    },
};

const SHIELD: f64 = 76.0;
const GAP: f64 = 20.0;
const TITLE_PX: f64 = 60.0;
const SUBTITLE_PX: f64 = 26.0;

/// Closing claim over a shield badge; holds until the end of the video.
#[derive(Clone, Debug)]
pub struct ClosingScene {
    fade_in: Interpolation,
    title: Spring,
    subtitle: Spring,
    line: Interpolation,
    shield: Spring,
}

impl ClosingScene {
    /// Precompute curves; the scene never fades out.
    pub fn new(fps: Fps) -> FramecastResult<Self> {
        Ok(Self {
            fade_in: fade_in(15)?,
            title: entrance(fps, 45)?,
            subtitle: entrance(fps, 30)?,
            line: ramp(45, 105, 0.0, 400.0, Ease::Linear)?,
            shield: pop(fps, 24)?,
        })
    }
}

/// Shield outline with a check, 24 units wide.
fn shield_glyph(size: f64) -> Node {
    let k = size / 24.0;
    let pen = Stroke::new(1.5, palette::SUCCESS);
    let outline = [
        (12.0, 2.0),
        (20.0, 5.0),
        (20.0, 12.0),
        (17.0, 18.0),
        (12.0, 22.0),
        (7.0, 18.0),
        (4.0, 12.0),
        (4.0, 5.0),
        (12.0, 2.0),
    ];
    let edges = outline.windows(2).map(|w| {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        Node::line((x1 - x0) * k, (y1 - y0) * k, pen).at(x0 * k, y0 * k)
    });
    Node::group()
        .children(edges)
        .child(Node::line(2.0 * k, 2.0 * k, pen).at(9.0 * k, 12.0 * k))
        .child(Node::line(4.0 * k, -4.0 * k, pen).at(11.0 * k, 14.0 * k))
}

impl Scene for ClosingScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let cx = ctx.canvas.center_x();

        let title_h = TITLE_PX * 1.2;
        let column_h =
            SHIELD + 10.0 + GAP + title_h + GAP + 6.0 + 2.0 + GAP + line_height(SUBTITLE_PX);
        let mut y = ctx.canvas.center_y() - column_h / 2.0;

        let shield = Node::group()
            .child(
                Node::rect(SHIELD, SHIELD)
                    .radius(18.0)
                    .fill(palette::SUCCESS_DIM)
                    .stroke(Stroke::new(2.0, palette::SUCCESS)),
            )
            .child(shield_glyph(38.0).at(19.0, 19.0))
            .at(cx - SHIELD / 2.0, y)
            .scaled_about(self.shield.sample(f - 9), SHIELD / 2.0, SHIELD / 2.0);
        y += SHIELD + 10.0 + GAP;

        let t = self.title.sample(f - 15);
        let title = centered_spans(
            &[
                ("Zuverl\u{e4}ssig. Automatisiert. ", palette::TEXT_PRIMARY),
                ("Verifiziert.", palette::SUCCESS),
            ],
            TITLE_PX,
            800,
            cx,
            y + mix(t, 30.0, 0.0),
        );
        y += title_h + GAP + 6.0;

        let lw = self.line.at(f);
        let line = Node::rect(lw, 2.0)
            .fill(Paint::edge_fade(lw, palette::SUCCESS))
            .at(cx - lw / 2.0, y);
        y += 2.0 + GAP;

        let s = self.subtitle.sample(f - 60);
        let subtitle = Node::from(
            Text::new(
                "Finanzdaten, denen Sie vertrauen k\u{f6}nnen.",
                SUBTITLE_PX,
                palette::TEXT_SECONDARY,
            )
            .weight(300)
            .centered(),
        )
        .at(cx, y + mix(s, 15.0, 0.0))
        .opacity(s);

        Node::group()
            .child(
                Node::group()
                    .child(shield)
                    .child(title)
                    .child(line)
                    .child(subtitle)
                    .opacity(t),
            )
            .opacity(self.fade_in.at(f))
    }
}
