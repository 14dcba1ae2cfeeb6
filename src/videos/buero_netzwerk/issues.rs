use crate::{
    animation::{interpolate::Interpolation, spring::Spring},
    foundation::core::{Fps, Rgba8},
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{bounce, entrance, fade_in, fade_out, mix},
        node::{Node, Stroke, Text},
    },
    videos::{
        buero_netzwerk::data::{IMPROVEMENTS, ISSUES},
        palette,
        widgets::line_height,
    },
};

const PAD: f64 = 80.0;
const COLUMN_GAP: f64 = 60.0;
const CARD_H: f64 = 14.0 * 2.0 + 22.0 * 1.2;
const CARD_GAP: f64 = 20.0;

/// Findings on the left, numbered fixes on the right.
#[derive(Clone, Debug)]
pub struct IssuesScene {
    fade_in: Interpolation,
    fade_out: Interpolation,
    heading: Spring,
    card: Spring,
}

impl IssuesScene {
    /// Precompute curves for a `length`-frame window.
    pub fn new(fps: Fps, length: u64) -> FramecastResult<Self> {
        Ok(Self {
            fade_in: fade_in(10)?,
            fade_out: fade_out(length, 15)?,
            heading: entrance(fps, 20)?,
            card: bounce(fps, 20)?,
        })
    }
}

fn card(width: f64, border: Rgba8, badge: Node, text: &str, text_x: f64) -> Node {
    let text_y = (CARD_H - line_height(17.0)) / 2.0;
    Node::group()
        .child(
            Node::rect(width, CARD_H)
                .radius(10.0)
                .fill(palette::BG_CARD)
                .stroke(Stroke::new(1.0, palette::with_hex_alpha(border, 0x30))),
        )
        .child(badge)
        .child(
            Node::from(Text::new(text, 17.0, palette::TEXT_PRIMARY).weight(500))
                .at(text_x, text_y),
        )
}

impl Scene for IssuesScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let col_w = (f64::from(ctx.canvas.width) - PAD * 2.0 - COLUMN_GAP) / 2.0;
        let right_x = PAD + col_w + COLUMN_GAP;
        let cards_y = PAD + line_height(28.0) + 30.0;

        let mut left = Node::group().child(
            Node::from(Text::new("Erkannte Probleme", 28.0, palette::ERROR).weight(700))
                .opacity(self.heading.sample(f)),
        );
        for (i, issue) in ISSUES.iter().enumerate() {
            let e = self.card.sample(f - 8 - i as i64 * 8);
            let icon = Node::from(Text::new(issue.icon, 22.0, issue.color).centered())
                .at(20.0 + 18.0, (CARD_H - line_height(22.0)) / 2.0);
            left = left.child(
                card(col_w, issue.color, icon, issue.text, 72.0)
                    .at(mix(e, -30.0, 0.0), cards_y - PAD + (CARD_H + CARD_GAP) * i as f64)
                    .opacity(e),
            );
        }

        let mut right = Node::group().child(
            Node::from(
                Text::new("Verbesserungsvorschl\u{e4}ge", 28.0, palette::SUCCESS).weight(700),
            )
            .opacity(self.heading.sample(f - 15)),
        );
        for (i, text) in IMPROVEMENTS.iter().enumerate() {
            let e = self.card.sample(f - 20 - i as i64 * 8);
            let badge = Node::group()
                .child(
                    Node::circle(14.0)
                        .fill(palette::SUCCESS_DIM)
                        .stroke(Stroke::new(2.0, palette::SUCCESS)),
                )
                .child(
                    Node::from(
                        Text::new((i + 1).to_string(), 14.0, palette::SUCCESS)
                            .weight(700)
                            .centered(),
                    )
                    .at(0.0, -line_height(14.0) / 2.0),
                )
                .at(20.0 + 14.0, CARD_H / 2.0);
            right = right.child(
                card(col_w, palette::SUCCESS, badge, text, 64.0)
                    .at(mix(e, 30.0, 0.0), cards_y - PAD + (CARD_H + CARD_GAP) * i as f64)
                    .opacity(e),
            );
        }

        Node::group()
            .child(left.at(PAD, PAD))
            .child(right.at(right_x, PAD))
            .opacity(self.fade_in.at(f) * self.fade_out.at(f))
    }
}
