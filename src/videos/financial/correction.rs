use crate::{
    animation::{ease::Ease, interpolate::Interpolation, spring::Spring},
    foundation::core::Fps,
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{entrance, fade_in, fade_out, mix, ramp},
        node::{Node, Stroke, Text},
    },
    videos::{
        financial::{
            data::{COLUMN_LABELS, EXCEL_DATA, MISMATCHES, Mismatch},
            number::AnimatedNumber,
        },
        palette,
        widgets::{check_mark, line_height, spans},
    },
};

const PAD: (f64, f64) = (80.0, 40.0);
const CARD_PAD: (f64, f64) = (32.0, 24.0);
const CARD_GAP: f64 = 24.0;
const ROW_GAP: f64 = 28.0;
const STEP: f64 = 48.0;
const CHECK: f64 = 38.0;
const VALUE_W: f64 = 120.0;
const FIRST_START: i64 = 60;
const CORRECTION_FRAMES: i64 = 120;
const CORRECTION_GAP: i64 = 30;

/// Mismatches fixed one by one, each card swapping the wrong figure for the verified one.
#[derive(Clone, Debug)]
pub struct CorrectionScene {
    fade_in: Interpolation,
    fade_out: Interpolation,
    header: Spring,
    card: Spring,
    progress: Vec<Interpolation>,
    check: Interpolation,
    arrow: Interpolation,
    verified: Interpolation,
    label: Interpolation,
    number: AnimatedNumber,
}

/// First frame of the `idx`-th correction.
pub fn correction_start(idx: usize) -> i64 {
    FIRST_START + idx as i64 * (CORRECTION_FRAMES + CORRECTION_GAP)
}

impl CorrectionScene {
    /// Precompute curves for a `length`-frame window.
    pub fn new(fps: Fps, length: u64) -> FramecastResult<Self> {
        let progress = (0..MISMATCHES.len())
            .map(|i| {
                let start = correction_start(i);
                ramp(start, start + CORRECTION_FRAMES, 0.0, 1.0, Ease::InOutQuad)
            })
            .collect::<FramecastResult<Vec<_>>>()?;
        Ok(Self {
            fade_in: fade_in(15)?,
            fade_out: fade_out(length, 30)?,
            header: entrance(fps, 24)?,
            card: entrance(fps, 15)?,
            progress,
            check: Interpolation::clamped([0.8, 1.0], [0.0, 1.0])?,
            arrow: Interpolation::clamped([0.3, 0.5], [0.0, 1.0])?,
            verified: Interpolation::clamped([0.6, 0.8], [0.0, 1.0])?,
            label: ramp(420, 450, 0.0, 1.0, Ease::Linear)?,
            number: AnimatedNumber::new(fps)?,
        })
    }

    /// Correction progress of card `idx` at local frame `f`.
    pub fn progress(&self, idx: usize, f: i64) -> f64 {
        self.progress.get(idx).map_or(0.0, |p| p.at(f))
    }

    fn card(&self, idx: usize, m: &Mismatch, width: f64, f: i64) -> Node {
        let p = self.progress(idx, f);
        let e = self.card.sample(f - correction_start(idx) + 15);
        let value_h = line_height(13.0) + 6.0 + 36.0;
        let card_h = card_height();
        let mid = card_h / 2.0;

        let border = if p > 0.8 {
            palette::with_hex_alpha(palette::SUCCESS, 0x40)
        } else {
            palette::BORDER
        };
        let step = Node::group()
            .child(
                Node::circle(STEP / 2.0)
                    .fill(palette::ACCENT_DIM)
                    .stroke(Stroke::new(2.0, palette::ACCENT)),
            )
            .child(
                Node::from(
                    Text::new((idx + 1).to_string(), 20.0, palette::ACCENT)
                        .weight(700)
                        .centered(),
                )
                .at(0.0, -line_height(20.0) / 2.0),
            )
            .at(CARD_PAD.0 + STEP / 2.0, mid);

        let company_x = CARD_PAD.0 + STEP + ROW_GAP;
        let company_h = line_height(22.0) + 4.0 + line_height(15.0);
        let company = Node::group()
            .child(Node::from(
                Text::new(EXCEL_DATA[m.row].name, 22.0, palette::TEXT_PRIMARY).weight(600),
            ))
            .child(
                Node::from(Text::new(
                    COLUMN_LABELS[m.column].to_uppercase(),
                    15.0,
                    palette::TEXT_MUTED,
                ))
                .at(0.0, line_height(22.0) + 4.0),
            )
            .at(company_x, mid - company_h / 2.0);

        let check_x = width - CARD_PAD.0 - CHECK;
        let verified_x = check_x - ROW_GAP - VALUE_W;
        let arrow = Text::new("\u{2192}", 24.0, palette::ACCENT);
        let arrow_x = verified_x - ROW_GAP - arrow.approx_width();
        let old_x = arrow_x - ROW_GAP - VALUE_W;
        let value_top = mid - value_h / 2.0;
        let caption = |s: &str| Text::new(s.to_uppercase(), 13.0, palette::TEXT_MUTED).centered();

        let old_value = Node::group()
            .child(Node::from(caption("Bloomberg")))
            .child(
                self.number
                    .render(f, m.excel_value, m.pdf_value, p)
                    .at(0.0, line_height(13.0) + 6.0),
            )
            .at(old_x + VALUE_W / 2.0, value_top);

        let arrow = Node::from(arrow)
            .at(arrow_x, mid - line_height(24.0) / 2.0)
            .opacity(self.arrow.sample(p));

        let verified_color = if p > 0.7 {
            palette::SUCCESS
        } else {
            palette::TEXT_SECONDARY
        };
        let verified = Node::group()
            .child(Node::from(caption("Verifiziert")))
            .child(
                Node::from(
                    Text::new(m.pdf_value, 18.0, verified_color)
                        .weight(700)
                        .mono()
                        .centered(),
                )
                .at(0.0, line_height(13.0) + 6.0)
                .opacity(self.verified.sample(p)),
            )
            .at(verified_x + VALUE_W / 2.0, value_top);

        let check_opacity = self.check.sample(p);
        let mut check = Node::group();
        if check_opacity > 0.0 {
            check = check.child(
                Node::circle(CHECK / 2.0)
                    .fill(palette::SUCCESS)
                    .at(CHECK / 2.0, CHECK / 2.0),
            );
        }
        let check = check
            .child(check_mark(18.0, palette::TEXT_PRIMARY, 3.0).at(10.0, 10.0))
            .at(check_x, mid - CHECK / 2.0)
            .opacity(check_opacity);

        Node::group()
            .child(
                Node::rect(width, card_h)
                    .radius(14.0)
                    .fill(palette::BG_CARD)
                    .stroke(Stroke::new(1.0, border)),
            )
            .child(step)
            .child(company)
            .child(old_value)
            .child(arrow)
            .child(verified)
            .child(check)
            .offset(mix(e, -30.0, 0.0), 0.0)
            .opacity(e)
    }
}

fn card_height() -> f64 {
    let value_h = line_height(13.0) + 6.0 + 36.0;
    let company_h = line_height(22.0) + 4.0 + line_height(15.0);
    CARD_PAD.1 * 2.0 + value_h.max(company_h).max(STEP)
}

impl Scene for CorrectionScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let (w, h) = (f64::from(ctx.canvas.width), f64::from(ctx.canvas.height));
        let content_w = w - PAD.0 * 2.0;

        let e = self.header.sample(f);
        let (title, title_w) = spans(
            &[("Automatische ", palette::TEXT_PRIMARY), ("Korrektur", palette::ACCENT)],
            30.0,
            700,
        );
        let header_h = line_height(30.0);
        let pen = Stroke::new(1.5, palette::ACCENT);
        let k = 32.0 / 24.0;
        let glyph = Node::group()
            .child(Node::line(9.0 * k, 0.0, pen).at(12.0 * k, 20.0 * k))
            .child(Node::line(13.0 * k, -14.0 * k, pen).at(5.0 * k, 18.0 * k))
            .child(Node::line(-2.0 * k, 2.0 * k, pen).at(5.0 * k, 18.0 * k));
        let row_w = 32.0 + 16.0 + title_w;
        let header = Node::group()
            .child(glyph.at(0.0, (header_h - 32.0) / 2.0))
            .child(title.at(48.0, 0.0))
            .at(w / 2.0 - row_w / 2.0, PAD.1 + mix(e, -20.0, 0.0))
            .opacity(e);

        let cards_y = PAD.1 + header_h + 30.0;
        let card_h = card_height();
        let cards = MISMATCHES.iter().enumerate().map(|(i, m)| {
            self.card(i, m, content_w, f)
                .offset(PAD.0, cards_y + (card_h + CARD_GAP) * i as f64)
        });

        let label_text = Text::new(
            "Automatische Korrektur mit verifizierten Quelldaten",
            17.0,
            palette::SUCCESS,
        )
        .weight(600);
        let pill_h = line_height(17.0) + 28.0;
        let pill_w = 32.0 * 2.0 + 20.0 + 12.0 + label_text.approx_width();
        let ok = Stroke::new(2.0, palette::SUCCESS);
        let label = Node::group()
            .child(
                Node::rect(pill_w, pill_h)
                    .radius(10.0)
                    .fill(palette::SUCCESS_DIM)
                    .stroke(Stroke::new(1.0, palette::with_hex_alpha(palette::SUCCESS, 0x40))),
            )
            .child(Node::circle(20.0 * 10.0 / 24.0).stroke(ok).at(42.0, pill_h / 2.0))
            .child(check_mark(20.0, palette::SUCCESS, 2.0).at(32.0, pill_h / 2.0 - 10.0))
            .child(Node::from(label_text).at(64.0, 14.0))
            .at(w / 2.0 - pill_w / 2.0, h - PAD.1 - pill_h)
            .opacity(self.label.at(f));

        Node::group()
            .child(header)
            .children(cards)
            .child(label)
            .opacity(self.fade_in.at(f) * self.fade_out.at(f))
    }
}
