use crate::{
    animation::{ease::Ease, interpolate::Interpolation, spring::Spring},
    foundation::core::{Fps, Point, Rgba8},
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{entrance, fade_in, fade_out, mix, pop, ramp},
        node::{Node, Paint, Stroke, Text},
    },
    videos::{
        financial::data::{COLUMN_LABELS, PDF_DATA, ROWS},
        palette,
        widgets::{check_mark, icon_header, line_height},
    },
};

const PAD: (f64, f64) = (80.0, 50.0);
const DOC: (f64, f64) = (200.0, 260.0);
const DOC_GAP: f64 = 16.0;
const ARROW_W: f64 = 60.0;
const EXTRACTION_START: i64 = 210;
const DOC_TITLES: [&str; 3] = [
    "Annual_Report_2024.pdf",
    "Financial_Stmt_Q4.pdf",
    "Earnings_Release.pdf",
];
const DOC_BG: Rgba8 = Rgba8::rgb(0x1a, 0x27, 0x44);
const PANEL_BG: Rgba8 = Rgba8::rgba(12, 22, 42, 242);

/// Reports get scanned one after another, then their rows fill an extraction table.
#[derive(Clone, Debug)]
pub struct ExtractionScene {
    fade_in: Interpolation,
    fade_out: Interpolation,
    header: Spring,
    doc: Spring,
    scans: [Interpolation; 3],
    extraction: Interpolation,
    arrow: Spring,
    row: Spring,
}

impl ExtractionScene {
    /// Precompute curves for a `length`-frame window.
    pub fn new(fps: Fps, length: u64) -> FramecastResult<Self> {
        let secs = |s: f64| fps.secs_to_frames_round(s);
        let scan = |i: f64| ramp(secs(2.0 + i * 1.5), secs(4.0 + i * 1.5), 0.0, 1.0, Ease::Linear);
        Ok(Self {
            fade_in: fade_in(secs(0.5))?,
            fade_out: fade_out(length, secs(1.0))?,
            header: entrance(fps, 24)?,
            doc: pop(fps, 18)?,
            scans: [scan(0.0)?, scan(1.0)?, scan(2.0)?],
            extraction: ramp(EXTRACTION_START, EXTRACTION_START + 150, 0.0, 1.0, Ease::OutQuad)?,
            arrow: entrance(fps, 15)?,
            row: entrance(fps, 12)?,
        })
    }

    /// Rows already pulled out of the reports at local frame `f`.
    pub fn extracted_rows(&self, f: i64) -> usize {
        let p = self.extraction.at(f);
        ROWS.min((p * (ROWS + 1) as f64).floor() as usize)
    }

    fn document(&self, i: usize, f: i64) -> Node {
        let e = self.doc.sample(f - i as i64 * 9);
        let scan = self.scans[i].at(f);
        let scan_y = DOC.1 * mix(scan, 5.0, 95.0) / 100.0;
        let inner_w = DOC.0 - 32.0;

        let mut doc = Node::group()
            .child(
                Node::rect(DOC.0, DOC.1)
                    .radius(8.0)
                    .fill(DOC_BG)
                    .stroke(Stroke::new(1.0, palette::BORDER)),
            )
            .child(Node::rect(28.0, 28.0).radius(4.0).fill(palette::PDF_RED).at(16.0, 16.0))
            .child(
                Node::from(Text::new("PDF", 10.0, palette::TEXT_PRIMARY).weight(700).centered())
                    .at(30.0, 30.0 - line_height(10.0) / 2.0),
            )
            .child(
                Node::from(Text::new(DOC_TITLES[i], 11.0, palette::TEXT_SECONDARY).weight(600))
                    .at(52.0, 30.0 - line_height(11.0) / 2.0),
            );
        for line in 0..10 {
            let w = inner_w * (60.0 + f64::from(line % 3) * 15.0) / 100.0;
            doc = doc.child(
                Node::rect(w, 6.0)
                    .radius(3.0)
                    .fill(palette::BORDER)
                    .at(16.0, 56.0 + f64::from(line) * 14.0)
                    .opacity(0.5),
            );
        }
        if scan > 0.0 {
            doc = doc.child(Node::rect(DOC.0, scan_y).fill(Rgba8::rgba(0, 212, 255, 10)));
        }
        if scan > 0.0 && scan < 1.0 {
            doc = doc.child(
                Node::rect(DOC.0, 3.0)
                    .fill(Paint::edge_fade(DOC.0, palette::ACCENT))
                    .at(0.0, scan_y),
            );
        }
        if scan >= 1.0 {
            doc = doc.child(
                Node::group()
                    .child(Node::circle(12.0).fill(palette::SUCCESS).at(12.0, 12.0))
                    .child(check_mark(14.0, palette::TEXT_PRIMARY, 3.0).at(5.0, 5.0))
                    .at(DOC.0 - 8.0 - 24.0, 8.0),
            );
        }

        let x = (DOC.0 + DOC_GAP) * i as f64;
        doc.at(x, mix(e, 30.0, 0.0))
            .scaled_about(e, DOC.0 / 2.0, DOC.1 / 2.0)
            .opacity(e)
    }

    fn extracted_table(&self, f: i64, width: f64) -> Node {
        let label_h = line_height(12.0) + 20.0 + 1.0;
        let header_h = line_height(10.0) + 16.0 + 2.0;
        let row_h = line_height(12.0) + 16.0;
        let rows = self.extracted_rows(f);
        let height = label_h + header_h + row_h * rows as f64;
        let col_w = width / COLUMN_LABELS.len() as f64;

        let mut panel = Node::group()
            .child(Node::rect(width, height).radius(10.0).fill(PANEL_BG))
            .child(Node::rect(width, label_h - 1.0).fill(palette::BG_CARD))
            .child(Node::rect(width, 1.0).fill(palette::BORDER).at(0.0, label_h - 1.0))
            .child(
                Node::from(
                    Text::new("EXTRACTED DATA", 12.0, palette::ACCENT).weight(600),
                )
                .at(16.0, 10.0),
            )
            .child(Node::rect(width, header_h).fill(palette::TABLE_HEADER).at(0.0, label_h))
            .child(
                Node::rect(width, 2.0)
                    .fill(palette::with_hex_alpha(palette::ACCENT, 0x40))
                    .at(0.0, label_h + header_h - 2.0),
            );
        for (c, label) in COLUMN_LABELS.iter().enumerate() {
            panel = panel.child(
                Node::from(
                    Text::new(label.to_uppercase(), 10.0, palette::TEXT_MUTED).weight(700),
                )
                .at(col_w * c as f64 + 10.0, label_h + 8.0),
            );
        }

        for (i, company) in PDF_DATA.iter().take(rows).enumerate() {
            let e = self.row.sample(f - EXTRACTION_START - i as i64 * 10);
            let bg = if i % 2 == 0 {
                palette::TABLE_ROW_EVEN
            } else {
                palette::TABLE_ROW_ODD
            };
            let mut row = Node::group().child(Node::rect(width, row_h).fill(bg));
            for (c, value) in company.cells().into_iter().enumerate() {
                let text = if c == 0 {
                    Text::new(value, 12.0, palette::TEXT_PRIMARY).weight(600)
                } else {
                    Text::new(value, 12.0, palette::TEXT_SECONDARY).mono()
                };
                row = row.child(Node::from(text).at(col_w * c as f64 + 10.0, 8.0));
            }
            panel = panel.child(
                row.at(mix(e, 15.0, 0.0), label_h + header_h + row_h * i as f64)
                    .opacity(e),
            );
        }

        panel.child(
            Node::rect(width, height)
                .radius(10.0)
                .stroke(Stroke::new(1.0, palette::BORDER)),
        )
    }
}

impl Scene for ExtractionScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let content_w = f64::from(ctx.canvas.width) - PAD.0 * 2.0;

        let h = self.header.sample(f);
        let icon = Node::group()
            .child(Node::rect(48.0, 48.0).radius(10.0).fill(palette::PDF_RED))
            .child(doc_glyph().at(12.0, 12.0));
        let header = icon_header(
            icon,
            48.0,
            1.0,
            "PDF Upload & Extraction",
            "Scanning official company annual reports",
        )
        .at(PAD.0, PAD.1 + mix(h, -20.0, 0.0))
        .opacity(h);

        let row_y = PAD.1 + line_height(28.0) + 4.0 + line_height(14.0) + 30.0;
        let docs_w = DOC.0 * 3.0 + DOC_GAP * 2.0;
        let docs = Node::group()
            .children((0..3).map(|i| self.document(i, f)))
            .at(PAD.0, row_y);

        let a = self.arrow.sample(f - 180);
        let arrow_x = PAD.0 + docs_w + 40.0;
        let arrow_stroke = Stroke::new(2.0, palette::ACCENT);
        let arrow = Node::group()
            .child(Node::line(50.0, 0.0, arrow_stroke))
            .child(Node::line(-6.0, -6.0, arrow_stroke).at(50.0, 0.0))
            .child(Node::line(-6.0, 6.0, arrow_stroke).at(50.0, 0.0))
            .at(arrow_x, row_y + DOC.1 / 2.0)
            .opacity(a);

        let table_x = arrow_x + ARROW_W + 40.0;
        let table = self
            .extracted_table(f, PAD.0 + content_w - table_x)
            .at(table_x, row_y)
            .opacity(a);

        let p = self.extraction.at(f);
        let bar_y = row_y + DOC.1 + 24.0;
        let track_y = bar_y + line_height(12.0) + 6.0;
        let progress = Node::group()
            .child(Node::from(Text::new("Extraction Progress", 12.0, palette::TEXT_MUTED)))
            .child(
                Node::from(
                    Text::new(format!("{}%", (p * 100.0).round()), 12.0, palette::TEXT_MUTED)
                        .end_aligned(),
                )
                .at(content_w, 0.0),
            )
            .child(
                Node::rect(content_w, 4.0)
                    .radius(2.0)
                    .fill(palette::BG_CARD)
                    .at(0.0, track_y - bar_y),
            )
            .child(
                Node::rect(content_w * p, 4.0)
                    .radius(2.0)
                    .fill(Paint::linear(
                        Point::ORIGIN,
                        Point::new(content_w * p, 0.0),
                        palette::ACCENT,
                        palette::SUCCESS,
                    ))
                    .at(0.0, track_y - bar_y),
            )
            .at(PAD.0, bar_y);

        Node::group()
            .child(header)
            .child(docs)
            .child(arrow)
            .child(table)
            .child(progress)
            .opacity(self.fade_in.at(f) * self.fade_out.at(f))
    }
}

/// Page outline with a folded corner and two text lines, 24 units wide.
fn doc_glyph() -> Node {
    let stroke = Stroke::new(1.5, palette::TEXT_PRIMARY);
    Node::group()
        .child(Node::line(-8.0, 0.0, stroke).at(14.0, 2.0))
        .child(Node::line(0.0, 20.0, stroke).at(4.0, 2.0))
        .child(Node::line(16.0, 0.0, stroke).at(4.0, 22.0))
        .child(Node::line(0.0, -14.0, stroke).at(20.0, 22.0))
        .child(Node::line(-6.0, -6.0, stroke).at(20.0, 8.0))
        .child(Node::line(-8.0, 0.0, stroke).at(16.0, 13.0))
        .child(Node::line(-8.0, 0.0, stroke).at(16.0, 17.0))
}
