use crate::{
    animation::spring::Spring,
    foundation::core::{Fps, Rgba8},
    foundation::error::FramecastResult,
    scene::{
        motion::{entrance, mix},
        node::{Node, Stroke, Text},
    },
    videos::{
        financial::data::{COLUMN_LABELS, COLUMNS, Company, ROWS},
        palette,
        widgets::line_height,
    },
};

/// Verification state painted behind a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellStatus {
    #[default]
    Neutral,
    Match,
    Mismatch,
}

pub type CellGrid = [[CellStatus; COLUMNS]; ROWS];

pub const NEUTRAL_GRID: CellGrid = [[CellStatus::Neutral; COLUMNS]; ROWS];

const TABLE_BG: Rgba8 = Rgba8::rgba(12, 22, 42, 242);
const ROW_BORDER: f64 = 3.0;
const CELL_PAD: f64 = 16.0;

struct Metrics {
    font: f64,
    header_font: f64,
    label_font: f64,
    label_pad: (f64, f64),
    header_pad: f64,
    row_pad: f64,
    widths: [f64; COLUMNS],
}

const REGULAR: Metrics = Metrics {
    font: 20.0,
    header_font: 15.0,
    label_font: 16.0,
    label_pad: (22.0, 14.0),
    header_pad: 14.0,
    row_pad: 16.0,
    widths: [24.0, 19.0, 19.0, 19.0, 19.0],
};

const COMPACT: Metrics = Metrics {
    font: 16.0,
    header_font: 13.0,
    label_font: 14.0,
    label_pad: (18.0, 10.0),
    header_pad: 10.0,
    row_pad: 12.0,
    widths: [22.0, 19.5, 19.5, 19.5, 19.5],
};

impl Metrics {
    fn label_h(&self) -> f64 {
        line_height(self.label_font) + self.label_pad.1 * 2.0 + 1.0
    }

    fn header_h(&self) -> f64 {
        line_height(self.header_font) + self.header_pad * 2.0 + 2.0
    }

    fn row_h(&self) -> f64 {
        line_height(self.font) + self.row_pad * 2.0
    }

    /// Left edge and width of every column for a table `width` wide.
    fn columns(&self, width: f64) -> [(f64, f64); COLUMNS] {
        let mut out = [(0.0, 0.0); COLUMNS];
        let mut x = 0.0;
        for (slot, pct) in out.iter_mut().zip(self.widths) {
            let w = width * pct / 100.0;
            *slot = (x, w);
            x += w;
        }
        out
    }
}

/// Caption bar above the header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLabel {
    pub text: &'static str,
    pub color: Rgba8,
}

/// What to draw in one [`DataTable::render`] call.
#[derive(Clone, Copy, Debug)]
pub struct TableProps<'a> {
    pub data: &'a [Company; ROWS],
    pub cells: &'a CellGrid,
    pub highlight_row: Option<usize>,
    pub animate_rows: bool,
    pub compact: bool,
    pub label: Option<TableLabel>,
}

impl<'a> TableProps<'a> {
    pub fn new(data: &'a [Company; ROWS]) -> Self {
        Self {
            data,
            cells: &NEUTRAL_GRID,
            highlight_row: None,
            animate_rows: false,
            compact: false,
            label: None,
        }
    }

    fn metrics(&self) -> &'static Metrics {
        if self.compact { &COMPACT } else { &REGULAR }
    }

    /// Rendered height in pixels.
    pub fn height(&self) -> f64 {
        let m = self.metrics();
        let label = if self.label.is_some() { m.label_h() } else { 0.0 };
        label + m.header_h() + m.row_h() * ROWS as f64
    }
}

/// Company table that scales in and optionally staggers its rows.
#[derive(Clone, Debug)]
pub struct DataTable {
    entrance: Spring,
    row: Spring,
}

impl DataTable {
    /// Precompute curves at `fps`.
    pub fn new(fps: Fps) -> FramecastResult<Self> {
        Ok(Self {
            entrance: entrance(fps, 20)?,
            row: entrance(fps, 15)?,
        })
    }

    /// Table with its top-left corner at the origin.
    pub fn render(&self, frame: i64, width: f64, props: &TableProps<'_>) -> Node {
        let m = props.metrics();
        let height = props.height();
        let columns = m.columns(width - ROW_BORDER);
        let mut y = 0.0;

        let mut table = Node::group().child(Node::rect(width, height).radius(12.0).fill(TABLE_BG));

        if let Some(label) = props.label {
            let h = m.label_h();
            table = table
                .child(Node::rect(width, h - 1.0).fill(palette::BG_CARD))
                .child(Node::rect(width, 1.0).fill(palette::BORDER).at(0.0, h - 1.0))
                .child(
                    Node::from(
                        Text::new(label.text.to_uppercase(), m.label_font, label.color).weight(600),
                    )
                    .at(m.label_pad.0, m.label_pad.1),
                );
            y += h;
        }

        let header_h = m.header_h();
        let mut header = Node::group()
            .child(Node::rect(width, header_h).fill(palette::TABLE_HEADER))
            .child(
                Node::rect(width, 2.0)
                    .fill(palette::with_hex_alpha(palette::ACCENT, 0x40))
                    .at(0.0, header_h - 2.0),
            );
        for (label, (x, _)) in COLUMN_LABELS.iter().zip(columns) {
            header = header.child(
                Node::from(
                    Text::new(label.to_uppercase(), m.header_font, palette::TEXT_MUTED).weight(700),
                )
                .at(ROW_BORDER + x + CELL_PAD, m.header_pad),
            );
        }
        table = table.child(header.at(0.0, y));
        y += header_h;

        for (i, company) in props.data.iter().enumerate() {
            let row = self.row(frame, i, company, width, &columns, props);
            table = table.child(row.offset(0.0, y));
            y += m.row_h();
        }

        let e = self.entrance.sample(frame);
        table
            .child(
                Node::rect(width, height)
                    .radius(12.0)
                    .stroke(Stroke::new(1.0, palette::BORDER)),
            )
            .scaled_about(mix(e, 0.97, 1.0), width / 2.0, height / 2.0)
            .opacity(e)
    }

    fn row(
        &self,
        frame: i64,
        i: usize,
        company: &Company,
        width: f64,
        columns: &[(f64, f64); COLUMNS],
        props: &TableProps<'_>,
    ) -> Node {
        let m = props.metrics();
        let row_h = m.row_h();
        let r = if props.animate_rows {
            self.row.sample(frame - i as i64 * 8)
        } else {
            1.0
        };
        let highlighted = props.highlight_row == Some(i);
        let bg = if highlighted {
            palette::ACCENT_DIM
        } else if i % 2 == 0 {
            palette::TABLE_ROW_EVEN
        } else {
            palette::TABLE_ROW_ODD
        };

        let mut row = Node::group().child(Node::rect(width, row_h).fill(bg));
        if highlighted {
            row = row.child(Node::rect(ROW_BORDER, row_h).fill(palette::ACCENT));
        }

        let text_h = line_height(m.font);
        for (col, (value, (x, w))) in company.cells().into_iter().zip(*columns).enumerate() {
            let x = ROW_BORDER + x;
            let status = props.cells[i][col];
            let (color, tint) = match status {
                CellStatus::Match => (palette::SUCCESS, Some(palette::SUCCESS_DIM)),
                CellStatus::Mismatch => (palette::ERROR, Some(palette::ERROR_DIM)),
                CellStatus::Neutral if col == 0 => (palette::TEXT_PRIMARY, None),
                CellStatus::Neutral => (palette::TEXT_SECONDARY, None),
            };
            if let Some(fill) = tint {
                row = row.child(
                    Node::rect(w + 8.0, text_h + 4.0)
                        .radius(4.0)
                        .fill(fill)
                        .stroke(Stroke::new(1.0, palette::with_hex_alpha(color, 0x50)))
                        .at(x - 4.0, m.row_pad - 2.0),
                );
            }
            let text = if col == 0 {
                Text::new(value, m.font, color).weight(600)
            } else {
                Text::new(value, m.font, color).mono()
            };
            row = row.child(Node::from(text).at(x + CELL_PAD, m.row_pad));
        }

        row.at(mix(r, 20.0, 0.0), 0.0).opacity(r)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/videos/financial/table.rs"]
mod tests;
