use crate::{
    animation::spring::Spring,
    foundation::core::{Fps, Point, Rect, Rgba8},
    foundation::error::FramecastResult,
    scene::{
        motion::{entrance, mix},
        node::{Node, Paint, Text},
    },
    videos::{
        financial::{
            data::{COLUMNS, EXCEL_DATA, MISMATCHES, ROWS},
            table::{CellGrid, CellStatus, DataTable, NEUTRAL_GRID, TableLabel, TableProps},
        },
        palette,
        widgets::line_height,
    },
};

const SIDE_PAD: f64 = 20.0;
const GAP: f64 = 30.0;
const MIDDLE_W: f64 = 50.0;

/// Reveal threshold of a value cell; the name column is never compared.
fn cell_threshold(row: usize, col: usize) -> f64 {
    let per_cell = 1.0 / (ROWS * COLUMNS) as f64;
    (row * (COLUMNS - 1) + col - 1) as f64 * per_cell
}

fn mismatch_at(row: usize, col: usize) -> bool {
    MISMATCHES.iter().any(|m| m.row == row && m.column == col)
}

/// Cell statuses of the spreadsheet and report tables at `progress`.
pub fn reveal_cells(progress: f64) -> (CellGrid, CellGrid) {
    let mut excel = NEUTRAL_GRID;
    let mut pdf = NEUTRAL_GRID;
    for row in 0..ROWS {
        for col in 1..COLUMNS {
            if progress > cell_threshold(row, col) {
                excel[row][col] = if mismatch_at(row, col) {
                    CellStatus::Mismatch
                } else {
                    CellStatus::Match
                };
                pdf[row][col] = CellStatus::Match;
            }
        }
    }
    (excel, pdf)
}

/// Mismatching cells already revealed at `progress`.
pub fn revealed_mismatches(progress: f64) -> usize {
    MISMATCHES
        .iter()
        .filter(|m| progress > cell_threshold(m.row, m.column))
        .count()
}

/// Spreadsheet and report side by side, compared cell by cell.
#[derive(Clone, Debug)]
pub struct ComparisonView {
    left: Spring,
    right: Spring,
    vs: Spring,
    divider: Spring,
    legend: Spring,
    table: DataTable,
}

fn divider_line(h: f64) -> Node {
    Node::rect(2.0, h).fill(Paint::fade_through(
        Point::ORIGIN,
        Point::new(0.0, h),
        palette::ACCENT,
    ))
}

impl ComparisonView {
    /// Precompute curves at `fps`.
    pub fn new(fps: Fps) -> FramecastResult<Self> {
        Ok(Self {
            left: entrance(fps, 25)?,
            right: entrance(fps, 25)?,
            vs: entrance(fps, 15)?,
            divider: entrance(fps, 30)?,
            legend: entrance(fps, 15)?,
            table: DataTable::new(fps)?,
        })
    }

    /// Lay the view out inside `area`.
    pub fn render(&self, frame: i64, area: Rect, progress: f64) -> Node {
        let (excel_cells, pdf_cells) = reveal_cells(progress);
        let table_w = (area.width() - SIDE_PAD * 2.0 - MIDDLE_W - GAP * 2.0) / 2.0;
        let excel = TableProps {
            cells: &excel_cells,
            compact: true,
            label: Some(TableLabel {
                text: "Bloomberg-Daten",
                color: palette::EXCEL_GREEN,
            }),
            ..TableProps::new(&EXCEL_DATA)
        };
        let pdf = TableProps {
            cells: &pdf_cells,
            label: Some(TableLabel {
                text: "Offizieller Bericht",
                color: palette::PDF_RED,
            }),
            ..excel
        };
        let table_h = excel.height();
        let table_y = area.y0 + (area.height() - table_h) / 2.0;
        let left_x = area.x0 + SIDE_PAD;
        let mid_x = left_x + table_w + GAP;
        let right_x = mid_x + MIDDLE_W + GAP;

        let l = self.left.sample(frame);
        let left = self
            .table
            .render(frame, table_w, &excel)
            .at(left_x + mix(l, -40.0, 0.0), table_y)
            .opacity(l);
        let r = self.right.sample(frame - 10);
        let right = self
            .table
            .render(frame, table_w, &pdf)
            .at(right_x + mix(r, 40.0, 0.0), table_y)
            .opacity(r);

        // The rule halves grow toward their full length as a share of half the table height.
        let line_h = mix(self.divider.sample(frame - 15), 0.0, 100.0) / 100.0 * table_h / 2.0;
        let vs_h = line_height(16.0);
        let stack_h = line_h * 2.0 + 24.0 + vs_h;
        let center_x = mid_x + MIDDLE_W / 2.0;
        let top = area.y0 + area.height() / 2.0 - stack_h / 2.0;
        let divider = Node::group()
            .child(divider_line(line_h).at(center_x - 1.0, top))
            .child(
                Node::from(Text::new("VS", 16.0, palette::ACCENT).weight(700).centered())
                    .at(center_x, top + line_h + 12.0)
                    .opacity(self.vs.sample(frame - 20)),
            )
            .child(divider_line(line_h).at(center_x - 1.0, top + line_h + 24.0 + vs_h));

        let mut root = Node::group().child(left).child(divider).child(right);
        let count = revealed_mismatches(progress);
        if count > 0 {
            root = root.child(self.legend(frame, area, count));
        }
        root
    }

    fn legend(&self, frame: i64, area: Rect, count: usize) -> Node {
        let text_h = line_height(16.0);
        let y = area.y1 - 30.0 - text_h;
        let item = |color: Rgba8, label: String| {
            let text = Text::new(label, 16.0, palette::TEXT_SECONDARY);
            let w = 12.0 + 10.0 + text.approx_width();
            let node = Node::group()
                .child(
                    Node::rect(12.0, 12.0)
                        .radius(2.0)
                        .fill(color)
                        .at(0.0, (text_h - 12.0) / 2.0),
                )
                .child(Node::from(text).at(22.0, 0.0));
            (node, w)
        };
        let (ok, ok_w) = item(palette::SUCCESS, "\u{dc}bereinstimmung".to_string());
        let (bad, bad_w) = item(palette::ERROR, format!("Abweichung ({count} gefunden)"));
        let total = ok_w + 32.0 + bad_w;
        let x = (area.x0 + area.x1) / 2.0 - total / 2.0;
        Node::group()
            .child(ok.at(x, y))
            .child(bad.at(x + ok_w + 32.0, y))
            .opacity(self.legend.sample(frame - 60))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/videos/financial/comparison.rs"]
mod tests;
