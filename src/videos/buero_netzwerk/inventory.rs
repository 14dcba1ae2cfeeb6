use crate::{
    animation::{ease::Ease, interpolate::Interpolation, spring::Spring},
    foundation::core::{Fps, Point},
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{entrance, fade_in, fade_out, mix, ramp},
        node::{GradientStop, Node, Paint, Stroke, Text},
    },
    videos::{
        buero_netzwerk::data::{
            INVENTORY, INVENTORY_COLUMNS, INVENTORY_COLUMN_WIDTHS, ISSUES, InventoryItem,
        },
        palette,
        widgets::{Pill, line_height, spans},
    },
};

const PAD: f64 = 60.0;
const CELL_PX: f64 = 14.0;
const HEADER_H: f64 = 14.0 * 2.0 + CELL_PX * 1.2;
const ROW_H: f64 = 12.0 * 2.0 + CELL_PX * 1.2;

/// Documented device inventory with problem rows tinted red.
#[derive(Clone, Debug)]
pub struct InventoryScene {
    fade_in: Interpolation,
    fade_out: Interpolation,
    title: Spring,
    row: Spring,
    counter: Interpolation,
}

impl InventoryScene {
    /// Precompute curves for a `length`-frame window.
    pub fn new(fps: Fps, length: u64) -> FramecastResult<Self> {
        Ok(Self {
            fade_in: fade_in(15)?,
            fade_out: fade_out(length, 20)?,
            title: entrance(fps, 30)?,
            row: entrance(fps, 20)?,
            counter: ramp(60, 80, 0.0, 1.0, Ease::Linear)?,
        })
    }

    fn row(&self, idx: usize, item: &InventoryItem, width: f64, f: i64) -> Node {
        let e = self.row.sample(f - 10 - idx as i64 * 5);
        let base = if idx % 2 == 0 {
            palette::TABLE_ROW_EVEN
        } else {
            palette::TABLE_ROW_ODD
        };
        let fill = match item.issue {
            Some(_) => Paint::Linear {
                start: Point::ORIGIN,
                end: Point::new(width, 0.0),
                stops: vec![
                    GradientStop { offset: 0.0, color: base },
                    GradientStop { offset: 0.7, color: base },
                    GradientStop { offset: 1.0, color: palette::ERROR_DIM },
                ],
            },
            None => Paint::from(base),
        };

        let nr = item.nr.to_string();
        let problem = match item.issue {
            Some(issue) => Text::new(format!("\u{26a0} {issue}"), 13.0, palette::ERROR).weight(600),
            None => Text::new("\u{2713} OK", 13.0, palette::SUCCESS),
        };
        let cells = [
            Text::new(nr, CELL_PX, palette::TEXT_MUTED),
            Text::new(item.kind, CELL_PX, palette::TEXT_PRIMARY).weight(600),
            Text::new(item.model, CELL_PX, palette::TEXT_SECONDARY),
            Text::new(item.ip, CELL_PX, palette::ACCENT).mono(),
            Text::new(item.location, CELL_PX, palette::TEXT_SECONDARY),
            problem,
        ];

        let mut row = Node::group()
            .child(Node::rect(width, ROW_H).fill(fill))
            .child(
                Node::rect(width, 1.0)
                    .fill(palette::with_hex_alpha(palette::BORDER, 0x22))
                    .at(0.0, ROW_H - 1.0),
            );
        let mut x = 20.0;
        for (text, w) in cells.into_iter().zip(INVENTORY_COLUMN_WIDTHS) {
            row = row.child(Node::from(text).at(x, 12.0));
            x += w;
        }
        row.offset(mix(e, 40.0, 0.0), 0.0).opacity(e)
    }
}

impl Scene for InventoryScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let width = f64::from(ctx.canvas.width) - PAD * 2.0;

        let (heading, heading_w) = spans(
            &[("Inventar", palette::TEXT_PRIMARY), ("liste", palette::ACCENT)],
            32.0,
            700,
        );
        let stamp = Text::new("Stand: 31.03.2018", 20.0, palette::TEXT_MUTED);
        let title_w = heading_w + 16.0 + stamp.approx_width();
        let title = Node::group()
            .child(heading)
            .child(
                Node::from(stamp)
                    .at(heading_w + 16.0, (line_height(32.0) - line_height(20.0)) / 2.0),
            )
            .at(ctx.canvas.center_x() - title_w / 2.0, PAD)
            .opacity(self.title.sample(f));

        let table_y = PAD + line_height(32.0) + 30.0;
        let table_h = HEADER_H + ROW_H * INVENTORY.len() as f64;
        let mut header = Node::group().child(
            Node::rect(width, HEADER_H)
                .fill(palette::TABLE_HEADER),
        );
        let mut x = 20.0;
        for (label, w) in INVENTORY_COLUMNS.iter().zip(INVENTORY_COLUMN_WIDTHS) {
            header = header.child(
                Node::from(Text::new(label.to_uppercase(), CELL_PX, palette::ACCENT).weight(700))
                    .at(x, 14.0),
            );
            x += w;
        }
        let rows = INVENTORY
            .iter()
            .enumerate()
            .map(|(i, item)| self.row(i, item, width, f).offset(0.0, HEADER_H + ROW_H * i as f64));
        let table = Node::group()
            .child(header)
            .children(rows)
            .child(
                Node::rect(width, table_h)
                    .radius(12.0)
                    .stroke(Stroke::new(1.0, palette::BORDER)),
            )
            .at(PAD, table_y);

        let counter = Pill::new(
            Text::new(
                format!("{} Probleme erkannt", ISSUES.len()),
                15.0,
                palette::ERROR,
            )
            .weight(600),
            (20.0, 8.0),
            8.0,
            palette::ERROR_DIM,
            palette::with_hex_alpha(palette::ERROR, 0x40),
        );
        let counter_x = PAD + width - counter.width;
        let counter = counter
            .node
            .at(counter_x, table_y + table_h + 16.0)
            .opacity(self.counter.at(f));

        Node::group()
            .child(title)
            .child(table)
            .child(counter)
            .opacity(self.fade_in.at(f) * self.fade_out.at(f))
    }
}
