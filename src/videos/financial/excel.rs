use crate::{
    animation::{ease::Ease, interpolate::Interpolation, spring::Spring},
    foundation::core::Fps,
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{entrance, fade_in, fade_out, mix, pop, ramp},
        node::{Node, Paint, Stroke, Text},
    },
    videos::{
        financial::{
            data::{COLUMNS, EXCEL_DATA},
            table::{DataTable, TableLabel, TableProps},
        },
        palette,
        widgets::{icon_header, line_height},
    },
};

const PAD: (f64, f64) = (120.0, 60.0);
const ICON: f64 = 48.0;

/// The spreadsheet source: rows stagger in, a scan line passes, one row sweeps a highlight.
#[derive(Clone, Debug)]
pub struct ExcelScene {
    fade_in: Interpolation,
    fade_out: Interpolation,
    header: Spring,
    icon: Spring,
    highlight: Interpolation,
    scan: Interpolation,
    status: Interpolation,
    table: DataTable,
}

impl ExcelScene {
    /// Precompute curves for a `length`-frame window.
    pub fn new(fps: Fps, length: u64) -> FramecastResult<Self> {
        let secs = |s: f64| fps.secs_to_frames_round(s);
        Ok(Self {
            fade_in: fade_in(15)?,
            fade_out: fade_out(length, 30)?,
            header: entrance(fps, 24)?,
            icon: pop(fps, 15)?,
            highlight: ramp(secs(6.0), secs(7.0), -1.0, 2.0, Ease::Linear)?,
            scan: ramp(120, 240, -10.0, 110.0, Ease::InOutQuad)?,
            status: ramp(60, 90, 0.0, 1.0, Ease::Linear)?,
            table: DataTable::new(fps)?,
        })
    }

    /// Row under the sweeping highlight at local frame `f`.
    pub fn highlight_row(&self, f: i64) -> Option<usize> {
        let p = self.highlight.at(f);
        (0.0..=4.0).contains(&p).then(|| p.floor() as usize)
    }
}

impl Scene for ExcelScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let width = f64::from(ctx.canvas.width) - PAD.0 * 2.0;

        let h = self.header.sample(f);
        let icon = Node::group()
            .child(Node::rect(ICON, ICON).radius(10.0).fill(palette::EXCEL_GREEN))
            .child(
                Node::from(Text::new("X", 22.0, palette::TEXT_PRIMARY).weight(700).centered())
                    .at(ICON / 2.0, (ICON - line_height(22.0)) / 2.0),
            );
        let header = icon_header(
            icon,
            ICON,
            self.icon.sample(f - 9),
            "Bloomberg Data Source",
            "Financial metrics extracted from Bloomberg Terminal",
        )
        .at(PAD.0, PAD.1 + mix(h, -20.0, 0.0))
        .opacity(h);

        let table_y = PAD.1 + line_height(28.0) + 4.0 + line_height(14.0) + 30.0;
        let props = TableProps {
            highlight_row: self.highlight_row(f),
            animate_rows: true,
            label: Some(TableLabel {
                text: "Q4 2024 Financial Summary",
                color: palette::ACCENT,
            }),
            ..TableProps::new(&EXCEL_DATA)
        };
        let table_h = props.height();
        let mut table = Node::group().child(self.table.render(f, width, &props));
        let scan = self.scan.at(f);
        if scan > 0.0 && scan < 100.0 {
            table = table.child(
                Node::rect(width, 2.0)
                    .fill(Paint::edge_fade(width, palette::ACCENT))
                    .at(0.0, table_h * scan / 100.0)
                    .opacity(0.7),
            );
        }
        let table = table.at(PAD.0, table_y);

        let bar_h = line_height(13.0) + 24.0;
        let text_y = 12.0;
        let status = Node::group()
            .child(
                Node::rect(width, bar_h)
                    .radius(8.0)
                    .fill(palette::BG_CARD)
                    .stroke(Stroke::new(1.0, palette::BORDER)),
            )
            .child(Node::circle(4.0).fill(palette::SUCCESS).at(24.0, bar_h / 2.0))
            .child(
                Node::from(Text::new(
                    format!("{} companies loaded", EXCEL_DATA.len()),
                    13.0,
                    palette::TEXT_MUTED,
                ))
                .at(36.0, text_y),
            )
            .child(
                Node::from(
                    Text::new(
                        format!("{} metrics per company", COLUMNS - 1),
                        13.0,
                        palette::TEXT_MUTED,
                    )
                    .centered(),
                )
                .at(width / 2.0, text_y),
            )
            .child(
                Node::from(
                    Text::new("Ready for verification", 13.0, palette::ACCENT).end_aligned(),
                )
                .at(width - 20.0, text_y),
            )
            .at(PAD.0, table_y + table_h + 20.0)
            .opacity(self.status.at(f));

        Node::group()
            .child(header)
            .child(table)
            .child(status)
            .opacity(self.fade_in.at(f) * self.fade_out.at(f))
    }
}
