use super::*;
use crate::videos::financial::data::EXCEL_DATA;

fn table() -> DataTable {
    DataTable::new(Fps::new(30, 1).unwrap()).unwrap()
}

fn rows(node: &Node) -> &[Node] {
    // background, [label bar x3], header, rows..., border
    let n = node.children.len();
    &node.children[n - 1 - ROWS..n - 1]
}

#[test]
fn heights_follow_density() {
    let regular = TableProps::new(&EXCEL_DATA);
    assert!((regular.height() - 328.0).abs() < 1e-9);

    let compact = TableProps {
        compact: true,
        label: Some(TableLabel {
            text: "x",
            color: palette::ACCENT,
        }),
        ..TableProps::new(&EXCEL_DATA)
    };
    assert!((compact.height() - 291.4).abs() < 1e-9);
}

#[test]
fn staggered_rows_start_hidden() {
    let props = TableProps {
        animate_rows: true,
        ..TableProps::new(&EXCEL_DATA)
    };
    let node = table().render(0, 1000.0, &props);
    assert_eq!(node.opacity, 0.0);
    assert!(rows(&node).iter().all(|r| r.opacity == 0.0));

    let settled = table().render(200, 1000.0, &props);
    assert!((settled.opacity - 1.0).abs() < 1e-6);
    assert!(rows(&settled).iter().all(|r| (r.opacity - 1.0).abs() < 1e-2));
}

#[test]
fn statuses_add_tinted_boxes() {
    let mut cells = NEUTRAL_GRID;
    cells[2][2] = CellStatus::Mismatch;
    cells[0][1] = CellStatus::Match;
    let props = TableProps {
        cells: &cells,
        highlight_row: Some(4),
        ..TableProps::new(&EXCEL_DATA)
    };
    let node = table().render(100, 1000.0, &props);
    let rows = rows(&node);
    // background + 5 texts
    assert_eq!(rows[1].children.len(), 6);
    assert_eq!(rows[0].children.len(), 7);
    assert_eq!(rows[2].children.len(), 7);
    // highlight border
    assert_eq!(rows[4].children.len(), 7);
}
