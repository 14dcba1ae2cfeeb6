use super::*;

#[test]
fn spans_advance_by_text_width() {
    let white = Rgba8::rgb(255, 255, 255);
    let (row, w) = spans(&[("ab", white), ("cde", white)], 10.0, 700);
    assert!((w - 27.5).abs() < 1e-9);
    assert_eq!(row.children.len(), 2);
    assert!((row.children[1].transform.translate.x - 11.0).abs() < 1e-9);
}

#[test]
fn centered_spans_straddle_center() {
    let white = Rgba8::rgb(255, 255, 255);
    let n = centered_spans(&[("abcd", white)], 10.0, 400, 100.0, 5.0);
    assert!((n.transform.translate.x - 89.0).abs() < 1e-9);
    assert_eq!(n.transform.translate.y, 5.0);
}

#[test]
fn pill_wraps_label_with_padding() {
    let t = Text::new("OK", 10.0, Rgba8::rgb(0, 0, 0)).centered();
    let p = Pill::new(t, (20.0, 8.0), 8.0, Rgba8::TRANSPARENT, Rgba8::TRANSPARENT);
    assert!((p.width - 51.0).abs() < 1e-9);
    assert!((p.height - 28.0).abs() < 1e-9);
    match &p.node.children[1].kind {
        crate::scene::node::NodeKind::Text(t) => assert_eq!(t.left_offset(), 0.0),
        other => panic!("unexpected kind {other:?}"),
    }
}
