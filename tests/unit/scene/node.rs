use super::*;

#[test]
fn opacity_multiplies_and_clamps() {
    let n = Node::group().opacity(0.5).opacity(0.5);
    assert_eq!(n.opacity, 0.25);
    assert_eq!(Node::group().opacity(3.0).opacity, 1.0);
    assert_eq!(Node::group().opacity(-1.0).opacity, 0.0);
    assert_eq!(Node::group().opacity(f64::NAN).opacity, 0.0);
}

#[test]
fn fill_only_applies_to_shapes() {
    let r = Node::rect(10.0, 5.0).fill(Rgba8::rgb(1, 2, 3)).radius(2.0);
    match r.kind {
        NodeKind::Rect { fill, radius, .. } => {
            assert_eq!(fill, Some(Paint::from(Rgba8::rgb(1, 2, 3))));
            assert_eq!(radius, 2.0);
        }
        other => panic!("unexpected kind {other:?}"),
    }
    let g = Node::group().fill(Rgba8::rgb(1, 2, 3));
    assert_eq!(g.kind, NodeKind::Group);
}

#[test]
fn walk_is_preorder() {
    let tree = Node::group()
        .child(Node::rect(1.0, 1.0).child(Node::circle(1.0)))
        .child(Text::new("a", 10.0, Rgba8::rgb(0, 0, 0)));
    let mut kinds = Vec::new();
    tree.walk(&mut |n| {
        kinds.push(match n.kind {
            NodeKind::Group => "group",
            NodeKind::Rect { .. } => "rect",
            NodeKind::Ellipse { .. } => "ellipse",
            NodeKind::Line { .. } => "line",
            NodeKind::Text(_) => "text",
        })
    });
    assert_eq!(kinds, ["group", "rect", "ellipse", "text"]);
    assert_eq!(tree.count(), 4);
}

#[test]
fn gradient_average_ignores_transparent_stops() {
    let accent = Rgba8::rgb(0, 212, 255);
    let avg = Paint::edge_fade(100.0, accent).average();
    assert_eq!((avg.r, avg.g, avg.b), (0, 212, 255));
    assert_eq!(avg.a, 85);
}

#[test]
fn text_alignment_offsets() {
    let t = Text::new("abcd", 10.0, Rgba8::rgb(0, 0, 0));
    assert!((t.approx_width() - 22.0).abs() < 1e-9);
    assert_eq!(t.left_offset(), 0.0);
    assert!((t.clone().centered().left_offset() + 11.0).abs() < 1e-9);
    assert!((t.end_aligned().left_offset() + 22.0).abs() < 1e-9);
}

#[test]
fn identity_transform_is_omitted_from_json() {
    let v = serde_json::to_value(Node::group()).unwrap();
    assert!(v.get("transform").is_none());
    let v = serde_json::to_value(Node::group().at(3.0, 4.0)).unwrap();
    assert!(v.get("transform").is_some());
    assert_eq!(v["kind"]["type"], "group");
}
