use super::*;

fn number() -> AnimatedNumber {
    AnimatedNumber::new(Fps::new(30, 1).unwrap()).unwrap()
}

#[test]
fn old_value_gives_way_to_new() {
    let n = number();
    let start = n.render(100, "$412M", "$425M", 0.0);
    assert_eq!(start.children[1].opacity, 1.0);
    assert_eq!(start.children[2].opacity, 0.0);
    assert_eq!(start.children[0].opacity, 0.0);

    let end = n.render(100, "$412M", "$425M", 1.0);
    assert_eq!(end.children[1].opacity, 0.0);
    assert_eq!(end.children[2].opacity, 1.0);
    assert!((end.children[0].opacity - 0.3).abs() < 1e-9);
}

#[test]
fn strike_grows_across_the_old_value() {
    let n = number();
    let strike_w = |p: f64| match &n.render(100, "$412M", "$425M", p).children[1].children[1].kind {
        crate::scene::node::NodeKind::Rect { size, .. } => size.x,
        other => panic!("unexpected kind {other:?}"),
    };
    assert_eq!(strike_w(0.1), 0.0);
    assert!((strike_w(0.4) - 5.0 * 15.0 * 0.6).abs() < 1e-9);
}

#[test]
fn hidden_before_entrance() {
    assert_eq!(number().render(0, "a", "b", 0.5).opacity, 0.0);
}
