//! Small layout helpers the scenes share.

use crate::{
    foundation::core::Rgba8,
    scene::node::{Node, Stroke, Text},
    videos::palette,
};

/// Line box height used for vertical placement of text.
pub fn line_height(size_px: f64) -> f64 {
    size_px * 1.2
}

/// Same-size text runs laid left to right from the origin; returns the row and its width.
pub fn spans(parts: &[(&str, Rgba8)], size_px: f64, weight: u16) -> (Node, f64) {
    let mut row = Node::group();
    let mut x = 0.0;
    for (content, color) in parts {
        let text = Text::new(*content, size_px, *color).weight(weight);
        let w = text.approx_width();
        row = row.child(Node::from(text).at(x, 0.0));
        x += w;
    }
    (row, x)
}

/// Text runs centered horizontally on `cx` with their line box top at `y`.
pub fn centered_spans(parts: &[(&str, Rgba8)], size_px: f64, weight: u16, cx: f64, y: f64) -> Node {
    let (row, w) = spans(parts, size_px, weight);
    row.at(cx - w / 2.0, y)
}

/// Rounded badge around a label; origin is the badge's top-left corner.
#[derive(Clone, Debug)]
pub struct Pill {
    /// Badge node.
    pub node: Node,
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
}

impl Pill {
    /// Badge with `pad = (horizontal, vertical)` padding.
    pub fn new(label: Text, pad: (f64, f64), radius: f64, fill: Rgba8, border: Rgba8) -> Self {
        let width = label.approx_width() + pad.0 * 2.0;
        let height = line_height(label.size_px) + pad.1 * 2.0;
        let node = Node::group()
            .child(
                Node::rect(width, height)
                    .radius(radius)
                    .fill(fill)
                    .stroke(Stroke::new(1.0, border)),
            )
            .child(Node::from(Text { align: Default::default(), ..label }).at(pad.0, pad.1));
        Self {
            node,
            width,
            height,
        }
    }
}

/// Check mark drawn in a `size` x `size` box at the origin.
pub fn check_mark(size: f64, color: Rgba8, width: f64) -> Node {
    let k = size / 24.0;
    let stroke = Stroke::new(width, color);
    Node::group()
        .child(Node::line(5.0 * k, 5.0 * k, stroke).at(5.0 * k, 12.0 * k))
        .child(Node::line(9.0 * k, -10.0 * k, stroke).at(10.0 * k, 17.0 * k))
}

/// Drifting dots shared by the title scenes.
pub fn particle(x: f64, y: f64, size: f64, color: Rgba8, opacity: f64) -> Node {
    Node::circle(size / 2.0)
        .fill(color)
        .at(x + size / 2.0, y + size / 2.0)
        .opacity(opacity)
}

/// Square icon followed by a bold title over a muted caption, as used atop the data scenes.
///
/// `icon` is drawn in a `size` x `size` box at the origin and scaled by `icon_scale` about its
/// center.
pub fn icon_header(icon: Node, size: f64, icon_scale: f64, title: &str, caption: &str) -> Node {
    let text_x = size + 16.0;
    let block_h = line_height(28.0) + 4.0 + line_height(14.0);
    let text_y = (size - block_h) / 2.0;
    Node::group()
        .child(icon.scaled_about(icon_scale, size / 2.0, size / 2.0))
        .child(
            Node::from(Text::new(title, 28.0, palette::TEXT_PRIMARY).weight(700))
                .at(text_x, text_y),
        )
        .child(
            Node::from(Text::new(caption, 14.0, palette::TEXT_MUTED))
                .at(text_x, text_y + line_height(28.0) + 4.0),
        )
}

#[cfg(test)]
#[path = "../../tests/unit/videos/widgets.rs"]
mod tests;
