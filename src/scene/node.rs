use crate::foundation::core::{Point, Rgba8, Transform2D, Vec2};

/// Color stop inside a gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    /// Straight-alpha color at `offset`.
    pub color: Rgba8,
}

/// Fill description for shapes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Rgba8,
    },
    /// Linear gradient between two points in local space.
    Linear {
        /// Gradient start.
        start: Point,
        /// Gradient end.
        end: Point,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
    /// Radial gradient in local space.
    Radial {
        /// Gradient center.
        center: Point,
        /// Radius where the last stop is reached.
        radius: f64,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
}

impl From<Rgba8> for Paint {
    fn from(color: Rgba8) -> Self {
        Self::Solid { color }
    }
}

impl Paint {
    /// Horizontal `transparent -> color -> transparent` fade across `width`.
    pub fn edge_fade(width: f64, color: Rgba8) -> Self {
        Self::fade_through(Point::new(0.0, 0.0), Point::new(width, 0.0), color)
    }

    /// `transparent -> color -> transparent` from `start` to `end`.
    pub fn fade_through(start: Point, end: Point, color: Rgba8) -> Self {
        Self::Linear {
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: Rgba8::TRANSPARENT,
                },
                GradientStop { offset: 0.5, color },
                GradientStop {
                    offset: 1.0,
                    color: Rgba8::TRANSPARENT,
                },
            ],
        }
    }

    /// Two-stop linear gradient.
    pub fn linear(start: Point, end: Point, from: Rgba8, to: Rgba8) -> Self {
        Self::Linear {
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    /// Alpha-weighted mean color of the paint.
    pub fn average(&self) -> Rgba8 {
        let stops = match self {
            Self::Solid { color } => return *color,
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => stops,
        };
        if stops.is_empty() {
            return Rgba8::TRANSPARENT;
        }

        let (mut r, mut g, mut b, mut a) = (0.0, 0.0, 0.0, 0.0);
        for s in stops {
            let w = f64::from(s.color.a);
            r += f64::from(s.color.r) * w;
            g += f64::from(s.color.g) * w;
            b += f64::from(s.color.b) * w;
            a += w;
        }
        if a == 0.0 {
            return Rgba8::TRANSPARENT;
        }
        let channel = |sum: f64| (sum / a).round().clamp(0.0, 255.0) as u8;
        Rgba8::rgba(
            channel(r),
            channel(g),
            channel(b),
            (a / stops.len() as f64).round() as u8,
        )
    }
}

/// Outline description.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    /// Line width in pixels.
    pub width: f64,
    /// Straight-alpha color.
    pub color: Rgba8,
    /// Optional `[on, off]` dash pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    /// Solid stroke.
    pub fn new(width: f64, color: Rgba8) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }

    /// Same stroke with an `[on, off]` dash pattern.
    pub fn dashed(self, on: f64, off: f64) -> Self {
        Self {
            dash: Some([on, off]),
            ..self
        }
    }
}

/// Horizontal placement of text relative to the node origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Origin is the left edge.
    #[default]
    Start,
    /// Origin is the horizontal center.
    Center,
    /// Origin is the right edge.
    End,
}

/// A single line of styled text; the node origin sits on the top edge of the line box.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Text {
    /// Displayed string.
    pub content: String,
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS-style weight (100..=900).
    pub weight: u16,
    /// Straight-alpha color.
    pub color: Rgba8,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Monospace face.
    pub mono: bool,
}

impl Text {
    /// Regular-weight text.
    pub fn new(content: impl Into<String>, size_px: f64, color: Rgba8) -> Self {
        Self {
            content: content.into(),
            size_px,
            weight: 400,
            color,
            align: TextAlign::Start,
            mono: false,
        }
    }

    /// Set the weight.
    pub fn weight(self, weight: u16) -> Self {
        Self { weight, ..self }
    }

    /// Center on the node origin.
    pub fn centered(self) -> Self {
        Self {
            align: TextAlign::Center,
            ..self
        }
    }

    /// Right-align on the node origin.
    pub fn end_aligned(self) -> Self {
        Self {
            align: TextAlign::End,
            ..self
        }
    }

    /// Use the monospace face.
    pub fn mono(self) -> Self {
        Self { mono: true, ..self }
    }

    /// Rough advance width without font metrics.
    pub fn approx_width(&self) -> f64 {
        let per_char = if self.mono { 0.6 } else { 0.55 };
        self.content.chars().count() as f64 * self.size_px * per_char
    }

    /// Offset of the left edge from the node origin.
    pub fn left_offset(&self) -> f64 {
        match self.align {
            TextAlign::Start => 0.0,
            TextAlign::Center => -self.approx_width() / 2.0,
            TextAlign::End => -self.approx_width(),
        }
    }
}

/// What a [`Node`] draws.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Draws nothing; only carries transform, opacity, and children.
    Group,
    /// Axis-aligned box from the origin to `size`.
    Rect {
        /// Width and height.
        size: Vec2,
        /// Corner radius.
        radius: f64,
        /// Interior paint.
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Paint>,
        /// Outline.
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    /// Ellipse centered on the origin.
    Ellipse {
        /// Horizontal and vertical radii.
        radii: Vec2,
        /// Interior paint.
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Paint>,
        /// Outline.
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    /// Segment from the origin to `to`.
    Line {
        /// End point in local space.
        to: Vec2,
        /// Line style.
        stroke: Stroke,
    },
    /// Single line of text.
    Text(Text),
}

/// Element of a scene's visual tree.
///
/// Scenes rebuild their tree from scratch every frame; nothing here is mutated after a render
/// returns, so trees can be compared, hashed through their JSON form, and sent across threads.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    /// What this node draws.
    pub kind: NodeKind,
    /// Placement relative to the parent.
    #[serde(skip_serializing_if = "Transform2D::is_identity")]
    pub transform: Transform2D,
    /// Opacity in `[0, 1]`, multiplied into descendants.
    pub opacity: f64,
    /// Children painted after this node, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::new(NodeKind::Text(text))
    }
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            transform: Transform2D::default(),
            opacity: 1.0,
            children: Vec::new(),
        }
    }

    /// Empty container.
    pub fn group() -> Self {
        Self::new(NodeKind::Group)
    }

    /// Unfilled box of `width` x `height`.
    pub fn rect(width: f64, height: f64) -> Self {
        Self::new(NodeKind::Rect {
            size: Vec2::new(width, height),
            radius: 0.0,
            fill: None,
            stroke: None,
        })
    }

    /// Unfilled ellipse centered on the origin.
    pub fn ellipse(rx: f64, ry: f64) -> Self {
        Self::new(NodeKind::Ellipse {
            radii: Vec2::new(rx, ry),
            fill: None,
            stroke: None,
        })
    }

    /// Unfilled circle centered on the origin.
    pub fn circle(r: f64) -> Self {
        Self::ellipse(r, r)
    }

    /// Segment from the origin to `(dx, dy)`.
    pub fn line(dx: f64, dy: f64, stroke: Stroke) -> Self {
        Self::new(NodeKind::Line {
            to: Vec2::new(dx, dy),
            stroke,
        })
    }

    /// Set the interior paint of a rect or ellipse.
    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        match &mut self.kind {
            NodeKind::Rect { fill, .. } | NodeKind::Ellipse { fill, .. } => {
                *fill = Some(paint.into());
            }
            _ => {}
        }
        self
    }

    /// Set the outline of a rect or ellipse.
    pub fn stroke(mut self, s: Stroke) -> Self {
        match &mut self.kind {
            NodeKind::Rect { stroke, .. } | NodeKind::Ellipse { stroke, .. } => *stroke = Some(s),
            _ => {}
        }
        self
    }

    /// Set the corner radius of a rect.
    pub fn radius(mut self, r: f64) -> Self {
        if let NodeKind::Rect { radius, .. } = &mut self.kind {
            *radius = r;
        }
        self
    }

    /// Place the node at `(x, y)` in its parent.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.transform.translate = Vec2::new(x, y);
        self
    }

    /// Shift the node by `(dx, dy)`.
    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.transform.translate += Vec2::new(dx, dy);
        self
    }

    /// Uniform scale about the local point `(ax, ay)`.
    pub fn scaled_about(mut self, s: f64, ax: f64, ay: f64) -> Self {
        self.transform.scale = Vec2::new(s, s);
        self.transform.anchor = Vec2::new(ax, ay);
        self
    }

    /// Rotate by `rad` about the current anchor.
    pub fn rotated(mut self, rad: f64) -> Self {
        self.transform.rotation_rad = rad;
        self
    }

    /// Multiply opacity by `o`, clamped to `[0, 1]`; NaN hides the node.
    pub fn opacity(mut self, o: f64) -> Self {
        let o = if o.is_nan() { 0.0 } else { o };
        self.opacity = (self.opacity * o).clamp(0.0, 1.0);
        self
    }

    /// Append one child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Depth-first pre-order visit.
    pub fn walk(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    /// Number of nodes in this subtree.
    pub fn count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_| n += 1);
        n
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
