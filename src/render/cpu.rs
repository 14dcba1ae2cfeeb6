use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape;

use crate::{
    eval::evaluator::FrameGraph,
    foundation::core::{Affine, Point, Rect, Rgba8},
    foundation::error::{FramecastError, FramecastResult},
    render::{FrameRGBA, RenderBackend, RenderSettings},
    scene::node::{GradientStop, Node, NodeKind, Paint, Stroke},
};

const TOLERANCE: f64 = 0.1;
const MAX_GRADIENT_SIDE: f64 = 4096.0;
const GRADIENT_CACHE_CAPACITY: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    paint: String,
    w: u16,
    h: u16,
}

/// Coarse preview rasterizer built on `vello_cpu`.
///
/// Shapes, strokes, and gradients are drawn faithfully; text is reduced to placeholder bars since
/// no fonts are loaded.
pub struct CpuPreviewBackend {
    settings: RenderSettings,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
}

impl CpuPreviewBackend {
    /// Backend with the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            gradient_cache: HashMap::new(),
        }
    }

    fn draw_node(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        node: &Node,
        parent: Affine,
    ) -> FramecastResult<()> {
        let opacity = node.opacity;
        if opacity.is_nan() || opacity <= 0.0 {
            return Ok(());
        }
        let layered = opacity < 1.0;
        if layered {
            ctx.push_opacity_layer(opacity as f32);
        }
        let drawn = self.draw_node_contents(ctx, node, parent * node.transform.to_affine());
        if layered {
            ctx.pop_layer();
        }
        drawn
    }

    /// Draw `node` and its subtree; opacity has already been applied by the caller's layer.
    fn draw_node_contents(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        node: &Node,
        tr: Affine,
    ) -> FramecastResult<()> {
        match &node.kind {
            NodeKind::Group => {}
            NodeKind::Rect {
                size,
                radius,
                fill,
                stroke,
            } => {
                if size.x > 0.0 && size.y > 0.0 {
                    let bounds = Rect::new(0.0, 0.0, size.x, size.y);
                    let r = radius.clamp(0.0, size.x.min(size.y) / 2.0);
                    let path = kurbo::RoundedRect::from_rect(bounds, r).to_path(TOLERANCE);
                    self.draw_shape(ctx, &path, bounds, fill.as_ref(), stroke.as_ref(), tr)?;
                }
            }
            NodeKind::Ellipse {
                radii,
                fill,
                stroke,
            } => {
                if radii.x > 0.0 && radii.y > 0.0 {
                    let bounds = Rect::new(-radii.x, -radii.y, radii.x, radii.y);
                    let path = kurbo::Ellipse::new(Point::ORIGIN, *radii, 0.0).to_path(TOLERANCE);
                    self.draw_shape(ctx, &path, bounds, fill.as_ref(), stroke.as_ref(), tr)?;
                }
            }
            NodeKind::Line { to, stroke } => {
                let path = kurbo::Line::new(Point::ORIGIN, to.to_point()).to_path(TOLERANCE);
                stroke_path(ctx, &path, stroke, tr);
            }
            NodeKind::Text(text) => {
                if self.settings.text_placeholders && text.color.a > 0 {
                    let h = text.size_px * 0.6;
                    let bar = Rect::new(0.0, 0.0, text.approx_width(), h)
                        .with_origin((text.left_offset(), text.size_px * 0.3));
                    let path = kurbo::RoundedRect::from_rect(bar, h * 0.25).to_path(TOLERANCE);
                    fill_solid(ctx, &path, text.color.fade(0.55), tr);
                }
            }
        }

        for child in &node.children {
            self.draw_node(ctx, child, tr)?;
        }
        Ok(())
    }

    fn draw_shape(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        path: &kurbo::BezPath,
        bounds: Rect,
        fill: Option<&Paint>,
        stroke: Option<&Stroke>,
        tr: Affine,
    ) -> FramecastResult<()> {
        match fill {
            Some(Paint::Solid { color }) => fill_solid(ctx, path, *color, tr),
            Some(gradient) => match self.gradient_paint(gradient, bounds)? {
                Some(img) => {
                    ctx.set_transform(affine_to_cpu(tr));
                    ctx.set_paint(img);
                    ctx.set_paint_transform(vello_cpu::kurbo::Affine::translate((
                        bounds.x0, bounds.y0,
                    )));
                    ctx.fill_path(&bezpath_to_cpu(path));
                }
                None => fill_solid(ctx, path, gradient.average(), tr),
            },
            None => {}
        }
        if let Some(stroke) = stroke {
            stroke_path(ctx, path, stroke, tr);
        }
        Ok(())
    }

    /// Gradient rasterized over `bounds`, or `None` when the box is too large to bake.
    fn gradient_paint(
        &mut self,
        paint: &Paint,
        bounds: Rect,
    ) -> FramecastResult<Option<vello_cpu::Image>> {
        let (bw, bh) = (bounds.width().ceil(), bounds.height().ceil());
        if !(1.0..=MAX_GRADIENT_SIDE).contains(&bw) || !(1.0..=MAX_GRADIENT_SIDE).contains(&bh) {
            return Ok(None);
        }
        let (w, h) = (bw as u16, bh as u16);
        let key = GradientKey {
            paint: serde_json::to_string(paint)
                .map_err(|e| FramecastError::serde(format!("failed to key gradient: {e}")))?,
            w,
            h,
        };
        if let Some(img) = self.gradient_cache.get(&key) {
            return Ok(Some(img.clone()));
        }

        let mut pixels = Vec::with_capacity(usize::from(w) * usize::from(h));
        let mut may_have_opacities = false;
        for y in 0..h {
            for x in 0..w {
                let p = Point::new(
                    bounds.x0 + f64::from(x) + 0.5,
                    bounds.y0 + f64::from(y) + 0.5,
                );
                let [r, g, b, a] = sample_gradient(paint, p).to_premul();
                may_have_opacities |= a != 255;
                pixels.push(vello_cpu::peniko::color::PremulRgba8 { r, g, b, a });
            }
        }
        let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
        let img = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        if self.gradient_cache.len() >= GRADIENT_CACHE_CAPACITY {
            self.gradient_cache.clear();
        }
        self.gradient_cache.insert(key, img.clone());
        Ok(Some(img))
    }
}

impl RenderBackend for CpuPreviewBackend {
    #[tracing::instrument(skip_all, fields(frame = graph.frame.0))]
    fn render_graph(&mut self, graph: &FrameGraph) -> FramecastResult<FrameRGBA> {
        let w: u16 = graph
            .canvas
            .width
            .try_into()
            .map_err(|_| FramecastError::render("canvas width exceeds u16"))?;
        let h: u16 = graph
            .canvas
            .height
            .try_into()
            .map_err(|_| FramecastError::render("canvas height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));
        }
        for layer in &graph.layers {
            self.draw_node(&mut ctx, &layer.root, Affine::IDENTITY)?;
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: graph.canvas.width,
            height: graph.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn worker_render_settings(&self) -> Option<RenderSettings> {
        Some(self.settings.clone())
    }
}

fn fill_solid(ctx: &mut vello_cpu::RenderContext, path: &kurbo::BezPath, color: Rgba8, tr: Affine) {
    if color.a == 0 {
        return;
    }
    ctx.set_transform(affine_to_cpu(tr));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(color));
    ctx.fill_path(&bezpath_to_cpu(path));
}

fn stroke_path(
    ctx: &mut vello_cpu::RenderContext,
    path: &kurbo::BezPath,
    stroke: &Stroke,
    tr: Affine,
) {
    if stroke.width.is_nan() || stroke.width <= 0.0 {
        return;
    }
    let mut style = kurbo::Stroke::new(stroke.width);
    if let Some([on, off]) = stroke.dash
        && on > 0.0
        && off >= 0.0
    {
        style = style.with_dashes(0.0, [on, off]);
    }
    let outline = kurbo::stroke(path.iter(), &style, &kurbo::StrokeOpts::default(), TOLERANCE);
    fill_solid(ctx, &outline, stroke.color, tr);
}

/// Color of `paint` at local point `p`.
pub(crate) fn sample_gradient(paint: &Paint, p: Point) -> Rgba8 {
    let (t, stops) = match paint {
        Paint::Solid { color } => return *color,
        Paint::Linear { start, end, stops } => {
            let d = *end - *start;
            let len2 = d.hypot2();
            let t = if len2 > 0.0 {
                (p - *start).dot(d) / len2
            } else {
                0.0
            };
            (t, stops)
        }
        Paint::Radial {
            center,
            radius,
            stops,
        } => {
            let t = if *radius > 0.0 {
                (p - *center).hypot() / radius
            } else {
                1.0
            };
            (t, stops)
        }
    };
    sample_stops(stops, t)
}

fn sample_stops(stops: &[GradientStop], t: f64) -> Rgba8 {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba8::TRANSPARENT;
    };
    let t = if t.is_nan() { 0.0 } else { t };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let u = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
            let lerp = |x: u8, y: u8| -> u8 {
                (f64::from(x) + (f64::from(y) - f64::from(x)) * u)
                    .round()
                    .clamp(0.0, 255.0) as u8
            };
            return Rgba8::rgba(
                lerp(a.color.r, b.color.r),
                lerp(a.color.g, b.color.g),
                lerp(a.color.b, b.color.b),
                lerp(a.color.a, b.color.a),
            );
        }
    }
    last.color
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
