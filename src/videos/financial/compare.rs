use crate::{
    animation::{ease::Ease, interpolate::Interpolation, spring::Spring},
    foundation::core::{Fps, Rect},
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{entrance, fade_in, fade_out, mix, ramp},
        node::{Node, Stroke},
    },
    videos::{
        financial::comparison::ComparisonView,
        palette,
        widgets::{line_height, spans},
    },
};

const PAD: (f64, f64) = (40.0, 30.0);
const GLYPH: f64 = 32.0;

/// Both sources side by side while matching and mismatching cells light up.
#[derive(Clone, Debug)]
pub struct CompareScene {
    fade_in: Interpolation,
    fade_out: Interpolation,
    header: Spring,
    reveal: Interpolation,
    view: ComparisonView,
}

impl CompareScene {
    /// Precompute curves for a `length`-frame window.
    pub fn new(fps: Fps, length: u64) -> FramecastResult<Self> {
        Ok(Self {
            fade_in: fade_in(15)?,
            fade_out: fade_out(length, 30)?,
            header: entrance(fps, 24)?,
            reveal: ramp(90, 420, 0.0, 1.0, Ease::InOutQuad)?,
            view: ComparisonView::new(fps)?,
        })
    }

    /// Share of value cells compared at local frame `f`.
    pub fn reveal_progress(&self, f: i64) -> f64 {
        self.reveal.at(f)
    }
}

/// Two columns joined by a bar, 24 units wide.
fn columns_glyph(size: f64) -> Node {
    let k = size / 24.0;
    let stroke = Stroke::new(1.5, palette::ACCENT);
    Node::group()
        .child(Node::rect(8.0 * k, 18.0 * k).radius(k).stroke(stroke).at(2.0 * k, 3.0 * k))
        .child(Node::rect(8.0 * k, 18.0 * k).radius(k).stroke(stroke).at(14.0 * k, 3.0 * k))
        .child(Node::line(4.0 * k, 0.0, stroke).at(10.0 * k, 12.0 * k))
}

impl Scene for CompareScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let (w, h) = (f64::from(ctx.canvas.width), f64::from(ctx.canvas.height));

        let e = self.header.sample(f);
        let (title, title_w) = spans(
            &[("Direkter ", palette::TEXT_PRIMARY), ("Vergleich", palette::ACCENT)],
            30.0,
            700,
        );
        let header_h = line_height(30.0).max(GLYPH);
        let row_w = GLYPH + 16.0 + title_w;
        let header = Node::group()
            .child(columns_glyph(GLYPH).at(0.0, (header_h - GLYPH) / 2.0))
            .child(title.at(GLYPH + 16.0, (header_h - line_height(30.0)) / 2.0))
            .at(w / 2.0 - row_w / 2.0, PAD.1 + mix(e, -20.0, 0.0))
            .opacity(e);

        let area = Rect::new(PAD.0, PAD.1 + header_h + 16.0, w - PAD.0, h - PAD.1);
        let view = self.view.render(f, area, self.reveal_progress(f));

        Node::group()
            .child(header)
            .child(view)
            .opacity(self.fade_in.at(f) * self.fade_out.at(f))
    }
}
