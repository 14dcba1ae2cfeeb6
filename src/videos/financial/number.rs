use crate::{
    animation::{interpolate::Interpolation, spring::Spring},
    foundation::core::Fps,
    foundation::error::FramecastResult,
    scene::{
        motion::entrance,
        node::{Node, Text},
    },
    videos::{palette, widgets::line_height},
};

const MIN_W: f64 = 90.0;
const BOX_H: f64 = 36.0;
const FONT: f64 = 15.0;

/// Figure that strikes out the wrong value and swaps in the verified one as `progress` goes 0 to 1.
#[derive(Clone, Debug)]
pub struct AnimatedNumber {
    entrance: Spring,
    old_opacity: Interpolation,
    new_opacity: Interpolation,
    old_scale: Interpolation,
    new_scale: Interpolation,
    glow: Interpolation,
    strike: Interpolation,
}

impl AnimatedNumber {
    /// Precompute curves at `fps`.
    pub fn new(fps: Fps) -> FramecastResult<Self> {
        Ok(Self {
            entrance: entrance(fps, 20)?,
            old_opacity: Interpolation::clamped([0.0, 0.3, 0.5], [1.0, 1.0, 0.0])?,
            new_opacity: Interpolation::clamped([0.5, 0.7, 1.0], [0.0, 1.0, 1.0])?,
            old_scale: Interpolation::clamped([0.3, 0.5], [1.0, 0.8])?,
            new_scale: Interpolation::clamped([0.5, 0.7], [1.15, 1.0])?,
            glow: Interpolation::clamped([0.5, 0.7, 1.0], [0.0, 1.0, 0.3])?,
            strike: Interpolation::clamped([0.15, 0.4], [0.0, 100.0])?,
        })
    }

    /// Centered horizontally on the origin, top edge at `y = 0`.
    pub fn render(&self, frame: i64, old: &str, new: &str, progress: f64) -> Node {
        let old_text = Text::new(old, FONT, palette::ERROR).weight(600).mono().centered();
        let new_text = Text::new(new, FONT, palette::SUCCESS).weight(700).mono().centered();
        let w = MIN_W.max(old_text.approx_width()).max(new_text.approx_width());
        let text_y = (BOX_H - line_height(FONT)) / 2.0;
        let mid = BOX_H / 2.0;

        let glow = self.glow.sample(progress);
        let halo = Node::rect(w + 12.0, BOX_H + 12.0)
            .radius(6.0)
            .fill(palette::SUCCESS.with_alpha(0.1 * glow))
            .at(-w / 2.0 - 6.0, -6.0)
            .opacity(glow);

        let old_w = old_text.approx_width();
        let strike_w = old_w * self.strike.sample(progress) / 100.0;
        let crossed = Node::group()
            .child(Node::from(old_text).at(0.0, text_y))
            .child(
                Node::rect(strike_w, 2.0)
                    .fill(palette::ERROR)
                    .at(-old_w / 2.0, mid - 1.0),
            )
            .scaled_about(self.old_scale.sample(progress), 0.0, mid)
            .opacity(self.old_opacity.sample(progress));

        let verified = Node::from(new_text)
            .at(0.0, text_y)
            .scaled_about(self.new_scale.sample(progress), 0.0, mid - text_y)
            .opacity(self.new_opacity.sample(progress));

        Node::group()
            .child(halo)
            .child(crossed)
            .child(verified)
            .opacity(self.entrance.sample(frame))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/videos/financial/number.rs"]
mod tests;
