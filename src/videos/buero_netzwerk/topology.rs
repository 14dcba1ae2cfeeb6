use crate::{
    animation::{ease::Ease, interpolate::Interpolation, spring::Spring},
    foundation::core::Fps,
    foundation::error::FramecastResult,
    scene::{
        Scene, SceneCtx,
        motion::{bounce, entrance, fade_in, fade_out, mix, ramp, wave},
        node::{Node, Stroke, Text},
    },
    videos::{
        buero_netzwerk::data::{DEVICES, Device, LINKS, Link},
        palette,
        widgets::{centered_spans, line_height},
    },
};

const BOX: f64 = 56.0;
const STACK_GAP: f64 = 6.0;

/// Office network diagram: links grow out, devices pop in, then a legend.
#[derive(Clone, Debug)]
pub struct TopologyScene {
    fade_in: Interpolation,
    fade_out: Interpolation,
    title: Spring,
    link_grow: Interpolation,
    device: Spring,
    legend: Interpolation,
}

impl TopologyScene {
    /// Precompute curves for a `length`-frame window.
    pub fn new(fps: Fps, length: u64) -> FramecastResult<Self> {
        Ok(Self {
            fade_in: fade_in(15)?,
            fade_out: fade_out(length, 20)?,
            title: entrance(fps, 30)?,
            link_grow: ramp(0, 15, 0.0, 1.0, Ease::OutQuad)?,
            device: bounce(fps, 20)?,
            legend: ramp(60, 80, 0.0, 1.0, Ease::Linear)?,
        })
    }

    fn link(&self, l: &Link, f: i64) -> Node {
        let p = self.link_grow.at(f - l.delay);
        let mut stroke = Stroke::new(2.0, palette::ACCENT);
        if l.dashed {
            stroke = stroke.dashed(6.0, 4.0);
        }
        Node::line((l.x2 - l.x1) * p, (l.y2 - l.y1) * p, stroke)
            .at(l.x1, l.y1)
            .opacity(wave((f + l.delay) as f64 / 15.0, 0.3, 0.7))
    }

    fn device(&self, d: &Device, f: i64) -> Node {
        let scale = self.device.sample(f - d.delay);
        let pulse = ((f + d.delay) as f64 / 20.0).sin() * 0.15 + 0.85;
        let stack_h = BOX + STACK_GAP + line_height(14.0) + STACK_GAP + line_height(11.0);
        let top = -stack_h / 2.0;

        let tile = Node::group()
            .child(
                Node::rect(BOX, BOX)
                    .radius(14.0)
                    .fill(palette::with_hex_alpha(d.color, 0x15))
                    .stroke(Stroke::new(2.0, d.color)),
            )
            .child(
                Node::from(Text::new(d.icon, 26.0, palette::TEXT_PRIMARY).centered())
                    .at(BOX / 2.0, (BOX - line_height(26.0)) / 2.0),
            )
            .at(-BOX / 2.0, top)
            .opacity(pulse);
        let label_y = top + BOX + STACK_GAP;
        let label = Node::from(
            Text::new(d.label, 14.0, palette::TEXT_PRIMARY)
                .weight(700)
                .centered(),
        )
        .at(0.0, label_y);
        let sub = Node::from(Text::new(d.sub_label, 11.0, palette::TEXT_MUTED).centered())
            .at(0.0, label_y + line_height(14.0) + STACK_GAP);

        Node::group()
            .child(tile)
            .child(label)
            .child(sub)
            .at(d.x, d.y)
            .scaled_about(scale, 0.0, 0.0)
    }

    fn legend(&self, ctx: &SceneCtx) -> Node {
        let text_h = line_height(13.0);
        let y = f64::from(ctx.canvas.height) - 40.0 - text_h;
        let lan = Text::new("LAN (Kabel)", 13.0, palette::TEXT_MUTED);
        let wlan_x = 60.0 + 30.0 + 8.0 + lan.approx_width() + 24.0;
        Node::group()
            .child(Node::rect(30.0, 2.0).fill(palette::ACCENT).at(60.0, y + text_h / 2.0 - 1.0))
            .child(Node::from(lan).at(98.0, y))
            .child(
                Node::line(30.0, 0.0, Stroke::new(2.0, palette::ACCENT).dashed(6.0, 4.0))
                    .at(wlan_x, y + text_h / 2.0)
                    .opacity(0.5),
            )
            .child(Node::from(Text::new("WLAN", 13.0, palette::TEXT_MUTED)).at(wlan_x + 38.0, y))
            .opacity(self.legend.at(ctx.frame))
    }
}

impl Scene for TopologyScene {
    fn render(&self, ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let t = self.title.sample(f);
        let title = centered_spans(
            &[("Netzwerk", palette::TEXT_PRIMARY), ("topologie", palette::ACCENT)],
            32.0,
            700,
            ctx.canvas.center_x(),
            40.0 + mix(t, -20.0, 0.0),
        )
        .opacity(t);

        Node::group()
            .child(title)
            .children(LINKS.iter().map(|l| self.link(l, f)))
            .children(DEVICES.iter().map(|d| self.device(d, f)))
            .child(self.legend(ctx))
            .opacity(self.fade_in.at(f) * self.fade_out.at(f))
    }
}
