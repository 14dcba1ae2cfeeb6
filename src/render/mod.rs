pub(crate) mod cpu;
pub(crate) mod fingerprint;
pub(crate) mod pipeline;
pub(crate) mod sink;

use std::path::Path;

use crate::{
    eval::evaluator::FrameGraph,
    foundation::error::{FramecastError, FramecastResult},
};

/// Rendered frame pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Copy of the pixels with straight (unpremultiplied) alpha.
    pub fn to_straight(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Turns an evaluated [`FrameGraph`] into pixels.
pub trait RenderBackend {
    /// Rasterize one frame graph.
    fn render_graph(&mut self, graph: &FrameGraph) -> FramecastResult<FrameRGBA>;

    /// Settings a fresh per-thread backend should be created with, if the backend can be
    /// replicated across rayon workers.
    fn worker_render_settings(&self) -> Option<RenderSettings> {
        None
    }
}

/// Preview rasterizer options.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Straight-alpha color the surface is cleared to before layers are drawn.
    pub clear_rgba: Option<[u8; 4]>,
    /// Draw text nodes as solid bars sized from their approximate advance width.
    pub text_placeholders: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_rgba: Some([5, 13, 24, 255]),
            text_placeholders: true,
        }
    }
}

impl RenderSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> FramecastResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| FramecastError::serde(format!("invalid render settings: {e}")))
    }

    /// Load settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> FramecastResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            FramecastError::Other(anyhow::Error::new(e).context(format!(
                "failed to read render settings '{}'",
                path.display()
            )))
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
