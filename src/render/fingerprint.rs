use crate::{
    eval::evaluator::FrameGraph,
    foundation::error::{FramecastError, FramecastResult},
    foundation::math::Fnv1a64,
};

/// 128-bit digest of everything that affects a frame's pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

/// Fingerprint the drawable content of a frame graph.
///
/// Frame numbers are left out, so two frames whose visual trees are identical hash equal even when
/// they sit at different points on the timeline.
pub fn fingerprint_graph(graph: &FrameGraph) -> FramecastResult<FrameFingerprint> {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_u64_pair(&mut a, &mut b, u64::from(graph.canvas.width));
    write_u64_pair(&mut a, &mut b, u64::from(graph.canvas.height));
    write_u64_pair(&mut a, &mut b, graph.layers.len() as u64);
    for layer in &graph.layers {
        write_str_pair(&mut a, &mut b, &layer.scene_id);
        let root = serde_json::to_value(&layer.root).map_err(|e| {
            FramecastError::serde(format!(
                "failed to serialize layer '{}': {e}",
                layer.scene_id
            ))
        })?;
        write_json_value_pair(&mut a, &mut b, &root);
    }

    Ok(FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    })
}

fn write_json_value_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: &serde_json::Value) {
    match v {
        serde_json::Value::Null => write_u8_pair(a, b, 0),
        serde_json::Value::Bool(x) => {
            write_u8_pair(a, b, 1);
            write_u8_pair(a, b, u8::from(*x));
        }
        serde_json::Value::Number(n) => {
            write_u8_pair(a, b, 2);
            write_str_pair(a, b, &n.to_string());
        }
        serde_json::Value::String(s) => {
            write_u8_pair(a, b, 3);
            write_str_pair(a, b, s);
        }
        serde_json::Value::Array(items) => {
            write_u8_pair(a, b, 4);
            write_u64_pair(a, b, items.len() as u64);
            for item in items {
                write_json_value_pair(a, b, item);
            }
        }
        serde_json::Value::Object(map) => {
            write_u8_pair(a, b, 5);
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort();
            write_u64_pair(a, b, keys.len() as u64);
            for k in keys {
                write_str_pair(a, b, k);
                write_json_value_pair(a, b, &map[k]);
            }
        }
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_bytes(&[v]);
    b.write_bytes(&[v]);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
