use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    eval::evaluator::{Evaluator, FrameGraph},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{FramecastError, FramecastResult},
    render::{
        FrameRGBA, RenderBackend, RenderSettings,
        cpu::CpuPreviewBackend,
        fingerprint::{FrameFingerprint, fingerprint_graph},
        sink::{FrameSink, SinkConfig},
    },
};

/// Evaluate and rasterize a single frame.
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
pub fn render_frame(
    comp: &Composition,
    frame: FrameIndex,
    backend: &mut dyn RenderBackend,
) -> FramecastResult<FrameRGBA> {
    let graph = Evaluator::eval_frame(comp, frame)?;
    backend.render_graph(&graph)
}

/// How range renders fan out across threads.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Spread each chunk across a rayon pool.
    pub parallel: bool,
    /// Frames evaluated and flushed to the sink per batch.
    pub chunk_size: usize,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Rasterize identical frame graphs within a chunk only once.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the requested range.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames reused from an identical earlier frame in the same chunk.
    pub frames_elided: u64,
}

/// Evaluate every frame of `range` into frame graphs, in timeline order.
///
/// With `threading.parallel` the frames are evaluated on a rayon pool; output is identical to the
/// sequential path.
#[tracing::instrument(skip(comp, threading), fields(comp = comp.id()))]
pub fn eval_frames(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> FramecastResult<Vec<FrameGraph>> {
    validate_range(comp, range)?;
    if !threading.parallel {
        return (range.start.0..range.end.0)
            .map(|f| Evaluator::eval_frame(comp, FrameIndex(f)))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| Evaluator::eval_frame(comp, FrameIndex(f)))
            .collect()
    })
}

/// Render `range` and stream the frames into `sink` in timeline order.
///
/// The range is processed in chunks of `threading.chunk_size`. Within a chunk, frames may be
/// rasterized in parallel (each rayon worker owns a backend built from
/// [`RenderBackend::worker_render_settings`]) and, when elision is enabled, frames whose graphs
/// fingerprint identically are rasterized once.
#[tracing::instrument(skip(comp, backend, threading, sink), fields(comp = comp.id()))]
pub fn render_frames(
    comp: &Composition,
    range: FrameRange,
    backend: &mut dyn RenderBackend,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> FramecastResult<RenderStats> {
    validate_range(comp, range)?;

    let mut parallel = None;
    if threading.parallel {
        let settings = backend.worker_render_settings().ok_or_else(|| {
            FramecastError::render("parallel render requires a backend with worker settings")
        })?;
        parallel = Some((build_thread_pool(threading.threads)?, settings));
    }

    let canvas = comp.canvas();
    sink.begin(SinkConfig {
        composition: comp.id().to_string(),
        width: canvas.width,
        height: canvas.height,
        fps: comp.fps(),
    })?;

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))?;

        let (frames, chunk_stats) = match &parallel {
            Some((pool, settings)) => {
                render_chunk_parallel(comp, chunk, threading, pool, settings)?
            }
            None => render_chunk_sequential(comp, chunk, threading, backend)?,
        };
        for (offset, frame) in frames.iter().enumerate() {
            sink.push_frame(FrameIndex(chunk_start + offset as u64), frame)?;
        }

        stats.frames_total += chunk_stats.frames_total;
        stats.frames_rendered += chunk_stats.frames_rendered;
        stats.frames_elided += chunk_stats.frames_elided;
        tracing::debug!(
            start = chunk_start,
            end = chunk_end,
            rendered = chunk_stats.frames_rendered,
            elided = chunk_stats.frames_elided,
            "chunk done"
        );
        chunk_start = chunk_end;
    }

    sink.end()?;
    Ok(stats)
}

struct ChunkPlan {
    graphs: Vec<FrameGraph>,
    unique: Vec<usize>,
    frame_to_unique: Vec<usize>,
}

fn plan_chunk(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> FramecastResult<ChunkPlan> {
    let mut graphs = Vec::with_capacity(range.len_frames() as usize);
    for f in range.start.0..range.end.0 {
        graphs.push(Evaluator::eval_frame(comp, FrameIndex(f))?);
    }

    let mut unique = Vec::<usize>::with_capacity(graphs.len());
    let mut frame_to_unique = Vec::<usize>::with_capacity(graphs.len());
    if threading.static_frame_elision {
        let mut first = HashMap::<FrameFingerprint, usize>::new();
        for (idx, graph) in graphs.iter().enumerate() {
            let fp = fingerprint_graph(graph)?;
            if let Some(existing) = first.get(&fp).copied() {
                frame_to_unique.push(existing);
            } else {
                let slot = unique.len();
                unique.push(idx);
                first.insert(fp, slot);
                frame_to_unique.push(slot);
            }
        }
    } else {
        for idx in 0..graphs.len() {
            frame_to_unique.push(idx);
            unique.push(idx);
        }
    }

    Ok(ChunkPlan {
        graphs,
        unique,
        frame_to_unique,
    })
}

fn render_chunk_sequential(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
    backend: &mut dyn RenderBackend,
) -> FramecastResult<(Vec<FrameRGBA>, RenderStats)> {
    let plan = plan_chunk(comp, range, threading)?;
    let mut rendered = Vec::with_capacity(plan.unique.len());
    for &idx in &plan.unique {
        rendered.push(backend.render_graph(&plan.graphs[idx])?);
    }
    expand_unique(rendered, &plan.frame_to_unique)
}

fn render_chunk_parallel(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
    pool: &rayon::ThreadPool,
    settings: &RenderSettings,
) -> FramecastResult<(Vec<FrameRGBA>, RenderStats)> {
    let plan = plan_chunk(comp, range, threading)?;
    let rendered = pool.install(|| {
        plan.unique
            .par_iter()
            .map_init(
                || CpuPreviewBackend::new(settings.clone()),
                |worker, &idx| worker.render_graph(&plan.graphs[idx]),
            )
            .collect::<FramecastResult<Vec<_>>>()
    })?;
    expand_unique(rendered, &plan.frame_to_unique)
}

fn expand_unique(
    rendered: Vec<FrameRGBA>,
    frame_to_unique: &[usize],
) -> FramecastResult<(Vec<FrameRGBA>, RenderStats)> {
    let rendered_count = rendered.len() as u64;
    let mut unique_frames = rendered.into_iter().map(Some).collect::<Vec<_>>();

    let mut remaining = vec![0usize; unique_frames.len()];
    for &u in frame_to_unique {
        remaining[u] += 1;
    }

    let mut out = Vec::<FrameRGBA>::with_capacity(frame_to_unique.len());
    for &u in frame_to_unique {
        let frame = if remaining[u] == 1 {
            unique_frames[u].take()
        } else {
            unique_frames[u].clone()
        };
        out.push(frame.ok_or_else(|| {
            FramecastError::render("internal error: unique frame missing")
        })?);
        remaining[u] -= 1;
    }

    let total = out.len() as u64;
    Ok((
        out,
        RenderStats {
            frames_total: total,
            frames_rendered: rendered_count,
            frames_elided: total.saturating_sub(rendered_count),
        },
    ))
}

fn validate_range(comp: &Composition, range: FrameRange) -> FramecastResult<()> {
    if range.is_empty() {
        return Err(FramecastError::validation("render range must be non-empty"));
    }
    if range.end.0 > comp.duration().0 {
        return Err(FramecastError::validation(format!(
            "render range end {} exceeds '{}' duration {}",
            range.end.0,
            comp.id(),
            comp.duration().0
        )));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> FramecastResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(FramecastError::validation("render threading 'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FramecastError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
