use super::*;
use crate::{
    foundation::core::{Canvas, Fps, Rgba8},
    render::sink::InMemorySink,
    scene::{SceneCtx, node::Node},
    timeline::{sequencer::Sequencer, window::TimelineWindow},
};

fn comp() -> Composition {
    let still = |_: &SceneCtx| Node::rect(8.0, 8.0).fill(Rgba8::rgb(255, 0, 0));
    let slide = |ctx: &SceneCtx| {
        Node::rect(4.0, 4.0)
            .fill(Rgba8::rgb(0, 255, 0))
            .at(ctx.frame as f64, 2.0)
    };
    let seq = Sequencer::new()
        .scene("still", TimelineWindow::new(0, 6).unwrap(), still)
        .scene("slide", TimelineWindow::new(6, 6).unwrap().with_premount(3), slide);
    Composition::new(
        "Pipeline",
        Canvas {
            width: 16,
            height: 8,
        },
        Fps::new(30, 1).unwrap(),
        12,
        seq,
    )
    .unwrap()
}

fn full(c: &Composition) -> FrameRange {
    FrameRange::new(FrameIndex(0), c.duration()).unwrap()
}

fn run(c: &Composition, threading: RenderThreading) -> (InMemorySink, RenderStats) {
    let mut backend = CpuPreviewBackend::new(RenderSettings::default());
    let mut sink = InMemorySink::new();
    let stats = render_frames(c, full(c), &mut backend, &threading, &mut sink).unwrap();
    (sink, stats)
}

#[test]
fn render_frame_matches_range_output() {
    let c = comp();
    let mut backend = CpuPreviewBackend::new(RenderSettings::default());
    let single = render_frame(&c, FrameIndex(8), &mut backend).unwrap();
    let (sink, _) = run(&c, RenderThreading::default());
    assert_eq!(sink.frames()[8].1, single);
}

#[test]
fn sequential_range_pushes_every_frame_in_order() {
    let c = comp();
    let (sink, stats) = run(
        &c,
        RenderThreading {
            chunk_size: 5,
            ..RenderThreading::default()
        },
    );
    let idx: Vec<_> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (0..12).collect::<Vec<_>>());
    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().composition, "Pipeline");
    assert_eq!(
        stats,
        RenderStats {
            frames_total: 12,
            frames_rendered: 12,
            frames_elided: 0,
        }
    );
}

#[test]
fn parallel_output_equals_sequential() {
    let c = comp();
    let (seq, _) = run(&c, RenderThreading::default());
    let (par, stats) = run(
        &c,
        RenderThreading {
            parallel: true,
            chunk_size: 4,
            threads: Some(3),
            static_frame_elision: false,
        },
    );
    assert_eq!(seq.frames(), par.frames());
    assert_eq!(stats.frames_rendered, 12);
}

#[test]
fn static_frames_are_elided_within_a_chunk() {
    let c = comp();
    let (plain, _) = run(&c, RenderThreading::default());
    for parallel in [false, true] {
        let (elided, stats) = run(
            &c,
            RenderThreading {
                parallel,
                chunk_size: 64,
                threads: Some(2),
                static_frame_elision: true,
            },
        );
        // frames 0..6 collapse to one render; 6..12 all differ
        assert_eq!(stats.frames_total, 12);
        assert_eq!(stats.frames_rendered, 7);
        assert_eq!(stats.frames_elided, 5);
        assert_eq!(elided.frames(), plain.frames());
    }
}

#[test]
fn eval_frames_parallel_matches_sequential() {
    let c = comp();
    let seq = eval_frames(&c, full(&c), &RenderThreading::default()).unwrap();
    let par = eval_frames(
        &c,
        full(&c),
        &RenderThreading {
            parallel: true,
            ..RenderThreading::default()
        },
    )
    .unwrap();
    assert_eq!(seq.len(), 12);
    assert_eq!(seq, par);
    assert_eq!(seq[4].premounted.len(), 1);
}

#[test]
fn invalid_ranges_and_pools_are_rejected() {
    let c = comp();
    let mut backend = CpuPreviewBackend::new(RenderSettings::default());
    let mut sink = InMemorySink::new();
    let t = RenderThreading::default();

    let empty = FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap();
    let err = render_frames(&c, empty, &mut backend, &t, &mut sink).unwrap_err();
    assert!(matches!(err, FramecastError::Validation(_)));

    let past = FrameRange::new(FrameIndex(0), FrameIndex(13)).unwrap();
    let err = render_frames(&c, past, &mut backend, &t, &mut sink).unwrap_err();
    assert!(matches!(err, FramecastError::Validation(_)));

    let zero = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    let err = render_frames(&c, full(&c), &mut backend, &zero, &mut sink).unwrap_err();
    assert!(matches!(err, FramecastError::Validation(_)));
    assert!(sink.config().is_none());
}

struct Opaque;

impl RenderBackend for Opaque {
    fn render_graph(&mut self, graph: &FrameGraph) -> FramecastResult<FrameRGBA> {
        Ok(FrameRGBA {
            width: graph.canvas.width,
            height: graph.canvas.height,
            data: vec![0; (graph.canvas.width * graph.canvas.height * 4) as usize],
            premultiplied: true,
        })
    }
}

#[test]
fn parallel_render_needs_replicable_backend() {
    let c = comp();
    let mut sink = InMemorySink::new();
    let t = RenderThreading {
        parallel: true,
        ..RenderThreading::default()
    };
    let err = render_frames(&c, full(&c), &mut Opaque, &t, &mut sink).unwrap_err();
    assert!(matches!(err, FramecastError::Render(_)));

    let stats = render_frames(
        &c,
        full(&c),
        &mut Opaque,
        &RenderThreading::default(),
        &mut sink,
    )
    .unwrap();
    assert_eq!(stats.frames_rendered, 12);
}
