//! Framecast is a frame-driven animation timeline engine for explainer videos.
//!
//! Every visual property is a pure function of the frame counter:
//!
//! - [`Interpolation`] and [`Spring`] turn frame numbers into animated values
//! - a [`Sequencer`] places [`Scene`]s on [`TimelineWindow`]s with optional premount
//! - a [`Composition`] binds a sequencer to a canvas, frame rate, and duration, and the
//!   [`CompositionRegistry`] names them
//! - the [`Evaluator`] turns `(composition, frame)` into a serializable [`FrameGraph`]
//! - [`render_frames`] streams a range through a [`RenderBackend`] into a [`FrameSink`]
//!
//! Two complete videos ship in [`videos`] and are registered by [`default_registry`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod composition;
pub(crate) mod eval;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod timeline;
pub mod videos;

pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Transform2D, Vec2,
};
pub use crate::foundation::error::{FramecastError, FramecastResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{
    Extrapolate, InterpolateOptions, Interpolation, interpolate,
};
pub use crate::animation::spring::{
    SETTLE_THRESHOLD, Spring, SpringConfig, SpringOptions, measure_spring, spring,
};
pub use crate::composition::model::{Composition, CompositionInfo};
pub use crate::composition::registry::{CompositionRegistry, default_registry};
pub use crate::eval::evaluator::{
    BACKGROUND_ID, EvaluatedLayer, Evaluator, FrameGraph, PremountedScene,
};
pub use crate::render::cpu::CpuPreviewBackend;
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, eval_frames, render_frame, render_frames,
};
pub use crate::render::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::render::{FrameRGBA, RenderBackend, RenderSettings};
pub use crate::scene::motion;
pub use crate::scene::node::{GradientStop, Node, NodeKind, Paint, Stroke, Text, TextAlign};
pub use crate::scene::{Scene, SceneCtx};
pub use crate::timeline::sequencer::{ActiveSlot, SceneSlot, Sequencer};
pub use crate::timeline::window::{TimelineWindow, WindowPhase};
