use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "framecast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the registered compositions as JSON.
    List,
    /// Print the scene windows of a composition.
    Timeline(TimelineArgs),
    /// Evaluate one frame; dump its graph as JSON and/or a preview PNG.
    Frame(FrameArgs),
    /// Render a frame range to a directory of PNGs.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Write the frame graph JSON here instead of stdout.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write a preview PNG.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Render settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,

    /// Render frames on a rayon pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Render identical frames once per chunk.
    #[arg(long)]
    static_frame_elision: bool,

    /// Render settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = framecast::default_registry().context("build composition registry")?;
    match cli.cmd {
        Command::List => cmd_list(&registry),
        Command::Timeline(args) => cmd_timeline(&registry, args),
        Command::Frame(args) => cmd_frame(&registry, args),
        Command::Render(args) => cmd_render(&registry, args),
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<framecast::RenderSettings> {
    match path {
        Some(p) => framecast::RenderSettings::from_path(p)
            .with_context(|| format!("load settings '{}'", p.display())),
        None => Ok(framecast::RenderSettings::default()),
    }
}

fn cmd_list(registry: &framecast::CompositionRegistry) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&registry.list()).context("serialize registry")?;
    println!("{json}");
    Ok(())
}

fn cmd_timeline(
    registry: &framecast::CompositionRegistry,
    args: TimelineArgs,
) -> anyhow::Result<()> {
    let comp = registry.require(&args.comp)?;
    let info = comp.info();
    println!(
        "{} {}x{} @ {} fps, {} frames",
        info.id,
        info.width,
        info.height,
        info.fps.as_f64(),
        info.duration_in_frames
    );
    println!(
        "{:<16} {:>5} {:>6} {:>6} {:>6} {:>6} {:>8}",
        "scene", "layer", "mount", "start", "end", "length", "premount"
    );
    for slot in comp.sequencer().slots() {
        let w = slot.window;
        println!(
            "{:<16} {:>5} {:>6} {:>6} {:>6} {:>6} {:>8}",
            slot.id,
            slot.layer,
            w.mount_start().0,
            w.start.0,
            w.end().0,
            w.length,
            w.premount
        );
    }
    for gap in comp.sequencer().gaps(info.duration_in_frames) {
        println!("gap {}..{}", gap.start.0, gap.end.0);
    }
    Ok(())
}

fn cmd_frame(registry: &framecast::CompositionRegistry, args: FrameArgs) -> anyhow::Result<()> {
    let comp = registry.require(&args.comp)?;
    let graph = framecast::Evaluator::eval_frame(comp, framecast::FrameIndex(args.frame))?;

    match &args.json {
        Some(path) => {
            create_parent_dir(path)?;
            let f = std::fs::File::create(path)
                .with_context(|| format!("create json '{}'", path.display()))?;
            serde_json::to_writer_pretty(f, &graph)
                .with_context(|| format!("write json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None if args.png.is_none() => {
            let json = serde_json::to_string_pretty(&graph).context("serialize frame graph")?;
            println!("{json}");
        }
        None => {}
    }

    if let Some(path) = &args.png {
        let settings = load_settings(args.settings.as_deref())?;
        let mut backend = framecast::CpuPreviewBackend::new(settings);
        let frame = framecast::RenderBackend::render_graph(&mut backend, &graph)?;
        create_parent_dir(path)?;
        image::save_buffer_with_format(
            path,
            &frame.to_straight(),
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_render(registry: &framecast::CompositionRegistry, args: RenderArgs) -> anyhow::Result<()> {
    let comp = registry.require(&args.comp)?;
    let end = args.end.unwrap_or(comp.duration().0);
    let range =
        framecast::FrameRange::new(framecast::FrameIndex(args.start), framecast::FrameIndex(end))?;

    let settings = load_settings(args.settings.as_deref())?;
    let threading = framecast::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };
    let mut backend = framecast::CpuPreviewBackend::new(settings);
    let mut sink = framecast::PngSequenceSink::new(&args.out);
    let stats = framecast::render_frames(comp, range, &mut backend, &threading, &mut sink)
        .with_context(|| format!("render '{}' into '{}'", args.comp, args.out.display()))?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        stats.frames_total,
        args.out.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
