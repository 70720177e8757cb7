use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use techreel::{
    CompositionDescriptor, CompositionProps, EditorState, FrameIndex, FrameRange, LaunchMode,
    Registry, RenderThreading,
};

#[derive(Parser, Debug)]
#[command(name = "techreel", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered compositions.
    List {
        /// Print descriptors as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the visual tree of one frame as JSON.
    Tree(TargetArgs),
    /// Render one frame to an `.svg` or `.png` file.
    Frame(FrameArgs),
    /// Render a frame range to a numbered PNG sequence.
    Frames(FramesArgs),
    /// Resolve what a launch with the given query string opens.
    Launch {
        /// Query string, e.g. `?remotion`.
        #[arg(long, default_value = "")]
        query: String,
    },
}

#[derive(Parser, Debug)]
struct TargetArgs {
    /// Composition id, e.g. `TechVideo` or `APIVisualization`.
    #[arg(long, short)]
    composition: String,

    /// Frame index (0-based).
    #[arg(long, short, default_value_t = 0)]
    frame: u64,

    /// Props JSON: a file path or an inline object. Missing keys use the defaults.
    #[arg(long)]
    props: Option<String>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Output path; the extension picks SVG or PNG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Composition id.
    #[arg(long, short)]
    composition: String,

    /// Props JSON: a file path or an inline object.
    #[arg(long)]
    props: Option<String>,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition length.
    #[arg(long)]
    end: Option<u64>,

    /// Output directory for `frame_00000.png` and onward.
    #[arg(long)]
    out_dir: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Enable static-frame elision within chunks.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let registry = Registry::builtin()?;
    match cli.cmd {
        Command::List { json } => cmd_list(&registry, json),
        Command::Tree(args) => cmd_tree(&registry, args),
        Command::Frame(args) => cmd_frame(&registry, args),
        Command::Frames(args) => cmd_frames(&registry, args),
        Command::Launch { query } => cmd_launch(&registry, &query),
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("techreel=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve<'a>(
    registry: &'a Registry,
    name: &str,
    props: Option<&str>,
) -> anyhow::Result<(&'a CompositionDescriptor, CompositionProps)> {
    let desc = registry.lookup(name)?;
    let props = match props {
        None => desc.default_props.clone(),
        Some(src) => {
            let value = load_props_json(src)?;
            CompositionProps::from_json(desc.id, value)
                .with_context(|| format!("invalid props for {}", desc.id))?
        }
    };
    Ok((desc, props))
}

fn load_props_json(src: &str) -> anyhow::Result<serde_json::Value> {
    let trimmed = src.trim_start();
    if trimmed.starts_with('{') {
        return serde_json::from_str(trimmed).context("parse inline props JSON");
    }
    let path = Path::new(src);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read props file '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse props file '{}'", path.display()))
}

fn cmd_list(registry: &Registry, json: bool) -> anyhow::Result<()> {
    if json {
        let all: Vec<_> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }
    for d in registry.iter() {
        println!(
            "{:<18} {:>4} frames  {:>2} fps  {}x{}  {:.2}s",
            d.id.name(),
            d.duration_frames,
            d.fps.as_f64(),
            d.canvas.width,
            d.canvas.height,
            d.duration_secs()
        );
    }
    Ok(())
}

fn cmd_tree(registry: &Registry, args: TargetArgs) -> anyhow::Result<()> {
    let (desc, props) = resolve(registry, &args.composition, args.props.as_deref())?;
    let tree = techreel::render_tree(desc, &props, FrameIndex(args.frame))?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

fn cmd_frame(registry: &Registry, args: FrameArgs) -> anyhow::Result<()> {
    let t = &args.target;
    let (desc, props) = resolve(registry, &t.composition, t.props.as_deref())?;
    let frame = FrameIndex(t.frame);
    ensure_parent_dir(&args.out)?;

    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => {
            let svg = techreel::render_svg(desc, &props, frame)?;
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        Some("png") => {
            techreel::render_frame(desc, &props, frame)?.write_png(&args.out)?;
        }
        _ => anyhow::bail!(
            "output '{}' must end in .svg or .png",
            args.out.display()
        ),
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(registry: &Registry, args: FramesArgs) -> anyhow::Result<()> {
    let (desc, props) = resolve(registry, &args.composition, args.props.as_deref())?;
    let end = args.end.unwrap_or(desc.duration_frames);
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;
    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let stats = techreel::render_frames_into(desc, &props, range, &threading, |f, frame| {
        frame.write_png(&args.out_dir.join(format!("frame_{:05}.png", f.0)))
    })?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        stats.frames_total,
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_launch(registry: &Registry, query: &str) -> anyhow::Result<()> {
    let mode = LaunchMode::from_query(query);
    let body = match mode {
        LaunchMode::Registry => serde_json::json!({
            "mode": mode,
            "compositions": registry.iter().collect::<Vec<_>>(),
        }),
        LaunchMode::Editor => serde_json::json!({
            "mode": mode,
            "player": EditorState::default().player_config(registry)?,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
