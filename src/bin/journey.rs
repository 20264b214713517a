use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "journey", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical configuration as JSON.
    Config,
    /// Evaluate the depth timeline at one depth.
    Sample(SampleArgs),
    /// Drive a session with a scripted scroll and print one JSON line per frame.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ViewportArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Configuration JSON. Defaults to the canonical tuning.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// World depth to evaluate.
    #[arg(long, allow_hyphen_values = true)]
    depth: f64,

    #[command(flatten)]
    viewport: ViewportArgs,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    viewport: ViewportArgs,

    /// Scroll distance per frame in pixels.
    #[arg(long, default_value_t = 40.0)]
    speed: f64,

    /// Stop after this many frames.
    #[arg(long, default_value_t = 2000)]
    frames: u64,

    /// Frame interval in milliseconds.
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    frame_ms: f64,

    /// Press the skip control on this frame.
    #[arg(long)]
    skip_at: Option<u64>,

    /// Persist the "story seen" flag in this JSON file instead of memory.
    #[arg(long)]
    flag_file: Option<PathBuf>,

    /// Print every Nth frame (transition frames are always printed).
    #[arg(long, default_value_t = 1)]
    every: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Config => cmd_config(),
        Command::Sample(args) => cmd_sample(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<journey::JourneyConfig> {
    match path {
        Some(p) => journey::JourneyConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(journey::JourneyConfig::default()),
    }
}

fn cmd_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&journey::JourneyConfig::default())?;
    println!("{json}");
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.viewport.config.as_deref())?;
    let viewport = journey::Viewport::new(args.viewport.width, args.viewport.height)?;
    let timeline = journey::DepthTimeline::new(cfg.timeline)?;
    let frame = timeline.evaluate(args.depth, viewport);
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.viewport.config.as_deref())?;
    let viewport = journey::Viewport::new(args.viewport.width, args.viewport.height)?;
    let max_scroll = (cfg.timeline.journey_height - viewport.height).max(0.0);
    let every = args.every.max(1);

    let store: Box<dyn journey::FlagStore> = match &args.flag_file {
        Some(path) => Box::new(journey::FileFlagStore::new(path)),
        None => Box::new(journey::MemoryFlagStore::new()),
    };
    let mut session = journey::JourneySession::new(cfg, store, viewport)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut offset = 0.0_f64;
    let mut revealed_at = None;

    for i in 0..args.frames {
        let now_ms = i as f64 * args.frame_ms;
        if session.is_listening() {
            offset = (offset + args.speed).min(max_scroll);
            session.on_scroll(offset);
        }
        if args.skip_at == Some(i) {
            session.skip(now_ms);
        }

        let frame = session.frame(now_ms);
        if frame.events.contains(&journey::PhaseEvent::ResetScroll) {
            offset = 0.0;
        }
        if revealed_at.is_none() && frame.phase == journey::JourneyPhase::Reveal {
            revealed_at = Some(i);
        }

        let notable = frame.triggered.is_some() || !frame.events.is_empty();
        if notable || i % every == 0 {
            serde_json::to_writer(&mut out, &frame)?;
            out.write_all(b"\n")?;
        }

        // Two frames of slack so the deferred scroll reset is visible in the output.
        if revealed_at.is_some_and(|r| i >= r + 2) {
            break;
        }
    }

    session.teardown();
    out.flush()?;
    match revealed_at {
        Some(f) => eprintln!("revealed on frame {f}"),
        None => eprintln!("journey still running after {} frames", args.frames),
    }
    Ok(())
}
