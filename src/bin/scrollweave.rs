use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollweave", version)]
struct Cli {
    /// Log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Locate a scroll progress on the centerpiece journey.
    Phase(PhaseArgs),
    /// Scroll a page and print frame snapshots.
    Sample(SampleArgs),
    /// Run a page transition and print its milestones.
    Navigate(NavigateArgs),
    /// Print the resolved trigger windows of a page.
    Triggers(TriggersArgs),
    /// Print the site content.
    Content,
}

#[derive(Parser, Debug)]
struct PhaseArgs {
    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Use the mobile journey (no horizontal drift).
    #[arg(long)]
    mobile: bool,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Stage configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page to mount.
    #[arg(long, default_value = "home")]
    page: String,

    /// Number of frames to run.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Wheel delta in pixels applied before the first frame.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    wheel: f64,

    /// Frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Print every frame instead of only the last one.
    #[arg(long)]
    all: bool,
}

#[derive(Parser, Debug)]
struct NavigateArgs {
    /// Stage configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Destination page.
    #[arg(long)]
    to: String,

    /// Upper bound on frames to run.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct TriggersArgs {
    /// Stage configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page to mount.
    #[arg(long, default_value = "home")]
    page: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Phase(args) => cmd_phase(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Navigate(args) => cmd_navigate(args),
        Command::Triggers(args) => cmd_triggers(args),
        Command::Content => print_json(&scrollweave::site_content()),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).with_context(|| "serialize output JSON")?;
    println!("{s}");
    Ok(())
}

fn read_config(path: Option<&Path>) -> anyhow::Result<scrollweave::StageConfig> {
    match path {
        Some(p) => scrollweave::StageConfig::from_path(p)
            .with_context(|| format!("load stage config '{}'", p.display())),
        None => Ok(scrollweave::StageConfig::default()),
    }
}

fn parse_page(s: &str) -> anyhow::Result<scrollweave::PageId> {
    s.parse()
        .with_context(|| format!("parse page '{s}' (home|work|agency|contact)"))
}

fn stage_on(config: Option<&Path>, page: &str) -> anyhow::Result<scrollweave::Stage> {
    let mut cfg = read_config(config)?;
    cfg.start_page = parse_page(page)?;
    scrollweave::Stage::new(cfg).with_context(|| "build stage")
}

fn frame_secs(fps: u32) -> anyhow::Result<f64> {
    Ok(scrollweave::Fps::new(fps, 1)?.frame_duration_secs())
}

fn cmd_phase(args: PhaseArgs) -> anyhow::Result<()> {
    let c = scrollweave::Centerpiece::new(args.mobile)?;
    let (hit, params) = c.target(args.progress, 0.0);
    print_json(&serde_json::json!({
        "progress": args.progress,
        "index": hit.index,
        "local": hit.local,
        "params": params,
    }))
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let dt = frame_secs(args.fps)?;
    let mut stage = stage_on(args.config.as_deref(), &args.page)?;
    stage.wheel(args.wheel);

    let mut frames = Vec::new();
    for _ in 0..args.frames {
        let out = stage.frame(dt);
        if args.all {
            frames.push(out);
        } else {
            frames = vec![out];
        }
    }
    if args.all {
        print_json(&frames)
    } else {
        print_json(&frames.pop())
    }
}

fn cmd_navigate(args: NavigateArgs) -> anyhow::Result<()> {
    let dt = frame_secs(args.fps)?;
    let to = parse_page(&args.to)?;
    let cfg = read_config(args.config.as_deref())?;
    let mut stage = scrollweave::Stage::new(cfg).with_context(|| "build stage")?;
    let from = stage.page();
    let outcome = stage.navigate(to);

    let mut milestones = Vec::new();
    if outcome == scrollweave::NavigateOutcome::Started {
        for _ in 0..args.frames {
            let out = stage.frame(dt);
            let done = out
                .transition_events
                .contains(&scrollweave::TransitionEvent::Completed);
            for event in out.transition_events {
                milestones.push(serde_json::json!({ "frame": out.frame, "event": event }));
            }
            if done {
                break;
            }
        }
    }
    print_json(&serde_json::json!({
        "from": from,
        "to": to,
        "outcome": outcome,
        "milestones": milestones,
        "navigation": stage.navigation(),
    }))
}

fn cmd_triggers(args: TriggersArgs) -> anyhow::Result<()> {
    let stage = stage_on(args.config.as_deref(), &args.page)?;
    let reg = stage.triggers();
    let rows: Vec<_> = reg
        .keys()
        .filter_map(|key| {
            let spec = reg.spec(key)?;
            let state = reg.state(key)?;
            Some(serde_json::json!({
                "key": key.to_string(),
                "region": spec.region,
                "start": spec.start,
                "end": spec.end_anchor(),
                "mode": spec.mode,
                "pin": spec.pin,
                "window": state.window,
            }))
        })
        .collect();
    print_json(&serde_json::json!({
        "page": stage.page(),
        "content_height": reg.content_height(),
        "pin_spacing": reg.pin_spacing(),
        "triggers": rows,
    }))
}
