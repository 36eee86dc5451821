use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use pillsplit::config::{ConfigError, SplitterConfig};
use pillsplit::engine::EngineCore;
use pillsplit::geom::CanvasOrigin;
use pillsplit::ids::{IdSource, SequentialIds, UuidIds};
use pillsplit::palette::RandomPalette;
use pillsplit::script::{self, ScriptError};
use pillsplit::split::SplitReach;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read script {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid script: {0}")]
    Script(#[from] ScriptError),
    #[error("failed to encode scene: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pillsplit", about = "Pill splitter canvas engine tools")]
struct Cli {
    /// Log store mutations to stderr.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an event script and print the final scene as JSON.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Script file, or `-` for stdin.
    script: PathBuf,

    /// Seed for the fill palette; omit for an OS-seeded palette.
    #[arg(long, env = "PILLSPLIT_SEED")]
    seed: Option<u64>,

    /// Pill id strategy.
    #[arg(long, value_enum, default_value_t = IdStrategy::Seq)]
    ids: IdStrategy,

    /// Which pills a click cuts; overrides PILLSPLIT_SPLIT_REACH.
    #[arg(long)]
    reach: Option<SplitReach>,

    /// Canvas left edge in client coordinates.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    left: f64,

    /// Canvas top edge in client coordinates.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    top: f64,

    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IdStrategy {
    /// `pill-1`, `pill-2`, ...
    Seq,
    /// Random v4 UUID tokens.
    Uuid,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(level).init();

    match cli.command {
        Command::Replay(args) => run_replay(args),
    }
}

fn run_replay(args: ReplayArgs) -> Result<(), CliError> {
    let mut config = SplitterConfig::from_env()?;
    if let Some(reach) = args.reach {
        config.split_reach = reach;
    }

    let text = read_script(&args.script)?;
    let steps = script::parse(&text)?;

    let ids: Box<dyn IdSource> = match args.ids {
        IdStrategy::Seq => Box::new(SequentialIds::new()),
        IdStrategy::Uuid => Box::new(UuidIds),
    };
    let colors = match args.seed {
        Some(seed) => RandomPalette::seeded(seed),
        None => RandomPalette::from_os(),
    };
    let mut core = EngineCore::with_sources(&config, ids, Box::new(colors));

    tracing::info!(script = %args.script.display(), steps = steps.len(), reach = %config.split_reach, "replay started");
    let actions = script::replay(&mut core, CanvasOrigin::new(args.left, args.top), &steps);
    tracing::info!(
        actions = actions.len(),
        pills = core.doc.len(),
        max_z_index = ?core.doc.max_z_index(),
        next_z_index = core.doc.next_z_index(),
        "replay finished"
    );

    let scene = core.scene();
    let json = if args.compact { serde_json::to_string(&scene)? } else { serde_json::to_string_pretty(&scene)? };
    println!("{json}");
    Ok(())
}

fn read_script(path: &Path) -> Result<String, CliError> {
    let shown = path.display().to_string();
    if shown == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(|source| CliError::Read { path: shown, source })?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read { path: shown, source })
}
