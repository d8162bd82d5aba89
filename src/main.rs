use anyhow::Context;
use clap::Parser;
use env_logger::{Env, Target};
use game_2048::config::Config;
use game_2048::engine::SpawnRule;
use game_2048::ui;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "game-2048", about = "Play 2048 in the terminal: arrow keys slide, click or Enter for buttons, q quits")]
struct Args {
    /// TOML configuration file; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed the tile RNG for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Spawned tile distribution: `even` (2 and 4 alike) or `classic` (90% twos)
    #[arg(long, value_name = "RULE")]
    spawn: Option<SpawnRule>,

    /// Frame rate of the input/render loop
    #[arg(long)]
    fps: Option<u32>,

    /// Splash art shown at startup
    #[arg(long, value_name = "PATH")]
    splash: Option<PathBuf>,

    /// How long the splash stays up
    #[arg(long, value_name = "SECONDS")]
    splash_secs: Option<f64>,

    /// Skip the splash
    #[arg(long)]
    no_splash: bool,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter used with --log-file, e.g. "info", "debug"
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let config = settings(&args)?;
    log::debug!("settings: {config:?}");

    let high_score = ui::run(&config).context("game session failed")?;
    println!("High score: {high_score}");
    Ok(())
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    if let Some(mut builder) = logger(args)? {
        builder.init();
    }
    Ok(())
}

/// A logger writing to `--log-file`, or `None` without one. The game owns
/// the terminal, so stderr is never a log target, even when RUST_LOG is set.
fn logger(args: &Args) -> anyhow::Result<Option<env_logger::Builder>> {
    let Some(path) = &args.log_file else {
        return Ok(None);
    };
    let file = File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(args.log.as_str()));
    builder.target(Target::Pipe(Box::new(file)));
    Ok(Some(builder))
}

fn settings(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_toml(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(spawn) = args.spawn {
        config.spawn = spawn;
    }
    if let Some(fps) = args.fps {
        config.fps = fps;
    }
    if let Some(path) = &args.splash {
        config.splash.path = path.clone();
    }
    if let Some(secs) = args.splash_secs {
        config.splash.seconds = secs;
    }
    if args.no_splash {
        config.splash.enabled = false;
    }
    Ok(config)
}
