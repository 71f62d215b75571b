//! Explore a maze twice: map it, then replay the shortest route found.
//!
//! Run: cargo run --bin explore -- --width 41 --height 21 --seed 7

use std::path::PathBuf;

use clap::Parser;
use mazewalk_demos::{Mode, load_config, load_layout, run_episode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(about = "Map an unknown maze, then replay the best route")]
struct Cli {
    /// Search flavour, ignored when --config is given.
    #[arg(long, value_enum, default_value_t = Mode::Astar)]
    mode: Mode,

    /// TOML file with explorer weights.
    #[arg(long)]
    config: Option<PathBuf>,

    /// ASCII maze to load instead of generating one.
    #[arg(long)]
    layout: Option<PathBuf>,

    #[arg(long, default_value_t = 31)]
    width: i32,

    #[arg(long, default_value_t = 15)]
    height: i32,

    /// Seed for maze generation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of knocking out each removable wall, 0.0 to 1.0.
    #[arg(long, default_value_t = 0.0)]
    braid: f64,

    /// Traversals to complete, the first one maps the maze.
    #[arg(long, default_value_t = 2)]
    runs: usize,

    #[arg(long, default_value_t = 100_000)]
    max_ticks: usize,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => cli.mode.config(),
    };
    log::debug!("explorer config: {config:?}");

    let layout = match &cli.layout {
        Some(path) => load_layout(path)?,
        None => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            log::info!("maze seed {seed}");
            mazewalk_maze::generate(cli.width, cli.height, cli.braid, StdRng::seed_from_u64(seed))
        }
    };

    let report = run_episode(layout, config, cli.runs, cli.max_ticks)?;
    print!("{report}");
    Ok(())
}
