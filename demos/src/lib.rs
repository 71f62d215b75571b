//! Episode runner shared by the demo binaries.
//!
//! Demonstrates: maze generation and parsing, driving an [`Explorer`]
//! through a [`SimMaze`] run after run, and comparing the replayed route
//! with the breadth-first shortest distance.

use std::fmt;
use std::path::Path;

use anyhow::{Context, bail};
use mazewalk_core::{Environment, Point};
use mazewalk_explore::{ExploreConfig, Explorer};
use mazewalk_maze::{Layout, RunStats, SimMaze};
use mazewalk_paths::expand;

/// Search flavour picked on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// A*-like junctions, fast corridors.
    #[default]
    Astar,
    /// Heuristic only.
    Greedy,
    /// Travelled distance only.
    Dijkstra,
}

impl Mode {
    pub fn config(self) -> ExploreConfig {
        match self {
            Self::Astar => ExploreConfig::astar(),
            Self::Greedy => ExploreConfig::greedy(),
            Self::Dijkstra => ExploreConfig::dijkstra(),
        }
    }
}

/// Parse an [`ExploreConfig`] from TOML. Missing keys take their defaults.
pub fn parse_config(text: &str) -> anyhow::Result<ExploreConfig> {
    toml::from_str(text).context("invalid explorer config")
}

pub fn load_config(path: &Path) -> anyhow::Result<ExploreConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text)
}

pub fn load_layout(path: &Path) -> anyhow::Result<Layout> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading layout {}", path.display()))?;
    Layout::parse(&text).with_context(|| format!("parsing layout {}", path.display()))
}

// ---------------------------------------------------------------------------
// Episode
// ---------------------------------------------------------------------------

/// Outcome of [`run_episode`].
#[derive(Debug, Clone)]
pub struct Report {
    /// Per-run counters, oldest first.
    pub runs: Vec<RunStats>,
    pub expansions: usize,
    pub final_route: Vec<Point>,
    /// Breadth-first distance from start to goal.
    pub shortest: Option<i32>,
    pub ticks: usize,
    /// The maze with the final route drawn in.
    pub picture: String,
}

/// Let an explorer complete `runs` traversals of `layout`, giving up after
/// `max_ticks` ticks.
pub fn run_episode(
    layout: Layout,
    config: ExploreConfig,
    runs: usize,
    max_ticks: usize,
) -> anyhow::Result<Report> {
    let shortest = layout.grid.shortest_distance(layout.start, layout.goal);
    let mut sim = SimMaze::new(layout);
    let mut explorer = Explorer::new(config);
    let mut ticks = 0;

    while sim.finished_runs().len() < runs {
        if ticks == max_ticks {
            bail!(
                "gave up after {ticks} ticks on run {} at {}",
                sim.run_index(),
                sim.position()
            );
        }
        explorer
            .drive(&mut sim)
            .with_context(|| format!("run {} tick {ticks}", sim.run_index()))?;
        ticks += 1;
    }

    let final_route = explorer.final_route().unwrap_or_default().to_vec();
    log::info!(
        "{} runs in {ticks} ticks, {} expansions",
        runs,
        explorer.expansions().len()
    );
    Ok(Report {
        runs: sim.finished_runs().to_vec(),
        expansions: explorer.expansions().len(),
        picture: sim.layout().render(&expand(&final_route), '*'),
        final_route,
        shortest,
        ticks,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.picture)?;
        let route: Vec<String> = self.final_route.iter().map(Point::to_string).collect();
        writeln!(f, "final route: {}", route.join(" "))?;
        writeln!(f, "expansions:  {}", self.expansions)?;
        match self.shortest {
            Some(d) => writeln!(f, "shortest:    {d}")?,
            None => writeln!(f, "shortest:    unreachable")?,
        }
        for (i, run) in self.runs.iter().enumerate() {
            writeln!(f, "run {i}: {} steps, {} bumps", run.steps, run.bumps)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_paths::CostWeights;

    const TEE: &str = "\
#########
#...S...#
#######.#
#G......#
#########";

    #[test]
    fn episode_report() {
        let layout = Layout::parse(TEE).unwrap();
        let report = run_episode(layout, Mode::Astar.config(), 2, 1000).unwrap();
        assert_eq!(report.runs.len(), 2);
        assert_eq!(report.shortest, Some(11));
        assert_eq!(report.runs[1].steps, 11);
        assert_eq!(report.final_route.first(), Some(&Point::new(4, 1)));
        assert_eq!(report.final_route.last(), Some(&Point::new(1, 3)));
        assert!(report.picture.contains("#G******#"));
        assert!(report.to_string().contains("run 1: 11 steps, 0 bumps"));
    }

    #[test]
    fn tick_limit() {
        let layout = Layout::parse(TEE).unwrap();
        let err = run_episode(layout, ExploreConfig::default(), 2, 5).unwrap_err();
        assert!(err.to_string().contains("gave up after 5 ticks"));
    }

    #[test]
    fn unreachable_goal_fails() {
        let layout = Layout::parse("#######\n#S..#G#\n#######").unwrap();
        let err = run_episode(layout, ExploreConfig::default(), 1, 100).unwrap_err();
        assert!(format!("{err:#}").contains("frontier queue is empty"));
    }

    #[test]
    fn toml_config() {
        let c = parse_config(
            "adaptive = false\n\n[junction]\nheuristic = 1.0\npath = 0.0\n",
        )
        .unwrap();
        assert_eq!(c.junction, CostWeights::GREEDY);
        assert_eq!(c.corridor, CostWeights::CORRIDOR);
        assert!(!c.adaptive);
        assert_eq!(parse_config("").unwrap(), ExploreConfig::default());
        assert!(parse_config("adaptive = 3").is_err());
    }

    #[test]
    fn modes() {
        assert_eq!(Mode::Greedy.config(), ExploreConfig::greedy());
        assert_eq!(Mode::default().config(), ExploreConfig::default());
    }
}
