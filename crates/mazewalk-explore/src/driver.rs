//! The step-driven explorer.
//!
//! Run 0 maps the maze: the agent repeatedly walks the explored tree to the
//! cheapest frontier cell, expands it, and picks the next one. As soon as it
//! stands next to the goal, the tree path from the start is compressed into
//! the final route. Later runs replay that route waypoint by waypoint.

use mazewalk_core::{Direction, Environment, Observation, Point};
use mazewalk_paths::{
    CostWeights, ExploredTree, FrontierQueue, Parent, PathError, compress, euclidean,
};

use crate::config::ExploreConfig;
use crate::error::ExploreError;
use crate::steer;

/// Phase of the current episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExploreState {
    /// Nothing known yet; the next tick roots the tree.
    #[default]
    Initializing,
    /// Mapping the maze.
    Exploring,
    /// Following the final route.
    RouteFollowing,
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// A route and the index of the waypoint being walked to.
#[derive(Debug, Clone, Default)]
struct Cursor {
    route: Vec<Point>,
    index: usize,
}

impl Cursor {
    fn new(route: Vec<Point>) -> Self {
        Self { route, index: 0 }
    }

    fn last(&self) -> Option<Point> {
        self.route.last().copied()
    }

    fn jump_to_end(&mut self) {
        self.index = self.route.len().saturating_sub(1);
    }

    /// Move past the current waypoint if the agent stands on it, then
    /// return the waypoint to head for.
    fn target(&mut self, pos: Point) -> Option<Point> {
        let cur = *self.route.get(self.index)?;
        if cur == pos && self.index + 1 < self.route.len() {
            self.index += 1;
        }
        self.route.get(self.index).copied()
    }
}

// ---------------------------------------------------------------------------
// Explorer
// ---------------------------------------------------------------------------

/// Explores an unknown maze one tick at a time, then replays the best route
/// it found.
///
/// The explorer owns every piece of episode state; [`reset`](Self::reset)
/// discards all of it at once.
#[derive(Debug)]
pub struct Explorer {
    config: ExploreConfig,
    weights: CostWeights,
    state: ExploreState,
    tree: ExploredTree,
    frontier: FrontierQueue,
    expanded: Vec<Point>,
    walk: Cursor,
    final_route: Option<Cursor>,
    primed_run: u32,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(ExploreConfig::default())
    }
}

impl Explorer {
    pub fn new(config: ExploreConfig) -> Self {
        let mut tree = ExploredTree::new();
        tree.set_path_weight(config.junction.path);
        Self {
            config,
            weights: config.junction,
            state: ExploreState::Initializing,
            tree,
            frontier: FrontierQueue::new(),
            expanded: Vec::new(),
            walk: Cursor::default(),
            final_route: None,
            primed_run: 0,
        }
    }

    /// Forget the current maze entirely.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    pub fn state(&self) -> ExploreState {
        self.state
    }

    /// Weights scoring newly discovered cells.
    pub fn weights(&self) -> CostWeights {
        self.weights
    }

    pub fn tree(&self) -> &ExploredTree {
        &self.tree
    }

    pub fn frontier(&self) -> &FrontierQueue {
        &self.frontier
    }

    /// Cells expanded so far, in expansion order.
    pub fn expansions(&self) -> &[Point] {
        &self.expanded
    }

    /// The compressed start-to-goal waypoints, once the goal was found.
    pub fn final_route(&self) -> Option<&[Point]> {
        self.final_route.as_ref().map(|c| c.route.as_slice())
    }

    /// Route currently walked towards the frontier head.
    pub fn current_route(&self) -> &[Point] {
        &self.walk.route
    }

    /// Compute the move for this tick. `None` means stay put.
    pub fn step(&mut self, env: &impl Environment) -> Result<Option<Direction>, ExploreError> {
        let run = env.run_index();
        if run > 0 {
            return self.replay(env.position(), run);
        }

        let pos = env.position();
        if self.state == ExploreState::Initializing {
            self.tree.insert(pos, Parent::Root)?;
            self.state = ExploreState::Exploring;
            log::debug!("rooted explored tree at {pos}");
        }
        if self.state == ExploreState::Exploring && near_goal(env) {
            self.finish(pos, env.goal())?;
        }
        if self.state == ExploreState::RouteFollowing {
            let target = self.final_route.as_mut().and_then(|c| c.target(pos));
            return Ok(target.and_then(|t| steer::toward(pos, t)));
        }

        self.adapt(env);
        let at_head = self.walk.last() == Some(pos);
        if self.walk.route.is_empty() || at_head {
            if at_head {
                self.frontier.pop_lowest()?;
            }
            self.expand(env)?;
        }

        let mv = self.walk.target(pos).and_then(|t| steer::toward(pos, t));
        if let Some(dir) = mv {
            log::trace!("{pos} -> {dir}");
        }
        Ok(mv)
    }

    /// Run one tick: compute the move and hand it to `env`.
    pub fn drive(&mut self, env: &mut impl Environment) -> Result<Option<Direction>, ExploreError> {
        let mv = self
            .step(&*env)
            .inspect_err(|e| log::warn!("tick at {} failed: {e}", env.position()))?;
        if let Some(dir) = mv {
            env.request_move(dir);
        }
        Ok(mv)
    }

    fn adapt(&mut self, env: &impl Environment) {
        if let Some(weights) = self.config.weights_for(env.wall_count()) {
            self.weights = weights;
            self.tree.set_path_weight(weights.path);
        }
    }

    /// Discover the open neighbours of the agent's cell, then aim at the
    /// new frontier head.
    fn expand(&mut self, env: &impl Environment) -> Result<(), ExploreError> {
        let pos = env.position();
        let goal = env.goal();
        for dir in Direction::ALL {
            if env.look(dir) != Observation::Open {
                continue;
            }
            let child = pos.step(dir);
            if !self.tree.insert(child, Parent::Cell(pos))? {
                continue;
            }
            let cost = self.weights.score(
                euclidean(child, goal),
                self.tree.accumulated_path_cost(child)?,
            );
            self.frontier.insert(child, cost);
        }
        self.expanded.push(pos);

        let head = self.frontier.peek_lowest()?;
        self.walk = Cursor::new(self.tree.route_between(pos, head.pos)?);
        log::debug!(
            "expanded {pos}: frontier head {} at {:.3}, {} steps away, {} queued",
            head.pos,
            head.cost,
            self.walk.route.len().saturating_sub(1),
            self.frontier.len()
        );
        Ok(())
    }

    fn finish(&mut self, pos: Point, goal: Point) -> Result<(), ExploreError> {
        let root = self.tree.root().ok_or(PathError::UnknownCell(pos))?;
        let route = compress(&self.tree.route_between(root, pos)?, goal);
        log::info!(
            "route to goal found after {} expansions: {}",
            self.expanded.len(),
            format_route(&route)
        );
        let mut cursor = Cursor::new(route);
        cursor.jump_to_end();
        self.final_route = Some(cursor);
        self.state = ExploreState::RouteFollowing;
        Ok(())
    }

    fn replay(&mut self, pos: Point, run: u32) -> Result<Option<Direction>, ExploreError> {
        let cursor = self
            .final_route
            .as_mut()
            .ok_or(ExploreError::RouteUnavailable { run })?;
        if self.primed_run != run {
            log::debug!("run {run}: replaying {} waypoints", cursor.route.len());
            cursor.index = 0;
            self.primed_run = run;
            self.state = ExploreState::RouteFollowing;
        }
        Ok(cursor.target(pos).and_then(|t| steer::toward(pos, t)))
    }
}

/// Whether the agent is on the goal, or next to it with no wall between.
fn near_goal(env: &impl Environment) -> bool {
    let pos = env.position();
    let goal = env.goal();
    pos == goal || Direction::between(pos, goal).is_some_and(|d| !env.look(d).is_wall())
}

fn format_route(route: &[Point]) -> String {
    route
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
