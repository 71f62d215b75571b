//! A simulated maze environment.
//!
//! [`SimMaze`] plays the part of the maze and the agent body for an
//! explorer: it answers observations, applies moves, and restarts the agent
//! at the start cell every time the goal is reached.

use std::collections::HashSet;

use mazewalk_core::{Direction, Environment, Observation, Point};

use crate::layout::Layout;

/// Counters for one traversal of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Moves that changed the agent's cell.
    pub steps: u32,
    /// Moves that ran into a wall.
    pub bumps: u32,
}

/// A [`Layout`] with an agent walking in it.
#[derive(Debug, Clone)]
pub struct SimMaze {
    layout: Layout,
    pos: Point,
    visited: HashSet<Point>,
    run: u32,
    current: RunStats,
    finished: Vec<RunStats>,
}

impl SimMaze {
    /// Place an agent on the start cell of `layout`.
    pub fn new(layout: Layout) -> Self {
        let pos = layout.start;
        Self {
            layout,
            pos,
            visited: HashSet::from([pos]),
            run: 0,
            current: RunStats::default(),
            finished: Vec::new(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Counters of the traversal in progress.
    pub fn current_run(&self) -> RunStats {
        self.current
    }

    /// Counters of every completed traversal, oldest first.
    pub fn finished_runs(&self) -> &[RunStats] {
        &self.finished
    }

    /// Cells stepped on during the traversal in progress.
    pub fn visited(&self) -> &HashSet<Point> {
        &self.visited
    }

    fn begin_run(&mut self) {
        self.pos = self.layout.start;
        self.visited.clear();
        self.visited.insert(self.pos);
        self.current = RunStats::default();
    }

    /// Render the maze with `marks` drawn as `*` and the agent as `@`.
    pub fn render(&self, marks: &[Point]) -> String {
        let width = self.layout.grid.width() as usize + 1;
        let mut out: Vec<char> = self.layout.render(marks, '*').chars().collect();
        let agent = self.pos.y as usize * width + self.pos.x as usize;
        if let Some(ch) = out.get_mut(agent) {
            *ch = '@';
        }
        out.into_iter().collect()
    }
}

impl Environment for SimMaze {
    fn position(&self) -> Point {
        self.pos
    }

    fn goal(&self) -> Point {
        self.layout.goal
    }

    fn look(&self, dir: Direction) -> Observation {
        let p = self.pos.step(dir);
        if !self.layout.grid.is_floor(p) {
            Observation::Wall
        } else if self.visited.contains(&p) {
            Observation::Visited
        } else {
            Observation::Open
        }
    }

    fn request_move(&mut self, dir: Direction) {
        let next = self.pos.step(dir);
        if !self.layout.grid.is_floor(next) {
            self.current.bumps += 1;
            log::trace!("bumped into wall {next} moving {dir}");
            return;
        }
        self.pos = next;
        self.visited.insert(next);
        self.current.steps += 1;

        if next == self.layout.goal {
            log::debug!(
                "run {} reached goal {} in {} steps ({} bumps)",
                self.run,
                next,
                self.current.steps,
                self.current.bumps
            );
            self.finished.push(self.current);
            self.run += 1;
            self.begin_run();
        }
    }

    fn run_index(&self) -> u32 {
        self.run
    }
}
