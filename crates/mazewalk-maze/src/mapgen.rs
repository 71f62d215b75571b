//! Maze generation.
//!
//! Provides two generators operating on a [`Grid`]:
//! - **Recursive backtracker**: carves a perfect maze (exactly one path
//!   between any two floor cells) on odd coordinates.
//! - **Braiding**: knocks out walls between floor cells of a finished maze
//!   to open loops and alternative routes.

use mazewalk_core::{Direction, Point};
use rand::Rng;

use crate::grid::{Grid, Tile};
use crate::layout::Layout;

/// Maze generator operating on a [`Grid`] of [`Tile`] values.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator over an all-wall grid of the given size.
    ///
    /// Even sizes are rounded down to the next odd size, so that the maze
    /// keeps a solid outer wall; sizes below 3 are raised to 3.
    pub fn new(width: i32, height: i32, rng: R) -> Self {
        let odd = |n: i32| (if n % 2 == 0 { n - 1 } else { n }).max(3);
        Self {
            rng,
            grid: Grid::new(odd(width), odd(height)),
        }
    }

    /// Carve a perfect maze with an iterative recursive backtracker.
    ///
    /// Floor cells sit on odd coordinates; the walk starts at `start`
    /// (snapped to the nearest odd cell inside the border). Returns the
    /// number of tiles carved.
    pub fn backtracker(&mut self, start: Point) -> usize {
        let bounds = self.grid.bounds();
        let snap = |v: i32, max: i32| {
            let v = v.clamp(1, (max - 2).max(1));
            if v % 2 == 0 { v - 1 } else { v }
        };
        let start = Point::new(snap(start.x, bounds.max.x), snap(start.y, bounds.max.y));
        if !bounds.contains_interior(start) {
            return 0;
        }

        self.grid.set(start, Tile::Floor);
        let mut carved = 1;
        let mut stack = vec![start];
        let mut options: Vec<Direction> = Vec::with_capacity(4);

        while let Some(&cur) = stack.last() {
            options.clear();
            for dir in Direction::ALL {
                let next = cur + dir.delta() + dir.delta();
                if bounds.contains_interior(next) && self.grid.at(next) == Some(Tile::Wall) {
                    options.push(dir);
                }
            }
            if options.is_empty() {
                stack.pop();
                continue;
            }
            let dir = options[self.rng.random_range(0..options.len())];
            let between = cur.step(dir);
            let next = between.step(dir);
            self.grid.set(between, Tile::Floor);
            self.grid.set(next, Tile::Floor);
            carved += 2;
            stack.push(next);
        }

        carved
    }

    /// Open loops by removing each interior wall that separates two floor
    /// tiles in a straight line, with probability `pct` (0.0–1.0).
    ///
    /// Returns the number of walls removed.
    pub fn braid(&mut self, pct: f64) -> usize {
        let pct = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 1.0) };
        let bounds = self.grid.bounds();
        let mut removed = 0;

        for p in bounds.iter() {
            if !bounds.contains_interior(p) || self.grid.at(p) != Some(Tile::Wall) {
                continue;
            }
            let horizontal = self.grid.is_floor(p.step(Direction::West))
                && self.grid.is_floor(p.step(Direction::East));
            let vertical = self.grid.is_floor(p.step(Direction::North))
                && self.grid.is_floor(p.step(Direction::South));
            // Corner posts joining four walls stay put.
            if horizontal == vertical {
                continue;
            }
            if self.rng.random_bool(pct) {
                self.grid.set(p, Tile::Floor);
                removed += 1;
            }
        }

        removed
    }

    /// Finish into a [`Layout`] with the start in the top-left cell and the
    /// goal in the bottom-right one.
    pub fn into_layout(self) -> Layout {
        let size = self.grid.size();
        Layout {
            grid: self.grid,
            start: Point::new(1, 1),
            goal: Point::new(size.x - 2, size.y - 2),
        }
    }
}

/// Generate a maze layout: a perfect maze, optionally braided.
pub fn generate<R: Rng>(width: i32, height: i32, braid: f64, rng: R) -> Layout {
    let mut mg = MazeGen::new(width, height, rng);
    let carved = mg.backtracker(Point::new(1, 1));
    let opened = if braid > 0.0 { mg.braid(braid) } else { 0 };
    log::debug!(
        "generated {}x{} maze: {} tiles carved, {} walls braided",
        mg.grid.width(),
        mg.grid.height(),
        carved,
        opened
    );
    mg.into_layout()
}
