//! The environment interface an explorer is driven through.
//!
//! An [`Environment`] is the maze plus the agent body: it knows where the
//! agent stands, where the goal is and what lies in each direction. The
//! explorer reads it once per tick and answers with a single move.

use crate::direction::Direction;
use crate::geom::Point;

/// What the agent sees one step away in a given direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observation {
    /// Impassable.
    Wall,
    /// Passable and not yet stepped on during this run.
    Open,
    /// Passable and already stepped on during this run.
    Visited,
}

impl Observation {
    #[inline]
    pub fn is_wall(self) -> bool {
        self == Self::Wall
    }
}

/// A maze with an agent in it.
pub trait Environment {
    /// The cell the agent currently occupies.
    fn position(&self) -> Point;

    /// The goal cell of the maze.
    fn goal(&self) -> Point;

    /// Observe the cell one step away in the absolute direction `dir`.
    fn look(&self, dir: Direction) -> Observation;

    /// Ask the agent to move one step in `dir`. Advisory: the environment
    /// decides the actual outcome (a move into a wall leaves it in place).
    fn request_move(&mut self, dir: Direction);

    /// Zero-based index of the current traversal of this maze. Run 0 maps
    /// the maze; later runs replay the route found during it.
    fn run_index(&self) -> u32;

    /// Number of walls among the four orthogonal neighbours.
    fn wall_count(&self) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|d| self.look(*d).is_wall())
            .count()
    }
}
