//! Simulated grid mazes for driving an explorer.
//!
//! - **Tile grids** with wall/floor tiles ([`Grid`])
//! - **ASCII layouts** with start and goal markers ([`Layout`])
//! - **Generation** of perfect and braided mazes ([`MazeGen`], [`generate`])
//! - **Reference distances** by breadth-first search ([`Grid::shortest_distance`])
//! - **A reference [`Environment`](mazewalk_core::Environment)** that walks
//!   an agent through a layout run after run ([`SimMaze`])

mod bfs;
mod grid;
mod layout;
mod mapgen;
mod sim;

pub use bfs::UNREACHABLE;
pub use grid::{Grid, Tile};
pub use layout::{Layout, LayoutError};
pub use mapgen::{MazeGen, generate};
pub use sim::{RunStats, SimMaze};
