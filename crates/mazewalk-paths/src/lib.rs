//! Search structures for online exploration of an unknown grid maze.
//!
//! - **Frontier queue** of discovered-but-unexpanded cells, lowest
//!   estimated cost first ([`FrontierQueue`])
//! - **Explored tree** mapping every discovered cell to the cell it was
//!   discovered from ([`ExploredTree`])
//! - **Route reconstruction** between any two explored cells through their
//!   lowest common ancestor ([`ExploredTree::route_between`])
//! - **Route compression** into straight-line waypoints ([`compress`])
//!
//! Frontier priorities combine a straight-line heuristic and the distance
//! travelled along the tree, weighted by [`CostWeights`].

mod compress;
mod distance;
mod error;
mod frontier;
mod route;
mod tree;
mod weights;

pub use compress::{compress, expand};
pub use distance::{euclidean, manhattan};
pub use error::PathError;
pub use frontier::{FrontierEntry, FrontierQueue};
pub use tree::{ExploredTree, Parent};
pub use weights::CostWeights;
