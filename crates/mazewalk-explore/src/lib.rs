//! Online exploration of an unknown grid maze.
//!
//! An [`Explorer`] is ticked once per observation of an
//! [`Environment`](mazewalk_core::Environment) and answers with a single
//! move. During the first run it maps the maze with a weighted best-first
//! search over the cells it has seen; once it reaches the goal it keeps a
//! compressed start-to-goal route and replays it on every later run.
//!
//! ```ignore
//! let mut explorer = Explorer::new(ExploreConfig::astar());
//! while env.run_index() < 2 {
//!     explorer.drive(&mut env)?;
//! }
//! ```

mod config;
mod driver;
mod error;
mod steer;

pub use config::ExploreConfig;
pub use driver::{ExploreState, Explorer};
pub use error::ExploreError;
