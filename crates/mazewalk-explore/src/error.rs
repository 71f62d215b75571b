use mazewalk_paths::PathError;
use thiserror::Error;

/// Failures that end an exploration episode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExploreError {
    /// The frontier or the explored tree broke an invariant.
    #[error(transparent)]
    Path(#[from] PathError),
    /// A replay run started before the goal was ever found.
    #[error("run {run} has no final route to follow")]
    RouteUnavailable { run: u32 },
}
