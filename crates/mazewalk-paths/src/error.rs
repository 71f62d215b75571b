use mazewalk_core::Point;
use thiserror::Error;

/// Invariant violations raised by the frontier queue and the explored tree.
///
/// None of these are expected while exploring a well-formed maze; each one
/// ends the current episode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Peek or pop on an empty frontier: the reachable maze is exhausted.
    #[error("frontier queue is empty")]
    EmptyQueue,
    /// Parent lookup on a cell that was never inserted into the tree.
    #[error("cell {0} is not in the explored tree")]
    UnknownCell(Point),
    /// The two parent chains never met.
    #[error("no common ancestor between {origin} and {target}")]
    NoCommonAncestor { origin: Point, target: Point },
    /// A second root was offered to a non-empty tree.
    #[error("explored tree already has a root, refusing {0} as another")]
    RootAlreadySet(Point),
}
