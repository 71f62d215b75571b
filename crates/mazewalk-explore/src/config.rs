//! Explorer configuration.

use mazewalk_paths::CostWeights;

/// Frontier weighting used while mapping the maze.
///
/// With `adaptive` set, the weights are picked per tick from the number of
/// walls around the agent: [`junction`](Self::junction) at crossings,
/// [`corridor`](Self::corridor) between two walls, and whatever was in use
/// before at dead ends. Without it, `junction` is used throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExploreConfig {
    pub junction: CostWeights,
    pub corridor: CostWeights,
    pub adaptive: bool,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            junction: CostWeights::ASTAR,
            corridor: CostWeights::CORRIDOR,
            adaptive: true,
        }
    }
}

impl ExploreConfig {
    /// A*-like junctions with fast corridor sweeps.
    pub fn astar() -> Self {
        Self::default()
    }

    /// Pure greedy best-first: heuristic only, no corridor switching.
    pub fn greedy() -> Self {
        Self::fixed(CostWeights::GREEDY)
    }

    /// Uniform-cost: travelled distance only, no corridor switching.
    pub fn dijkstra() -> Self {
        Self::fixed(CostWeights::DIJKSTRA)
    }

    /// Use `weights` everywhere.
    pub fn fixed(weights: CostWeights) -> Self {
        Self {
            junction: weights,
            corridor: weights,
            adaptive: false,
        }
    }

    /// Weights for a cell surrounded by `walls` walls, or `None` to keep
    /// the current ones.
    pub fn weights_for(&self, walls: usize) -> Option<CostWeights> {
        if !self.adaptive {
            return Some(self.junction);
        }
        match walls {
            0 | 1 => Some(self.junction),
            2 => Some(self.corridor),
            _ => None,
        }
    }
}
