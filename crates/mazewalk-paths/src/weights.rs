//! Frontier cost weighting.

/// Weights combining the heuristic estimate and the accumulated path cost
/// into a frontier priority.
///
/// | Preset | `heuristic` | `path` | Behaviour |
/// |---|---|---|---|
/// | [`ASTAR`](Self::ASTAR) | √2 | 1 | A*-like |
/// | [`GREEDY`](Self::GREEDY) | 1 | 0 | greedy best-first |
/// | [`DIJKSTRA`](Self::DIJKSTRA) | 0 | 1 | uniform cost |
/// | [`CORRIDOR`](Self::CORRIDOR) | 0.1 | 0.01 | fast corridor sweeps |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostWeights {
    /// Multiplier on the straight-line distance to the goal.
    pub heuristic: f64,
    /// Multiplier on the distance travelled from the root.
    pub path: f64,
}

impl CostWeights {
    pub const ASTAR: Self = Self {
        heuristic: std::f64::consts::SQRT_2,
        path: 1.0,
    };
    pub const GREEDY: Self = Self {
        heuristic: 1.0,
        path: 0.0,
    };
    pub const DIJKSTRA: Self = Self {
        heuristic: 0.0,
        path: 1.0,
    };
    pub const CORRIDOR: Self = Self {
        heuristic: 0.1,
        path: 0.01,
    };

    /// Frontier priority from a raw heuristic distance and a path cost that
    /// is already scaled by [`path`](Self::path).
    #[inline]
    pub fn score(&self, heuristic_distance: f64, path_cost: f64) -> f64 {
        self.heuristic * heuristic_distance + path_cost
    }
}

impl Default for CostWeights {
    fn default() -> Self {
        Self::ASTAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_combines_terms() {
        let w = CostWeights {
            heuristic: 2.0,
            path: 0.5,
        };
        assert_eq!(w.score(3.0, 4.0), 10.0);
        assert_eq!(CostWeights::GREEDY.score(3.0, 0.0), 3.0);
        assert_eq!(CostWeights::DIJKSTRA.score(100.0, 4.0), 4.0);
    }

    #[test]
    fn default_is_astar() {
        assert_eq!(CostWeights::default(), CostWeights::ASTAR);
    }
}
