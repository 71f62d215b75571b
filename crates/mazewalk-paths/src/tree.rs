//! Spanning tree of explored cells.
//!
//! Every explored cell points at the cell it was discovered from. All
//! parent chains end at the single root (the start cell), so any two
//! explored cells are connected through the tree; see
//! [`ExploredTree::route_between`].

use std::collections::HashMap;

use mazewalk_core::Point;

use crate::distance::manhattan;
use crate::error::PathError;

/// Parent link of an explored cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parent {
    /// The cell is the root of the tree.
    Root,
    /// The cell was discovered from this neighbour.
    Cell(Point),
}

impl Parent {
    /// The parent coordinate, or `None` for the root.
    #[inline]
    pub fn cell(self) -> Option<Point> {
        match self {
            Self::Root => None,
            Self::Cell(p) => Some(p),
        }
    }
}

/// Cell → parent mapping with O(1) lookup.
///
/// The tree only grows during an episode: a cell's parent is fixed by its
/// first insertion and never rewritten.
#[derive(Debug, Clone)]
pub struct ExploredTree {
    pub(crate) parents: HashMap<Point, Parent>,
    root: Option<Point>,
    path_weight: f64,
}

impl Default for ExploredTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ExploredTree {
    /// Create an empty tree with a path weight of 1.
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
            root: None,
            path_weight: 1.0,
        }
    }

    /// Forget every cell. The path weight is kept.
    pub fn reset(&mut self) {
        self.parents.clear();
        self.root = None;
    }

    /// Register `cell` under `parent`.
    ///
    /// Returns `Ok(false)` without touching the tree if `cell` is already
    /// known. [`Parent::Root`] is only accepted while the tree is empty, and
    /// a [`Parent::Cell`] must name a cell that is already in the tree.
    pub fn insert(&mut self, cell: Point, parent: Parent) -> Result<bool, PathError> {
        if self.parents.contains_key(&cell) {
            return Ok(false);
        }
        match parent {
            Parent::Root => {
                if self.root.is_some() {
                    return Err(PathError::RootAlreadySet(cell));
                }
                self.root = Some(cell);
            }
            Parent::Cell(p) => {
                if !self.parents.contains_key(&p) {
                    return Err(PathError::UnknownCell(p));
                }
            }
        }
        self.parents.insert(cell, parent);
        Ok(true)
    }

    /// Parent link of `cell`.
    #[inline]
    pub fn parent_of(&self, cell: Point) -> Result<Parent, PathError> {
        self.parents
            .get(&cell)
            .copied()
            .ok_or(PathError::UnknownCell(cell))
    }

    /// The root cell, once one has been inserted.
    #[inline]
    pub fn root(&self) -> Option<Point> {
        self.root
    }

    #[inline]
    pub fn contains(&self, cell: Point) -> bool {
        self.parents.contains_key(&cell)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    #[inline]
    pub fn path_weight(&self) -> f64 {
        self.path_weight
    }

    /// Scale applied by [`accumulated_path_cost`](Self::accumulated_path_cost).
    pub fn set_path_weight(&mut self, weight: f64) {
        self.path_weight = weight;
    }

    /// Unscaled distance travelled from the root to `cell` along the tree.
    ///
    /// The walk takes at most `len()` steps, so a corrupted (cyclic) chain
    /// yields a truncated sum instead of looping.
    pub fn path_length(&self, cell: Point) -> Result<i32, PathError> {
        let mut length = 0;
        let mut cur = cell;
        let mut parent = self.parent_of(cur)?;
        for _ in 0..self.len() {
            let Parent::Cell(p) = parent else {
                break;
            };
            length += manhattan(cur, p);
            cur = p;
            parent = self.parent_of(cur)?;
        }
        Ok(length)
    }

    /// Distance from the root to `cell`, scaled by the path weight.
    pub fn accumulated_path_cost(&self, cell: Point) -> Result<f64, PathError> {
        Ok(f64::from(self.path_length(cell)?) * self.path_weight)
    }
}
