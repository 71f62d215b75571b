//! Routes between arbitrary explored cells.
//!
//! The explored tree has no sideways edges, but every parent chain ends at
//! the root, so any two cells are joined through their lowest common
//! ancestor (LCA). Walking both chains upwards in lockstep, the first cell
//! seen twice is that ancestor.

use std::collections::HashSet;

use mazewalk_core::Point;

use crate::error::PathError;
use crate::tree::ExploredTree;

impl ExploredTree {
    /// The tree path from `source` to `destination`, both included.
    ///
    /// The result runs `source → … → LCA → … → destination` and visits the
    /// LCA exactly once. Consecutive cells are one orthogonal step apart
    /// whenever every parent link is.
    ///
    /// Fails with [`PathError::UnknownCell`] if either endpoint (or a cell on
    /// its chain) is not in the tree, and with
    /// [`PathError::NoCommonAncestor`] if the chains never meet within
    /// `len() + 1` steps.
    pub fn route_between(
        &self,
        source: Point,
        destination: Point,
    ) -> Result<Vec<Point>, PathError> {
        let no_meeting = PathError::NoCommonAncestor {
            origin: source,
            target: destination,
        };

        // Keyed by coordinate, shared by both walks.
        let mut seen: HashSet<Point> = HashSet::new();
        let mut up: Vec<Point> = Vec::new();
        let mut down: Vec<Point> = Vec::new();
        let mut a = Some(source);
        let mut b = Some(destination);
        let mut meeting = None;

        'walk: for _ in 0..=self.len() {
            if let Some(cell) = a {
                up.push(cell);
                if !seen.insert(cell) {
                    meeting = Some(cell);
                    break 'walk;
                }
                a = self.parent_of(cell)?.cell();
            }
            if let Some(cell) = b {
                down.push(cell);
                if !seen.insert(cell) {
                    meeting = Some(cell);
                    break 'walk;
                }
                b = self.parent_of(cell)?.cell();
            }
            if a.is_none() && b.is_none() {
                break;
            }
        }

        let lca = meeting.ok_or_else(|| no_meeting.clone())?;
        let i = up.iter().position(|c| *c == lca).ok_or_else(|| no_meeting.clone())?;
        let j = down.iter().position(|c| *c == lca).ok_or(no_meeting)?;

        up.truncate(i + 1);
        up.extend(down[..j].iter().rev());
        Ok(up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::{compress, expand};
    use crate::distance::manhattan;
    use crate::tree::Parent;
    use mazewalk_core::Direction;
    use quickcheck_macros::quickcheck;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    //        C
    //        |
    //  B --- A --- root
    fn forked() -> (ExploredTree, [Point; 4]) {
        let root = p(2, 1);
        let a = p(1, 1);
        let b = p(0, 1);
        let c = p(2, 0);
        let mut t = ExploredTree::new();
        t.insert(root, Parent::Root).unwrap();
        t.insert(a, Parent::Cell(root)).unwrap();
        t.insert(b, Parent::Cell(a)).unwrap();
        t.insert(c, Parent::Cell(root)).unwrap();
        (t, [root, a, b, c])
    }

    #[test]
    fn route_through_root() {
        let (t, [root, a, b, c]) = forked();
        assert_eq!(t.route_between(b, c).unwrap(), vec![b, a, root, c]);
        assert_eq!(t.route_between(c, b).unwrap(), vec![c, root, a, b]);
    }

    #[test]
    fn route_to_ancestor_and_descendant() {
        let (t, [root, a, b, _]) = forked();
        assert_eq!(t.route_between(b, root).unwrap(), vec![b, a, root]);
        assert_eq!(t.route_between(root, b).unwrap(), vec![root, a, b]);
        assert_eq!(t.route_between(a, b).unwrap(), vec![a, b]);
    }

    #[test]
    fn route_to_self() {
        let (t, [_, a, _, _]) = forked();
        assert_eq!(t.route_between(a, a).unwrap(), vec![a]);
    }

    #[test]
    fn route_below_a_shared_ancestor() {
        // root → (1,0) → (1,1) → {(0,1) → (0,2), (2,1) → (2,2) → (3,2)}
        let mut t = ExploredTree::new();
        t.insert(p(1, -1), Parent::Root).unwrap();
        t.insert(p(1, 0), Parent::Cell(p(1, -1))).unwrap();
        t.insert(p(1, 1), Parent::Cell(p(1, 0))).unwrap();
        t.insert(p(0, 1), Parent::Cell(p(1, 1))).unwrap();
        t.insert(p(0, 2), Parent::Cell(p(0, 1))).unwrap();
        t.insert(p(2, 1), Parent::Cell(p(1, 1))).unwrap();
        t.insert(p(2, 2), Parent::Cell(p(2, 1))).unwrap();
        t.insert(p(3, 2), Parent::Cell(p(2, 2))).unwrap();

        assert_eq!(
            t.route_between(p(0, 2), p(3, 2)).unwrap(),
            vec![p(0, 2), p(0, 1), p(1, 1), p(2, 1), p(2, 2), p(3, 2)]
        );
    }

    #[test]
    fn unknown_endpoint() {
        let (t, [root, ..]) = forked();
        assert_eq!(
            t.route_between(root, p(9, 9)),
            Err(PathError::UnknownCell(p(9, 9)))
        );
        assert_eq!(
            t.route_between(p(9, 9), root),
            Err(PathError::UnknownCell(p(9, 9)))
        );
    }

    #[test]
    fn disjoint_chains_have_no_common_ancestor() {
        let mut t = ExploredTree::new();
        t.parents.insert(p(0, 0), Parent::Root);
        t.parents.insert(p(0, 1), Parent::Cell(p(0, 0)));
        t.parents.insert(p(5, 5), Parent::Root);
        t.parents.insert(p(5, 6), Parent::Cell(p(5, 5)));
        assert_eq!(
            t.route_between(p(0, 1), p(5, 6)),
            Err(PathError::NoCommonAncestor {
                origin: p(0, 1),
                target: p(5, 6)
            })
        );
    }

    #[test]
    fn cyclic_chain_terminates() {
        let mut t = ExploredTree::new();
        t.parents.insert(p(0, 0), Parent::Cell(p(1, 0)));
        t.parents.insert(p(1, 0), Parent::Cell(p(0, 0)));
        t.parents.insert(p(7, 7), Parent::Root);
        assert!(matches!(
            t.route_between(p(0, 0), p(7, 7)),
            Err(PathError::NoCommonAncestor { .. })
        ));
    }

    /// Grow a tree by repeatedly stepping off a chosen existing cell.
    fn grow(moves: &[(u8, u8)]) -> (ExploredTree, Vec<Point>) {
        let mut t = ExploredTree::new();
        let mut cells = vec![Point::ZERO];
        t.insert(Point::ZERO, Parent::Root).unwrap();
        for (pick, dir) in moves {
            let from = cells[usize::from(*pick) % cells.len()];
            let to = from.step(Direction::ALL[usize::from(*dir) % 4]);
            if t.insert(to, Parent::Cell(from)).unwrap() {
                cells.push(to);
            }
        }
        (t, cells)
    }

    #[quickcheck]
    fn routes_are_simple_unit_step_paths(moves: Vec<(u8, u8)>, i: usize, j: usize) -> bool {
        let (t, cells) = grow(&moves);
        let from = cells[i % cells.len()];
        let to = cells[j % cells.len()];
        let route = t.route_between(from, to).unwrap();

        let distinct: HashSet<Point> = route.iter().copied().collect();
        route.first() == Some(&from)
            && route.last() == Some(&to)
            && distinct.len() == route.len()
            && route.windows(2).all(|w| manhattan(w[0], w[1]) == 1)
    }

    #[quickcheck]
    fn compressed_routes_expand_back(moves: Vec<(u8, u8)>, i: usize, j: usize) -> bool {
        let (t, cells) = grow(&moves);
        let from = cells[i % cells.len()];
        let to = cells[j % cells.len()];
        let route = t.route_between(from, to).unwrap();
        let waypoints = compress(&route, to);
        waypoints.len() <= route.len() && expand(&waypoints) == route
    }

    #[quickcheck]
    fn root_route_length_matches_path_length(moves: Vec<(u8, u8)>, i: usize) -> bool {
        let (t, cells) = grow(&moves);
        let cell = cells[i % cells.len()];
        let route = t.route_between(Point::ZERO, cell).unwrap();
        t.path_length(cell) == Ok(route.len() as i32 - 1)
    }
}
