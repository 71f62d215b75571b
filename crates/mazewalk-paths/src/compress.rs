//! Lossless run-length compression of routes.
//!
//! A route of unit orthogonal steps is reduced to the cells where it turns:
//! walking straight between consecutive waypoints reproduces every cell of
//! the original route.

use mazewalk_core::Point;

/// Axis of the run currently being extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    /// Only the anchor so far.
    Open,
    /// Cells share the anchor's row.
    Row,
    /// Cells share the anchor's column.
    Column,
}

impl Run {
    fn starting(anchor: Point, next: Point) -> Self {
        if next.y == anchor.y {
            Self::Row
        } else if next.x == anchor.x {
            Self::Column
        } else {
            Self::Open
        }
    }

    fn extends(self, anchor: Point, cell: Point) -> bool {
        match self {
            Self::Open => false,
            Self::Row => cell.y == anchor.y,
            Self::Column => cell.x == anchor.x,
        }
    }
}

/// Collapse maximal straight runs of `route` into single waypoints, then
/// append `terminal`.
///
/// The output starts with the first route cell and always contains the
/// last one. `terminal` is appended unless it equals that last waypoint,
/// so a route already ending at the terminal gets no duplicate. An empty
/// route compresses to `[terminal]`.
pub fn compress(route: &[Point], terminal: Point) -> Vec<Point> {
    let Some((&first, rest)) = route.split_first() else {
        return vec![terminal];
    };

    let mut waypoints = vec![first];
    let mut anchor = first;
    let mut last = first;
    let mut run = Run::Open;

    for &cell in rest {
        if run == Run::Open {
            run = Run::starting(anchor, cell);
        } else if !run.extends(anchor, cell) {
            // The run ended on the previous cell.
            waypoints.push(last);
            anchor = last;
            run = Run::starting(anchor, cell);
        }
        last = cell;
    }

    if waypoints.last() != Some(&last) {
        waypoints.push(last);
    }
    if waypoints.last() != Some(&terminal) {
        waypoints.push(terminal);
    }
    waypoints
}

/// Interpolate straight lines between consecutive waypoints.
///
/// Inverse of [`compress`] for routes of unit orthogonal steps. Unaligned
/// waypoint pairs are joined by moving along x first, then y.
pub fn expand(waypoints: &[Point]) -> Vec<Point> {
    let Some(&first) = waypoints.first() else {
        return Vec::new();
    };
    let mut cells = vec![first];
    let mut cur = first;
    for &to in &waypoints[1..] {
        while cur != to {
            if cur.x != to.x {
                cur.x += (to.x - cur.x).signum();
            } else {
                cur.y += (to.y - cur.y).signum();
            }
            cells.push(cur);
        }
    }
    cells
}
