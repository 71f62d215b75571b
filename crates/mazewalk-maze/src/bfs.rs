use std::collections::VecDeque;

use mazewalk_core::Point;

use crate::grid::Grid;

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

impl Grid {
    /// Breadth-first distance map from `source` over floor tiles, indexed
    /// row-major. Walls and cells not reached hold [`UNREACHABLE`].
    pub fn bfs_map(&self, source: Point) -> Vec<i32> {
        let bounds = self.bounds();
        let width = bounds.width();
        let idx = |p: Point| (p.y * width + p.x) as usize;
        let mut map = vec![UNREACHABLE; bounds.len()];
        if !self.is_floor(source) {
            return map;
        }

        let mut queue: VecDeque<Point> = VecDeque::new();
        map[idx(source)] = 0;
        queue.push_back(source);

        while let Some(cur) = queue.pop_front() {
            let next_dist = map[idx(cur)] + 1;
            for np in cur.neighbors_4() {
                if !self.is_floor(np) || map[idx(np)] != UNREACHABLE {
                    continue;
                }
                map[idx(np)] = next_dist;
                queue.push_back(np);
            }
        }

        map
    }

    /// Number of steps on the shortest path from `from` to `to`, or `None`
    /// if `to` cannot be reached.
    pub fn shortest_distance(&self, from: Point, to: Point) -> Option<i32> {
        if !self.is_floor(to) {
            return None;
        }
        let d = self.bfs_map(from)[(to.y * self.width() + to.x) as usize];
        (d != UNREACHABLE).then_some(d)
    }
}
