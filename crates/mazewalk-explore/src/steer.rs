use mazewalk_core::{Direction, Point};
use mazewalk_paths::euclidean;

/// Tie-break order when several neighbours are equally close.
const PREFERENCE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::West,
    Direction::South,
];

/// The direction whose neighbour of `from` is closest to `to` in a straight
/// line, or `None` when already there.
pub fn toward(from: Point, to: Point) -> Option<Direction> {
    if from == to {
        return None;
    }
    let mut best = PREFERENCE[0];
    let mut best_dist = euclidean(from.step(best), to);
    for dir in &PREFERENCE[1..] {
        let d = euclidean(from.step(*dir), to);
        if d < best_dist {
            best = *dir;
            best_dist = d;
        }
    }
    Some(best)
}
