//! Frontier priority queue for discovered-but-unexpanded cells.
//!
//! Entries are stored in a min-heap keyed by `(cost, insertion_order)`.
//! Lower costs are popped first. A new entry goes in right after the run of
//! strictly cheaper ones, ahead of any entry of equal cost, so among equal
//! costs the most recently discovered cell pops first. A cell can be queued
//! at most once.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use mazewalk_core::Point;

use crate::error::PathError;

/// A queued cell with its estimated total cost.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontierEntry {
    pub pos: Point,
    pub cost: f64,
}

#[derive(Debug)]
struct Slot {
    entry: FrontierEntry,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slot {}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps slots in `Reverse`. Newer slots sort
        // first among equal costs.
        self.entry
            .cost
            .total_cmp(&other.entry.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Ordered collection of frontier cells, lowest cost first.
#[derive(Debug, Default)]
pub struct FrontierQueue {
    heap: BinaryHeap<Reverse<Slot>>,
    queued: HashSet<Point>,
    seq: u64,
}

impl FrontierQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        self.heap.clear();
        self.queued.clear();
        self.seq = 0;
    }

    /// Queue `pos` at `cost`.
    ///
    /// Returns `false` and leaves the queue untouched when `pos` is already
    /// queued, whatever its cost. A new entry lands behind every queued
    /// entry with a strictly lower cost and ahead of the rest.
    pub fn insert(&mut self, pos: Point, cost: f64) -> bool {
        if !self.queued.insert(pos) {
            return false;
        }
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Slot {
            entry: FrontierEntry { pos, cost },
            seq,
        }));
        true
    }

    /// The lowest-cost entry, without removing it.
    pub fn peek_lowest(&self) -> Result<FrontierEntry, PathError> {
        self.heap
            .peek()
            .map(|Reverse(slot)| slot.entry)
            .ok_or(PathError::EmptyQueue)
    }

    /// Remove and return the lowest-cost entry.
    pub fn pop_lowest(&mut self) -> Result<FrontierEntry, PathError> {
        let Reverse(slot) = self.heap.pop().ok_or(PathError::EmptyQueue)?;
        self.queued.remove(&slot.entry.pos);
        Ok(slot.entry)
    }

    /// Whether `pos` is currently queued.
    pub fn contains(&self, pos: Point) -> bool {
        self.queued.contains(&pos)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Snapshot of the queue in pop order.
    pub fn entries(&self) -> Vec<FrontierEntry> {
        let mut slots: Vec<&Slot> = self.heap.iter().map(|Reverse(slot)| slot).collect();
        slots.sort();
        slots.into_iter().map(|slot| slot.entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn pops_lowest_first() {
        let mut q = FrontierQueue::new();
        q.insert(p(0, 0), 3.0);
        q.insert(p(1, 0), 1.0);
        q.insert(p(2, 0), 2.0);

        assert_eq!(q.pop_lowest().unwrap().pos, p(1, 0));
        assert_eq!(q.pop_lowest().unwrap().pos, p(2, 0));
        assert_eq!(q.pop_lowest().unwrap().pos, p(0, 0));
        assert_eq!(q.pop_lowest(), Err(PathError::EmptyQueue));
    }

    #[test]
    fn equal_costs_pop_newest_first() {
        let mut q = FrontierQueue::new();
        q.insert(p(0, 0), 1.0);
        q.insert(p(1, 0), 1.0);
        q.insert(p(2, 0), 0.5);
        q.insert(p(3, 0), 1.0);

        let order: Vec<Point> = q.entries().into_iter().map(|e| e.pos).collect();
        assert_eq!(order, vec![p(2, 0), p(3, 0), p(1, 0), p(0, 0)]);
        assert_eq!(q.peek_lowest().unwrap().pos, p(2, 0));
        q.pop_lowest().unwrap();
        assert_eq!(q.pop_lowest().unwrap().pos, p(3, 0));
    }

    /// Reference order: each entry is placed at the count of entries with a
    /// strictly lower cost.
    fn counted_insert_order(items: &[(Point, f64)]) -> Vec<Point> {
        let mut list: Vec<(Point, f64)> = Vec::new();
        for &(pos, cost) in items {
            if list.iter().any(|(q, _)| *q == pos) {
                continue;
            }
            let at = list.iter().filter(|(_, c)| *c < cost).count();
            list.insert(at, (pos, cost));
        }
        list.into_iter().map(|(pos, _)| pos).collect()
    }

    #[quickcheck]
    fn matches_counted_insert_order(items: Vec<(i8, i8, u8)>) -> bool {
        let items: Vec<(Point, f64)> = items
            .iter()
            .map(|(x, y, c)| (p(i32::from(*x), i32::from(*y)), f64::from(*c % 4)))
            .collect();
        let mut q = FrontierQueue::new();
        for &(pos, cost) in &items {
            q.insert(pos, cost);
        }
        let mut popped = Vec::new();
        while let Ok(entry) = q.pop_lowest() {
            popped.push(entry.pos);
        }
        popped == counted_insert_order(&items)
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut q = FrontierQueue::new();
        assert!(q.insert(p(4, 4), 5.0));
        assert!(q.insert(p(5, 4), 6.0));
        let before = q.entries();

        assert!(!q.insert(p(4, 4), 0.0));
        assert!(!q.insert(p(5, 4), 100.0));
        assert_eq!(q.len(), 2);
        assert_eq!(q.entries(), before);
    }

    #[test]
    fn popped_cell_can_be_queued_again() {
        let mut q = FrontierQueue::new();
        q.insert(p(1, 1), 1.0);
        q.pop_lowest().unwrap();
        assert!(!q.contains(p(1, 1)));
        assert!(q.insert(p(1, 1), 2.0));
    }

    #[test]
    fn peek_does_not_remove() {
        let mut q = FrontierQueue::new();
        assert_eq!(q.peek_lowest(), Err(PathError::EmptyQueue));
        q.insert(p(0, 1), 2.5);
        let head = q.peek_lowest().unwrap();
        assert_eq!(head, FrontierEntry { pos: p(0, 1), cost: 2.5 });
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn reset_clears() {
        let mut q = FrontierQueue::new();
        q.insert(p(0, 0), 1.0);
        q.insert(p(0, 1), 1.0);
        q.reset();
        assert!(q.is_empty());
        assert!(!q.contains(p(0, 0)));
        assert!(q.insert(p(0, 0), 1.0));
    }

    #[quickcheck]
    fn pop_order_is_non_decreasing(items: Vec<(i8, i8, u16)>) -> bool {
        let mut q = FrontierQueue::new();
        for (x, y, c) in &items {
            q.insert(p(i32::from(*x), i32::from(*y)), f64::from(*c) / 8.0);
        }
        let min = q.entries().first().map(|e| e.cost);
        if q.peek_lowest().ok().map(|e| e.cost) != min {
            return false;
        }
        let mut last = f64::NEG_INFINITY;
        while let Ok(entry) = q.pop_lowest() {
            if entry.cost < last {
                return false;
            }
            last = entry.cost;
        }
        true
    }

    #[quickcheck]
    fn duplicates_never_change_the_queue(items: Vec<(i8, i8, u16)>, again: usize) -> TestResult {
        if items.is_empty() {
            return TestResult::discard();
        }
        let mut q = FrontierQueue::new();
        for (x, y, c) in &items {
            q.insert(p(i32::from(*x), i32::from(*y)), f64::from(*c));
        }
        let before = q.entries();
        let (x, y, _) = items[again % items.len()];
        let inserted = q.insert(p(i32::from(x), i32::from(y)), -1.0);
        TestResult::from_bool(!inserted && q.entries() == before)
    }
}
