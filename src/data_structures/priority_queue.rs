use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of (priority, vertex) entries for shortest path search
///
/// Entries are never updated in place. A vertex whose distance improves is
/// pushed again, and callers drop outdated entries when they pop them.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap, reversed into a min-heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a frontier holding a single entry
    pub fn seeded(vertex: V, priority: P) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((priority, vertex)));
        Frontier { heap }
    }

    /// Adds `vertex` with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_priority_first() {
        let mut frontier = Frontier::seeded(1usize, 30u64);
        frontier.push(2, 10);
        frontier.push(3, 20);

        assert_eq!(frontier.pop(), Some((2, 10)));
        assert_eq!(frontier.pop(), Some((3, 20)));
        assert_eq!(frontier.pop(), Some((1, 30)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn keeps_duplicate_vertices() {
        let mut frontier = Frontier::seeded(4usize, 9u64);
        frontier.push(4, 3);

        assert_eq!(frontier.pop(), Some((4, 3)));
        assert_eq!(frontier.pop(), Some((4, 9)));
        assert_eq!(frontier.pop(), None);
    }
}
