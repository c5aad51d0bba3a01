use std::fmt::Debug;
use log::warn;
use num_traits::{PrimInt, Unsigned};
use crate::distance::Distance;
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex index
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Distance to `vertex`; out-of-range indices count as unreachable
    pub fn distance(&self, vertex: usize) -> Distance<W> {
        self.distances
            .get(vertex)
            .copied()
            .flatten()
            .into()
    }

    /// Vertices on the shortest path from the source to `target`, both ends
    /// included, or `None` if `target` is unreachable
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.predecessors.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;

        // Walk predecessors back to the source
        while current != self.source {
            path.push(current);

            // A tree path can't be longer than the vertex count
            if path.len() > self.predecessors.len() {
                warn!("predecessor chain from {} does not reach the source", target);
                return None;
            }

            current = self.predecessors[current]?;
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }

    /// Number of vertices with a finite distance, source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from the vertex named `source` to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
