use std::fmt::Debug;
use num_traits::{PrimInt, Unsigned};

/// Trait representing a weighted undirected graph with string-named vertices
///
/// Vertices are interned to dense indices `0..vertex_count()` in the order
/// they were first seen. Algorithms work on indices; names are only needed at
/// the edges of the system (loading, start lookup, reporting).
pub trait Graph<W>: Debug
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Looks up the index of a vertex by its identifier
    fn vertex_index(&self, name: &str) -> Option<usize>;

    /// Returns the identifier of the vertex at `vertex`
    fn vertex_name(&self, vertex: usize) -> Option<&str>;

    /// Returns an iterator over the (neighbor, weight) pairs of a vertex
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).any(|(target, _)| target == to)
    }

    /// Gets the lightest weight among the edges between two vertices
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbors(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for building a graph edge by edge
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the index of `name`, inserting it with no neighbors if absent
    fn add_vertex(&mut self, name: &str) -> usize;

    /// Adds an undirected edge, creating either endpoint if needed.
    /// Parallel edges and self-loops are kept as given.
    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> (usize, usize);
}
