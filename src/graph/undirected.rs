use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{PrimInt, Unsigned};
use std::collections::HashMap;
use std::fmt::Debug;

/// An undirected graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Vertex identifiers in first-seen order
    names: Vec<String>,

    /// Identifier -> index into `names` and `adjacency`
    index: HashMap<String, usize>,

    /// Edges for each vertex: vertex_id -> [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of undirected edges added
    edge_count: usize,
}

impl<W> UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            names: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Returns true if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over vertex identifiers in insertion order
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

impl<W> Default for UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn vertex_count(&self) -> usize {
        self.names.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertex_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn vertex_name(&self, vertex: usize) -> Option<&str> {
        self.names.get(vertex).map(String::as_str)
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn add_vertex(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let new_id = self.names.len();
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), new_id);
        self.adjacency.push(Vec::new());
        new_id
    }

    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> (usize, usize) {
        let u = self.add_vertex(a);
        let v = self.add_vertex(b);

        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edge_count += 1;

        (u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_keep_first_seen_order() {
        let mut graph: UndirectedGraph<u64> = UndirectedGraph::new();
        graph.add_edge("C", "A", 1);
        graph.add_edge("B", "C", 2);

        let names: Vec<&str> = graph.vertex_names().collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(graph.vertex_index("B"), Some(2));
        assert_eq!(graph.vertex_name(1), Some("A"));
        assert_eq!(graph.vertex_name(3), None);
    }

    #[test]
    fn edges_are_stored_in_both_directions() {
        let mut graph: UndirectedGraph<u64> = UndirectedGraph::new();
        let (a, b) = graph.add_edge("A", "B", 7);

        assert!(graph.has_edge(a, b));
        assert!(graph.has_edge(b, a));
        assert_eq!(graph.get_edge_weight(b, a), Some(7));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph: UndirectedGraph<u64> = UndirectedGraph::new();
        let (a, b) = graph.add_edge("A", "B", 5);
        graph.add_edge("B", "A", 2);

        assert_eq!(graph.neighbors(a).count(), 2);
        assert_eq!(graph.get_edge_weight(a, b), Some(2));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn self_loop_is_stored() {
        let mut graph: UndirectedGraph<u64> = UndirectedGraph::new();
        let (a, _) = graph.add_edge("A", "A", 3);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![(a, 3), (a, 3)]);
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        let mut graph: UndirectedGraph<u64> = UndirectedGraph::new();
        graph.add_edge("a", "A", 1);
        assert_eq!(graph.vertex_count(), 2);
        assert_ne!(graph.vertex_index("a"), graph.vertex_index("A"));
    }
}
