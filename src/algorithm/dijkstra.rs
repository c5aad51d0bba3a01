use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{PrimInt, Unsigned};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazily pruned binary heap
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the search from a vertex index
    pub fn compute_from_index<W, G>(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>
    where
        W: PrimInt + Unsigned + Debug,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::AlgorithmError(format!(
                "source index {} out of range for {} vertices",
                source,
                graph.vertex_count()
            )));
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut frontier = Frontier::seeded(source, W::zero());
        let mut settled = 0usize;
        let mut stale = 0usize;
        // Edges whose sum overflowed into a vertex that had no distance yet
        let mut overflowed: Vec<(usize, usize)> = Vec::new();

        while let Some((u, dist_u)) = frontier.pop() {
            // Skip entries superseded by a shorter path
            if let Some(best) = distances[u] {
                if dist_u > best {
                    stale += 1;
                    continue;
                }
            }
            settled += 1;

            for (v, weight) in graph.neighbors(u) {
                // An overflowed sum can't improve anything; another path may still reach v
                let candidate = match dist_u.checked_add(&weight) {
                    Some(candidate) => candidate,
                    None => {
                        if distances[v].is_none() {
                            overflowed.push((u, v));
                        }
                        continue;
                    }
                };

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    trace!("relaxed vertex {} to {:?}", v, candidate);
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                }
            }
        }

        debug!(
            "dijkstra from vertex {}: {} settled, {} stale entries skipped",
            source, settled, stale
        );

        // Only an error if no representable path reached the vertex
        if let Some(&(u, v)) = overflowed.iter().find(|&&(_, v)| distances[v].is_none()) {
            return Err(Error::AlgorithmError(format!(
                "distance overflow relaxing edge {} -> {}",
                graph.vertex_name(u).unwrap_or("?"),
                graph.vertex_name(v).unwrap_or("?")
            )));
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPathResult<W>> {
        let index = graph
            .vertex_index(source)
            .ok_or_else(|| Error::UnknownStartVertex(source.to_owned()))?;
        self.compute_from_index(graph, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, MutableGraph, UndirectedGraph};

    fn graph_of(edges: &[(&str, &str, u64)]) -> UndirectedGraph<u64> {
        let mut graph = UndirectedGraph::new();
        for &(a, b, w) in edges {
            graph.add_edge(a, b, w);
        }
        graph
    }

    #[test]
    fn indirect_path_beats_direct_edge() {
        let graph = graph_of(&[("A", "B", 1), ("B", "C", 2), ("A", "C", 5)]);
        let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(1), Some(3)]);
        assert_eq!(result.predecessors, vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn zero_weight_edges_are_followed() {
        let graph = graph_of(&[("A", "B", 0), ("B", "C", 0)]);
        let result = Dijkstra::new().compute_shortest_paths(&graph, "C").unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(0), Some(0)]);
    }

    #[test]
    fn unknown_start_is_an_error() {
        let graph = graph_of(&[("A", "B", 1)]);
        let err = Dijkstra::new().compute_shortest_paths(&graph, "Z").unwrap_err();
        assert!(matches!(err, Error::UnknownStartVertex(ref v) if v == "Z"));
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let graph = graph_of(&[("A", "B", 1)]);
        assert!(Dijkstra::new().compute_from_index(&graph, 2).is_err());
    }

    #[test]
    fn overflow_is_reported() {
        let mut graph: UndirectedGraph<u8> = UndirectedGraph::new();
        graph.add_edge("A", "B", 200);
        graph.add_edge("B", "C", 100);
        let err = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap_err();
        assert!(matches!(err, Error::AlgorithmError(_)));
    }

    #[test]
    fn overflowing_edge_does_not_hide_shorter_path() {
        let graph = graph_of(&[("A", "B", 10), ("B", "C", u64::MAX), ("A", "D", 20), ("D", "C", 1)]);
        let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

        let c = graph.vertex_index("C").unwrap();
        let d = graph.vertex_index("D").unwrap();
        assert_eq!(result.distances[c], Some(21));
        assert_eq!(result.predecessors[c], Some(d));
    }
}
