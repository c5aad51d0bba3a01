//! The vertex -> distance mapping handed back to callers, and its renderings.

use std::fmt::{self, Debug, Display};

use num_traits::{PrimInt, Unsigned};
use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::distance::Distance;
use crate::graph::Graph;
use crate::Result;

/// One row of a [`DistanceMap`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceEntry<W> {
    pub vertex: String,
    pub distance: Distance<W>,
}

/// Distances from a start vertex to every vertex of a graph, in the graph's
/// vertex insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMap<W> {
    start: String,
    distances: Vec<DistanceEntry<W>>,
}

impl<W> DistanceMap<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Pairs every vertex of `graph` with its distance in `result`
    pub fn from_result<G: Graph<W>>(graph: &G, result: &ShortestPathResult<W>) -> Self {
        let distances = (0..graph.vertex_count())
            .map(|v| DistanceEntry {
                vertex: graph.vertex_name(v).unwrap_or_default().to_owned(),
                distance: result.distance(v),
            })
            .collect();

        DistanceMap {
            start: graph
                .vertex_name(result.source)
                .unwrap_or_default()
                .to_owned(),
            distances,
        }
    }

    /// Distance to `vertex`, or `None` if the vertex is not in the graph
    pub fn get(&self, vertex: &str) -> Option<Distance<W>> {
        self.distances
            .iter()
            .find(|entry| entry.vertex == vertex)
            .map(|entry| entry.distance)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Distance<W>)> + '_ {
        self.distances
            .iter()
            .map(|entry| (entry.vertex.as_str(), entry.distance))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|entry| entry.distance.is_reachable())
            .count()
    }
}

impl<W> DistanceMap<W>
where
    W: PrimInt + Unsigned + Debug + Serialize,
{
    /// Pretty-printed JSON: `{"start": .., "distances": [{"vertex": .., "distance": n|null}]}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<W> Display for DistanceMap<W>
where
    W: PrimInt + Unsigned + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shortest distances from node {} :", self.start)?;
        for (vertex, distance) in self.iter() {
            writeln!(f, "{}: {}", vertex, distance)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
    use crate::graph::{MutableGraph, UndirectedGraph};

    fn disconnected() -> DistanceMap<u64> {
        let mut graph = UndirectedGraph::new();
        graph.add_edge("A", "B", 4);
        graph.add_edge("C", "D", 1);
        let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();
        DistanceMap::from_result(&graph, &result)
    }

    #[test]
    fn text_lists_vertices_in_insertion_order() {
        let text = disconnected().to_string();
        assert_eq!(
            text,
            "Shortest distances from node A :\nA: 0\nB: 4\nC: inf\nD: inf\n"
        );
    }

    #[test]
    fn json_uses_null_for_unreachable() {
        let json: serde_json::Value = serde_json::from_str(&disconnected().to_json().unwrap()).unwrap();
        assert_eq!(json["start"], "A");
        assert_eq!(json["distances"][1]["vertex"], "B");
        assert_eq!(json["distances"][1]["distance"], 4);
        assert!(json["distances"][3]["distance"].is_null());
    }

    #[test]
    fn lookup_distinguishes_unknown_from_unreachable() {
        let map = disconnected();
        assert_eq!(map.get("C"), Some(Distance::Unreachable));
        assert_eq!(map.get("E"), None);
        assert_eq!(map.reachable_count(), 2);
        assert_eq!(map.len(), 4);
        assert_eq!(map.start(), "A");
    }
}
