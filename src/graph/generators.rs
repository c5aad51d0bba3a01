use crate::graph::{MutableGraph, UndirectedGraph};
use rand::prelude::*;

/// A generated edge: (vertex, vertex, weight)
pub type GeneratedEdge = (String, String, u64);

/// Spreadsheet-style vertex label: 0 -> "A", 25 -> "Z", 26 -> "AA", ...
///
/// Vertex 0 is always "A", the default start vertex.
pub fn vertex_label(mut index: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// Generates about `edge_factor * n` random edges over `n` vertices
///
/// Weights are drawn from `0..=max_weight`. Parallel edges and self-loops may
/// occur and some vertices may end up isolated (absent from the edge list).
pub fn generate_random_edges<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> Vec<GeneratedEdge> {
    if n == 0 {
        return Vec::new();
    }

    let num_edges = (edge_factor * n as f64) as usize;
    let mut edges = Vec::with_capacity(num_edges);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight);
        edges.push((vertex_label(u), vertex_label(v), weight));
    }

    edges
}

/// Generates a connected graph: a random spanning tree over `n` vertices plus
/// `extra_edges` random edges
pub fn generate_connected_edges<R: Rng>(
    n: usize,
    extra_edges: usize,
    max_weight: u64,
    rng: &mut R,
) -> Vec<GeneratedEdge> {
    let mut edges = Vec::with_capacity(n.saturating_sub(1) + extra_edges);

    // Attach every new vertex to one already in the tree
    for v in 1..n {
        let u = rng.gen_range(0..v);
        let weight = rng.gen_range(1..=max_weight.max(1));
        edges.push((vertex_label(u), vertex_label(v), weight));
    }

    if n > 0 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            let weight = rng.gen_range(1..=max_weight.max(1));
            edges.push((vertex_label(u), vertex_label(v), weight));
        }
    }

    edges
}

/// Generates a `width` x `height` grid with unit weights (4-connectivity)
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<u64> {
    let mut graph = UndirectedGraph::with_capacity(width * height);
    let label = |x: usize, y: usize| vertex_label(y * width + x);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(&label(x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(&label(x, y), &label(x + 1, y), 1);
            }
            if y + 1 < height {
                graph.add_edge(&label(x, y), &label(x, y + 1), 1);
            }
        }
    }

    graph
}

/// Builds a graph from generated edges
pub fn build_graph(edges: &[GeneratedEdge]) -> UndirectedGraph<u64> {
    let mut graph = UndirectedGraph::new();
    for (a, b, weight) in edges {
        graph.add_edge(a, b, *weight);
    }
    graph
}

/// Renders generated edges in the edge-list file format
pub fn to_edge_list(edges: &[GeneratedEdge]) -> String {
    let mut out = String::new();
    for (a, b, weight) in edges {
        out.push_str(&format!("{} {} {}\n", a, b, weight));
    }
    out
}
