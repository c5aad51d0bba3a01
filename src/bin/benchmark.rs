use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use edgelist_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use edgelist_sssp::graph::generators::{build_graph, generate_connected_edges};
use edgelist_sssp::graph::{Graph, UndirectedGraph};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &UndirectedGraph<u64>, source: &str) -> edgelist_sssp::Result<Duration>
where
    A: ShortestPathAlgorithm<u64, UndirectedGraph<u64>>,
{
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    Ok(duration)
}

fn main() -> edgelist_sssp::Result<()> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    // Extra random edges per vertex on top of the spanning tree
    let edge_factor = 2;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random connected graphs");
    println!("Edge factor: {} extra edges per vertex", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let edges = generate_connected_edges(size, size * edge_factor, 100, &mut rng);
        let graph = build_graph(&edges);

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let duration = benchmark_algorithm(&dijkstra, &graph, "A")?;
        results.push((size, graph.edge_count(), duration));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15}", "Vertices", "Edges", "Dijkstra (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, duration) in &results {
        println!("{:<10} | {:<10} | {:<15.2}", size, edges, duration.as_secs_f64() * 1000.0);
    }

    Ok(())
}
