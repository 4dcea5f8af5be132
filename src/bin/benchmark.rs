use std::time::{Duration, Instant};

use dsssp::algorithm::{bellman_ford::BellmanFord, distributed::DistributedBellmanFord, ShortestPathAlgorithm};
use dsssp::graph::generators::{generate_dag, generate_random};
use dsssp::graph::{DirectedGraph, Graph};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &DirectedGraph<i64>, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<i64, DirectedGraph<i64>>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("  - {} failed: {}", name, e);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    if result.negative_cycle_detected() {
        println!("  - Negative cycle detected in {:?}", duration);
    } else {
        println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);
    }

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![100, 1_000, 5_000, 20_000];
    let edge_factor = 3.0;

    println!("=====================================================");
    println!("Benchmark: sequential vs distributed Bellman-Ford");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let sequential = BellmanFord::new();
    let distributed = DistributedBellmanFord::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        for (kind, graph) in [
            ("positive", generate_random(size, edge_factor, 1, 100, size as u64)),
            ("dag", generate_dag(size, edge_factor, size as u64)),
        ] {
            println!("\nGenerated {} graph: {} vertices, {} edges", kind, graph.vertex_count(), graph.edge_count());

            let sequential_time = benchmark_algorithm("Bellman-Ford", &sequential, &graph, 0);
            let distributed_time = benchmark_algorithm("Distributed", &distributed, &graph, 0);

            results.push((size, kind, sequential_time, distributed_time));
        }
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15}", "Vertices", "Graph", "Sequential (ms)", "Distributed (ms)");
    println!("-----------------------------------------------------");

    for (size, kind, sequential_time, distributed_time) in &results {
        println!(
            "{:<10} | {:<10} | {:<15} | {:<15}",
            size,
            kind,
            sequential_time.as_millis(),
            distributed_time.as_millis()
        );
    }
}
