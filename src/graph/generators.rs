use crate::graph::{DirectedGraph, Graph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
///
/// Weights are drawn uniformly from `min_weight..=max_weight`, skipping 0.
/// Vertex 0 is linked to every other vertex through a chain of edges so the
/// whole graph is reachable from it.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    min_weight: i64,
    max_weight: i64,
    seed: u64,
) -> DirectedGraph<i64> {
    assert!(n > 0, "n must be positive");
    assert!(min_weight <= max_weight, "empty weight range");
    assert!(min_weight != 0 || max_weight != 0, "weight range must contain a non-zero value");

    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 1..n {
        let weight = nonzero(&mut rng, min_weight, max_weight);
        graph.add_edge(v - 1, v, weight);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = nonzero(&mut rng, min_weight, max_weight);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a random DAG over `n` vertices in topological order 0..n.
///
/// Edges only point from lower to higher ids, so negative weights can never
/// form a cycle. Every vertex is reachable from 0.
pub fn generate_dag(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<i64> {
    assert!(n > 0, "n must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 1..n {
        let u = rng.gen_range(0..v);
        graph.add_edge(u, v, nonzero(&mut rng, -20, 50));
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            let (u, v) = if a < b { (a, b) } else { (b, a) };
            graph.add_edge(u, v, nonzero(&mut rng, -20, 50));
        }
    }

    graph
}

/// Generates a `width x height` grid with edges in all four directions
pub fn generate_grid(width: usize, height: usize, seed: u64) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let mut rng = StdRng::seed_from_u64(seed);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            if x > 0 {
                graph.add_edge(current, get_index(x - 1, y), rng.gen_range(1..10));
            }
            if x + 1 < width {
                graph.add_edge(current, get_index(x + 1, y), rng.gen_range(1..10));
            }
            if y > 0 {
                graph.add_edge(current, get_index(x, y - 1), rng.gen_range(1..10));
            }
            if y + 1 < height {
                graph.add_edge(current, get_index(x, y + 1), rng.gen_range(1..10));
            }
        }
    }

    graph
}

/// Closes `cycle` into a cycle whose total weight is `total` (must be negative).
///
/// Existing edges between consecutive cycle vertices are overwritten.
pub fn plant_negative_cycle(graph: &mut DirectedGraph<i64>, cycle: &[usize], total: i64) {
    assert!(cycle.len() >= 2, "a cycle needs at least two vertices");
    assert!(total < 0, "total must be negative");
    assert!(cycle.iter().all(|&v| graph.has_vertex(v)), "cycle vertex out of range");

    let hops = cycle.len() as i64;
    // All but the closing edge weigh 1; the closing edge makes up the rest
    for pair in cycle.windows(2) {
        graph.add_edge(pair[0], pair[1], 1);
    }
    graph.add_edge(cycle[cycle.len() - 1], cycle[0], total - (hops - 1));
}

fn nonzero(rng: &mut StdRng, low: i64, high: i64) -> i64 {
    loop {
        let weight = rng.gen_range(low..=high);
        if weight != 0 {
            return weight;
        }
    }
}
