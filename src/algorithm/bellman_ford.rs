use std::collections::VecDeque;

use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic sequential Bellman-Ford.
///
/// Serves as the oracle for the distributed protocol. Vertices whose distance
/// can be driven down forever by a negative cycle end at
/// `Distance::NegativeInfinity`, as do vertices whose distance would fall
/// below `W::min_value()`.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Distance<W>> = vec![Distance::Unreachable; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Distance::Finite(W::zero());

        // n - 1 rounds settle every simple path
        for _ in 1..n {
            let mut changed = false;
            for u in 0..n {
                let Some(dist_u) = distances[u].finite() else { continue };
                for (v, weight) in graph.outgoing_edges(u) {
                    // Underflow is left for the cycle pass below
                    let candidate = match dist_u.checked_add(&weight) {
                        Some(candidate) => candidate,
                        None if weight > W::zero() => W::max_value(),
                        None => continue,
                    };
                    if v != source && distances[v].is_improved_by(candidate) {
                        distances[v] = Distance::Finite(candidate);
                        predecessors[v] = Some(u);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        // Anything still relaxable sits behind a negative cycle; so does
        // everything reachable from it.
        let mut queue = VecDeque::new();
        for u in 0..n {
            let Some(dist_u) = distances[u].finite() else { continue };
            for (v, weight) in graph.outgoing_edges(u) {
                let relaxable = match (dist_u.checked_add(&weight), distances[v]) {
                    (None, _) => weight < W::zero(),
                    (Some(candidate), _) if v == source => candidate < W::zero(),
                    (Some(candidate), Distance::Finite(dist_v)) => candidate < dist_v,
                    _ => false,
                };
                if relaxable {
                    queue.push_back(v);
                }
            }
        }
        while let Some(v) = queue.pop_front() {
            if distances[v].is_negative_infinity() {
                continue;
            }
            distances[v] = Distance::NegativeInfinity;
            for (next, _) in graph.outgoing_edges(v) {
                queue.push_back(next);
            }
        }

        let negative_cycle = distances.iter().any(Distance::is_negative_infinity);
        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            negative_cycle,
        })
    }
}
