use rayon::prelude::*;

use crate::algorithm::{Distance, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Checks that a finished result is a shortest path tree of `graph`.
///
/// Every predecessor edge must account exactly for its vertex's distance and
/// no edge may relax any further. Results carrying a negative-cycle verdict
/// have no distances to check and pass trivially.
pub fn verify<W, G>(graph: &G, result: &ShortestPathResult<W>) -> Result<()>
where
    W: Weight,
    G: Graph<W> + Sync,
{
    if result.negative_cycle_detected() {
        log::debug!("skipping verification of a negative-cycle result");
        return Ok(());
    }

    let n = graph.vertex_count();
    if result.distances.len() != n || result.predecessors.len() != n {
        return Err(Error::Verification(format!(
            "result covers {} vertices, graph has {}",
            result.distances.len(),
            n
        )));
    }
    if result.distances[result.source] != Distance::Finite(W::zero()) {
        return Err(Error::Verification("source distance is not zero".to_string()));
    }

    let failure = (0..n)
        .into_par_iter()
        .find_map_any(|v| check_vertex(graph, result, v).err());

    match failure {
        Some(message) => Err(Error::Verification(message)),
        None => Ok(()),
    }
}

fn check_vertex<W, G>(graph: &G, result: &ShortestPathResult<W>, v: usize) -> std::result::Result<(), String>
where
    W: Weight,
    G: Graph<W>,
{
    let distances = &result.distances;

    match (distances[v], result.predecessors[v]) {
        (Distance::Finite(_), None) if v == result.source => {}
        (Distance::Finite(dist), Some(pred)) if v != result.source => {
            let weight = graph
                .get_edge_weight(pred, v)
                .ok_or_else(|| format!("vertex {} names predecessor {} without an edge", v, pred))?;
            match distances[pred] {
                Distance::Finite(dist_pred) if dist_pred.checked_add(&weight) == Some(dist) => {}
                other => {
                    return Err(format!(
                        "vertex {} has distance {} but predecessor {} has {} over weight {}",
                        v, dist, pred, other, weight
                    ))
                }
            }
        }
        (Distance::Unreachable, None) => {}
        (distance, pred) => {
            return Err(format!(
                "vertex {} has inconsistent distance {} and predecessor {:?}",
                v, distance, pred
            ))
        }
    }

    let Distance::Finite(dist_v) = distances[v] else { return Ok(()) };
    for (u, weight) in graph.outgoing_edges(v) {
        let Some(candidate) = dist_v.checked_add(&weight) else {
            if weight > W::zero() {
                continue;
            }
            return Err(format!("edge {} -> {} relaxes below {}", v, u, W::min_value()));
        };
        let stable = match distances[u] {
            Distance::Finite(dist_u) => dist_u <= candidate,
            _ => false,
        };
        if !stable {
            return Err(format!("edge {} -> {} can still relax to {}", v, u, candidate));
        }
    }

    Ok(())
}
