use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Best known path weight from the source to a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Distance<W> {
    /// A path of this weight exists
    Finite(W),
    /// No path from the source has been seen
    Unreachable,
    /// The vertex gave up because a negative cycle was detected
    NegativeInfinity,
}

impl<W: Weight> Distance<W> {
    /// Returns true if a path of weight `weight` is strictly shorter
    pub fn is_improved_by(&self, weight: W) -> bool {
        match *self {
            Distance::Finite(current) => weight < current,
            Distance::Unreachable => true,
            Distance::NegativeInfinity => false,
        }
    }

    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(weight) => Some(weight),
            _ => None,
        }
    }

    pub fn is_negative_infinity(&self) -> bool {
        matches!(self, Distance::NegativeInfinity)
    }
}

impl<W: Weight> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{}", weight),
            Distance::Unreachable => write!(f, "inf"),
            Distance::NegativeInfinity => write!(f, "-inf"),
        }
    }
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex
    pub distances: Vec<Distance<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Whether the run ended with a negative-cycle verdict
    pub negative_cycle: bool,
}

impl<W: Weight> ShortestPathResult<W> {
    /// True if the run found a negative cycle reachable from the source.
    ///
    /// When this holds the individual distances carry no meaning.
    pub fn negative_cycle_detected(&self) -> bool {
        self.negative_cycle || self.distances.iter().any(Distance::is_negative_infinity)
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.finite().is_some()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.predecessors.len()
            || result.distances[target].finite().is_none()
            || result.negative_cycle_detected()
        {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != result.source {
            if !visited.insert(current) {
                log::warn!("cycle in predecessor chain at vertex {}", current);
                return None;
            }

            path.push(current);
            current = result.predecessors[current]?;
        }

        path.push(result.source);
        path.reverse();

        Some(path)
    }
}
