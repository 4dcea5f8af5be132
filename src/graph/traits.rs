use std::collections::VecDeque;
use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Signed};
use serde::Serialize;

/// Edge weight: any signed primitive integer that can cross task boundaries
pub trait Weight: PrimInt + Signed + Debug + Display + Serialize + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Signed + Debug + Display + Serialize + Send + Sync + 'static {}

/// The outgoing edges of one vertex, in ascending target order.
///
/// This is everything a vertex process knows about the graph.
pub type Row<W> = Vec<(usize, W)>;

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns the row handed to the process that owns `vertex`
    fn row(&self, vertex: usize) -> Row<W> {
        let mut row: Row<W> = self.outgoing_edges(vertex).collect();
        row.sort_by_key(|&(target, _)| target);
        row
    }

    /// Marks every vertex reachable from `source` along out-edges
    fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut seen = vec![false; self.vertex_count()];
        if !self.has_vertex(source) {
            return seen;
        }

        let mut queue = VecDeque::new();
        seen[source] = true;
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            for (v, _) in self.outgoing_edges(u) {
                if !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        seen
    }

    /// Lower bound on the weight of any simple path among the marked vertices.
    ///
    /// A walk that is lighter than this must repeat a negative cycle. `None`
    /// when the bound itself does not fit in `W`.
    fn negative_weight_floor(&self, participants: &[bool]) -> Option<W> {
        let mut floor = W::zero();
        for u in (0..participants.len()).filter(|&u| participants[u]) {
            for (_, weight) in self.outgoing_edges(u) {
                if weight < W::zero() {
                    floor = floor.checked_add(&weight)?;
                }
            }
        }
        Some(floor)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
