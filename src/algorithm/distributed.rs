use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::protocol::{self, RunOutcome};
use crate::{Error, Result};

/// Asynchronous distributed Bellman-Ford with one process per vertex.
///
/// Termination is detected through acknowledgment credits flowing back to
/// the root; the outcome is announced with a flood over the graph's edges.
#[derive(Debug, Clone, Default)]
pub struct DistributedBellmanFord {
    /// Worker threads for the runtime built by the blocking entry point
    /// (tokio's default when `None`)
    worker_threads: Option<usize>,
    /// Execution units the caller expects to use; must match the vertex count
    units: Option<usize>,
}

impl DistributedBellmanFord {
    /// Create a new instance with default settings
    pub fn new() -> Self {
        DistributedBellmanFord::default()
    }

    /// Set the number of runtime worker threads
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads.max(1));
        self
    }

    /// Declare how many execution units the run is expected to use
    pub fn with_units(mut self, units: usize) -> Self {
        self.units = Some(units);
        self
    }

    /// Runs the protocol on the caller's tokio runtime
    pub async fn run<W, G>(&self, graph: &G, source: usize) -> Result<RunOutcome<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        protocol::run(graph, source, self.units).await
    }

    /// Builds a private runtime and runs the protocol to completion on it
    pub fn run_blocking<W, G>(&self, graph: &G, source: usize) -> Result<RunOutcome<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        if let Some(threads) = self.worker_threads {
            builder.worker_threads(threads);
        }
        let runtime = builder
            .enable_all()
            .build()
            .map_err(|e| Error::Runtime(format!("failed to build runtime: {}", e)))?;

        runtime.block_on(self.run(graph, source))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DistributedBellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Distributed Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.run_blocking(graph, source).map(|outcome| outcome.result)
    }
}
