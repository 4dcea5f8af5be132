use serde::Serialize;
use tokio::task::JoinSet;

use crate::algorithm::{Distance, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::protocol::channel::{channel, Inbox, Links};
use crate::protocol::message::FloodKind;
use crate::protocol::vertex::{ProcessStats, VertexOutcome, VertexProcess};
use crate::{Error, Result};

/// Message totals over every process of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Processes that were spawned
    pub participants: usize,
    pub lengths_sent: usize,
    pub acks_sent: usize,
    pub acks_received: usize,
    pub rejected: usize,
    pub floods_forwarded: usize,
}

impl RunStats {
    fn absorb(&mut self, stats: &ProcessStats) {
        self.participants += 1;
        self.lengths_sent += stats.lengths_sent;
        self.acks_sent += stats.acks_sent;
        self.acks_received += stats.acks_received;
        self.rejected += stats.rejected;
        self.floods_forwarded += stats.floods_forwarded;
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome<W>
where
    W: Weight,
{
    pub result: ShortestPathResult<W>,
    /// Per-vertex final state; `None` for vertices that never took part
    pub vertices: Vec<Option<VertexOutcome<W>>>,
    pub stats: RunStats,
}

/// Runs the protocol on the current tokio runtime.
///
/// One task is spawned per vertex reachable from `source`; unreachable
/// vertices could never hear the final flood, so they are left out and
/// reported as `Unreachable`. When `units` is given it must equal the vertex
/// count.
pub async fn run<W, G>(graph: &G, source: usize, units: Option<usize>) -> Result<RunOutcome<W>>
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }
    if let Some(units) = units {
        if units != n {
            return Err(Error::TopologyMismatch { units, vertices: n });
        }
    }
    if !graph.has_vertex(source) {
        return Err(Error::SourceNotFound);
    }

    let participants = graph.reachable_from(source);
    let floor = graph.negative_weight_floor(&participants).unwrap_or_else(|| {
        log::warn!("negative weights overflow the floor, running without it");
        W::min_value()
    });

    let mut senders = Vec::with_capacity(n);
    let mut inboxes = Vec::new();
    for (v, &takes_part) in participants.iter().enumerate() {
        if takes_part {
            let (sender, inbox) = channel(v);
            senders.push(Some(sender));
            inboxes.push(inbox);
        } else {
            senders.push(None);
        }
    }
    let links = Links::new(senders);

    log::info!(
        "starting run from vertex {}: {} of {} vertices take part, floor {}",
        source,
        inboxes.len(),
        n,
        floor
    );

    let mut tasks = JoinSet::new();
    for inbox in inboxes {
        let v = inbox.vertex();
        let process = if v == source {
            VertexProcess::root(v, graph.row(v))
        } else {
            VertexProcess::member(v, graph.row(v), source, floor)
        };
        tasks.spawn(run_process(process, inbox, links.clone()));
    }
    drop(links);

    let mut vertices: Vec<Option<VertexOutcome<W>>> = vec![None; n];
    while let Some(joined) = tasks.join_next().await {
        let outcome = match joined {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => {
                tasks.abort_all();
                return Err(err);
            }
            Err(err) => {
                tasks.abort_all();
                return Err(Error::Runtime(format!("vertex task failed: {}", err)));
            }
        };
        let v = outcome.vertex;
        vertices[v] = Some(outcome);
    }

    let outcome = collect(source, vertices);
    log::info!(
        "run finished: negative cycle {}, {} relaxations, {} acks",
        outcome.result.negative_cycle,
        outcome.stats.lengths_sent,
        outcome.stats.acks_sent
    );
    Ok(outcome)
}

/// The loop every vertex task runs until its process is done
async fn run_process<W: Weight>(
    mut process: VertexProcess<W>,
    mut inbox: Inbox<W>,
    mut links: Links<W>,
) -> Result<VertexOutcome<W>> {
    process.start(&mut links);

    while !process.is_done() {
        match inbox.recv().await {
            Some(message) => process.handle(message, &mut links)?,
            None => {
                return Err(Error::Runtime(format!(
                    "inbox of vertex {} closed before termination",
                    inbox.vertex()
                )))
            }
        }
    }

    Ok(process.into_outcome())
}

fn collect<W: Weight>(source: usize, vertices: Vec<Option<VertexOutcome<W>>>) -> RunOutcome<W> {
    let n = vertices.len();
    let mut distances = vec![Distance::Unreachable; n];
    let mut predecessors = vec![None; n];
    let mut stats = RunStats::default();
    let mut negative_cycle = false;

    for outcome in vertices.iter().flatten() {
        distances[outcome.vertex] = outcome.length;
        predecessors[outcome.vertex] = outcome.predecessor;
        stats.absorb(&outcome.stats);

        let root_verdict = outcome.vertex == source && outcome.verdict == Some(FloodKind::NegativeCycle);
        if root_verdict || outcome.length.is_negative_infinity() {
            negative_cycle = true;
        }
    }

    RunOutcome {
        result: ShortestPathResult {
            distances,
            predecessors,
            source,
            negative_cycle,
        },
        vertices,
        stats,
    }
}
