use serde::Serialize;

use crate::algorithm::Distance;
use crate::graph::{Row, Weight};
use crate::protocol::channel::Outbox;
use crate::protocol::message::{FloodKind, Message};
use crate::{Error, Result};

/// Which half of the protocol a process runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Bound to the source vertex; starts and ends the computation
    Root,
    /// Every other participating vertex
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Has not relaxed anything yet
    Idle,
    /// Has taken part in the relaxation
    Active,
    /// Done; state is frozen
    Terminated,
}

/// Message counters kept by one process over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessStats {
    pub lengths_sent: usize,
    pub lengths_received: usize,
    pub acks_sent: usize,
    pub acks_received: usize,
    /// `Length` messages that did not improve the vertex
    pub rejected: usize,
    pub floods_forwarded: usize,
}

/// What a terminated process hands to the collector
#[derive(Debug, Clone, Serialize)]
pub struct VertexOutcome<W> {
    pub vertex: usize,
    pub length: Distance<W>,
    pub predecessor: Option<usize>,
    /// The flood this process terminated with
    pub verdict: Option<FloodKind>,
    pub stats: ProcessStats,
}

/// The per-vertex state machine.
///
/// A process only ever changes its own fields and only talks to the world
/// through an [`Outbox`]. `pending_acks` goes up once per `Length` sent and
/// down once per `Ack` received, nowhere else.
#[derive(Debug, Clone)]
pub struct VertexProcess<W> {
    pub(super) id: usize,
    pub(super) role: Role,
    pub(super) row: Row<W>,
    pub(super) root: usize,
    /// Any relaxation lighter than this went around a negative cycle
    pub(super) floor: W,
    pub(super) length: Distance<W>,
    pub(super) predecessor: Option<usize>,
    pub(super) pending_acks: usize,
    pub(super) phase: Phase,
    pub(super) verdict: Option<FloodKind>,
    pub(super) stats: ProcessStats,
}

impl<W: Weight> VertexProcess<W> {
    /// Creates the root process for `id`
    pub fn root(id: usize, row: Row<W>) -> Self {
        VertexProcess {
            id,
            role: Role::Root,
            row,
            root: id,
            floor: W::min_value(),
            length: Distance::Finite(W::zero()),
            predecessor: None,
            pending_acks: 0,
            phase: Phase::Active,
            verdict: None,
            stats: ProcessStats::default(),
        }
    }

    /// Creates a non-root process.
    ///
    /// `floor` is the lightest weight a simple path in this run can have.
    pub fn member(id: usize, row: Row<W>, root: usize, floor: W) -> Self {
        VertexProcess {
            id,
            role: Role::Member,
            row,
            root,
            floor,
            length: Distance::Unreachable,
            predecessor: None,
            pending_acks: 0,
            phase: Phase::Idle,
            verdict: None,
            stats: ProcessStats::default(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn length(&self) -> Distance<W> {
        self.length
    }

    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    pub fn pending_acks(&self) -> usize {
        self.pending_acks
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Terminated
    }

    pub fn verdict(&self) -> Option<FloodKind> {
        self.verdict
    }

    pub fn stats(&self) -> &ProcessStats {
        &self.stats
    }

    /// Kicks off the run. Only the root does anything here: it relaxes every
    /// out-edge. A root without out-edges has nothing to wait for and
    /// completes at once.
    pub fn start(&mut self, out: &mut impl Outbox<W>) {
        if self.role != Role::Root {
            return;
        }

        self.relax_row(W::zero(), out);
        log::debug!("root {} started {} relaxations", self.id, self.pending_acks);
        if self.pending_acks == 0 {
            self.conclude(FloodKind::Completed, out);
        }
    }

    /// Reacts to one message. Terminated processes ignore everything.
    pub fn handle(&mut self, message: Message<W>, out: &mut impl Outbox<W>) -> Result<()> {
        if self.is_done() {
            log::trace!("vertex {} is done, ignoring {:?}", self.id, message);
            return Ok(());
        }
        log::trace!("vertex {} <- {:?}", self.id, message);

        match message {
            Message::Length { weight, source } => {
                self.stats.lengths_received += 1;
                match self.role {
                    Role::Root => self.on_root_length(weight, source, out),
                    Role::Member => self.on_member_length(weight, source, out),
                }
                Ok(())
            }
            Message::Ack { from } => self.on_ack(from, out),
            Message::Broadcast { kind, origin } => {
                self.on_broadcast(kind, origin, out);
                Ok(())
            }
        }
    }

    /// Freezes the process into what the collector reports
    pub fn into_outcome(self) -> VertexOutcome<W> {
        VertexOutcome {
            vertex: self.id,
            length: self.length,
            predecessor: self.predecessor,
            verdict: self.verdict,
            stats: self.stats,
        }
    }

    fn on_root_length(&mut self, weight: W, source: usize, out: &mut impl Outbox<W>) {
        if weight < W::zero() {
            // A walk from the root back to itself came out negative
            log::debug!("root {} saw a negative return of {} from {}", self.id, weight, source);
            self.conclude(FloodKind::NegativeCycle, out);
        } else {
            self.stats.rejected += 1;
            self.send_ack(source, out);
        }
    }

    fn on_member_length(&mut self, weight: W, source: usize, out: &mut impl Outbox<W>) {
        if weight < self.floor {
            log::debug!(
                "vertex {} received {} below floor {}, declaring a negative cycle",
                self.id,
                weight,
                self.floor
            );
            self.declare_negative_cycle(out);
            return;
        }

        if !self.length.is_improved_by(weight) {
            self.stats.rejected += 1;
            self.send_ack(source, out);
            return;
        }

        // Lighter than any `W`, so lighter than the floor too
        if self
            .row
            .iter()
            .any(|&(_, w)| w < W::zero() && weight.checked_add(&w).is_none())
        {
            log::debug!("vertex {} relaxing {} would underflow, declaring a negative cycle", self.id, weight);
            self.declare_negative_cycle(out);
            return;
        }

        // Only one parent may hold our credit; hand the old one back first
        if self.pending_acks > 0 {
            if let Some(old) = self.predecessor {
                self.send_ack(old, out);
            }
        }

        self.phase = Phase::Active;
        self.predecessor = Some(source);
        self.length = Distance::Finite(weight);
        self.relax_row(weight, out);

        if self.pending_acks == 0 {
            self.send_ack(source, out);
        }
    }

    fn on_ack(&mut self, from: usize, out: &mut impl Outbox<W>) -> Result<()> {
        self.stats.acks_received += 1;
        self.pending_acks = self.pending_acks.checked_sub(1).ok_or_else(|| Error::ProtocolViolation {
            vertex: self.id,
            detail: format!("ack from {} with no relaxation outstanding", from),
        })?;

        if self.pending_acks > 0 {
            return Ok(());
        }

        match self.role {
            Role::Root => self.conclude(FloodKind::Completed, out),
            Role::Member => {
                let pred = self.predecessor.ok_or_else(|| Error::ProtocolViolation {
                    vertex: self.id,
                    detail: "quiesced without a predecessor".to_string(),
                })?;
                self.send_ack(pred, out);
            }
        }
        Ok(())
    }

    /// Sends `base + w` along every out-edge
    fn relax_row(&mut self, base: W, out: &mut impl Outbox<W>) {
        for &(target, weight) in &self.row {
            self.pending_acks += 1;
            self.stats.lengths_sent += 1;
            out.send(
                target,
                Message::Length {
                    weight: base.saturating_add(weight),
                    source: self.id,
                },
            );
        }
    }

    fn send_ack(&mut self, to: usize, out: &mut impl Outbox<W>) {
        self.stats.acks_sent += 1;
        out.send(to, Message::Ack { from: self.id });
    }
}
