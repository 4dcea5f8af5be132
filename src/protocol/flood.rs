//! The end-of-run flood.
//!
//! The root floods `Completed` once its relaxation has quiesced, or
//! `NegativeCycle` once it knows of a negative cycle. Every other process
//! terminates on the first flood it sees and passes one flood on along its
//! out-edges, so every vertex reachable from the root hears about it.

use crate::algorithm::Distance;
use crate::graph::Weight;
use crate::protocol::channel::Outbox;
use crate::protocol::message::{FloodKind, Message};
use crate::protocol::vertex::{Phase, Role, VertexProcess};

impl<W: Weight> VertexProcess<W> {
    pub(super) fn on_broadcast(&mut self, kind: FloodKind, origin: usize, out: &mut impl Outbox<W>) {
        match self.role {
            Role::Root => match kind {
                // A member found a cycle that does not pass through us
                FloodKind::NegativeCycle => {
                    log::debug!("root {} got a negative-cycle report from {}", self.id, origin);
                    self.conclude(FloodKind::NegativeCycle, out);
                }
                FloodKind::Completed => {
                    log::warn!("root {} ignoring completion flood from {}", self.id, origin);
                }
            },
            Role::Member if self.pending_acks > 0 => {
                // Still relaxing when the run ended. Either kind counts as a
                // negative cycle here.
                if !self.length.is_negative_infinity() {
                    self.length = Distance::NegativeInfinity;
                    self.flood(FloodKind::NegativeCycle, out);
                }
                self.terminate(FloodKind::NegativeCycle);
            }
            Role::Member => {
                if !self.length.is_negative_infinity() {
                    self.terminate(kind);
                    self.flood(kind, out);
                }
            }
        }
    }

    /// Root only: fix the final state and tell everyone
    pub(super) fn conclude(&mut self, kind: FloodKind, out: &mut impl Outbox<W>) {
        self.length = Distance::Finite(W::zero());
        self.predecessor = None;
        self.terminate(kind);
        self.flood(kind, out);
    }

    /// Member only: a relaxation fell below the floor. Flood onwards and make
    /// sure the root hears of it even if it is not downstream of us.
    pub(super) fn declare_negative_cycle(&mut self, out: &mut impl Outbox<W>) {
        self.length = Distance::NegativeInfinity;
        self.terminate(FloodKind::NegativeCycle);
        self.flood(FloodKind::NegativeCycle, out);

        let root = self.root;
        if !self.row.iter().any(|&(target, _)| target == root) {
            out.send(
                root,
                Message::Broadcast {
                    kind: FloodKind::NegativeCycle,
                    origin: self.id,
                },
            );
        }
    }

    fn flood(&mut self, kind: FloodKind, out: &mut impl Outbox<W>) {
        self.stats.floods_forwarded += 1;
        for &(target, _) in &self.row {
            out.send(target, Message::Broadcast { kind, origin: self.id });
        }
    }

    fn terminate(&mut self, kind: FloodKind) {
        log::debug!(
            "vertex {} terminated with {:?}: length {}, predecessor {:?}",
            self.id,
            kind,
            self.length,
            self.predecessor
        );
        self.phase = Phase::Terminated;
        self.verdict = Some(kind);
    }
}
