//! The distributed relaxation protocol: messages, links, the per-vertex
//! state machine with its end-of-run flood, and the runtime that gives every
//! vertex its own task.

pub mod channel;
pub mod flood;
pub mod message;
pub mod runtime;
pub mod vertex;

pub use channel::{Outbox, RecordingOutbox};
pub use message::{FloodKind, Message};
pub use runtime::{run, RunOutcome, RunStats};
pub use vertex::{Phase, ProcessStats, Role, VertexOutcome, VertexProcess};
