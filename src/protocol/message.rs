use serde::Serialize;

/// Outcome carried by a flood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloodKind {
    /// The relaxation quiesced at the root without a negative cycle
    Completed,
    /// A negative cycle reachable from the root was found
    NegativeCycle,
}

/// Everything that travels between vertex processes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<W> {
    /// A path of `weight` to the receiver exists through `source`
    Length { weight: W, source: usize },
    /// Returns the credit for one `Length` the receiver sent
    Ack { from: usize },
    /// Global outcome, flooded along out-edges
    Broadcast { kind: FloodKind, origin: usize },
}
