//! dsssp - Distributed Single-Source Shortest Paths
//!
//! Every vertex of a directed, integer-weighted graph runs as its own process
//! (a tokio task) that only talks to other processes through messages. The
//! processes run an asynchronous Bellman-Ford relaxation with a credit/ack
//! scheme underneath it, so the root learns when the computation has
//! quiesced, and a flood broadcast on top of it that ends the run either
//! normally or with a negative-cycle verdict.

pub mod algorithm;
pub mod config;
pub mod graph;
pub mod protocol;
pub mod report;

pub use algorithm::{
    bellman_ford::BellmanFord, distributed::DistributedBellmanFord, Distance,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::Weight;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Graph has no vertices")]
    EmptyGraph,

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unexpected end of input on line {line}: {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("Topology mismatch: {units} execution units for {vertices} vertices")]
    TopologyMismatch { units: usize, vertices: usize },

    #[error("Protocol violation at vertex {vertex}: {detail}")]
    ProtocolViolation { vertex: usize, detail: String },

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Verification failed: {0}")]
    Verification(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
