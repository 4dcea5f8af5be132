pub mod traits;
pub mod directed;
pub mod generators;
pub mod loader;

pub use traits::{Graph, MutableGraph, Row, Weight};
pub use directed::DirectedGraph;
