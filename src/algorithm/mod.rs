pub mod traits;
pub mod bellman_ford;
pub mod distributed;
pub mod verify;

pub use traits::{Distance, ShortestPathAlgorithm, ShortestPathResult};
