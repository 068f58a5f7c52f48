//! Storage adapters for the repository ports.

mod memory;

pub use memory::{InMemoryPredictionRepository, InMemoryStatusCheckRepository};
