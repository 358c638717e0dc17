//! Engine API
//!
//! One façade over the feature use cases. Callers (the CLI, an HTTP layer,
//! language bindings) hand in file contents and get serde-serializable
//! results back.

pub mod engine;

pub use engine::{CodesimEngine, StoreComparison};
