//! Engine configuration
//!
//! One flat [`EngineConfig`] covers the whole engine. It can be built in code
//! (`EngineConfig::default()` plus builder methods) or loaded from a versioned
//! YAML file:
//!
//! ```yaml
//! version: 1
//! engine:
//!   language: python
//!   threshold: 60.0
//!   min_span_length: 20
//! ```

pub mod engine_config;
pub mod error;

// Re-exports
pub use engine_config::{ConfigFileV1, EngineConfig};
pub use error::{ConfigError, ConfigResult};
