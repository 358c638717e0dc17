//! Common test utilities for codesim-engine
//!
//! Shared fixtures and a stub classifier for the integration tests.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
