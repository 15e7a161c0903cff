//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code derivation and validation

pub mod code_generator;
