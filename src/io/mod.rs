//! Errors, constants and text output

/// Grid limits and formatting constants
pub mod configuration;
/// Error types and index validation helpers
pub mod error;
/// Plain-text rendering
pub mod visualization;
