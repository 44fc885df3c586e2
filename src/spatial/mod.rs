//! Grid container and its editing operations
//!
//! This module contains:
//! - The grid type with construction, access, equality and hashing
//! - Structural editing by rows and columns
//! - Region and line fills
//! - The capability trait implemented by the grid

/// Row and column insertion and deletion
pub mod extension;
/// Region and line fills
pub mod fill;
/// Grid type, indexed access, equality and hashing
pub mod grid;
/// Capability interface for two-dimensional containers
pub mod matrix;

pub use fill::LineWalk;
pub use grid::Grid;
pub use matrix::Matrix;
