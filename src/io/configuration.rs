//! Grid limits and formatting constants

// Safety limit to prevent excessive memory allocation
/// Maximum allowed width or height of a grid
pub const MAX_GRID_DIMENSION: usize = 1 << 20;

/// Multiplier used when folding cell hashes into a grid hash
pub const HASH_MULTIPLIER: u64 = 7;

/// Separator placed between cells when rendering a grid as text
pub const CELL_SEPARATOR: &str = " ";
