//! Error types for grid construction, access and structural editing

use std::fmt;

/// Grid axis an index or value sequence refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal lines of cells, counted by `height`
    Row,
    /// Vertical lines of cells, counted by `width`
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Supplied value sequence disagrees with the grid dimension it must fill
///
/// Raised on row insertion when the value count differs from the width, and
/// on column insertion when it differs from the height. Callers building
/// grids from their own data may raise it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeMismatch {
    /// Axis of the line being supplied
    pub axis: Axis,
    /// Number of values the grid requires
    pub expected: usize,
    /// Number of values actually supplied
    pub actual: usize,
}

impl SizeMismatch {
    /// Describe a sequence of `actual` values supplied where `expected` were needed
    pub const fn new(axis: Axis, expected: usize, actual: usize) -> Self {
        Self {
            axis,
            expected,
            actual,
        }
    }
}

impl fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requires {} values but {} were supplied",
            self.axis, self.expected, self.actual
        )
    }
}

impl std::error::Error for SizeMismatch {}

/// Main error type for all grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested dimensions cannot be allocated
    InvalidDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Explanation of why the dimensions are rejected
        reason: &'static str,
    },

    /// Row or column argument outside the range accepted by the operation
    ///
    /// The bound is exclusive and depends on the operation: insertion accepts
    /// one past the last line, access and deletion do not.
    IndexOutOfRange {
        /// Name of the rejected operation
        operation: &'static str,
        /// Axis the index refers to
        axis: Axis,
        /// The rejected index
        index: usize,
        /// Exclusive upper bound valid for this operation
        bound: usize,
    },

    /// Supplied values do not match the line being inserted
    SizeMismatch(SizeMismatch),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {width}x{height}: {reason}")
            }
            Self::IndexOutOfRange {
                operation,
                axis,
                index,
                bound,
            } => {
                write!(
                    f,
                    "{axis} index {index} is out of range for {operation} (must be below {bound})"
                )
            }
            Self::SizeMismatch(mismatch) => {
                write!(f, "Size mismatch: {mismatch}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SizeMismatch(mismatch) => Some(mismatch),
            _ => None,
        }
    }
}

impl From<SizeMismatch> for GridError {
    fn from(err: SizeMismatch) -> Self {
        Self::SizeMismatch(err)
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an index error for `operation`
pub const fn out_of_range(
    operation: &'static str,
    axis: Axis,
    index: usize,
    bound: usize,
) -> GridError {
    GridError::IndexOutOfRange {
        operation,
        axis,
        index,
        bound,
    }
}

/// Reject `index` unless it lies below `bound`
///
/// # Errors
///
/// Returns `GridError::IndexOutOfRange` when `index >= bound`
pub const fn check_index(
    operation: &'static str,
    axis: Axis,
    index: usize,
    bound: usize,
) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(out_of_range(operation, axis, index, bound))
    }
}
