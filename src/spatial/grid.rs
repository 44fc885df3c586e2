//! Resizable two-dimensional grid with a fixed default value
//!
//! The grid owns a row-major `Array2` store whose shape always matches the
//! logical `height x width`. Structural edits live in
//! [`crate::spatial::extension`], bulk fills in [`crate::spatial::fill`].

use std::hash::{DefaultHasher, Hash, Hasher};

use log::debug;
use ndarray::{Array2, ArrayView1};

use crate::io::configuration::{HASH_MULTIPLIER, MAX_GRID_DIMENSION};
use crate::io::error::{Axis, GridError, Result, SizeMismatch, check_index, out_of_range};

/// Two-dimensional container of cells indexed by `(row, col)`
///
/// Every cell always holds a value. Cells introduced without an explicit
/// value (at construction or by line insertion) take the default value,
/// which is fixed for the lifetime of the grid.
///
/// Cloning produces an independent grid: edits to the clone never reach
/// the original.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    /// Cell store indexed `[row, col]`, shape `(height, width)`
    pub(crate) cells: Array2<T>,

    /// Value given to cells created without an explicit value
    pub(crate) default_value: T,
}

impl<T: Clone> Grid<T> {
    /// Create a `width x height` grid with every cell set to `default_value`
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimension` if either dimension exceeds
    /// `MAX_GRID_DIMENSION` or the cell count cannot be addressed
    pub fn new(width: usize, height: usize, default_value: T) -> Result<Self> {
        validate_dimensions(width, height)?;

        let cells = Array2::from_elem((height, width), default_value.clone());
        debug!("Created {width}x{height} grid");

        Ok(Self {
            cells,
            default_value,
        })
    }

    /// Create a `width x height` grid filled with `T::default()`
    ///
    /// For `Option<U>` cells this is the absent marker `None`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimension` under the same conditions as [`Grid::new`]
    pub fn empty(width: usize, height: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::new(width, height, T::default())
    }

    /// Build a grid from rows of explicit values
    ///
    /// The width is taken from the first row; an empty `rows` gives a 0x0 grid.
    /// `default_value` is used for cells inserted later.
    ///
    /// # Errors
    ///
    /// Returns `GridError::SizeMismatch` if any row length differs from the first,
    /// or `GridError::InvalidDimension` if the shape is too large
    pub fn from_rows(rows: Vec<Vec<T>>, default_value: T) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        validate_dimensions(width, height)?;

        if let Some(ragged) = rows.iter().find(|row| row.len() != width) {
            return Err(SizeMismatch::new(Axis::Row, width, ragged.len()).into());
        }

        let flat: Vec<T> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat).map_err(|_shape_error| {
            GridError::InvalidDimension {
                width,
                height,
                reason: "cell data does not fill the grid",
            }
        })?;
        debug!("Built {width}x{height} grid from rows");

        Ok(Self {
            cells,
            default_value,
        })
    }
}

impl<T> Grid<T> {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Value used for cells created without an explicit value
    pub const fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the value stored at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `row >= height` or `col >= width`
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let shape = self.cells.dim();
        self.cells
            .get([row, col])
            .ok_or_else(|| cell_error("get", [row, col], shape))
    }

    /// Get a mutable reference to the value stored at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `row >= height` or `col >= width`
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let shape = self.cells.dim();
        self.cells
            .get_mut([row, col])
            .ok_or_else(|| cell_error("get_mut", [row, col], shape))
    }

    /// Overwrite the value stored at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `row >= height` or `col >= width`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let shape = self.cells.dim();
        let cell = self
            .cells
            .get_mut([row, col])
            .ok_or_else(|| cell_error("set", [row, col], shape))?;
        *cell = value;
        Ok(())
    }

    /// Read-only view of one row
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `row >= height`
    pub fn row(&self, row: usize) -> Result<ArrayView1<'_, T>> {
        check_index("row", Axis::Row, row, self.height())?;
        Ok(self.cells.row(row))
    }

    /// Read-only view of one column
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `col >= width`
    pub fn column(&self, col: usize) -> Result<ArrayView1<'_, T>> {
        check_index("column", Axis::Column, col, self.width())?;
        Ok(self.cells.column(col))
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, T>> {
        self.cells.rows().into_iter()
    }

    /// Iterate over all cells in row-major order with their `[row, col]` position
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 2], &T)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), value)| ([row, col], value))
    }

    /// Hash of the grid contents, consistent with equality
    ///
    /// Seeded from `width + 7 * height`, then every cell's hash is folded in
    /// row-major order as `code * 7 + cell_hash`. Arithmetic wraps. Cell
    /// hashes use a fixed-key hasher, so the result is stable across runs.
    /// Absent `None` cells of a `Grid<Option<U>>` are folded in like any other.
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        let seed = (self.width() as u64)
            .wrapping_add(HASH_MULTIPLIER.wrapping_mul(self.height() as u64));

        self.cells.iter().fold(seed, |code, value| {
            code.wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(cell_hash(value))
        })
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    /// Grids are equal when they have the same dimensions and equal cells.
    /// The default value does not take part in the comparison.
    fn eq(&self, other: &Self) -> bool {
        if self.width() != other.width() || self.height() != other.height() {
            return false;
        }
        self.cells.iter().zip(other.cells.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T: Hash> Hash for Grid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

/// Index error for a cell position outside a `(height, width)` store
///
/// Names the row when it is out of range, otherwise the column.
fn cell_error(
    operation: &'static str,
    [row, col]: [usize; 2],
    (height, width): (usize, usize),
) -> GridError {
    let err = if row >= height {
        out_of_range(operation, Axis::Row, row, height)
    } else {
        out_of_range(operation, Axis::Column, col, width)
    };
    debug!("Rejected {operation}: {err}");
    err
}

/// Deterministic hash of a single cell value
fn cell_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Reject dimensions that cannot be allocated
fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    let invalid = |reason| GridError::InvalidDimension {
        width,
        height,
        reason,
    };

    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(invalid("dimension exceeds the maximum grid dimension"));
    }

    match width.checked_mul(height) {
        Some(count) if isize::try_from(count).is_ok() => Ok(()),
        _ => Err(invalid("cell count cannot be addressed")),
    }
}
