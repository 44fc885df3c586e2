//! Structural editing by whole rows and columns
//!
//! Every edit builds a new store of the exact target shape, copies the
//! surviving cells to their shifted positions and swaps the new store in.
//! Indices are validated first, so a rejected edit leaves the grid untouched.

use log::debug;
use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Axis, GridError, Result, SizeMismatch, check_index};
use crate::spatial::grid::Grid;

/// Kind of structural edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Add a line before `index` (or after the last line when `index` equals the count)
    Insert,
    /// Remove the line at `index`
    Delete,
}

/// A single-line structural edit along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEdit {
    /// Axis of the inserted or removed line
    pub axis: Axis,
    /// Position of the line
    pub index: usize,
    /// Insertion or deletion
    pub kind: EditKind,
}

impl LineEdit {
    /// Describe an insertion at `index`
    pub const fn insert(axis: Axis, index: usize) -> Self {
        Self {
            axis,
            index,
            kind: EditKind::Insert,
        }
    }

    /// Describe a deletion at `index`
    pub const fn delete(axis: Axis, index: usize) -> Self {
        Self {
            axis,
            index,
            kind: EditKind::Delete,
        }
    }

    /// Operation name used in errors and logs
    pub const fn operation(&self) -> &'static str {
        match (self.kind, self.axis) {
            (EditKind::Insert, Axis::Row) => "insert_row",
            (EditKind::Insert, Axis::Column) => "insert_col",
            (EditKind::Delete, Axis::Row) => "delete_row",
            (EditKind::Delete, Axis::Column) => "delete_col",
        }
    }

    /// Exclusive upper bound for `index` given the current line count
    ///
    /// Insertion accepts one past the last line, deletion does not.
    pub const fn bound(&self, line_count: usize) -> usize {
        match self.kind {
            EditKind::Insert => line_count + 1,
            EditKind::Delete => line_count,
        }
    }

    /// Shape `(rows, cols)` of the store after the edit
    pub const fn target_shape(&self, (rows, cols): (usize, usize)) -> (usize, usize) {
        match (self.kind, self.axis) {
            (EditKind::Insert, Axis::Row) => (rows + 1, cols),
            (EditKind::Insert, Axis::Column) => (rows, cols + 1),
            (EditKind::Delete, Axis::Row) => (rows.saturating_sub(1), cols),
            (EditKind::Delete, Axis::Column) => (rows, cols.saturating_sub(1)),
        }
    }

    /// Position of an existing line after the edit, `None` if it is removed
    pub const fn shifted(&self, line: usize) -> Option<usize> {
        match self.kind {
            EditKind::Insert if line >= self.index => Some(line + 1),
            EditKind::Delete if line == self.index => None,
            EditKind::Delete if line > self.index => Some(line - 1),
            EditKind::Insert | EditKind::Delete => Some(line),
        }
    }
}

/// Rebuild a 2D array with one line inserted or removed
///
/// The new array starts filled with `fill`, so an inserted line holds `fill`
/// until overwritten. Existing cells are copied to their shifted positions.
pub fn rebuild_array_2d<T: Clone>(array: &Array2<T>, edit: &LineEdit, fill: T) -> Array2<T> {
    let (old_rows, old_cols) = array.dim();
    let new_shape = edit.target_shape((old_rows, old_cols));

    let mut new_array = Array2::from_elem(new_shape, fill);

    // O(mn) copy applying the line shift
    for i in 0..old_rows {
        for j in 0..old_cols {
            let target = match edit.axis {
                Axis::Row => edit.shifted(i).map(|row| [row, j]),
                Axis::Column => edit.shifted(j).map(|col| [i, col]),
            };
            if let Some(target) = target {
                if let (Some(src), Some(dst)) = (array.get([i, j]), new_array.get_mut(target)) {
                    *dst = src.clone();
                }
            }
        }
    }

    new_array
}

impl<T: Clone> Grid<T> {
    /// Insert a row of default values before `row`
    ///
    /// `row == height` appends a row at the bottom.
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `row > height`, or
    /// `GridError::InvalidDimension` if the grid is already at `MAX_GRID_DIMENSION`
    pub fn insert_row(&mut self, row: usize) -> Result<()> {
        self.insert_line(LineEdit::insert(Axis::Row, row), None)
    }

    /// Insert a row holding `values` before `row`
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `row > height`,
    /// `GridError::InvalidDimension` if the grid is already at `MAX_GRID_DIMENSION`, or
    /// `GridError::SizeMismatch` if the number of values differs from the width
    pub fn insert_row_with(&mut self, row: usize, values: impl Into<Vec<T>>) -> Result<()> {
        self.insert_line(LineEdit::insert(Axis::Row, row), Some(values.into()))
    }

    /// Insert a column of default values before `col`
    ///
    /// `col == width` appends a column on the right.
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `col > width`, or
    /// `GridError::InvalidDimension` if the grid is already at `MAX_GRID_DIMENSION`
    pub fn insert_col(&mut self, col: usize) -> Result<()> {
        self.insert_line(LineEdit::insert(Axis::Column, col), None)
    }

    /// Insert a column holding `values` (top to bottom) before `col`
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `col > width`,
    /// `GridError::InvalidDimension` if the grid is already at `MAX_GRID_DIMENSION`, or
    /// `GridError::SizeMismatch` if the number of values differs from the height
    pub fn insert_col_with(&mut self, col: usize, values: impl Into<Vec<T>>) -> Result<()> {
        self.insert_line(LineEdit::insert(Axis::Column, col), Some(values.into()))
    }

    /// Remove the row at `row`, shifting the rows below it up
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `row >= height`
    pub fn delete_row(&mut self, row: usize) -> Result<()> {
        self.apply_edit(&LineEdit::delete(Axis::Row, row))
    }

    /// Remove the column at `col`, shifting the columns to its right left
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `col >= width`
    pub fn delete_col(&mut self, col: usize) -> Result<()> {
        self.apply_edit(&LineEdit::delete(Axis::Column, col))
    }

    fn insert_line(&mut self, edit: LineEdit, values: Option<Vec<T>>) -> Result<()> {
        let Some(values) = values else {
            return self.apply_edit(&edit);
        };

        self.check_edit(&edit)?;

        // A row spans the width, a column spans the height
        let expected = match edit.axis {
            Axis::Row => self.width(),
            Axis::Column => self.height(),
        };
        if values.len() != expected {
            let mismatch = SizeMismatch::new(edit.axis, expected, values.len());
            debug!("Rejected {}: {mismatch}", edit.operation());
            return Err(mismatch.into());
        }

        let mut cells = rebuild_array_2d(&self.cells, &edit, self.default_value.clone());
        for (offset, value) in values.into_iter().enumerate() {
            let position = match edit.axis {
                Axis::Row => [edit.index, offset],
                Axis::Column => [offset, edit.index],
            };
            if let Some(cell) = cells.get_mut(position) {
                *cell = value;
            }
        }

        self.replace_cells(&edit, cells);
        Ok(())
    }

    fn apply_edit(&mut self, edit: &LineEdit) -> Result<()> {
        self.check_edit(edit)?;
        let cells = rebuild_array_2d(&self.cells, edit, self.default_value.clone());
        self.replace_cells(edit, cells);
        Ok(())
    }

    fn check_edit(&self, edit: &LineEdit) -> Result<()> {
        let line_count = match edit.axis {
            Axis::Row => self.height(),
            Axis::Column => self.width(),
        };
        let operation = edit.operation();

        if edit.kind == EditKind::Insert && line_count >= MAX_GRID_DIMENSION {
            let (height, width) = edit.target_shape(self.cells.dim());
            let err = GridError::InvalidDimension {
                width,
                height,
                reason: "dimension exceeds the maximum grid dimension",
            };
            debug!("Rejected {operation}: {err}");
            return Err(err);
        }

        check_index(operation, edit.axis, edit.index, edit.bound(line_count))
            .inspect_err(|err| debug!("Rejected {operation}: {err}"))
    }

    fn replace_cells(&mut self, edit: &LineEdit, cells: Array2<T>) {
        self.cells = cells;
        debug!(
            "{} at {}: grid now {}x{}",
            edit.operation(),
            edit.index,
            self.width(),
            self.height()
        );
    }
}
