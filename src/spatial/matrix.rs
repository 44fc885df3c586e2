//! Capability interface shared by two-dimensional containers
//!
//! Host code written against [`Matrix`] can drive any implementor, and
//! [`Matrix::same_contents`] compares containers structurally without
//! caring about their concrete type.

use crate::io::error::Result;
use crate::spatial::grid::Grid;

/// Operations of a resizable two-dimensional container
///
/// Construction is left to implementors. Index-bearing operations validate
/// their arguments before mutating, so a failed call leaves the container
/// unchanged.
pub trait Matrix<T> {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Value stored at `(row, col)`
    ///
    /// # Errors
    ///
    /// Fails when the position lies outside the container
    fn get(&self, row: usize, col: usize) -> Result<&T>;

    /// Overwrite the value stored at `(row, col)`
    ///
    /// # Errors
    ///
    /// Fails when the position lies outside the container
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()>;

    /// Insert a row of default values before `row`
    ///
    /// # Errors
    ///
    /// Fails when `row > height`
    fn insert_row(&mut self, row: usize) -> Result<()>;

    /// Insert a row of explicit values before `row`
    ///
    /// # Errors
    ///
    /// Fails when `row > height` or `values` does not span the width
    fn insert_row_with(&mut self, row: usize, values: Vec<T>) -> Result<()>;

    /// Insert a column of default values before `col`
    ///
    /// # Errors
    ///
    /// Fails when `col > width`
    fn insert_col(&mut self, col: usize) -> Result<()>;

    /// Insert a column of explicit values before `col`
    ///
    /// # Errors
    ///
    /// Fails when `col > width` or `values` does not span the height
    fn insert_col_with(&mut self, col: usize, values: Vec<T>) -> Result<()>;

    /// Remove the row at `row`
    ///
    /// # Errors
    ///
    /// Fails when `row >= height`
    fn delete_row(&mut self, row: usize) -> Result<()>;

    /// Remove the column at `col`
    ///
    /// # Errors
    ///
    /// Fails when `col >= width`
    fn delete_col(&mut self, col: usize) -> Result<()>;

    /// Overwrite the half-open region `[start_row, end_row) x [start_col, end_col)`
    ///
    /// # Errors
    ///
    /// Fails when the region extends past the container
    fn fill_region(
        &mut self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
        value: T,
    ) -> Result<()>;

    /// Overwrite the cells visited by a fixed-step walk
    ///
    /// # Errors
    ///
    /// Fails when the end bounds extend past the container
    fn fill_line(
        &mut self,
        start_row: usize,
        start_col: usize,
        delta_row: isize,
        delta_col: isize,
        end_row: usize,
        end_col: usize,
        value: T,
    ) -> Result<()>;

    /// Whether `other` has the same dimensions and equal cells
    ///
    /// Dimension mismatches return `false` without comparing any cell.
    fn same_contents(&self, other: &dyn Matrix<T>) -> bool
    where
        T: PartialEq,
    {
        if self.width() != other.width() || self.height() != other.height() {
            return false;
        }

        (0..self.height()).all(|row| {
            (0..self.width()).all(|col| match (self.get(row, col), other.get(row, col)) {
                (Ok(mine), Ok(theirs)) => mine == theirs,
                _ => false,
            })
        })
    }
}

impl<T: Clone> Matrix<T> for Grid<T> {
    fn width(&self) -> usize {
        Self::width(self)
    }

    fn height(&self) -> usize {
        Self::height(self)
    }

    fn get(&self, row: usize, col: usize) -> Result<&T> {
        Self::get(self, row, col)
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        Self::set(self, row, col, value)
    }

    fn insert_row(&mut self, row: usize) -> Result<()> {
        Self::insert_row(self, row)
    }

    fn insert_row_with(&mut self, row: usize, values: Vec<T>) -> Result<()> {
        Self::insert_row_with(self, row, values)
    }

    fn insert_col(&mut self, col: usize) -> Result<()> {
        Self::insert_col(self, col)
    }

    fn insert_col_with(&mut self, col: usize, values: Vec<T>) -> Result<()> {
        Self::insert_col_with(self, col, values)
    }

    fn delete_row(&mut self, row: usize) -> Result<()> {
        Self::delete_row(self, row)
    }

    fn delete_col(&mut self, col: usize) -> Result<()> {
        Self::delete_col(self, col)
    }

    fn fill_region(
        &mut self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
        value: T,
    ) -> Result<()> {
        Self::fill_region(self, start_row, start_col, end_row, end_col, value)
    }

    fn fill_line(
        &mut self,
        start_row: usize,
        start_col: usize,
        delta_row: isize,
        delta_col: isize,
        end_row: usize,
        end_col: usize,
        value: T,
    ) -> Result<()> {
        Self::fill_line(
            self, start_row, start_col, delta_row, delta_col, end_row, end_col, value,
        )
    }
}
