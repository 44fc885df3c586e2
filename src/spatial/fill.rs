//! Bulk overwrites of rectangular regions and stepped lines

use log::{debug, trace};
use ndarray::s;

use crate::io::error::{Axis, Result, check_index};
use crate::spatial::grid::Grid;

/// Cells visited by a fixed-step walk
///
/// Starts at `start` and advances by `delta` each step. The walk ends as
/// soon as the row reaches `end[0]` or the column reaches `end[1]`. A step
/// that would take a coordinate below zero also ends the walk, and a zero
/// step visits only the start cell.
#[derive(Debug, Clone)]
pub struct LineWalk {
    position: [usize; 2],
    delta: [isize; 2],
    end: [usize; 2],
    finished: bool,
}

impl LineWalk {
    /// Walk from `start` by `delta` until `end` (exclusive on either axis)
    pub const fn new(start: [usize; 2], delta: [isize; 2], end: [usize; 2]) -> Self {
        Self {
            position: start,
            delta,
            end,
            finished: false,
        }
    }
}

impl Iterator for LineWalk {
    type Item = [usize; 2];

    fn next(&mut self) -> Option<Self::Item> {
        let [row, col] = self.position;
        if self.finished || row >= self.end[0] || col >= self.end[1] {
            return None;
        }

        let next_row = row.checked_add_signed(self.delta[0]);
        let next_col = col.checked_add_signed(self.delta[1]);
        match (next_row, next_col) {
            (Some(next_row), Some(next_col)) if self.delta != [0, 0] => {
                self.position = [next_row, next_col];
            }
            _ => self.finished = true,
        }

        Some([row, col])
    }
}

impl<T: Clone> Grid<T> {
    /// Set every cell in `[start_row, end_row) x [start_col, end_col)` to `value`
    ///
    /// An empty range is accepted and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `end_row > height` or
    /// `end_col > width`; no cell is written in that case
    pub fn fill_region(
        &mut self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
        value: T,
    ) -> Result<()> {
        self.check_fill_bounds("fill_region", end_row, end_col)?;

        if start_row < end_row && start_col < end_col {
            self.cells
                .slice_mut(s![start_row..end_row, start_col..end_col])
                .fill(value);
        }
        trace!("fill_region [{start_row}, {end_row}) x [{start_col}, {end_col})");

        Ok(())
    }

    /// Set every cell visited by a [`LineWalk`] to `value`
    ///
    /// `(1, 0)` fills a vertical segment, `(0, 1)` a horizontal one and
    /// `(1, 1)` or `(1, -1)` a diagonal.
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `end_row > height` or
    /// `end_col > width`; no cell is written in that case
    pub fn fill_line(
        &mut self,
        start_row: usize,
        start_col: usize,
        delta_row: isize,
        delta_col: isize,
        end_row: usize,
        end_col: usize,
        value: T,
    ) -> Result<()> {
        self.check_fill_bounds("fill_line", end_row, end_col)?;

        let walk = LineWalk::new(
            [start_row, start_col],
            [delta_row, delta_col],
            [end_row, end_col],
        );
        let mut visited = 0_usize;
        for position in walk {
            if let Some(cell) = self.cells.get_mut(position) {
                *cell = value.clone();
                visited += 1;
            }
        }
        trace!(
            "fill_line from ({start_row}, {start_col}) step ({delta_row}, {delta_col}): \
             {visited} cells"
        );

        Ok(())
    }

    // End bounds are exclusive, so they may equal the dimension
    fn check_fill_bounds(
        &self,
        operation: &'static str,
        end_row: usize,
        end_col: usize,
    ) -> Result<()> {
        check_index(operation, Axis::Row, end_row, self.height() + 1)
            .and_then(|()| check_index(operation, Axis::Column, end_col, self.width() + 1))
            .inspect_err(|err| debug!("Rejected {operation}: {err}"))
    }
}
