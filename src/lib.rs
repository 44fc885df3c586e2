//! Resizable two-dimensional grid container
//!
//! A [`Grid`] holds a rectangle of cells, each filled with a fixed default
//! value until written. Rows and columns can be inserted or deleted anywhere,
//! regions and stepped lines can be overwritten in bulk, and grids compare and
//! hash by value.
//!
//! ```
//! use flexgrid::Grid;
//!
//! let mut grid = Grid::new(3, 2, '.')?;
//! grid.insert_row_with(1, ['a', 'b', 'c'])?;
//! grid.fill_line(0, 0, 1, 1, 3, 3, 'D')?;
//! assert_eq!(grid.to_string(), "D . .\na D c\n. . D\n");
//! # Ok::<(), flexgrid::GridError>(())
//! ```

#![deny(unsafe_code)]

/// Errors, constants and text output
pub mod io;
/// Grid container, structural editing and fills
pub mod spatial;

pub use io::error::{Axis, GridError, Result, SizeMismatch};
pub use spatial::{Grid, LineWalk, Matrix};
