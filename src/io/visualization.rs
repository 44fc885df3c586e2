//! Plain-text rendering of grid contents

use std::fmt::{self, Display};

use crate::io::configuration::CELL_SEPARATOR;
use crate::spatial::grid::Grid;

/// Render a grid as a text table
///
/// One line per row, each line terminated by a newline. Cells are
/// right-aligned to the widest rendered cell so columns line up.
/// A grid without cells renders as an empty string.
pub fn render<T: Display>(grid: &Grid<T>) -> String {
    let rendered: Vec<Vec<String>> = grid
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let cell_width = rendered
        .iter()
        .flatten()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for row in &rendered {
        if row.is_empty() {
            continue;
        }
        let padded: Vec<String> = row
            .iter()
            .map(|cell| format!("{cell:>cell_width$}"))
            .collect();
        output.push_str(&padded.join(CELL_SEPARATOR));
        output.push('\n');
    }
    output
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
