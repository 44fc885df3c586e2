//! Tests for grid construction, indexed access, cloning, equality and hashing

#[cfg(test)]
mod tests {
    use flexgrid::{Axis, Grid, GridError, SizeMismatch};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn labelled(width: usize, height: usize) -> Grid<String> {
        let rows: Vec<Vec<String>> = (0..height)
            .map(|row| (0..width).map(|col| format!("{row}{col}")).collect())
            .collect();
        Grid::from_rows(rows, String::new()).unwrap()
    }

    // Tests new grid reports its dimensions and holds the default everywhere
    // Verified by swapping width and height in the store shape
    #[test]
    fn test_new_fills_with_default() {
        let grid = Grid::new(3, 2, '.').unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.default_value(), &'.');
        assert!(grid.iter().all(|(_, &value)| value == '.'));
        assert_eq!(grid.iter().count(), 6);
    }

    // Tests the no-default constructor uses the absent marker for options
    #[test]
    fn test_empty_uses_type_default() {
        let grid: Grid<Option<u8>> = Grid::empty(2, 2).unwrap();
        assert_eq!(grid.get(1, 1), Ok(&None));
        assert_eq!(grid.default_value(), &None);
    }

    // Tests oversized dimensions are rejected before allocation
    #[test]
    fn test_new_rejects_oversized_dimensions() {
        let result = Grid::new(usize::MAX, 1, 0_u8);
        assert!(matches!(
            result,
            Err(GridError::InvalidDimension {
                width: usize::MAX,
                height: 1,
                ..
            })
        ));
    }

    // Tests ragged rows are reported as a size mismatch on the row axis
    // Verified by comparing only the first row length
    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5]], 0);
        assert_eq!(
            result,
            Err(GridError::SizeMismatch(SizeMismatch::new(Axis::Row, 2, 1)))
        );
    }

    // Tests from_rows keeps the row-major layout
    #[test]
    fn test_from_rows_layout() {
        let grid = labelled(3, 2);
        assert_eq!(grid.get(0, 2).map(String::as_str), Ok("02"));
        assert_eq!(grid.get(1, 0).map(String::as_str), Ok("10"));
    }

    // Tests set overwrites exactly one cell
    // Verified by writing the value to the whole row
    #[test]
    fn test_set_then_get() {
        let mut grid = Grid::new(3, 3, 0).unwrap();
        grid.set(1, 2, 9).unwrap();
        assert_eq!(grid.get(1, 2), Ok(&9));
        let mut others = grid.iter().filter(|(pos, _)| *pos != [1, 2]);
        assert!(others.all(|(_, &value)| value == 0));
    }

    // Tests access outside the grid names the offending axis and bound
    #[test]
    fn test_get_and_set_out_of_range() {
        let mut grid = Grid::new(3, 2, 0).unwrap();
        assert_eq!(
            grid.get(2, 0),
            Err(GridError::IndexOutOfRange {
                operation: "get",
                axis: Axis::Row,
                index: 2,
                bound: 2,
            })
        );
        assert_eq!(
            grid.set(0, 3, 1),
            Err(GridError::IndexOutOfRange {
                operation: "set",
                axis: Axis::Column,
                index: 3,
                bound: 3,
            })
        );
        assert_eq!(grid, Grid::new(3, 2, 0).unwrap());
    }

    // Tests get_mut writes through to the grid
    #[test]
    fn test_get_mut() {
        let mut grid = Grid::new(2, 2, 1).unwrap();
        if let Ok(cell) = grid.get_mut(0, 1) {
            *cell += 4;
        }
        assert_eq!(grid.get(0, 1), Ok(&5));
        assert!(grid.get_mut(2, 0).is_err());
    }

    // Tests the reported axis is the one whose index is out of range
    // Verified by always reporting the row axis
    #[test]
    fn test_access_error_names_failing_axis() {
        let mut grid = Grid::new(3, 2, 0).unwrap();
        assert_eq!(
            grid.get_mut(1, 5).map(|cell| *cell),
            Err(GridError::IndexOutOfRange {
                operation: "get_mut",
                axis: Axis::Column,
                index: 5,
                bound: 3,
            })
        );
        assert_eq!(
            grid.get(0, 3),
            Err(GridError::IndexOutOfRange {
                operation: "get",
                axis: Axis::Column,
                index: 3,
                bound: 3,
            })
        );
        // Both out of range reports the row first
        assert!(matches!(
            grid.get(4, 4),
            Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                ..
            })
        ));
    }

    // Tests row and column views
    #[test]
    fn test_row_and_column_views() {
        let grid = labelled(3, 2);
        let row_view = grid.row(1).unwrap();
        let row: Vec<&str> = row_view.iter().map(String::as_str).collect();
        assert_eq!(row, vec!["10", "11", "12"]);
        let column_view = grid.column(2).unwrap();
        let column: Vec<&str> = column_view.iter().map(String::as_str).collect();
        assert_eq!(column, vec!["02", "12"]);
        assert!(grid.row(2).is_err());
        assert!(grid.column(3).is_err());
    }

    // Tests a clone is independent of its original
    // Verified by sharing the cell store between clones
    #[test]
    fn test_clone_is_independent() {
        let original = labelled(2, 2);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set(0, 0, "changed".to_string()).unwrap();
        copy.insert_row(0).unwrap();

        assert_eq!(original.get(0, 0).map(String::as_str), Ok("00"));
        assert_eq!(original.height(), 2);
        assert_eq!(copy.default_value(), original.default_value());
    }

    // Tests differing dimensions compare unequal even with no cells
    #[test]
    fn test_equality_checks_dimensions() {
        let wide: Grid<u8> = Grid::new(0, 3, 0).unwrap();
        let tall: Grid<u8> = Grid::new(3, 0, 0).unwrap();
        assert_ne!(wide, tall);
        assert_ne!(Grid::new(2, 1, 0).unwrap(), Grid::new(1, 2, 0).unwrap());
    }

    // Tests the default value does not take part in equality
    #[test]
    fn test_equality_ignores_default_value() {
        let mut a = Grid::new(2, 1, 'a').unwrap();
        let b = Grid::new(2, 1, 'b').unwrap();
        assert_ne!(a, b);
        a.fill_region(0, 0, 1, 2, 'b').unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    // Tests the hash seed and fold order on a known grid
    // Verified by folding in column-major order
    #[test]
    fn test_hash_code_seed_and_order() {
        let empty: Grid<u8> = Grid::new(2, 3, 0).unwrap();
        let mut rows = Grid::new(2, 3, 0_u8).unwrap();
        rows.set(0, 1, 1).unwrap();
        let mut cols = Grid::new(2, 3, 0_u8).unwrap();
        cols.set(1, 0, 1).unwrap();

        assert_ne!(empty.hash_code(), rows.hash_code());
        assert_ne!(rows.hash_code(), cols.hash_code());
        assert_eq!(Grid::<u8>::new(2, 3, 0).unwrap().hash_code(), empty.hash_code());
        assert_eq!(Grid::<u8>::new(0, 0, 0).unwrap().hash_code(), 0);
        assert_eq!(Grid::<u8>::new(2, 0, 0).unwrap().hash_code(), 2);
        assert_eq!(Grid::<u8>::new(0, 3, 0).unwrap().hash_code(), 21);
    }

    // Tests absent cells fold their constant hash, so position still matters
    // Verified by skipping None cells in the fold
    #[test]
    fn test_hash_code_with_absent_cells() {
        let blank: Grid<Option<u8>> = Grid::empty(2, 2).unwrap();
        assert_eq!(blank.hash_code(), Grid::<Option<u8>>::empty(2, 2).unwrap().hash_code());
        assert_ne!(blank.hash_code(), 2 + 7 * 2);

        let mut first = blank.clone();
        first.set(0, 0, Some(1)).unwrap();
        let mut last = blank.clone();
        last.set(1, 1, Some(1)).unwrap();
        assert_ne!(first.hash_code(), last.hash_code());
        assert_ne!(first.hash_code(), blank.hash_code());
    }

    // Tests equal grids collapse in a hash set
    #[test]
    fn test_hash_set_deduplicates_equal_grids() {
        let mut set = HashSet::new();
        set.insert(labelled(2, 3));
        set.insert(labelled(2, 3));
        set.insert(labelled(3, 2));
        assert_eq!(set.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_new_grid_holds_default(
            width in 0usize..12,
            height in 0usize..12,
            default in any::<i32>(),
        ) {
            let grid = Grid::new(width, height, default).unwrap();
            prop_assert_eq!(grid.width(), width);
            prop_assert_eq!(grid.height(), height);
            for row in 0..height {
                for col in 0..width {
                    prop_assert_eq!(grid.get(row, col), Ok(&default));
                }
            }
        }

        #[test]
        fn prop_equal_grids_hash_equally(cells in prop::collection::vec(any::<u16>(), 12)) {
            let rows: Vec<Vec<u16>> = cells.chunks(4).map(<[u16]>::to_vec).collect();
            let a = Grid::from_rows(rows.clone(), 0).unwrap();
            let b = Grid::from_rows(rows, 1).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(&b, &a);
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }
    }
}
