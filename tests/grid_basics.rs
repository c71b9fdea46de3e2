mod common;

use common::{assert_invalid_argument, grid_error, loc};
use gridbox::{make_grid, Backing, Grid, GridError, SparseGrid};

macro_rules! grid_basics_tests {
    ($($name:ident: $backing:expr,)*) => {$(
        mod $name {
            use super::*;

            fn make<T: 'static>(rows: i64, cols: i64) -> Box<dyn Grid<T>> {
                make_grid($backing, rows, cols).unwrap()
            }

            #[test]
            fn initial_num_items_is_zero() {
                let big = make::<i32>(3, 5);
                assert_eq!(big.num_items(), 0);
                assert!(big.is_empty());
            }

            #[test]
            fn constructor_rejects_non_positive_dimensions() {
                for (rows, cols) in [(0, 1), (1, 0), (-1, 1), (1, -1)] {
                    assert_eq!(
                        grid_error(make_grid::<i32>($backing, rows, cols)),
                        GridError::InvalidDimensions { rows, cols }
                    );
                }
            }

            #[test]
            fn num_rows_num_cols() {
                let big = make::<i32>(3, 5);
                let small = make::<i32>(3, 2);
                assert_eq!(big.num_rows(), 3);
                assert_eq!(big.num_cols(), 5);
                assert_eq!(small.num_rows(), 3);
                assert_eq!(small.num_cols(), 2);
            }

            #[test]
            fn put_rejects_bad_location() {
                let mut small = make::<i32>(3, 2);
                assert_invalid_argument(small.put(loc(3, 0), 7));
                assert_invalid_argument(small.put(loc(0, 5), 7));
                assert_invalid_argument(small.put(loc(3, 5), 7));
                assert_eq!(small.num_items(), 0);
            }

            #[test]
            fn get_rejects_bad_location() {
                let small = make::<i32>(3, 2);
                assert_invalid_argument(small.get(loc(3, 0)));
                assert_invalid_argument(small.get(loc(0, 5)));
                assert_invalid_argument(small.get(loc(3, 5)));
            }

            #[test]
            fn bad_location_is_reported_before_missing_item() {
                let mut small = make::<i32>(3, 2);
                assert_invalid_argument(small.put_optional(loc(3, 0), None));
                assert_eq!(
                    grid_error(small.put_optional(loc(0, 0), None)),
                    GridError::MissingValue { location: loc(0, 0) }
                );
                assert_eq!(small.num_items(), 0);
            }

            #[test]
            fn put_tracks_size_changes() {
                let mut big = make::<i32>(3, 5);
                assert_eq!(big.num_items(), 0);

                assert_eq!(big.put(loc(0, 0), 20).unwrap(), None);
                assert_eq!(big.num_items(), 1);

                assert_eq!(big.put(loc(0, 0), 30).unwrap(), Some(20));
                assert_eq!(big.num_items(), 1);

                big.put(loc(0, 1), 20).unwrap();
                assert_eq!(big.num_items(), 2);
            }

            #[test]
            fn put_then_get_returns_item() {
                let mut big = make::<i32>(3, 5);

                let mut val = 17;
                for row in 0..3 {
                    for col in 0..5 {
                        big.put(loc(row, col), val).unwrap();
                        val += 1;
                    }
                }

                let mut val = 17;
                for row in 0..3 {
                    for col in 0..5 {
                        assert_eq!(big.get(loc(row, col)).unwrap(), Some(&val));
                        assert_eq!(big.get(loc(row, col)).unwrap(), Some(&val));
                        val += 1;
                    }
                }
                assert_eq!(big.num_items(), 15);
            }

            #[test]
            fn get_returns_none_for_empty_cell() {
                let big = make::<i32>(3, 5);
                for location in big.all_locations() {
                    assert_eq!(big.get(location).unwrap(), None);
                }
            }

            #[test]
            fn get_mut_changes_the_stored_item() {
                let mut big = make::<i32>(3, 5);
                big.put(loc(2, 4), 1).unwrap();

                if let Some(item) = big.get_mut(loc(2, 4)).unwrap() {
                    *item += 41;
                }

                assert_eq!(big.get(loc(2, 4)).unwrap(), Some(&42));
                assert_eq!(big.get_mut(loc(0, 0)).unwrap(), None);
                assert_invalid_argument(big.get_mut(loc(3, 0)));
            }

            #[test]
            fn remove_rejects_bad_location() {
                let mut small = make::<i32>(3, 2);
                small.put(loc(2, 1), 1).unwrap();
                assert_invalid_argument(small.remove(loc(3, 0)));
                assert_invalid_argument(small.remove(loc(0, 5)));
                assert_invalid_argument(small.remove(loc(3, 5)));
                assert_eq!(small.num_items(), 1);
            }

            #[test]
            fn remove_tracks_size_changes() {
                let mut big = make::<i32>(3, 5);
                big.put(loc(0, 0), 20).unwrap();
                big.put(loc(0, 1), 20).unwrap();
                assert_eq!(big.num_items(), 2);

                big.remove(loc(0, 0)).unwrap();
                assert_eq!(big.num_items(), 1);
                big.remove(loc(0, 0)).unwrap();
                assert_eq!(big.num_items(), 1);
                big.remove(loc(0, 1)).unwrap();
                assert_eq!(big.num_items(), 0);
            }

            #[test]
            fn remove_returns_none_for_empty_cell() {
                let mut small = make::<i32>(3, 2);
                assert_eq!(small.remove(loc(1, 1)).unwrap(), None);
                assert_eq!(small.num_items(), 0);
            }

            #[test]
            fn remove_returns_item_once() {
                let mut big = make::<i32>(3, 5);
                big.put(loc(0, 0), 20).unwrap();
                big.put(loc(0, 1), 21).unwrap();

                assert_eq!(big.remove(loc(0, 0)).unwrap(), Some(20));
                assert_eq!(big.remove(loc(0, 0)).unwrap(), None);
                assert_eq!(big.get(loc(0, 0)).unwrap(), None);

                assert_eq!(big.remove(loc(0, 1)).unwrap(), Some(21));
                assert_eq!(big.remove(loc(0, 1)).unwrap(), None);
                assert!(big.is_empty());
            }

            #[test]
            fn zero_item_is_not_empty_cell() {
                let mut grid = make::<i32>(1, 2);
                grid.put(loc(0, 0), 0).unwrap();
                assert_eq!(grid.get(loc(0, 0)).unwrap(), Some(&0));
                assert_eq!(grid.get(loc(0, 1)).unwrap(), None);
                assert_eq!(grid.num_items(), 1);
            }
        }
    )*};
}

grid_basics_tests! {
    dense: Backing::Dense,
    sparse: Backing::Sparse,
}

#[test]
fn sparse_put_get_and_remove_work_for_huge_grids() {
    let mut grid = SparseGrid::new(1_000_000, 1_000_000).unwrap();
    let corner = loc(999_999, 999_999);

    grid.put(corner, "A").unwrap();
    assert_eq!(grid.num_items(), 1);
    assert_eq!(grid.get(corner).unwrap(), Some(&"A"));
    assert_eq!(grid.remove(corner).unwrap(), Some("A"));
    assert_eq!(grid.remove(corner).unwrap(), None);
    assert_eq!(grid.num_items(), 0);

    assert_invalid_argument(grid.get(loc(1_000_000, 0)));
}
