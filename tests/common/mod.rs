#![allow(dead_code)]

use gridbox::{GridError, Location};

pub fn loc(row: usize, col: usize) -> Location {
    Location::new(row, col)
}

/// The [GridError] behind a failed `result`.
pub fn grid_error<T>(result: anyhow::Result<T>) -> GridError {
    match result {
        Ok(_) => panic!("expected an error"),
        Err(e) => *e
            .downcast_ref::<GridError>()
            .unwrap_or_else(|| panic!("expected a GridError, got {:?}", e)),
    }
}

pub fn assert_invalid_argument<T>(result: anyhow::Result<T>) {
    let error = grid_error(result);
    assert!(
        error.is_invalid_argument(),
        "expected an invalid argument, got {:?}",
        error
    );
}

/// Asserts that both lists hold the same elements, in any order.
pub fn same_items<T: Ord + std::fmt::Debug>(mut expected: Vec<T>, mut actual: Vec<T>) {
    expected.sort();
    actual.sort();
    assert_eq!(expected, actual);
}
