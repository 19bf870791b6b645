//! One-time transformation of appended rows into the frozen layout.
//!
//! Two simple in-place quicksorts instead of one composite comparator:
//! 1. every row by source,
//! 2. every maximal run of equal sources by destination.
//!
//! A single adjacent scan then rejects repeated `(source, destination)` pairs.

use super::rows::{Column, Rows};
use crate::error::{GraphError, GraphResult};

/// Sorts `rows` by `(source, destination)` and validates uniqueness of endpoints.
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`] naming both edges of the first
/// duplicate pair found.
pub(crate) fn freeze(mut rows: Rows) -> GraphResult<Rows> {
    let len = rows.len();
    quicksort(&mut rows, Column::Source, 0, len);
    let runs = sort_source_runs(&mut rows);

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = len, runs, "sorted edge rows");
    #[cfg(not(feature = "tracing"))]
    let _ = runs;

    if let Some(i) = first_duplicate(&rows) {
        let err = GraphError::duplicate_edge(rows.edge(i - 1), rows.edge(i));
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %err, "rejected duplicate endpoints");
        return Err(err);
    }

    Ok(rows)
}

/// Sorts rows `lo..hi` by `column`.
///
/// Recurses into the smaller partition and loops on the larger one, so the
/// stack stays logarithmic even when every pivot is the worst choice.
fn quicksort(rows: &mut Rows, column: Column, mut lo: usize, mut hi: usize) {
    while hi - lo > 1 {
        let p = partition(rows, column, lo, hi);
        if p - lo < hi - p {
            quicksort(rows, column, lo, p);
            lo = p + 1;
        } else {
            quicksort(rows, column, p + 1, hi);
            hi = p;
        }
    }
}

/// Lomuto partition of `lo..hi` around the last row; returns the pivot's final index.
fn partition(rows: &mut Rows, column: Column, lo: usize, hi: usize) -> usize {
    let last = hi - 1;
    let pivot = rows.key(column, last);
    let mut store = lo;
    for j in lo..last {
        if rows.key(column, j) <= pivot {
            rows.swap(store, j);
            store += 1;
        }
    }
    rows.swap(store, last);
    store
}

/// Sorts every run of equal sources by destination. Returns the number of runs.
fn sort_source_runs(rows: &mut Rows) -> usize {
    let len = rows.len();
    let mut runs = 0;
    let mut start = 0;
    for i in 1..=len {
        if i == len || rows.key(Column::Source, i) != rows.key(Column::Source, start) {
            quicksort(rows, Column::Destination, start, i);
            start = i;
            runs += 1;
        }
    }
    runs
}

/// Index `i` of the first row that repeats the endpoints of row `i - 1`.
fn first_duplicate(rows: &Rows) -> Option<usize> {
    let sources = rows.sources();
    let destinations = rows.destinations();
    (1..rows.len()).find(|&i| sources[i - 1] == sources[i] && destinations[i - 1] == destinations[i])
}
