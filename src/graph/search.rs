use core::ops::Range;

use crate::edge::Vertex;

/// Which match a binary search settles on when several entries equal the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bias {
    Leftmost,
    Rightmost,
}

/// Binary search of the sorted `column[range]` for `target`.
///
/// Returns the leftmost or rightmost index holding `target`, or `None` when
/// the range does not contain it.
pub(crate) fn find(column: &[Vertex], target: Vertex, range: Range<usize>, bias: Bias) -> Option<usize> {
    let Range { start: mut low, end: mut high } = range;
    let mut found = None;

    while low < high {
        let mid = low + (high - low) / 2;
        let value = column[mid];
        if value > target {
            high = mid;
        } else if value < target {
            low = mid + 1;
        } else {
            found = Some(mid);
            match bias {
                Bias::Leftmost => high = mid,
                Bias::Rightmost => low = mid + 1,
            }
        }
    }

    found
}
