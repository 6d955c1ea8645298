//! Helpers shared by the adaptors: measuring and materializing ranges.

/// Number of elements of `rg`.
///
/// O(1) when the iterator reports an exact size hint, otherwise the range is
/// traversed (without keeping its elements).
pub fn distance<R: IntoIterator>(rg: R) -> usize {
    let iter = rg.into_iter();
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => lower,
        _ => iter.count(),
    }
}

/// Collects the elements of `rg`, in order, into a new vector.
///
/// The vector is allocated up front when the size of the range is known.
///
/// ```
/// use lazyrange::{range, to_vec, transform};
///
/// let squares = to_vec(transform(range(4), |i| i * i));
/// assert_eq!(squares, vec![0, 1, 4, 9]);
/// ```
pub fn to_vec<R: IntoIterator>(rg: R) -> Vec<R::Item> {
    let iter = rg.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    values.extend(iter);
    values
}
