//! Balanced partitioning of an integer span across a fixed number of workers.
//!
//! The span `[first, last)` is cut into `n_chunks` contiguous, non-overlapping
//! sub-spans whose sizes differ by at most one. When the span does not divide
//! evenly, the lower-numbered ranks receive the extra elements.
//!
//! - [`chunk_range`]: the sub-span owned by a single rank.
//! - [`try_chunk_range`]: the same, returning an error on invalid arguments.
//! - [`ChunkedSpan`]: an iterator over the sub-spans of all ranks, in rank order.
//!
//! Both are pure functions of their arguments and may be called concurrently
//! from any number of threads.

use std::ops::Range;

use lazyrange_common::{Result, verify_arg};

/// Returns the bounds `(chunk_first, chunk_last)` of the sub-span assigned to `rank`.
///
/// With `total = last - first`, every rank receives `total / n_chunks` elements and
/// the first `total % n_chunks` ranks receive one more. The arithmetic is done
/// in `i128`, so spans wider than `i64::MAX` are partitioned exactly.
///
/// # Panics
///
/// Panics if `n_chunks` is 0, or if `rank` lies so far outside `0..n_chunks`
/// that its bounds do not fit in an `i64`.
///
/// # Arguments
///
/// * `first` - The first value of the span.
/// * `last` - The end of the span (excluded).
/// * `n_chunks` - The number of workers to partition the span for.
/// * `rank` - The worker whose sub-span is requested, in `0..n_chunks`.
pub fn chunk_range(first: i64, last: i64, n_chunks: i64, rank: i64) -> (i64, i64) {
    if n_chunks <= 0 {
        panic!("n_chunks must be greater than 0");
    }
    let (wide_first, n, r) = (i128::from(first), i128::from(n_chunks), i128::from(rank));
    let total_size = i128::from(last) - wide_first;
    let chunk_size = total_size / n;
    let n_large_chunks = total_size - n * chunk_size;

    let (lo, hi) = if r < n_large_chunks {
        (
            wide_first + r * (chunk_size + 1),
            wide_first + (r + 1) * (chunk_size + 1),
        )
    } else {
        (
            wide_first + n_large_chunks + r * chunk_size,
            wide_first + n_large_chunks + (r + 1) * chunk_size,
        )
    };
    let bounds = (narrow(lo), narrow(hi));
    log::debug!(
        "chunk_range({first}, {last}, {n_chunks}, {rank}) -> [{}, {})",
        bounds.0,
        bounds.1
    );
    bounds
}

fn narrow(bound: i128) -> i64 {
    match i64::try_from(bound) {
        Ok(bound) => bound,
        Err(_) => panic!("chunk bound {bound} does not fit in i64"),
    }
}

/// Checked form of [`chunk_range`].
///
/// # Errors
///
/// Returns an invalid-argument error if `n_chunks` is not positive or if `rank`
/// is outside `0..n_chunks`.
pub fn try_chunk_range(first: i64, last: i64, n_chunks: i64, rank: i64) -> Result<(i64, i64)> {
    verify_arg!(n_chunks, n_chunks > 0);
    verify_arg!(rank, (0..n_chunks).contains(&rank));
    Ok(chunk_range(first, last, n_chunks, rank))
}

/// An iterator over the sub-spans of every rank, from rank 0 to `n_chunks - 1`.
///
/// The yielded ranges are adjacent and together cover `[first, last)` exactly.
#[derive(Debug, Clone)]
pub struct ChunkedSpan {
    /// The first value of the partitioned span.
    first: i64,
    /// The end of the partitioned span (excluded).
    last: i64,
    /// The number of ranks the span is partitioned for.
    n_chunks: i64,
    /// The next rank to yield.
    rank: i64,
}

impl ChunkedSpan {
    /// Creates a new `ChunkedSpan` iterator.
    ///
    /// # Panics
    ///
    /// Panics if `n_chunks` is 0.
    pub fn new(first: i64, last: i64, n_chunks: i64) -> Self {
        if n_chunks <= 0 {
            panic!("n_chunks must be greater than 0");
        }
        ChunkedSpan {
            first,
            last,
            n_chunks,
            rank: 0,
        }
    }
}

impl Iterator for ChunkedSpan {
    type Item = Range<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rank >= self.n_chunks {
            return None;
        }
        let (start, end) = chunk_range(self.first, self.last, self.n_chunks, self.rank);
        self.rank += 1;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n_chunks - self.rank) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChunkedSpan {}

/// Convenience constructor for [`ChunkedSpan`].
///
/// # Panics
///
/// Panics if `n_chunks` is 0.
pub fn chunk_ranges(first: i64, last: i64, n_chunks: i64) -> ChunkedSpan {
    ChunkedSpan::new(first, last, n_chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_chunk() {
        assert_eq!(chunk_range(0, 10, 1, 0), (0, 10));
    }

    #[test]
    fn test_even_split() {
        assert_eq!(chunk_range(0, 10, 2, 0), (0, 5));
        assert_eq!(chunk_range(0, 10, 2, 1), (5, 10));
    }

    #[test]
    fn test_uneven_split_favors_low_ranks() {
        assert_eq!(chunk_range(0, 10, 3, 0), (0, 4));
        assert_eq!(chunk_range(0, 10, 3, 1), (4, 7));
        assert_eq!(chunk_range(0, 10, 3, 2), (7, 10));

        assert_eq!(chunk_range(0, 10, 4, 0), (0, 3));
        assert_eq!(chunk_range(0, 10, 4, 1), (3, 6));
        assert_eq!(chunk_range(0, 10, 4, 2), (6, 8));
        assert_eq!(chunk_range(0, 10, 4, 3), (8, 10));
    }

    #[test]
    fn test_more_chunks_than_elements() {
        assert_eq!(chunk_range(0, 10, 11, 0), (0, 1));
        assert_eq!(chunk_range(0, 10, 11, 9), (9, 10));
        assert_eq!(chunk_range(0, 10, 11, 10), (10, 10));
    }

    #[test]
    fn test_offset_span() {
        assert_eq!(chunk_range(-5, 5, 3, 0), (-5, -1));
        assert_eq!(chunk_range(-5, 5, 3, 1), (-1, 2));
        assert_eq!(chunk_range(-5, 5, 3, 2), (2, 5));
    }

    #[test]
    fn test_span_wider_than_i64_max() {
        assert_eq!(chunk_range(i64::MIN, i64::MAX, 1, 0), (i64::MIN, i64::MAX));
        assert_eq!(chunk_range(i64::MIN, i64::MAX, 2, 0), (i64::MIN, 0));
        assert_eq!(chunk_range(i64::MIN, i64::MAX, 2, 1), (0, i64::MAX));
        let chunks: Vec<_> = chunk_ranges(-10, i64::MAX, 3).collect();
        assert_eq!(chunks.first().unwrap().start, -10);
        assert_eq!(chunks.last().unwrap().end, i64::MAX);
        assert_eq!(chunks[0].end, chunks[1].start);
        assert_eq!(chunks[1].end, chunks[2].start);
    }

    #[test]
    #[should_panic(expected = "n_chunks must be greater than 0")]
    fn test_zero_chunks() {
        let _ = chunk_range(0, 10, 0, 0);
    }

    #[test]
    fn test_try_chunk_range() {
        assert_eq!(try_chunk_range(0, 10, 3, 1).unwrap(), (4, 7));
        assert!(try_chunk_range(0, 10, 0, 0).is_err());
        assert!(try_chunk_range(0, 10, 3, 3).is_err());
        let err = try_chunk_range(0, 10, 3, -1).unwrap_err();
        assert!(!err.is_configuration());
        assert!(err.to_string().starts_with("invalid argument rank:"));
    }

    #[test]
    fn test_chunk_ranges_cover_span() {
        for n_chunks in 1..=12 {
            let chunks: Vec<_> = chunk_ranges(3, 40, n_chunks).collect();
            assert_eq!(chunks.len(), n_chunks as usize);
            assert_eq!(chunks.first().unwrap().start, 3);
            assert_eq!(chunks.last().unwrap().end, 40);
            for pair in chunks.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
                let (a, b) = (pair[0].end - pair[0].start, pair[1].end - pair[1].start);
                assert!(a == b || a == b + 1);
            }
        }
    }

    #[test]
    fn test_chunk_ranges_exact_size() {
        let mut chunks = chunk_ranges(0, 10, 3);
        assert_eq!(chunks.len(), 3);
        chunks.next();
        assert_eq!(chunks.size_hint(), (2, Some(2)));
    }
}
