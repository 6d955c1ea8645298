//! Restricts a range to the positions `[start, end)`.

use crate::facade::{Cursor, Sentinel, Walk, min_hint};
use crate::seq::{Exhausted, SeqCursor, bounds};
use crate::utils::distance;

/// The positions `start..end` of a range.
///
/// Created by [`slice`]. Bounds past the size of the wrapped range are clamped
/// to it, and an `end` below `start` is raised to `start`, so the slice is then
/// empty. The wrapped range is not measured when the slice is created: it may
/// change size between traversals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sliced<R> {
    rg: R,
    start: usize,
    end: usize,
}

impl<R> Sliced<R> {
    pub fn new(rg: R, start: usize, end: usize) -> Self {
        if end < start {
            log::trace!("slice end {end} is below start {start}, the slice is empty");
        }
        Sliced {
            rg,
            start,
            end: end.max(start),
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.rg
    }

    pub fn into_inner(self) -> R {
        self.rg
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// End position, never below `start`. It is not clamped to the size of
    /// the wrapped range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of elements of the slice: `min(end, n) - start`, or 0, where `n`
    /// is the current size of the wrapped range.
    ///
    /// Measures a clone of the wrapped range on every call. For a borrowed
    /// source only the reference is cloned.
    pub fn size(&self) -> usize
    where
        R: IntoIterator + Clone,
    {
        distance(self.rg.clone()).min(self.end).saturating_sub(self.start)
    }
}

/// Lazily restricts `rg` to the positions `start..end`.
///
/// ```
/// use lazyrange::slice;
///
/// let v = vec![10, 11, 12, 13, 14, 15];
/// let middle: Vec<i32> = slice(&v, 2, 4).into_iter().copied().collect();
/// assert_eq!(middle, vec![12, 13]);
///
/// assert_eq!(slice(&v, 4, 100).into_iter().count(), 2);
/// assert_eq!(slice(&v, 4, 1).into_iter().count(), 0);
/// ```
pub fn slice<R: IntoIterator>(rg: R, start: usize, end: usize) -> Sliced<R> {
    Sliced::new(rg, start, end)
}

/// Cursor of a [`Sliced`] range: the wrapped cursor and its position in the
/// wrapped range.
///
/// The end marker pairs the wrapped range's end with the stop position; the
/// cursor reaches it when either one is reached.
#[derive(Debug, Clone)]
pub struct SliceCursor<C> {
    inner: C,
    pos: usize,
}

impl<C: Cursor> SliceCursor<C> {
    /// Moves `inner` from the beginning of its range to position `start`
    /// without dereferencing the skipped positions.
    pub fn new(mut inner: C, start: usize) -> Self {
        inner.advance_by(start);
        SliceCursor { inner, pos: start }
    }

    /// Position in the wrapped range.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<C: Cursor> Cursor for SliceCursor<C> {
    type Item = C::Item;
    type End = (C::End, usize);

    #[inline]
    fn increment(&mut self) {
        self.inner.increment();
        self.pos = self.pos.saturating_add(1);
    }

    #[inline]
    fn dereference(&mut self) -> C::Item {
        self.inner.dereference()
    }

    #[inline]
    fn reached(&mut self, end: &Self::End) -> bool {
        self.pos >= end.1 || self.inner.reached(&end.0)
    }

    fn advance_by(&mut self, n: usize) {
        self.inner.advance_by(n);
        self.pos = self.pos.saturating_add(n);
    }

    fn remaining_hint(&self, end: &Self::End) -> (usize, Option<usize>) {
        let left = end.1.saturating_sub(self.pos);
        min_hint(self.inner.remaining_hint(&end.0), (left, Some(left)))
    }
}

impl<C: PartialEq> PartialEq for SliceCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

pub type SliceIter<I> = Walk<SliceCursor<SeqCursor<I>>>;

fn sliced_walk<I: Iterator>(
    (begin, end): (SeqCursor<I>, Sentinel<Exhausted>),
    start: usize,
    stop: usize,
) -> SliceIter<I> {
    SliceCursor::new(begin, start).until(Sentinel::new((end.into_inner(), stop)))
}

impl<R: IntoIterator> IntoIterator for Sliced<R> {
    type Item = R::Item;
    type IntoIter = SliceIter<R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        sliced_walk(bounds(self.rg), self.start, self.end)
    }
}

impl<'a, R> IntoIterator for &'a Sliced<R>
where
    &'a R: IntoIterator,
{
    type Item = <&'a R as IntoIterator>::Item;
    type IntoIter = SliceIter<<&'a R as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        sliced_walk(bounds(&self.rg), self.start, self.end)
    }
}

impl<'a, R> IntoIterator for &'a mut Sliced<R>
where
    &'a mut R: IntoIterator,
{
    type Item = <&'a mut R as IntoIterator>::Item;
    type IntoIter = SliceIter<<&'a mut R as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        sliced_walk(bounds(&mut self.rg), self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;
    use crate::transform::transform;
    use std::cell::Cell;
    use std::collections::LinkedList;

    #[test]
    fn test_all_boundaries() {
        let v: Vec<usize> = (0..6).collect();
        for start in 0..9 {
            for end in 0..9 {
                let s = slice(v.clone(), start, end);
                let items: Vec<usize> = (&s).into_iter().copied().collect();
                let stop = end.min(v.len());
                let expected: Vec<usize> = if start < stop {
                    v[start..stop].to_vec()
                } else {
                    vec![]
                };
                assert_eq!(items, expected, "slice({start}, {end})");
                assert_eq!(s.size(), expected.len(), "size of slice({start}, {end})");
            }
        }
    }

    #[test]
    fn test_size_of_borrowed_source() {
        let v = vec![1, 2, 3, 4];
        assert_eq!(slice(&v, 1, 3).size(), 2);
        assert_eq!(slice(&v, 2, 10).size(), 2);
        assert_eq!(slice(&v, 5, 10).size(), 0);
        let list: LinkedList<i32> = (0..7).collect();
        assert_eq!(slice(&list, 1, 5).size(), 4);
    }

    #[test]
    fn test_slice_of_list() {
        let list: LinkedList<char> = "abcdef".chars().collect();
        let s: String = slice(&list, 1, 4).into_iter().collect();
        assert_eq!(s, "bcd");
    }

    #[test]
    fn test_inverted_bounds_are_empty() {
        let s = slice(vec![1, 2, 3, 4], 3, 1);
        assert_eq!(s.end(), 3);
        assert_eq!(s.size(), 0);
        assert_eq!(s.into_iter().next(), None);
    }

    #[test]
    fn test_mutates_through_slice() {
        let mut v = vec![0; 6];
        for x in slice(&mut v, 2, 5) {
            *x = 7;
        }
        assert_eq!(v, vec![0, 0, 7, 7, 7, 0]);

        let mut s = slice(vec![1, 2, 3], 1, 3);
        for x in &mut s {
            *x *= 10;
        }
        assert_eq!(s.into_inner(), vec![1, 20, 30]);
    }

    #[test]
    fn test_size_follows_source_growth() {
        let mut s = slice(vec![1, 2], 1, 5);
        assert_eq!(s.size(), 1);
        for _ in 0..10 {
            if let Some(x) = (&mut s).into_iter().next() {
                *x += 1;
            }
        }
        assert_eq!((&s).into_iter().copied().collect::<Vec<_>>(), vec![12]);
        let mut v = s.into_inner();
        v.extend([3, 4, 5, 6]);
        let s = slice(v, 1, 5);
        assert_eq!(s.size(), 4);
    }

    #[test]
    fn test_skipped_elements_are_not_computed() {
        let calls = Cell::new(0);
        let t = transform(range(100), |x| {
            calls.set(calls.get() + 1);
            x
        });
        let items: Vec<i64> = slice(&t, 90, 93).into_iter().collect();
        assert_eq!(items, vec![90, 91, 92]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_size_hint() {
        let it = slice(range(10), 2, 5).into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        let it = slice(range(4), 2, 50).into_iter();
        assert_eq!(it.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_start_past_end_of_source() {
        let v = vec![1, 2, 3];
        assert_eq!(slice(&v, 10, 20).into_iter().count(), 0);
    }
}
