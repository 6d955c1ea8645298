//! Pairs every element of a range with its running index.

use crate::facade::{Cursor, Walk};
use crate::seq::{SeqCursor, bounds};

/// A range whose elements are `(index, element)` pairs.
///
/// Created by [`enumerate`]. The index starts at 0 at the beginning of every
/// traversal and advances in lockstep with the wrapped range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerated<R> {
    rg: R,
}

impl<R> Enumerated<R> {
    pub fn new(rg: R) -> Self {
        Enumerated { rg }
    }

    pub fn get_ref(&self) -> &R {
        &self.rg
    }

    pub fn into_inner(self) -> R {
        self.rg
    }
}

/// Lazily enumerates `rg`.
///
/// ```
/// use lazyrange::enumerate;
///
/// let mut v = vec![6, 5, 4];
/// for (i, x) in enumerate(&mut v) {
///     *x += i;
/// }
/// assert_eq!(v, vec![6, 6, 6]);
/// ```
pub fn enumerate<R: IntoIterator>(rg: R) -> Enumerated<R> {
    Enumerated::new(rg)
}

/// Cursor of an [`Enumerated`] range.
#[derive(Debug, Clone)]
pub struct EnumerateCursor<C> {
    inner: C,
    index: usize,
}

impl<C> EnumerateCursor<C> {
    /// Wraps `inner`; the index of its current position is 0.
    pub fn new(inner: C) -> Self {
        EnumerateCursor { inner, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
    type Item = (usize, C::Item);
    type End = C::End;

    #[inline]
    fn increment(&mut self) {
        self.inner.increment();
        self.index += 1;
    }

    #[inline]
    fn dereference(&mut self) -> Self::Item {
        (self.index, self.inner.dereference())
    }

    #[inline]
    fn reached(&mut self, end: &C::End) -> bool {
        self.inner.reached(end)
    }

    fn advance_by(&mut self, n: usize) {
        self.inner.advance_by(n);
        self.index = self.index.saturating_add(n);
    }

    fn remaining_hint(&self, end: &C::End) -> (usize, Option<usize>) {
        self.inner.remaining_hint(end)
    }
}

impl<C: PartialEq> PartialEq for EnumerateCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

pub type EnumerateIter<I> = Walk<EnumerateCursor<SeqCursor<I>>>;

impl<R: IntoIterator> IntoIterator for Enumerated<R> {
    type Item = (usize, R::Item);
    type IntoIter = EnumerateIter<R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        let (begin, end) = bounds(self.rg);
        EnumerateCursor::new(begin).until(end)
    }
}

impl<'a, R> IntoIterator for &'a Enumerated<R>
where
    &'a R: IntoIterator,
{
    type Item = (usize, <&'a R as IntoIterator>::Item);
    type IntoIter = EnumerateIter<<&'a R as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        let (begin, end) = bounds(&self.rg);
        EnumerateCursor::new(begin).until(end)
    }
}

impl<'a, R> IntoIterator for &'a mut Enumerated<R>
where
    &'a mut R: IntoIterator,
{
    type Item = (usize, <&'a mut R as IntoIterator>::Item);
    type IntoIter = EnumerateIter<<&'a mut R as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        let (begin, end) = bounds(&mut self.rg);
        EnumerateCursor::new(begin).until(end)
    }
}
