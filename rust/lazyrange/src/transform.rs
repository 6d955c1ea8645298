//! Lazily applies a unary callable to every element of a range.

use std::fmt;

use crate::facade::{Cursor, Walk};
use crate::seq::{SeqCursor, bounds};

/// A range whose elements are `f(element)`.
///
/// Created by [`transform`]. The callable is applied on every dereference and
/// its result is never cached. Each traversal works on its own copy of the
/// callable, so a callable with internal state (e.g. a counter) starts every
/// traversal from the state it had when the range was created.
///
/// Only read access is provided: there is no `&mut` traversal of a transformed
/// range, and the source iterator must be `Clone`. Iterators handing out `&mut`
/// elements never are, so the callable cannot write to the source.
#[derive(Clone)]
pub struct Transformed<R, F> {
    rg: R,
    f: F,
}

impl<R, F> Transformed<R, F> {
    pub fn new(rg: R, f: F) -> Self {
        Transformed { rg, f }
    }

    pub fn get_ref(&self) -> &R {
        &self.rg
    }
}

impl<R: fmt::Debug, F> fmt::Debug for Transformed<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformed")
            .field("rg", &self.rg)
            .finish_non_exhaustive()
    }
}

/// Lazily maps `rg` through `f`.
///
/// ```
/// use lazyrange::transform;
///
/// let list = std::collections::LinkedList::from([1, 2, 3, 4, 5]);
/// let squares: Vec<i32> = transform(&list, |i| i * i).into_iter().collect();
/// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
/// ```
///
/// A mutable source is rejected:
///
/// ```compile_fail
/// use lazyrange::transform;
///
/// let mut v = vec![1, 2, 3];
/// let t = transform(&mut v, |x: &mut i32| {
///     *x = 0;
///     1
/// });
/// ```
pub fn transform<R, F, B>(rg: R, f: F) -> Transformed<R, F>
where
    R: IntoIterator,
    R::IntoIter: Clone,
    F: FnMut(R::Item) -> B,
{
    Transformed::new(rg, f)
}

/// Cursor of a [`Transformed`] range.
///
/// Cloning the cursor clones the callable together with its current state.
#[derive(Clone)]
pub struct TransformCursor<C, F> {
    inner: C,
    f: F,
}

impl<C, F> TransformCursor<C, F> {
    pub fn new(inner: C, f: F) -> Self {
        TransformCursor { inner, f }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for TransformCursor<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformCursor")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<C, F, B> Cursor for TransformCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;
    type End = C::End;

    #[inline]
    fn increment(&mut self) {
        self.inner.increment();
    }

    #[inline]
    fn dereference(&mut self) -> B {
        (self.f)(self.inner.dereference())
    }

    #[inline]
    fn reached(&mut self, end: &C::End) -> bool {
        self.inner.reached(end)
    }

    fn advance_by(&mut self, n: usize) {
        self.inner.advance_by(n);
    }

    fn remaining_hint(&self, end: &C::End) -> (usize, Option<usize>) {
        self.inner.remaining_hint(end)
    }
}

impl<C: PartialEq, F> PartialEq for TransformCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

pub type TransformIter<I, F> = Walk<TransformCursor<SeqCursor<I>, F>>;

impl<R, F, B> IntoIterator for Transformed<R, F>
where
    R: IntoIterator,
    R::IntoIter: Clone,
    F: FnMut(R::Item) -> B,
{
    type Item = B;
    type IntoIter = TransformIter<R::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        let (begin, end) = bounds(self.rg);
        TransformCursor::new(begin, self.f).until(end)
    }
}

impl<'a, R, F, B> IntoIterator for &'a Transformed<R, F>
where
    &'a R: IntoIterator,
    <&'a R as IntoIterator>::IntoIter: Clone,
    F: Clone + FnMut(<&'a R as IntoIterator>::Item) -> B,
{
    type Item = B;
    type IntoIter = TransformIter<<&'a R as IntoIterator>::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        let (begin, end) = bounds(&self.rg);
        TransformCursor::new(begin, self.f.clone()).until(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;
    use std::cell::Cell;

    #[test]
    fn test_square() {
        let v = vec![1, 2, 3, 4, 5, 6];
        let mut i = 0;
        for x in transform(&v, |x| x * x) {
            i += 1;
            assert_eq!(i * i, x);
        }
        assert_eq!(i, 6);
    }

    #[test]
    fn test_non_clonable_elements() {
        struct NoClone(i32);
        let arr = [NoClone(1), NoClone(2), NoClone(3)];
        let squares: Vec<i32> = transform(&arr, |x| x.0 * x.0).into_iter().collect();
        assert_eq!(squares, vec![1, 4, 9]);
    }

    #[test]
    fn test_stateful_callable_restarts_per_traversal() {
        let mut n = 0;
        let t = transform(range(3), move |x| {
            n += 1;
            (n, x)
        });
        let first: Vec<_> = (&t).into_iter().collect();
        let second: Vec<_> = (&t).into_iter().collect();
        assert_eq!(first, vec![(1, 0), (2, 1), (3, 2)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cursor_copy_deep_copies_callable_state() {
        let mut n = 0;
        let t = transform(range(4), move |x| {
            n += 1;
            n * 100 + x
        });
        let mut it = (&t).into_iter();
        assert_eq!(it.next(), Some(100));
        let mut copy = it.clone();
        assert_eq!(it.next(), Some(201));
        assert_eq!(it.next(), Some(302));
        // The copy carries the counter value at the time it was taken.
        assert_eq!(copy.next(), Some(201));
        assert_eq!(copy.next(), Some(302));
    }

    #[test]
    fn test_never_cached() {
        let calls = Cell::new(0);
        let v = vec![1, 2, 3];
        let t = transform(&v, |x| {
            calls.set(calls.get() + 1);
            *x
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(t.clone().into_iter().sum::<i32>(), 6);
        assert_eq!(calls.get(), 3);
        assert_eq!(t.into_iter().sum::<i32>(), 6);
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn test_skipped_elements_are_not_computed() {
        let calls = Cell::new(0);
        let t = transform(range(10), |x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        let mut it = (&t).into_iter();
        assert_eq!(it.nth(7), Some(14));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_transform_of_owned_range() {
        let words = vec![String::from("a"), String::from("bb")];
        let lens: Vec<usize> = transform(words, |s| s.len()).into_iter().collect();
        assert_eq!(lens, vec![1, 2]);
    }

    #[test]
    fn test_source_is_only_read() {
        let v = vec![1, 2, 3];
        let mut seen = Vec::new();
        let t = transform(&v, |x| {
            seen.push(*x);
            x * 2
        });
        assert_eq!(t.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
        assert_eq!(seen, v);
        assert_eq!(v, vec![1, 2, 3]);

        let owned = transform(vec![String::from("a")], |s| s + "b");
        assert_eq!(owned.get_ref(), &vec![String::from("a")]);
        assert_eq!(owned.into_iter().next().as_deref(), Some("ab"));
    }

    #[test]
    fn test_empty() {
        let v: Vec<i32> = vec![];
        assert_eq!(transform(&v, |x| x + 1).into_iter().next(), None);
    }
}
