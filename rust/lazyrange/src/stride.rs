//! Keeps every `step`-th element of a range, starting with the first.

use lazyrange_common::{Result, verify_config};

use crate::facade::{Cursor, Walk};
use crate::seq::{SeqCursor, bounds};
use crate::utils::distance;

/// The elements at positions `0, step, 2 * step, ...` of a range.
///
/// Created by [`stride`]. A range of `m` elements yields `ceil(m / step)`
/// elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strided<R> {
    rg: R,
    step: usize,
}

impl<R> Strided<R> {
    pub fn get_ref(&self) -> &R {
        &self.rg
    }

    pub fn into_inner(self) -> R {
        self.rg
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of elements: `ceil(m / step)` where `m` is the current size of the
    /// wrapped range, measured through a clone of it.
    pub fn size(&self) -> usize
    where
        R: IntoIterator + Clone,
    {
        distance(self.rg.clone()).div_ceil(self.step)
    }
}

/// Lazily keeps every `step`-th element of `rg`.
///
/// # Errors
///
/// Returns a configuration error if `step` is not positive.
///
/// ```
/// use lazyrange::stride;
///
/// let v = vec![1, 2, 3, 4, 5, 6, 7];
/// let odd: Vec<i32> = stride(&v, 2)?.into_iter().copied().collect();
/// assert_eq!(odd, vec![1, 3, 5, 7]);
/// assert!(stride(&v, 0).is_err());
/// # Ok::<(), lazyrange::Error>(())
/// ```
pub fn stride<R: IntoIterator>(rg: R, step: i64) -> Result<Strided<R>> {
    verify_config!(step, step > 0);
    let step = usize::try_from(step).unwrap_or(usize::MAX);
    log::trace!("stride: step {step}");
    Ok(Strided { rg, step })
}

/// Cursor of a [`Strided`] range: one increment moves the wrapped cursor
/// `step` positions.
#[derive(Debug, Clone)]
pub struct StrideCursor<C> {
    inner: C,
    step: usize,
}

impl<C> StrideCursor<C> {
    pub fn new(inner: C, step: usize) -> Self {
        StrideCursor { inner, step }
    }
}

impl<C: Cursor> Cursor for StrideCursor<C> {
    type Item = C::Item;
    type End = C::End;

    #[inline]
    fn increment(&mut self) {
        self.inner.advance_by(self.step);
    }

    #[inline]
    fn dereference(&mut self) -> C::Item {
        self.inner.dereference()
    }

    #[inline]
    fn reached(&mut self, end: &C::End) -> bool {
        self.inner.reached(end)
    }

    fn advance_by(&mut self, n: usize) {
        self.inner.advance_by(n.saturating_mul(self.step));
    }

    fn remaining_hint(&self, end: &C::End) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.remaining_hint(end);
        (
            lower.div_ceil(self.step),
            upper.map(|n| n.div_ceil(self.step)),
        )
    }
}

impl<C: PartialEq> PartialEq for StrideCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

pub type StrideIter<I> = Walk<StrideCursor<SeqCursor<I>>>;

impl<R: IntoIterator> IntoIterator for Strided<R> {
    type Item = R::Item;
    type IntoIter = StrideIter<R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        let (begin, end) = bounds(self.rg);
        StrideCursor::new(begin, self.step).until(end)
    }
}

impl<'a, R> IntoIterator for &'a Strided<R>
where
    &'a R: IntoIterator,
{
    type Item = <&'a R as IntoIterator>::Item;
    type IntoIter = StrideIter<<&'a R as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        let (begin, end) = bounds(&self.rg);
        StrideCursor::new(begin, self.step).until(end)
    }
}

impl<'a, R> IntoIterator for &'a mut Strided<R>
where
    &'a mut R: IntoIterator,
{
    type Item = <&'a mut R as IntoIterator>::Item;
    type IntoIter = StrideIter<<&'a mut R as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        let (begin, end) = bounds(&mut self.rg);
        StrideCursor::new(begin, self.step).until(end)
    }
}
