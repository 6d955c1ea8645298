//! Iterates several ranges in lockstep, stopping at the shortest one.
//!
//! `zip((a, b, c))` yields `(a_i, b_i, c_i)` tuples. Tuples of 1 to 8 ranges are
//! supported. Each source keeps the mutability of its elements: zipping
//! `&mut v` with `&w` yields `(&mut T, &U)` pairs.

use crate::facade::{Cursor, Sentinel, Walk, min_hint};
use crate::seq::{Exhausted, SeqCursor};

/// A range of tuples built from a tuple of ranges.
///
/// Created by [`zip`]. The length is the minimum of the lengths of all sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zipped<T> {
    ranges: T,
}

impl<T> Zipped<T> {
    pub fn new(ranges: T) -> Self {
        Zipped { ranges }
    }

    pub fn get_ref(&self) -> &T {
        &self.ranges
    }

    pub fn into_inner(self) -> T {
        self.ranges
    }
}

/// Lazily zips a tuple of ranges.
///
/// ```
/// use lazyrange::zip;
///
/// let a = [6, 5, 4, 3, 2, 1];
/// let b = vec![1, 2, 3];
/// let sums: Vec<i32> = zip((&a, &b)).into_iter().map(|(x, y)| x + y).collect();
/// assert_eq!(sums, vec![7, 7, 7]);
/// ```
pub fn zip<T>(ranges: T) -> Zipped<T> {
    Zipped::new(ranges)
}

/// Cursor of a [`Zipped`] range: a tuple of cursors moved together.
///
/// It reaches its end as soon as *any* of its cursors reaches its own end.
/// Two zip cursors are equal iff all their cursors are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipCursor<T> {
    cursors: T,
}

impl<T> ZipCursor<T> {
    pub fn new(cursors: T) -> Self {
        ZipCursor { cursors }
    }
}

pub type ZipIter<T> = Walk<ZipCursor<T>>;

macro_rules! impl_zip {
    ($($R:ident $C:ident $idx:tt),+) => {
        impl<$($C: Cursor),+> Cursor for ZipCursor<($($C,)+)> {
            type Item = ($($C::Item,)+);
            type End = ($($C::End,)+);

            #[inline]
            fn increment(&mut self) {
                $(self.cursors.$idx.increment();)+
            }

            #[inline]
            fn dereference(&mut self) -> Self::Item {
                ($(self.cursors.$idx.dereference(),)+)
            }

            #[inline]
            fn reached(&mut self, end: &Self::End) -> bool {
                false $(|| self.cursors.$idx.reached(&end.$idx))+
            }

            fn advance_by(&mut self, n: usize) {
                $(self.cursors.$idx.advance_by(n);)+
            }

            fn remaining_hint(&self, end: &Self::End) -> (usize, Option<usize>) {
                let hint = (usize::MAX, None);
                $(let hint = min_hint(hint, self.cursors.$idx.remaining_hint(&end.$idx));)+
                hint
            }
        }

        impl<$($R: IntoIterator),+> IntoIterator for Zipped<($($R,)+)> {
            type Item = ($($R::Item,)+);
            type IntoIter = ZipIter<($(SeqCursor<$R::IntoIter>,)+)>;

            fn into_iter(self) -> Self::IntoIter {
                let cursors = ($(SeqCursor::new(self.ranges.$idx.into_iter()),)+);
                ZipCursor::new(cursors).until(Sentinel::new(($(impl_zip!(@end $R),)+)))
            }
        }

        impl<'a, $($R),+> IntoIterator for &'a Zipped<($($R,)+)>
        where
            $(&'a $R: IntoIterator),+
        {
            type Item = ($(<&'a $R as IntoIterator>::Item,)+);
            type IntoIter = ZipIter<($(SeqCursor<<&'a $R as IntoIterator>::IntoIter>,)+)>;

            fn into_iter(self) -> Self::IntoIter {
                let cursors = ($(SeqCursor::new((&self.ranges.$idx).into_iter()),)+);
                ZipCursor::new(cursors).until(Sentinel::new(($(impl_zip!(@end $R),)+)))
            }
        }

        impl<'a, $($R),+> IntoIterator for &'a mut Zipped<($($R,)+)>
        where
            $(&'a mut $R: IntoIterator),+
        {
            type Item = ($(<&'a mut $R as IntoIterator>::Item,)+);
            type IntoIter = ZipIter<($(SeqCursor<<&'a mut $R as IntoIterator>::IntoIter>,)+)>;

            fn into_iter(self) -> Self::IntoIter {
                let cursors = ($(SeqCursor::new((&mut self.ranges.$idx).into_iter()),)+);
                ZipCursor::new(cursors).until(Sentinel::new(($(impl_zip!(@end $R),)+)))
            }
        }
    };
    (@end $R:ident) => {
        Exhausted
    };
}

impl_zip!(R0 C0 0);
impl_zip!(R0 C0 0, R1 C1 1);
impl_zip!(R0 C0 0, R1 C1 1, R2 C2 2);
impl_zip!(R0 C0 0, R1 C1 1, R2 C2 2, R3 C3 3);
impl_zip!(R0 C0 0, R1 C1 1, R2 C2 2, R3 C3 3, R4 C4 4);
impl_zip!(R0 C0 0, R1 C1 1, R2 C2 2, R3 C3 3, R4 C4 4, R5 C5 5);
impl_zip!(R0 C0 0, R1 C1 1, R2 C2 2, R3 C3 3, R4 C4 4, R5 C5 5, R6 C6 6);
impl_zip!(R0 C0 0, R1 C1 1, R2 C2 2, R3 C3 3, R4 C4 4, R5 C5 5, R6 C6 6, R7 C7 7);

/// Zips any number (1 to 8) of ranges: `zip!(a, b, c)` is `zip((a, b, c))`.
#[macro_export]
macro_rules! zip {
    ($($rg:expr),+ $(,)?) => {
        $crate::zip::zip(($($rg,)+))
    };
}
