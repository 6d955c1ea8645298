//! Cartesian product of ranges, in row-major order.
//!
//! The last dimension varies fastest: `product((a, b))` with `a = [1, 2]` and
//! `b = ['a', 'b']` yields `(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')`.
//!
//! Every dimension except the first is traversed many times. Each dimension keeps
//! a copy of its begin cursor and restarts from it once exhausted, carrying one
//! step into the previous dimension; the product ends when the first dimension
//! reaches its own end. An empty dimension makes the whole product empty.
//!
//! Because dimensions are restarted and their elements handed out repeatedly,
//! the iterators must be `Clone` and so must the elements. Products of `&mut`
//! sources are therefore not available.

use std::fmt;

use crate::facade::{Cursor, Sentinel, Walk};
use crate::seq::{Exhausted, SeqCursor};
use crate::utils::distance;

/// The product of a tuple of ranges.
///
/// Created by [`product`], [`product!`](crate::product!) or
/// [`product_range!`](crate::product_range!).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplied<T> {
    ranges: T,
}

impl<T> Multiplied<T> {
    pub fn new(ranges: T) -> Self {
        Multiplied { ranges }
    }

    pub fn get_ref(&self) -> &T {
        &self.ranges
    }

    pub fn into_inner(self) -> T {
        self.ranges
    }
}

/// Lazily multiplies a tuple of ranges.
///
/// ```
/// use lazyrange::product;
///
/// let nums = [1, 2];
/// let letters = ['a', 'b'];
/// let pairs: Vec<(i32, char)> = product((&nums, &letters))
///     .into_iter()
///     .map(|(n, c)| (*n, *c))
///     .collect();
/// assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
/// ```
pub fn product<T>(ranges: T) -> Multiplied<T> {
    Multiplied::new(ranges)
}

/// One dimension of a product: a cursor, the saved begin cursor it restarts
/// from, and the element at its current position.
///
/// The element is cached because the same element of a slow dimension is
/// handed out for every combination of the faster ones.
pub struct Dim<C: Cursor> {
    begin: C,
    it: C,
    end: C::End,
    current: Option<C::Item>,
}

impl<C> Dim<C>
where
    C: Cursor + Clone,
    C::Item: Clone,
{
    pub fn new(begin: C, end: C::End) -> Self {
        Dim {
            it: begin.clone(),
            begin,
            end,
            current: None,
        }
    }

    /// Caches the element at the current position. Returns `false` if the
    /// dimension is at its end.
    fn load(&mut self) -> bool {
        if self.it.reached(&self.end) {
            self.current = None;
            return false;
        }
        self.current = Some(self.it.dereference());
        true
    }

    /// Moves to the next position. Returns `false` if it is past the end.
    fn step(&mut self) -> bool {
        self.it.increment();
        self.load()
    }

    /// Restarts from the saved begin cursor.
    fn reset(&mut self) {
        self.it = self.begin.clone();
        self.load();
    }

    fn value(&self) -> C::Item {
        match &self.current {
            Some(item) => item.clone(),
            None => panic!("dereference of a product cursor past its end"),
        }
    }

    /// Exact `(total, remaining)` position counts, where `remaining` includes
    /// the current position.
    fn extent(&self) -> Option<(usize, usize)> {
        let total = exact(self.begin.remaining_hint(&self.end))?;
        let remaining = exact(self.it.remaining_hint(&self.end))?;
        Some((total, remaining))
    }
}

fn exact(hint: (usize, Option<usize>)) -> Option<usize> {
    match hint {
        (lower, Some(upper)) if lower == upper => Some(lower),
        _ => None,
    }
}

/// Number of combinations left, given the extent of every dimension.
fn remaining_combinations(extents: &[Option<(usize, usize)>]) -> (usize, Option<usize>) {
    let mut total = 1usize;
    let mut index = 0usize;
    for extent in extents {
        let Some((len, remaining)) = *extent else {
            return (0, None);
        };
        let position = len.saturating_sub(remaining);
        let next_total = total.checked_mul(len);
        let next_index = index
            .checked_mul(len)
            .and_then(|i| i.checked_add(position));
        match (next_total, next_index) {
            (Some(t), Some(i)) => {
                total = t;
                index = i;
            }
            _ => return (usize::MAX, None),
        }
    }
    let left = total.saturating_sub(index);
    (left, Some(left))
}

impl<C> Clone for Dim<C>
where
    C: Cursor + Clone,
    C::End: Clone,
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Dim {
            begin: self.begin.clone(),
            it: self.it.clone(),
            end: self.end.clone(),
            current: self.current.clone(),
        }
    }
}

impl<C> fmt::Debug for Dim<C>
where
    C: Cursor + fmt::Debug,
    C::End: fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dim")
            .field("it", &self.it)
            .field("end", &self.end)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Cursor of a [`Multiplied`] range over a tuple of [`Dim`]s.
///
/// Its end marker is the end of the first dimension only.
#[derive(Debug, Clone)]
pub struct ProductCursor<T> {
    dims: T,
    exhausted: bool,
}

pub type ProductIter<T> = Walk<ProductCursor<T>>;

macro_rules! impl_product {
    ($C0:ident $R0:ident $(, $C:ident $R:ident $idx:tt)* ; $($rev:tt)*) => {
        impl<$C0, $($C),*> ProductCursor<(Dim<$C0>, $(Dim<$C>,)*)>
        where
            $C0: Cursor + Clone,
            $C0::Item: Clone,
            $($C: Cursor + Clone, $C::Item: Clone,)*
        {
            /// Positions every dimension on its first element.
            pub fn new(mut dims: (Dim<$C0>, $(Dim<$C>,)*)) -> Self {
                let exhausted = !(dims.0.load() $(&& dims.$idx.load())*);
                ProductCursor { dims, exhausted }
            }
        }

        impl<$C0, $($C),*> Cursor for ProductCursor<(Dim<$C0>, $(Dim<$C>,)*)>
        where
            $C0: Cursor + Clone,
            $C0::Item: Clone,
            $($C: Cursor + Clone, $C::Item: Clone,)*
        {
            type Item = ($C0::Item, $($C::Item,)*);
            type End = $C0::End;

            fn increment(&mut self) {
                if self.exhausted {
                    return;
                }
                $(
                    if self.dims.$rev.step() {
                        return;
                    }
                    self.dims.$rev.reset();
                )*
                if !self.dims.0.step() {
                    self.exhausted = true;
                }
            }

            #[inline]
            fn dereference(&mut self) -> Self::Item {
                (self.dims.0.value(), $(self.dims.$idx.value(),)*)
            }

            #[inline]
            fn reached(&mut self, end: &$C0::End) -> bool {
                self.exhausted || self.dims.0.it.reached(end)
            }

            fn remaining_hint(&self, _end: &$C0::End) -> (usize, Option<usize>) {
                if self.exhausted {
                    return (0, Some(0));
                }
                remaining_combinations(&[self.dims.0.extent(), $(self.dims.$idx.extent()),*])
            }
        }

        impl<$C0, $($C),*> PartialEq for ProductCursor<(Dim<$C0>, $(Dim<$C>,)*)>
        where
            $C0: Cursor + PartialEq,
            $($C: Cursor + PartialEq,)*
        {
            fn eq(&self, other: &Self) -> bool {
                (self.exhausted && other.exhausted)
                    || (self.exhausted == other.exhausted
                        && self.dims.0.it == other.dims.0.it
                        $(&& self.dims.$idx.it == other.dims.$idx.it)*)
            }
        }

        impl<$R0, $($R),*> Multiplied<($R0, $($R,)*)> {
            /// Number of combinations: the product of the sizes of all ranges.
            ///
            /// Each range is measured through a clone of it, which copies only a
            /// reference when the product is over borrowed sources.
            pub fn size(&self) -> usize
            where
                $R0: IntoIterator + Clone,
                $($R: IntoIterator + Clone,)*
            {
                distance(self.ranges.0.clone())
                    $(.saturating_mul(distance(self.ranges.$idx.clone())))*
            }
        }

        impl<$R0, $($R),*> IntoIterator for Multiplied<($R0, $($R,)*)>
        where
            $R0: IntoIterator,
            $R0::IntoIter: Clone,
            $R0::Item: Clone,
            $($R: IntoIterator, $R::IntoIter: Clone, $R::Item: Clone,)*
        {
            type Item = ($R0::Item, $($R::Item,)*);
            type IntoIter = ProductIter<(
                Dim<SeqCursor<$R0::IntoIter>>,
                $(Dim<SeqCursor<$R::IntoIter>>,)*
            )>;

            fn into_iter(self) -> Self::IntoIter {
                let dims = (
                    Dim::new(SeqCursor::new(self.ranges.0.into_iter()), Exhausted),
                    $(Dim::new(SeqCursor::new(self.ranges.$idx.into_iter()), Exhausted),)*
                );
                ProductCursor::<(
                    Dim<SeqCursor<$R0::IntoIter>>,
                    $(Dim<SeqCursor<$R::IntoIter>>,)*
                )>::new(dims)
                .until(Sentinel::new(Exhausted))
            }
        }

        impl<'a, $R0, $($R),*> IntoIterator for &'a Multiplied<($R0, $($R,)*)>
        where
            &'a $R0: IntoIterator,
            <&'a $R0 as IntoIterator>::IntoIter: Clone,
            <&'a $R0 as IntoIterator>::Item: Clone,
            $(
                &'a $R: IntoIterator,
                <&'a $R as IntoIterator>::IntoIter: Clone,
                <&'a $R as IntoIterator>::Item: Clone,
            )*
        {
            type Item = (
                <&'a $R0 as IntoIterator>::Item,
                $(<&'a $R as IntoIterator>::Item,)*
            );
            type IntoIter = ProductIter<(
                Dim<SeqCursor<<&'a $R0 as IntoIterator>::IntoIter>>,
                $(Dim<SeqCursor<<&'a $R as IntoIterator>::IntoIter>>,)*
            )>;

            fn into_iter(self) -> Self::IntoIter {
                let dims = (
                    Dim::new(SeqCursor::new((&self.ranges.0).into_iter()), Exhausted),
                    $(Dim::new(SeqCursor::new((&self.ranges.$idx).into_iter()), Exhausted),)*
                );
                ProductCursor::<(
                    Dim<SeqCursor<<&'a $R0 as IntoIterator>::IntoIter>>,
                    $(Dim<SeqCursor<<&'a $R as IntoIterator>::IntoIter>>,)*
                )>::new(dims)
                .until(Sentinel::new(Exhausted))
            }
        }
    };
}

impl_product!(C0 R0;);
impl_product!(C0 R0, C1 R1 1; 1);
impl_product!(C0 R0, C1 R1 1, C2 R2 2; 2 1);
impl_product!(C0 R0, C1 R1 1, C2 R2 2, C3 R3 3; 3 2 1);
impl_product!(C0 R0, C1 R1 1, C2 R2 2, C3 R3 3, C4 R4 4; 4 3 2 1);
impl_product!(C0 R0, C1 R1 1, C2 R2 2, C3 R3 3, C4 R4 4, C5 R5 5; 5 4 3 2 1);
impl_product!(C0 R0, C1 R1 1, C2 R2 2, C3 R3 3, C4 R4 4, C5 R5 5, C6 R6 6; 6 5 4 3 2 1);
impl_product!(C0 R0, C1 R1 1, C2 R2 2, C3 R3 3, C4 R4 4, C5 R5 5, C6 R6 6, C7 R7 7; 7 6 5 4 3 2 1);

/// The product of `N` ranges of the same type, yielding arrays.
///
/// Created by [`product_from_array`]. The product of zero ranges is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipliedArray<R, const N: usize> {
    ranges: [R; N],
}

impl<R, const N: usize> MultipliedArray<R, N> {
    pub fn new(ranges: [R; N]) -> Self {
        MultipliedArray { ranges }
    }

    pub fn get_ref(&self) -> &[R; N] {
        &self.ranges
    }

    /// Number of combinations: the product of the sizes of all ranges.
    pub fn size(&self) -> usize
    where
        R: IntoIterator + Clone,
    {
        if N == 0 {
            return 0;
        }
        self.ranges
            .iter()
            .fold(1usize, |acc, rg| acc.saturating_mul(distance(rg.clone())))
    }
}

/// Lazily multiplies the ranges of an array, yielding `[Item; N]`.
///
/// ```
/// use lazyrange::product_from_array;
///
/// let bits = [vec![0, 1], vec![0, 1], vec![0, 1]];
/// let words: Vec<[i32; 3]> = product_from_array(bits).into_iter().collect();
/// assert_eq!(words.len(), 8);
/// assert_eq!(words[5], [1, 0, 1]);
/// ```
pub fn product_from_array<R: IntoIterator, const N: usize>(ranges: [R; N]) -> MultipliedArray<R, N> {
    MultipliedArray::new(ranges)
}

/// Cursor of a [`MultipliedArray`], moving its dimensions in a runtime loop.
pub struct ArrayProductCursor<C: Cursor, const N: usize> {
    dims: [Dim<C>; N],
    exhausted: bool,
}

impl<C, const N: usize> Clone for ArrayProductCursor<C, N>
where
    C: Cursor + Clone,
    C::End: Clone,
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        ArrayProductCursor {
            dims: self.dims.clone(),
            exhausted: self.exhausted,
        }
    }
}

impl<C, const N: usize> fmt::Debug for ArrayProductCursor<C, N>
where
    C: Cursor + fmt::Debug,
    C::End: fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayProductCursor")
            .field("dims", &self.dims)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

impl<C, const N: usize> ArrayProductCursor<C, N>
where
    C: Cursor + Clone,
    C::Item: Clone,
{
    /// Positions every dimension on its first element.
    pub fn new(mut dims: [Dim<C>; N]) -> Self {
        let exhausted = N == 0 || !dims.iter_mut().all(|dim| dim.load());
        ArrayProductCursor { dims, exhausted }
    }
}

impl<C, const N: usize> Cursor for ArrayProductCursor<C, N>
where
    C: Cursor + Clone,
    C::Item: Clone,
{
    type Item = [C::Item; N];
    type End = C::End;

    fn increment(&mut self) {
        if self.exhausted {
            return;
        }
        let Some((first, rest)) = self.dims.split_first_mut() else {
            self.exhausted = true;
            return;
        };
        for dim in rest.iter_mut().rev() {
            if dim.step() {
                return;
            }
            dim.reset();
        }
        if !first.step() {
            self.exhausted = true;
        }
    }

    fn dereference(&mut self) -> [C::Item; N] {
        std::array::from_fn(|i| self.dims[i].value())
    }

    fn reached(&mut self, end: &C::End) -> bool {
        if self.exhausted {
            return true;
        }
        match self.dims.first_mut() {
            Some(dim) => dim.it.reached(end),
            None => true,
        }
    }

    fn remaining_hint(&self, _end: &C::End) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let extents: Vec<_> = self.dims.iter().map(Dim::extent).collect();
        remaining_combinations(&extents)
    }
}

impl<C, const N: usize> PartialEq for ArrayProductCursor<C, N>
where
    C: Cursor + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        (self.exhausted && other.exhausted)
            || (self.exhausted == other.exhausted
                && self.dims.iter().zip(&other.dims).all(|(a, b)| a.it == b.it))
    }
}

pub type ArrayProductIter<I, const N: usize> = Walk<ArrayProductCursor<SeqCursor<I>, N>>;

impl<R, const N: usize> IntoIterator for MultipliedArray<R, N>
where
    R: IntoIterator,
    R::IntoIter: Clone,
    R::Item: Clone,
{
    type Item = [R::Item; N];
    type IntoIter = ArrayProductIter<R::IntoIter, N>;

    fn into_iter(self) -> Self::IntoIter {
        let dims = self
            .ranges
            .map(|rg| Dim::new(SeqCursor::new(rg.into_iter()), Exhausted));
        ArrayProductCursor::new(dims).until(Sentinel::new(Exhausted))
    }
}

impl<'a, R, const N: usize> IntoIterator for &'a MultipliedArray<R, N>
where
    &'a R: IntoIterator,
    <&'a R as IntoIterator>::IntoIter: Clone,
    <&'a R as IntoIterator>::Item: Clone,
{
    type Item = [<&'a R as IntoIterator>::Item; N];
    type IntoIter = ArrayProductIter<<&'a R as IntoIterator>::IntoIter, N>;

    fn into_iter(self) -> Self::IntoIter {
        let dims = self
            .ranges
            .each_ref()
            .map(|rg| Dim::new(SeqCursor::new(rg.into_iter()), Exhausted));
        ArrayProductCursor::new(dims).until(Sentinel::new(Exhausted))
    }
}

/// Multiplies any number (1 to 8) of ranges: `product!(a, b)` is
/// `product((a, b))`.
#[macro_export]
macro_rules! product {
    ($($rg:expr),+ $(,)?) => {
        $crate::product::product(($($rg,)+))
    };
}

/// The product of `range(n)` for every given extent, yielding tuples of `i64`.
///
/// ```
/// use lazyrange::product_range;
///
/// let total: i64 = product_range!(5, 5, 5).into_iter().map(|(i, j, k)| i * j * k).sum();
/// assert_eq!(total, 1000);
/// ```
#[macro_export]
macro_rules! product_range {
    ($($n:expr),+ $(,)?) => {
        $crate::product::product(($($crate::range::range($n),)+))
    };
}
