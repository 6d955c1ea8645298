//! The cursor contract shared by every adaptor in this crate.
//!
//! A [`Cursor`] is a position-based state machine: it can be moved forward by one
//! position ([`Cursor::increment`]), asked for the element at its position
//! ([`Cursor::dereference`]), and compared against an end marker
//! ([`Cursor::reached`]). Everything else an iterator needs is derived once, here:
//! pre/post increment, bulk advancing, and the [`Walk`] facade that turns a cursor
//! and its [`Sentinel`] into a regular [`Iterator`].
//!
//! Equality is not part of the contract. Each cursor variant decides what "same
//! position" means (for instance, all integer-range cursors that ran past their
//! end compare equal), and each variant decides which of its wrapped positions
//! the sentinel is checked against (any wrapped cursor for zip, only the first
//! dimension for a cartesian product).

use std::iter::FusedIterator;

/// End marker of a range.
///
/// Wraps the end position(s) of the underlying range(s). A cursor is tested
/// against a sentinel with [`Cursor::is_at`]; the test only inspects positions
/// and never dereferences past-the-end state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sentinel<E>(E);

impl<E> Sentinel<E> {
    /// Wraps an end position.
    pub fn new(end: E) -> Self {
        Sentinel(end)
    }

    /// Returns the wrapped end position.
    pub fn get(&self) -> &E {
        &self.0
    }

    /// Unwraps the end position.
    pub fn into_inner(self) -> E {
        self.0
    }
}

/// A forward cursor over a finite sequence.
///
/// Implementors supply [`increment`](Cursor::increment),
/// [`dereference`](Cursor::dereference) and [`reached`](Cursor::reached).
///
/// # Contract
///
/// - `dereference` is called at most once per position, and only when the cursor
///   has not reached its end. Elements may be unique borrows (`&mut T`) that
///   cannot be handed out twice.
/// - `increment` is only meaningful while the cursor has not reached its end.
///   Cursors in this crate tolerate being incremented past the end (they stay at
///   the end), but callers must not rely on the element sequence after that point.
/// - `reached` may pull the underlying storage to discover whether the current
///   position exists, but never dereferences an adaptor position.
pub trait Cursor {
    /// The element produced at each position.
    type Item;

    /// The end position this cursor is compared against.
    type End;

    /// Advances the cursor by exactly one position.
    fn increment(&mut self);

    /// Produces the element at the current position.
    fn dereference(&mut self) -> Self::Item;

    /// Returns `true` if the cursor is at (or past) `end`.
    fn reached(&mut self, end: &Self::End) -> bool;

    /// Advances the cursor by `n` positions without dereferencing any of them.
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.increment();
        }
    }

    /// Bounds on the number of positions left before `end`.
    fn remaining_hint(&self, _end: &Self::End) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Compares the cursor against a sentinel.
    #[inline]
    fn is_at(&mut self, sentinel: &Sentinel<Self::End>) -> bool {
        self.reached(sentinel.get())
    }

    /// Increments the cursor and returns it, like a prefix `++it`.
    #[inline]
    fn pre_increment(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.increment();
        self
    }

    /// Increments the cursor and returns its previous state, like a postfix `it++`.
    #[inline]
    fn post_increment(&mut self) -> Self
    where
        Self: Sized + Clone,
    {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Pairs the cursor with its end marker, producing an [`Iterator`].
    #[inline]
    fn until(self, end: Sentinel<Self::End>) -> Walk<Self>
    where
        Self: Sized,
    {
        Walk::new(self, end)
    }
}

/// An [`Iterator`] over the positions of a cursor, up to a sentinel.
///
/// `next()` checks the sentinel first, then dereferences, then increments: a
/// position is never dereferenced unless the sentinel test said it exists.
/// `nth()` skips positions with increments only, so skipped elements are
/// never computed.
pub struct Walk<C: Cursor> {
    cursor: C,
    end: Sentinel<C::End>,
}

impl<C: Cursor> Walk<C> {
    pub fn new(cursor: C, end: Sentinel<C::End>) -> Self {
        Walk { cursor, end }
    }

    /// Returns the current cursor.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Returns the sentinel this walk stops at.
    pub fn sentinel(&self) -> &Sentinel<C::End> {
        &self.end
    }

    /// Splits the walk back into its cursor and sentinel.
    pub fn into_parts(self) -> (C, Sentinel<C::End>) {
        (self.cursor, self.end)
    }
}

impl<C> Clone for Walk<C>
where
    C: Cursor + Clone,
    C::End: Clone,
{
    fn clone(&self) -> Self {
        Walk {
            cursor: self.cursor.clone(),
            end: self.end.clone(),
        }
    }
}

impl<C> std::fmt::Debug for Walk<C>
where
    C: Cursor + std::fmt::Debug,
    C::End: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walk")
            .field("cursor", &self.cursor)
            .field("end", &self.end)
            .finish()
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_at(&self.end) {
            return None;
        }
        let item = self.cursor.dereference();
        self.cursor.increment();
        Some(item)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n > 0 {
            if self.cursor.is_at(&self.end) {
                return None;
            }
            self.cursor.advance_by(n);
        }
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.remaining_hint(self.end.get())
    }
}

impl<C: Cursor> FusedIterator for Walk<C> {}

/// Combines two size hints of sources advanced in lockstep: the result is
/// bounded by the shorter source.
pub(crate) fn min_hint(
    a: (usize, Option<usize>),
    b: (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let lower = a.0.min(b.0);
    let upper = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    };
    (lower, upper)
}
