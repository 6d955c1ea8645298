//! The plain-sequence cursor: a [`Cursor`] over any standard iterator.
//!
//! Every adaptor accepts its inputs as `IntoIterator` values and drives them
//! through a [`SeqCursor`]. The cursor pulls from the iterator lazily: nothing is
//! fetched until the position is tested against the end or dereferenced, and
//! increments that are not followed by a dereference are accumulated and
//! applied with a single [`Iterator::nth`] call. Adaptor iterators override
//! `nth` to skip without computing elements, so a skipped position of a
//! transformed range never invokes the callable.

use crate::facade::{Cursor, Sentinel};

/// End marker of a [`SeqCursor`]: the wrapped iterator returned `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Exhausted;

/// State of the element at the current position.
enum Slot<T> {
    /// The iterator must skip this many elements before the current one.
    Pending(usize),
    /// The current element was fetched and not handed out yet.
    Ready(T),
    /// The current element was handed out by `dereference`.
    Taken,
    /// The iterator has no element at the current position.
    Exhausted,
}

/// A cursor over a standard iterator.
pub struct SeqCursor<I: Iterator> {
    iter: I,
    slot: Slot<I::Item>,
    /// Number of increments since the cursor was created.
    pos: usize,
}

impl<I: Iterator> SeqCursor<I> {
    pub fn new(iter: I) -> Self {
        SeqCursor {
            iter,
            slot: Slot::Pending(0),
            pos: 0,
        }
    }

    /// The number of positions this cursor has moved past its start.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn fetch(&mut self) {
        if let Slot::Pending(skip) = self.slot {
            self.slot = match self.iter.nth(skip) {
                Some(item) => Slot::Ready(item),
                None => Slot::Exhausted,
            };
        }
    }
}

/// Begin cursor and end marker of any iterable.
pub fn bounds<R: IntoIterator>(rg: R) -> (SeqCursor<R::IntoIter>, Sentinel<Exhausted>) {
    (SeqCursor::new(rg.into_iter()), Sentinel::new(Exhausted))
}

impl<I: Iterator> Cursor for SeqCursor<I> {
    type Item = I::Item;
    type End = Exhausted;

    #[inline]
    fn increment(&mut self) {
        self.slot = match self.slot {
            Slot::Pending(skip) => Slot::Pending(skip.saturating_add(1)),
            Slot::Exhausted => Slot::Exhausted,
            Slot::Ready(_) | Slot::Taken => Slot::Pending(0),
        };
        self.pos = self.pos.saturating_add(1);
    }

    fn advance_by(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.slot = match self.slot {
            Slot::Pending(skip) => Slot::Pending(skip.saturating_add(n)),
            Slot::Exhausted => Slot::Exhausted,
            Slot::Ready(_) | Slot::Taken => Slot::Pending(n - 1),
        };
        self.pos = self.pos.saturating_add(n);
    }

    /// Hands out the current element.
    ///
    /// # Panics
    ///
    /// Panics if there is no element at the current position, or if it was
    /// already handed out.
    fn dereference(&mut self) -> I::Item {
        self.fetch();
        match std::mem::replace(&mut self.slot, Slot::Taken) {
            Slot::Ready(item) => item,
            Slot::Exhausted => {
                self.slot = Slot::Exhausted;
                panic!("dereference of a sequence cursor past its end")
            }
            Slot::Taken | Slot::Pending(_) => {
                panic!("sequence element at position {} was already taken", self.pos)
            }
        }
    }

    #[inline]
    fn reached(&mut self, _end: &Exhausted) -> bool {
        self.fetch();
        matches!(self.slot, Slot::Exhausted)
    }

    fn remaining_hint(&self, _end: &Exhausted) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        match self.slot {
            Slot::Pending(skip) => (
                lower.saturating_sub(skip),
                upper.map(|n| n.saturating_sub(skip)),
            ),
            Slot::Ready(_) | Slot::Taken => {
                (lower.saturating_add(1), upper.and_then(|n| n.checked_add(1)))
            }
            Slot::Exhausted => (0, Some(0)),
        }
    }
}

/// Two sequence cursors are equal if they moved the same number of positions.
impl<I: Iterator> PartialEq for SeqCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<I> Clone for SeqCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        let slot = match &self.slot {
            Slot::Pending(skip) => Slot::Pending(*skip),
            Slot::Ready(item) => Slot::Ready(item.clone()),
            Slot::Taken => Slot::Taken,
            Slot::Exhausted => Slot::Exhausted,
        };
        SeqCursor {
            iter: self.iter.clone(),
            slot,
            pos: self.pos,
        }
    }
}

impl<I> std::fmt::Debug for SeqCursor<I>
where
    I: Iterator + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = match self.slot {
            Slot::Pending(_) => "pending",
            Slot::Ready(_) => "ready",
            Slot::Taken => "taken",
            Slot::Exhausted => "exhausted",
        };
        f.debug_struct("SeqCursor")
            .field("iter", &self.iter)
            .field("slot", &slot)
            .field("pos", &self.pos)
            .finish()
    }
}
