//! A lazy arithmetic progression of integers.
//!
//! [`IntRange`] stores the first value, the last value (excluded) and the step
//! between two values. Nothing is materialized: iterating computes each value
//! on demand, and the range can be traversed any number of times.
//!
//! ```
//! use lazyrange::{IntRange, range};
//!
//! let up: Vec<i64> = range(5).into_iter().collect();
//! assert_eq!(up, vec![0, 1, 2, 3, 4]);
//!
//! let down: Vec<i64> = IntRange::with_step(10, 3, -2).unwrap().into_iter().collect();
//! assert_eq!(down, vec![10, 8, 6, 4]);
//!
//! assert!(IntRange::with_step(0, 10, -1).unwrap().is_empty());
//! ```

use std::fmt;
use std::ops::Add;

use lazyrange_common::{Error, Result};

use crate::facade::{Cursor, Sentinel, Walk};
use crate::product::{MultipliedArray, product_from_array};

/// An integer range `first, first + step, ...` that stops before crossing `last`.
///
/// Equality is structural: two ranges are equal iff their first value, last value
/// and step are equal, even if they enumerate the same (possibly empty) sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "IntRangeParts"))]
pub struct IntRange {
    /// First value of the range.
    first: i64,
    /// Last value of the range (excluded).
    last: i64,
    /// Distance between two consecutive values, never zero.
    step: i64,
}

impl IntRange {
    /// Creates the range `[first, last)` with step 1.
    pub fn new(first: i64, last: i64) -> Self {
        IntRange {
            first,
            last,
            step: 1,
        }
    }

    /// Creates the range `[0, last)` with step 1.
    pub fn upto(last: i64) -> Self {
        IntRange::new(0, last)
    }

    /// Creates the range `first, first + step, ...`, stopping before `last`
    /// is crossed in the direction of `step`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `step` is zero.
    pub fn with_step(first: i64, last: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(Error::configuration("step", "step cannot be zero"));
        }
        Ok(IntRange { first, last, step })
    }

    /// First value of the range.
    pub fn first(&self) -> i64 {
        self.first
    }

    /// Last value of the range (excluded).
    pub fn last(&self) -> i64 {
        self.last
    }

    /// Step between two consecutive values.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of values in the range.
    ///
    /// Zero whenever the direction from `first` to `last` disagrees with the
    /// sign of `step`.
    pub fn size(&self) -> usize {
        progression_len(self.first, self.last, self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if `value` is one of the values of the range.
    pub fn contains(&self, value: i64) -> bool {
        let in_bounds = if self.step > 0 {
            self.first <= value && value < self.last
        } else {
            self.last < value && value <= self.first
        };
        in_bounds && (value as i128 - self.first as i128) % self.step as i128 == 0
    }

    /// Returns a range with `first` and `last` both offset by `amount`.
    ///
    /// # Panics
    ///
    /// Panics if either bound overflows.
    pub fn shift(&self, amount: i64) -> Self {
        let first = self.first.checked_add(amount).unwrap_or_else(|| {
            panic!(
                "Arithmetic overflow: cannot shift range first {} by {}",
                self.first, amount
            )
        });
        let last = self.last.checked_add(amount).unwrap_or_else(|| {
            panic!(
                "Arithmetic overflow: cannot shift range last {} by {}",
                self.last, amount
            )
        });
        IntRange {
            first,
            last,
            step: self.step,
        }
    }

    /// Cursor at the first value of the range.
    pub fn begin(&self) -> RangeCursor {
        RangeCursor {
            pos: self.first,
            last: self.last,
            step: self.step,
        }
    }

    /// End marker of the range.
    pub fn end(&self) -> Sentinel<i64> {
        Sentinel::new(self.last)
    }
}

/// Returns the range `[0, last)`.
pub fn range(last: i64) -> IntRange {
    IntRange::upto(last)
}

/// The product of `range(n)` for every extent `n`, in row-major order.
///
/// ```
/// use lazyrange::product_range;
///
/// let cells: Vec<[i64; 2]> = product_range([2, 3]).into_iter().collect();
/// assert_eq!(cells[..4], [[0, 0], [0, 1], [0, 2], [1, 0]]);
/// ```
pub fn product_range<const N: usize>(extents: [i64; N]) -> MultipliedArray<IntRange, N> {
    product_from_array(extents.map(range))
}

/// Number of values of the progression, computed without overflow.
fn progression_len(first: i64, last: i64, step: i64) -> usize {
    let (first, last, step) = (first as i128, last as i128, step as i128);
    let len = (last + step - step.signum() - first) / step;
    usize::try_from(len.max(0)).unwrap_or(usize::MAX)
}

impl Add<i64> for IntRange {
    type Output = IntRange;

    fn add(self, amount: i64) -> IntRange {
        self.shift(amount)
    }
}

impl From<std::ops::Range<i64>> for IntRange {
    fn from(r: std::ops::Range<i64>) -> Self {
        IntRange::new(r.start, r.end)
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range({},{},{})", self.first, self.last, self.step)
    }
}

impl IntoIterator for IntRange {
    type Item = i64;
    type IntoIter = Walk<RangeCursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin().until(self.end())
    }
}

impl IntoIterator for &IntRange {
    type Item = i64;
    type IntoIter = Walk<RangeCursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin().until(self.end())
    }
}

/// Unvalidated fields of an [`IntRange`], checked on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct IntRangeParts {
    first: i64,
    last: i64,
    step: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<IntRangeParts> for IntRange {
    type Error = Error;

    fn try_from(parts: IntRangeParts) -> Result<Self> {
        IntRange::with_step(parts.first, parts.last, parts.step)
    }
}

/// Cursor over the values of an [`IntRange`].
///
/// A cursor is at the end once its position reached `last` in the direction of
/// the step. All cursors at the end compare equal, whatever their raw position.
#[derive(Debug, Clone, Copy)]
pub struct RangeCursor {
    /// Current value.
    pos: i64,
    /// Last value of the range (excluded).
    last: i64,
    step: i64,
}

impl RangeCursor {
    /// Current value, even at the end.
    pub fn position(&self) -> i64 {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        past(self.pos, self.last, self.step)
    }
}

#[inline]
fn past(pos: i64, last: i64, step: i64) -> bool {
    if step > 0 { pos >= last } else { pos <= last }
}

impl Cursor for RangeCursor {
    type Item = i64;
    type End = i64;

    #[inline]
    fn increment(&mut self) {
        self.pos = self.pos.saturating_add(self.step);
    }

    #[inline]
    fn dereference(&mut self) -> i64 {
        self.pos
    }

    #[inline]
    fn reached(&mut self, end: &i64) -> bool {
        past(self.pos, *end, self.step)
    }

    fn advance_by(&mut self, n: usize) {
        let n = i64::try_from(n).unwrap_or(i64::MAX);
        self.pos = self.pos.saturating_add(n.saturating_mul(self.step));
    }

    fn remaining_hint(&self, end: &i64) -> (usize, Option<usize>) {
        let n = progression_len(self.pos, *end, self.step);
        (n, Some(n))
    }
}

impl PartialEq for RangeCursor {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos || (self.at_end() && other.at_end())
    }
}

impl Eq for RangeCursor {}

impl ExactSizeIterator for Walk<RangeCursor> {}
