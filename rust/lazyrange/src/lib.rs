//! Lazy range adaptors.
//!
//! This crate builds views over existing sequences (vectors, lists, integer
//! ranges, or other views) without materializing intermediate containers:
//!
//! - [`enumerate`]: pairs each element with its index
//! - [`transform`]: applies a callable to each element on access
//! - [`zip`]: walks several ranges in lockstep, stopping at the shortest
//! - [`product`] and [`product_from_array`]: cartesian products in row-major order
//! - [`slice`]: keeps the positions `start..end`
//! - [`stride`]: keeps every `step`-th element
//! - [`IntRange`]: a lazy arithmetic progression of integers
//!
//! Every adaptor is a plain value implementing [`IntoIterator`]. Traversing it
//! by reference (`&adaptor`) can be repeated; adaptors that preserve mutable
//! access (enumerate, zip, slice, stride) can also be traversed through
//! `&mut adaptor`, which hands out `&mut` elements of the underlying sources.
//! Adaptors over borrowed sources are cheap to clone, and a clone can be
//! traversed again.
//!
//! Internally each adaptor is a [`Cursor`] over the cursors of its sources,
//! paired with a [`Sentinel`] end marker; [`Walk`] turns the pair into an
//! iterator.
//!
//! ```
//! use lazyrange::{enumerate, range, stride, transform, zip};
//!
//! let names = vec!["a", "b", "c", "d"];
//! let squares = transform(range(10), |i| i * i);
//! let picked: Vec<_> = zip((enumerate(&names), stride(&squares, 3)?))
//!     .into_iter()
//!     .map(|((i, name), sq)| format!("{i}:{name}:{sq}"))
//!     .collect();
//! assert_eq!(picked, vec!["0:a:0", "1:b:9", "2:c:36", "3:d:81"]);
//! # Ok::<(), lazyrange::Error>(())
//! ```

pub mod enumerate;
pub mod facade;
pub mod product;
pub mod range;
pub mod seq;
pub mod slice;
pub mod stride;
pub mod transform;
pub mod utils;
pub mod zip;

pub use enumerate::{Enumerated, enumerate};
pub use facade::{Cursor, Sentinel, Walk};
pub use lazyrange_common::{Error, ErrorKind, Result};
pub use product::{Multiplied, MultipliedArray, product, product_from_array};
pub use range::{IntRange, product_range, range};
pub use slice::{Sliced, slice};
pub use stride::{Strided, stride};
pub use transform::{Transformed, transform};
pub use utils::{distance, to_vec};
pub use zip::{Zipped, zip};

/// Extension trait building adaptors with method syntax.
///
/// Implemented for every [`IntoIterator`] type, so it applies to containers,
/// references to containers, integer ranges and other adaptors alike.
///
/// ```
/// use lazyrange::{RangeAdaptorsExt, range};
///
/// let v = vec![10, 20, 30, 40, 50];
/// let picked = (&v).sliced(1, 5).strided(2)?.transformed(|x| x / 10).materialized();
/// assert_eq!(picked, vec![2, 4]);
///
/// let indexed = range(3).enumerated().materialized();
/// assert_eq!(indexed, vec![(0, 0), (1, 1), (2, 2)]);
/// # Ok::<(), lazyrange::Error>(())
/// ```
pub trait RangeAdaptorsExt: IntoIterator + Sized {
    /// Pairs each element with its index. See [`enumerate`].
    fn enumerated(self) -> Enumerated<Self> {
        Enumerated::new(self)
    }

    /// Applies `f` to each element on access. See [`transform`].
    fn transformed<F, B>(self, f: F) -> Transformed<Self, F>
    where
        Self::IntoIter: Clone,
        F: FnMut(Self::Item) -> B,
    {
        Transformed::new(self, f)
    }

    /// Keeps the positions `start..end`. See [`slice`].
    fn sliced(self, start: usize, end: usize) -> Sliced<Self> {
        Sliced::new(self, start, end)
    }

    /// Keeps every `step`-th element.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `step` is not positive. See [`stride`].
    fn strided(self, step: i64) -> Result<Strided<Self>> {
        stride(self, step)
    }

    /// Collects the elements into a vector. See [`to_vec`].
    fn materialized(self) -> Vec<Self::Item> {
        to_vec(self)
    }
}

impl<R: IntoIterator> RangeAdaptorsExt for R {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_chain_matches_free_functions() {
        let v: Vec<i64> = (0..20).collect();
        let chained = (&v)
            .sliced(3, 17)
            .strided(4)
            .unwrap()
            .transformed(|x| x * 2)
            .materialized();
        let nested = to_vec(transform(stride(slice(&v, 3, 17), 4).unwrap(), |x| x * 2));
        assert_eq!(chained, nested);
        assert_eq!(chained, vec![6, 14, 22, 30]);
    }

    #[test]
    fn test_enumerated_mutation() {
        let mut v = vec![0; 4];
        for (i, x) in (&mut v).enumerated() {
            *x = i * i;
        }
        assert_eq!(v, vec![0, 1, 4, 9]);
    }

    #[test]
    fn test_strided_rejects_zero() {
        assert!(range(5).strided(0).unwrap_err().is_configuration());
    }
}
