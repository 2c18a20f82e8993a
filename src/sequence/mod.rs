use std::ops::Range;

use serde::{Deserialize, Serialize};

pub(crate) mod traits;
use traits::{Elements, Length, SnapShot};

use crate::{Error, Result};

/// ### -> `Sequence<T>` - An ordered, finite, in-memory sequence with the full query capability set.
///
/// `Sequence<T>` is a vector-backed ordered container. It supports in-place
/// mutation through its own methods (`set`, `insert`, `remove`, `append`,
/// `drain`, ...), while every query operation treats it as read-only input
/// and returns a **new** sequence: querying never mutates, consumes, or
/// aliases the receiver.
///
/// ### -> `Core Guarantees`
///
/// - **Order preserved**: insertion order is kept, and every query keeps the
///   relative order of its input. Only the `Reordering` operations
///   (`order_by`, `order_by_descending`, `reverse`) change it, and they do
///   so in their result, never in the receiver.
/// - **Total where possible**: `get` returns `Option`; only index-addressed
///   mutations (`set`, `remove`) fail, with `Error::OutOfBounds` carrying
///   the offending index and the current length.
/// - **Value semantics**: `Clone` copies the elements; two sequences are
///   equal iff their elements are equal in order.
///
/// ### -> `Traits Implemented`
///
/// Through the [`prelude`], a `Sequence<T>` answers the whole capability
/// set:
///
/// - **`Elements<T>`**: slice access, the single opt-in for everything
///   below.
/// - **`Search<T>`**: `all`, `any`, `first`/`last` families with fallback
///   variants.
/// - **`Aggregation<T>`**: `count`, `count_where`, `sum_of`, `min_of`,
///   `max_of`, `mean_of`.
/// - **`Projection<T>`**: `select`, `select_many`.
/// - **`Filtering<T>`**: `filter`, `take`, `take_while`, `skip`,
///   `skip_while`.
/// - **`Reordering<T>`**: `order_by`, `order_by_descending`, `reverse`.
/// - **`Combination<T>`**: `exclusion`, `intersection`.
/// - **`SnapShot<T>`**: an independent deep copy.
/// - **`Bincode<T>`**: binary serialization (requires `T: serde::Serialize +
///   serde::de::DeserializeOwned`).
/// - **`Length`**: length comparisons.
///
/// Plus the standard integrations: `Default`, `Debug`, `Clone`,
/// `PartialEq`/`Eq`, `From<Vec<T>>`, `FromIterator`, `Extend`,
/// `IntoIterator` (owned and borrowed), `Index<usize>` (panics out of
/// bounds, like a slice), `AsRef<[T]>`, and transparent serde
/// `Serialize`/`Deserialize`.
///
/// ### -> `Usage`
///
/// ```
/// use sequery::seq;
/// use sequery::sequence::prelude::*;
///
/// let units = seq![(1, "hello"), (2, "test"), (2, "hello")];
///
/// let long = units.filter(|unit| unit.1.len() > 4);
/// assert_eq!(long.len(), 2);
///
/// let ordered = units.order_by(|unit| unit.0);
/// assert_eq!(ordered.first_or((0, "")), (1, "hello"));
///
/// // the receiver is untouched by both queries
/// assert_eq!(units.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// An empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// An empty sequence with at least `capacity` reserved slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of a vector's elements.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True iff there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currently reserved slots.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Borrows the element at `index`; `None` out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Replaces the element at `index` and returns the previous value.
    /// - The index must be within bounds (`index < len`); otherwise
    ///   `Error::OutOfBounds` is returned and the sequence is unchanged.
    /// - The sequence length never changes.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use sequery::seq;
    /// use sequery::sequence::prelude::*;
    /// use anyhow::Result;
    ///
    /// fn example() -> Result<()> {
    ///     let mut sequence = seq![10, 20, 30];
    ///
    ///     let previous = sequence.set(1, 25)?;
    ///     assert_eq!(previous, 20);
    ///     assert_eq!(sequence.as_slice(), &[10, 25, 30]);
    ///
    ///     assert!(sequence.set(3, 0).is_err());
    ///
    ///     Ok(())
    /// }
    ///
    /// example().unwrap();
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let length = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(Error::OutOfBounds { index, length }),
        }
    }

    /// Inserts `value` at `index`, shifting later elements right.
    /// - An index at or past the end is clamped to an append; insertion
    ///   never fails.
    pub fn insert(&mut self, index: usize, value: T) {
        let position = index.min(self.items.len());
        self.items.insert(position, value);
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    /// - The index must be within bounds (`index < len`); otherwise
    ///   `Error::OutOfBounds` is returned and the sequence is unchanged.
    /// - Capacity is retained.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let length = self.items.len();
        if index >= length {
            return Err(Error::OutOfBounds { index, length });
        }
        Ok(self.items.remove(index))
    }

    /// Appends `value` at the end.
    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the elements in `range`, in order.
    /// - `None` drains everything.
    /// - Bounds are clamped to the length; an empty or inverted range
    ///   drains nothing.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use sequery::seq;
    /// use sequery::sequence::prelude::*;
    ///
    /// let mut sequence = seq![0, 1, 2, 3, 4];
    ///
    /// let front = sequence.drain(Some(0..2));
    /// assert_eq!(front.as_slice(), &[0, 1]);
    /// assert_eq!(sequence.as_slice(), &[2, 3, 4]);
    ///
    /// let rest = sequence.drain(None);
    /// assert_eq!(rest.len(), 3);
    /// assert!(sequence.is_empty());
    /// ```
    #[must_use = "Drained elements must have a purpose!"]
    pub fn drain(&mut self, range: Option<Range<usize>>) -> Sequence<T> {
        let length = self.items.len();
        let bounds = match range {
            None => 0..length,
            Some(range) => {
                let start = range.start.min(length);
                let end = range.end.min(length);
                if start >= end {
                    return Sequence::new();
                }
                start..end
            }
        };
        Sequence::from_vec(self.items.drain(bounds).collect())
    }

    /// Removes all elements; capacity is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Borrowing iterator over the elements, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrows all elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Consumes the sequence into its backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> std::ops::Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Elements<T> for Sequence<T> {
    fn elements(&self) -> &[T] {
        &self.items
    }
}

impl<T> Length for Sequence<T> {
    fn length(&self) -> usize {
        self.items.len()
    }
}

impl<T> SnapShot<T> for Sequence<T>
where
    T: Clone,
{
    type View = Sequence<T>;

    /// An independent deep copy; later mutation of either side leaves the
    /// other untouched.
    fn snapshot(&self) -> Sequence<T> {
        self.clone()
    }
}

pub mod prelude;

#[cfg(test)]
mod tests;
