use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::sequence::traits::{Elements, Length, SnapShot};
use crate::sequence::Sequence;
use crate::{Error, Result};

/// ### -> `SharedSequence<T>` - A copy-on-write sequence for concurrent use.
///
/// `SharedSequence<T>` is the concurrent counterpart of
/// [`Sequence<T>`](crate::sequence::Sequence). The elements live in an
/// atomically swappable, reference-counted vector; every mutation builds a
/// fresh vector and publishes it with a single atomic swap. That makes reads
/// wait-free and mutations lock-free, at the price of copying the elements
/// on every write. The intended workload is read-heavy sharing across
/// threads.
///
/// ### -> `Consistency Contract`
///
/// - **Atomic writes**: every mutation (`append`, `set`, `insert`,
///   `remove`, `extend`, `clear`) clones the current storage, applies the
///   change to the clone, and publishes it with one atomic swap. Readers
///   never observe a partially applied mutation.
/// - **Lost-update freedom**: the fallible index mutations (`set`,
///   `remove`) validate against the storage they loaded and publish with a
///   compare-and-swap. If another thread published first, the operation
///   reloads the new storage, re-validates the index, and retries, so
///   concurrent mutations are never silently discarded.
/// - **Snapshot iteration**: there is no direct element access on the
///   shared handle. Iteration and all query operations go through
///   [`snapshot`](SnapShot::snapshot), which freezes the storage current at
///   the moment of the call into a [`Snapshot<T>`]. Iterating a snapshot
///   during concurrent structural modification always reflects that one
///   consistent state, never a torn intermediate and never an error. Two
///   snapshots taken around a mutation may differ; a snapshot itself never
///   changes.
/// - **Shallow clones**: `clone()` shares storage, so mutations through any
///   clone are visible to every clone. Use `snapshot().to_sequence()` for
///   an independent deep copy.
///
/// ### -> `Usage`
///
/// ```
/// use sequery::sequence::prelude::*;
///
/// let shared = SharedSequence::from_vec(vec![1, 2, 3]);
/// let view = shared.snapshot();
///
/// shared.append(4);
///
/// // the earlier snapshot is frozen; a fresh one sees the append
/// assert_eq!(view.len(), 3);
/// assert_eq!(shared.len(), 4);
///
/// let evens = shared.snapshot().filter(|value| value % 2 == 0);
/// assert_eq!(evens.as_slice(), &[2, 4]);
/// ```
pub struct SharedSequence<T> {
    items: Arc<ArcSwap<Vec<T>>>,
}

impl<T> SharedSequence<T> {
    /// An empty shared sequence.
    pub fn new() -> Self {
        Self {
            items: Arc::new(ArcSwap::from_pointee(Vec::new())),
        }
    }

    /// Takes ownership of a vector's elements as the initial storage.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(ArcSwap::from_pointee(items)),
        }
    }

    /// Number of elements in the storage current at this instant.
    pub fn len(&self) -> usize {
        self.items.load().len()
    }

    /// True iff the storage current at this instant has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.load().is_empty()
    }

    /// Atomically replaces the storage with an empty vector.
    pub fn clear(&self) {
        self.items.store(Arc::new(Vec::new()));
    }

    /// True iff the storages current at this instant hold equal elements.
    /// - Freezes both sides once; a mutation racing this comparison lands
    ///   either fully before or fully after it.
    pub fn snapshot_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        let ours = self.items.load();
        let theirs = other.items.load();
        ours.as_slice() == theirs.as_slice()
    }
}

impl<T> SharedSequence<T>
where
    T: Clone,
{
    /// Appends `value` at the end.
    pub fn append(&self, value: T) {
        self.items.rcu(|current| {
            let mut next = (**current).clone();
            next.push(value.clone());
            next
        });
    }

    /// Replaces the element at `index` and returns the previous value.
    /// - Validates against the storage it loaded; on a publish race it
    ///   reloads, re-validates, and retries.
    /// - `Error::OutOfBounds` when `index` is past the end of the storage
    ///   the attempt observed.
    pub fn set(&self, index: usize, value: T) -> Result<T> {
        loop {
            let current = self.items.load();
            let length = current.len();
            if index >= length {
                return Err(Error::OutOfBounds { index, length });
            }
            let mut next = (**current).clone();
            let previous = std::mem::replace(&mut next[index], value.clone());
            let swapped = self.items.compare_and_swap(&*current, Arc::new(next));
            if Arc::ptr_eq(&*current, &*swapped) {
                return Ok(previous);
            }
        }
    }

    /// Inserts `value` at `index`, shifting later elements right.
    /// - An index at or past the end is clamped to an append; insertion
    ///   never fails.
    pub fn insert(&self, index: usize, value: T) {
        self.items.rcu(|current| {
            let mut next = (**current).clone();
            let position = index.min(next.len());
            next.insert(position, value.clone());
            next
        });
    }

    /// Removes and returns the element at `index`.
    /// - Validates against the storage it loaded; on a publish race it
    ///   reloads, re-validates, and retries.
    /// - `Error::OutOfBounds` when `index` is past the end of the storage
    ///   the attempt observed.
    pub fn remove(&self, index: usize) -> Result<T> {
        loop {
            let current = self.items.load();
            let length = current.len();
            if index >= length {
                return Err(Error::OutOfBounds { index, length });
            }
            let mut next = (**current).clone();
            let removed = next.remove(index);
            let swapped = self.items.compare_and_swap(&*current, Arc::new(next));
            if Arc::ptr_eq(&*current, &*swapped) {
                return Ok(removed);
            }
        }
    }

    /// Appends every element of `iterable`, as one atomic publish.
    pub fn extend<I>(&self, iterable: I)
    where
        I: IntoIterator<Item = T>,
    {
        let additions: Vec<T> = iterable.into_iter().collect();
        self.items.rcu(|current| {
            let mut next = (**current).clone();
            next.extend(additions.iter().cloned());
            next
        });
    }
}

impl<T> Clone for SharedSequence<T> {
    /// Shallow: the clone shares storage and observes the same mutations.
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for SharedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SharedSequence<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items = self.items.load();
        f.debug_list().entries(items.iter()).finish()
    }
}

impl<T> From<Vec<T>> for SharedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for SharedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Length for SharedSequence<T> {
    fn length(&self) -> usize {
        self.items.load().len()
    }
}

impl<T> SnapShot<T> for SharedSequence<T> {
    type View = Snapshot<T>;

    /// Freezes the storage current at this instant. The returned view never
    /// changes, whatever happens to the shared sequence afterwards.
    fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            items: self.items.load_full(),
        }
    }
}

/// ### -> `Snapshot<T>` - A frozen view of a [`SharedSequence<T>`].
///
/// Holds a reference-counted handle to the storage that was current when the
/// snapshot was taken; no element is copied. A snapshot never changes, is
/// cheap to clone, and answers the full query capability set (`Search`,
/// `Aggregation`, `Projection`, `Filtering`, `Reordering`, `Combination`,
/// `Bincode`) through [`Elements`].
pub struct Snapshot<T> {
    items: Arc<Vec<T>>,
}

impl<T> Snapshot<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True iff there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows all elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Borrowing iterator over the elements, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copies the frozen elements into an independent owned sequence.
    #[must_use = "Copying a snapshot is not 0 cost and must serve a purpose!"]
    pub fn to_sequence(&self) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence::from_vec((*self.items).clone())
    }
}

impl<T> Clone for Snapshot<T> {
    /// Cheap: clones the handle to the frozen storage, not the elements.
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> std::fmt::Debug for Snapshot<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Snapshot<T> {
    fn as_ref(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T> Elements<T> for Snapshot<T> {
    fn elements(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T> Length for Snapshot<T> {
    fn length(&self) -> usize {
        self.items.len()
    }
}

impl<T> SnapShot<T> for Snapshot<T> {
    type View = Snapshot<T>;

    /// A snapshot of a snapshot is itself: the view is already frozen.
    fn snapshot(&self) -> Snapshot<T> {
        self.clone()
    }
}

#[cfg(test)]
mod tests;
