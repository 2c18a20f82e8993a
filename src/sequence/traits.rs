use bincode::Options;

use crate::sequence::Sequence;
use crate::{BincodeConfiguration, Error, Result};

/// ### -> `Elements<T> Trait`.
///
/// Read access to a container's elements as a slice, in order. This is the
/// foundational trait for every query capability: `Search<T>`,
/// `Aggregation<T>`, `Projection<T>`, `Filtering<T>`, `Reordering<T>`,
/// `Combination<T>` and `Bincode<T>` all take `Elements<T>` as their
/// supertrait, derive their default method bodies from the slice it returns,
/// and attach themselves to every implementor through blanket impls. A
/// container earns the whole operation set by implementing this one method.
///
/// Implementors in this crate:
/// - `Sequence<T>`: owned storage, borrowed directly.
/// - `Snapshot<T>`: the frozen view of a `SharedSequence<T>`.
///
/// `SharedSequence<T>` itself deliberately does not implement this trait:
/// its storage can be swapped by another thread at any moment, so no `&[T]`
/// borrow of it can be handed out. Queries on a shared sequence go through
/// `snapshot()` first.
pub trait Elements<T> {
    /// Borrows the elements, in order.
    fn elements(&self) -> &[T];
}

pub trait Length {
    fn length(&self) -> usize;

    fn length_eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }

    fn length_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.length().partial_cmp(&other.length())
    }
}

/// ### -> `Search<T> Trait`.
///
/// Element lookup over a sequence: universal/existential predicate tests and
/// the `first`/`last` families with their default-value fallbacks.
///
/// Predicates are `FnMut(&T) -> bool` and are invoked at most once per
/// element visited, in input order, so side-effecting closures observe a
/// deterministic call sequence. Elements are returned as owned clones; the
/// sequence itself is never mutated.
///
/// ### -> `Methods`
/// - `all(predicate)`: true iff every element satisfies the predicate.
///   Vacuously true for an empty sequence. Stops at the first failure.
/// - `any(predicate)`: true iff at least one element satisfies the
///   predicate. False for an empty sequence. Stops at the first success.
/// - `first()` / `first_where(predicate)`: first element / first satisfying
///   element, or `Error::NotFound`.
/// - `first_or(default)` / `first_where_or(predicate, default)`: fallback
///   variants that return `default` instead of failing.
/// - `last()` / `last_where(predicate)`: symmetric to `first`, scanning to
///   the end and retaining the last match.
/// - `last_or(default)` / `last_where_or(predicate, default)`: fallback
///   variants of `last`.
///
/// ### -> `Usage`
///
/// ```
/// use sequery::seq;
/// use sequery::sequence::prelude::*;
///
/// let sequence = seq![1, 2, 3, 4];
///
/// assert!(sequence.all(|value| *value > 0));
/// assert!(sequence.any(|value| value % 2 == 0));
/// assert_eq!(sequence.first_where_or(|value| *value > 10, 0), 0);
/// ```
pub trait Search<T>: Elements<T> {
    /// True iff every element satisfies the predicate; vacuously true for an
    /// empty sequence. Evaluation stops at the first failing element.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements().iter().all(predicate)
    }

    /// True iff at least one element satisfies the predicate; false for an
    /// empty sequence. Evaluation stops at the first satisfying element.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements().iter().any(predicate)
    }

    /// The first element.
    /// - Returns `Error::NotFound` when the sequence is empty.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use sequery::seq;
    /// use sequery::sequence::prelude::*;
    /// use anyhow::Result;
    ///
    /// fn example() -> Result<()> {
    ///     let sequence = seq![3, 1, 4];
    ///     assert_eq!(sequence.first()?, 3);
    ///
    ///     let empty = Sequence::<i32>::new();
    ///     assert!(empty.first().is_err());
    ///
    ///     Ok(())
    /// }
    ///
    /// example().unwrap();
    /// ```
    fn first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.elements().first().cloned().ok_or(Error::NotFound)
    }

    /// The first element satisfying the predicate, scanning in input order.
    /// - Returns `Error::NotFound` when nothing matches.
    fn first_where<P>(&self, mut predicate: P) -> Result<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        for element in self.elements() {
            if predicate(element) {
                return Ok(element.clone());
            }
        }
        Err(Error::NotFound)
    }

    /// The first element, or `default` when the sequence is empty.
    fn first_or(&self, default: T) -> T
    where
        T: Clone,
    {
        self.elements().first().cloned().unwrap_or(default)
    }

    /// The first element satisfying the predicate, or `default` when nothing
    /// matches.
    fn first_where_or<P>(&self, mut predicate: P, default: T) -> T
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        for element in self.elements() {
            if predicate(element) {
                return element.clone();
            }
        }
        default
    }

    /// The last element.
    /// - Returns `Error::NotFound` when the sequence is empty.
    fn last(&self) -> Result<T>
    where
        T: Clone,
    {
        self.elements().last().cloned().ok_or(Error::NotFound)
    }

    /// The last element satisfying the predicate.
    /// - Scans forward through the whole sequence, retaining the most recent
    ///   match in an explicit found-state; a matching element whose value
    ///   equals any "absent" default is therefore still found.
    /// - Returns `Error::NotFound` when nothing matches.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use sequery::seq;
    /// use sequery::sequence::prelude::*;
    /// use anyhow::Result;
    ///
    /// fn example() -> Result<()> {
    ///     let sequence = seq![1, 6, 2, 8, 3];
    ///     assert_eq!(sequence.last_where(|value| value % 2 == 0)?, 8);
    ///     assert!(sequence.last_where(|value| *value > 10).is_err());
    ///     Ok(())
    /// }
    ///
    /// example().unwrap();
    /// ```
    fn last_where<P>(&self, mut predicate: P) -> Result<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut found: Option<&T> = None;
        for element in self.elements() {
            if predicate(element) {
                found = Some(element);
            }
        }
        found.cloned().ok_or(Error::NotFound)
    }

    /// The last element, or `default` when the sequence is empty.
    fn last_or(&self, default: T) -> T
    where
        T: Clone,
    {
        self.elements().last().cloned().unwrap_or(default)
    }

    /// The last element satisfying the predicate, or `default` when nothing
    /// matches. An element legitimately equal to `default` is still a match.
    fn last_where_or<P>(&self, mut predicate: P, default: T) -> T
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut found: Option<&T> = None;
        for element in self.elements() {
            if predicate(element) {
                found = Some(element);
            }
        }
        found.cloned().unwrap_or(default)
    }
}

/// ### -> `Aggregation<T> Trait`.
///
/// Counting and numeric reduction over `f64` projections.
///
/// `max_of`, `min_of` and `mean_of` return `Option<f64>`: an empty sequence
/// produces `None`, never a numeric sentinel, so a real `0.0` in the data
/// stays distinguishable from "no value". `sum_of` is total and returns
/// `0.0` for an empty sequence.
///
/// ### -> `Usage`
///
/// ```
/// use sequery::seq;
/// use sequery::sequence::prelude::*;
///
/// let sequence = seq![(1, "hello"), (2, "test"), (3, "hello2")];
///
/// assert_eq!(sequence.max_of(|unit| unit.1.len() as f64), Some(6.0));
/// assert_eq!(sequence.mean_of(|unit| unit.1.len() as f64), Some(5.0));
///
/// let empty: Sequence<i32> = seq![];
/// assert_eq!(empty.max_of(|value| *value as f64), None);
/// assert_eq!(empty.sum_of(|value| *value as f64), 0.0);
/// ```
pub trait Aggregation<T>: Elements<T> {
    /// Number of elements.
    fn count(&self) -> usize {
        self.elements().len()
    }

    /// Number of elements satisfying the predicate.
    fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut total = 0;
        for element in self.elements() {
            if predicate(element) {
                total += 1;
            }
        }
        total
    }

    /// Arithmetic sum of the projections; `0.0` for an empty sequence.
    fn sum_of<F>(&self, mut selector: F) -> f64
    where
        F: FnMut(&T) -> f64,
    {
        let mut total = 0.0;
        for element in self.elements() {
            total += selector(element);
        }
        total
    }

    /// Maximum of the projections; `None` for an empty sequence.
    /// - The first projection seeds the extreme; later ones replace it only
    ///   when strictly greater.
    fn max_of<F>(&self, mut selector: F) -> Option<f64>
    where
        F: FnMut(&T) -> f64,
    {
        let mut best: Option<f64> = None;
        for element in self.elements() {
            let projected = selector(element);
            match best {
                None => best = Some(projected),
                Some(current) if projected > current => best = Some(projected),
                _ => {}
            }
        }
        best
    }

    /// Minimum of the projections; `None` for an empty sequence.
    /// - The first projection seeds the extreme; later ones replace it only
    ///   when strictly less.
    fn min_of<F>(&self, mut selector: F) -> Option<f64>
    where
        F: FnMut(&T) -> f64,
    {
        let mut best: Option<f64> = None;
        for element in self.elements() {
            let projected = selector(element);
            match best {
                None => best = Some(projected),
                Some(current) if projected < current => best = Some(projected),
                _ => {}
            }
        }
        best
    }

    /// Arithmetic mean of the projections; `None` for an empty sequence
    /// (never a division by zero).
    fn mean_of<F>(&self, selector: F) -> Option<f64>
    where
        F: FnMut(&T) -> f64,
    {
        let length = self.elements().len();
        if length == 0 {
            return None;
        }
        Some(self.sum_of(selector) / length as f64)
    }
}

/// ### -> `Projection<T> Trait`.
///
/// Mapping a sequence into a new sequence of projected values.
///
/// ### -> `Usage`
///
/// ```
/// use sequery::seq;
/// use sequery::sequence::prelude::*;
///
/// let words = seq!["alpha", "beta"];
///
/// let lengths = words.select(|word| word.len());
/// assert_eq!(lengths.as_slice(), &[5, 4]);
///
/// let letters = words.select_many(|word| word.chars().collect::<Vec<_>>());
/// assert_eq!(letters.len(), 9);
/// ```
pub trait Projection<T>: Elements<T> {
    /// New sequence of projected values, same length and order as the input.
    #[must_use = "Projection is not 0 cost and must serve a purpose!"]
    fn select<E, F>(&self, selector: F) -> Sequence<E>
    where
        F: FnMut(&T) -> E,
    {
        Sequence::from_vec(self.elements().iter().map(selector).collect())
    }

    /// Maps each element to anything iterable and concatenates the results
    /// in input order (flattens one level).
    #[must_use = "Projection is not 0 cost and must serve a purpose!"]
    fn select_many<E, I, F>(&self, mut selector: F) -> Sequence<E>
    where
        I: IntoIterator<Item = E>,
        F: FnMut(&T) -> I,
    {
        let mut flattened = Vec::new();
        for element in self.elements() {
            flattened.extend(selector(element));
        }
        Sequence::from_vec(flattened)
    }
}

/// ### -> `Filtering<T> Trait`.
///
/// Predicate and positional selection of a sub-sequence, always preserving
/// input order. Every method returns a new sequence and leaves the input
/// untouched.
///
/// ### -> `Methods`
/// - `filter(predicate)`: all satisfying elements.
/// - `take(count)`: at most the first `count` elements.
/// - `take_while(predicate)`: the leading run of satisfying elements; stops
///   permanently at the first failure.
/// - `skip(count)`: everything after the first `count` elements; `count`
///   past the end yields an empty sequence, zero yields a full copy.
/// - `skip_while(predicate)`: omits the satisfying prefix, then includes
///   all remaining elements. The predicate is only evaluated to find the
///   boundary; elements after the first failure are included without being
///   tested.
///
/// ### -> `Usage`
///
/// ```
/// use sequery::seq;
/// use sequery::sequence::prelude::*;
///
/// let sequence = seq![1, 2, 6, 3, 8];
///
/// assert_eq!(sequence.filter(|value| value % 2 == 0).as_slice(), &[2, 6, 8]);
/// assert_eq!(sequence.take(2).as_slice(), &[1, 2]);
/// assert_eq!(sequence.skip(3).as_slice(), &[3, 8]);
/// assert_eq!(sequence.take_while(|value| *value < 6).as_slice(), &[1, 2]);
/// // after 6 fails the cut-off test, 3 is included without being tested
/// assert_eq!(sequence.skip_while(|value| *value < 6).as_slice(), &[6, 3, 8]);
/// ```
pub trait Filtering<T>: Elements<T> {
    /// All elements satisfying the predicate, order preserved.
    #[must_use = "Filtering is not 0 cost and must serve a purpose!"]
    fn filter<P>(&self, mut predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut kept = Vec::new();
        for element in self.elements() {
            if predicate(element) {
                kept.push(element.clone());
            }
        }
        Sequence::from_vec(kept)
    }

    /// At most the first `count` elements.
    #[must_use = "Taking is not 0 cost and must serve a purpose!"]
    fn take(&self, count: usize) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence::from_vec(self.elements().iter().take(count).cloned().collect())
    }

    /// The leading run of elements satisfying the predicate; stops
    /// permanently at the first failure.
    #[must_use = "Taking is not 0 cost and must serve a purpose!"]
    fn take_while<P>(&self, mut predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut taken = Vec::new();
        for element in self.elements() {
            if !predicate(element) {
                break;
            }
            taken.push(element.clone());
        }
        Sequence::from_vec(taken)
    }

    /// Everything after the first `count` elements; empty when `count`
    /// reaches past the end, a full copy when `count` is zero.
    #[must_use = "Skipping is not 0 cost and must serve a purpose!"]
    fn skip(&self, count: usize) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence::from_vec(self.elements().iter().skip(count).cloned().collect())
    }

    /// Omits the prefix of elements satisfying the predicate, then includes
    /// everything else. After the first failing element the predicate is
    /// never called again.
    #[must_use = "Skipping is not 0 cost and must serve a purpose!"]
    fn skip_while<P>(&self, mut predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut skipping = true;
        let mut kept = Vec::new();
        for element in self.elements() {
            if skipping && predicate(element) {
                continue;
            }
            skipping = false;
            kept.push(element.clone());
        }
        Sequence::from_vec(kept)
    }
}

/// ### -> `Reordering<T> Trait`.
///
/// The only operations allowed to change relative element order: keyed
/// sorting and reversal. Each returns a new sequence; the input is never
/// mutated.
///
/// Sorting is **stable** in both directions: elements whose keys compare
/// equal keep their relative input order. The sort key selector may be
/// invoked more than once per element (comparison-driven).
///
/// ### -> `Usage`
///
/// ```
/// use sequery::seq;
/// use sequery::sequence::prelude::*;
///
/// let sequence = seq![(1, "a"), (3, "c"), (1, "b")];
///
/// let ordered = sequence.order_by(|pair| pair.0);
/// assert_eq!(ordered.as_slice(), &[(1, "a"), (1, "b"), (3, "c")]);
///
/// let descending = sequence.order_by_descending(|pair| pair.0);
/// assert_eq!(descending.as_slice(), &[(3, "c"), (1, "a"), (1, "b")]);
/// ```
pub trait Reordering<T>: Elements<T> {
    /// New sequence sorted ascending by the projected key; stable.
    #[must_use = "Ordering is not 0 cost and must serve a purpose!"]
    fn order_by<K, F>(&self, mut selector: F) -> Sequence<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut ordered = self.elements().to_vec();
        ordered.sort_by(|a, b| selector(a).cmp(&selector(b)));
        Sequence::from_vec(ordered)
    }

    /// New sequence sorted descending by the projected key; stable, so
    /// equal keys still keep their relative input order.
    #[must_use = "Ordering is not 0 cost and must serve a purpose!"]
    fn order_by_descending<K, F>(&self, mut selector: F) -> Sequence<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut ordered = self.elements().to_vec();
        ordered.sort_by(|a, b| selector(b).cmp(&selector(a)));
        Sequence::from_vec(ordered)
    }

    /// New sequence with the elements in reverse order.
    #[must_use = "Reversing is not 0 cost and must serve a purpose!"]
    fn reverse(&self) -> Sequence<T>
    where
        T: Clone,
    {
        let mut reversed = self.elements().to_vec();
        reversed.reverse();
        Sequence::from_vec(reversed)
    }
}

/// ### -> `Combination<T> Trait`.
///
/// Membership-based combination with another sequence. Both operations keep
/// self's order and duplicates and never touch the inputs; `other` is only
/// probed for membership (`PartialEq`).
pub trait Combination<T>: Elements<T> {
    /// Elements of self **not** present in `other`.
    #[must_use = "Exclusion is not 0 cost and must serve a purpose!"]
    fn exclusion<O>(&self, other: O) -> Sequence<T>
    where
        T: Clone + PartialEq,
        O: AsRef<[T]>,
    {
        let other = other.as_ref();
        let mut kept = Vec::new();
        for element in self.elements() {
            if !other.contains(element) {
                kept.push(element.clone());
            }
        }
        Sequence::from_vec(kept)
    }

    /// Elements of self that **are** present in `other`.
    #[must_use = "Intersection is not 0 cost and must serve a purpose!"]
    fn intersection<O>(&self, other: O) -> Sequence<T>
    where
        T: Clone + PartialEq,
        O: AsRef<[T]>,
    {
        let other = other.as_ref();
        let mut kept = Vec::new();
        for element in self.elements() {
            if other.contains(element) {
                kept.push(element.clone());
            }
        }
        Sequence::from_vec(kept)
    }
}

pub trait SnapShot<T> {
    /// The view type `snapshot` produces.
    type View;

    #[must_use = "Snapshot output must serve a purpose!"]
    fn snapshot(&self) -> Self::View;
}

/// ### -> `Bincode<T> Trait`.
///
/// Binary serialization of the elements through `bincode`, governed by a
/// [`BincodeConfiguration`]. Decoding always produces an owned
/// [`Sequence<T>`], whatever container the bytes came from.
///
/// ### -> `Usage`
///
/// ```
/// use sequery::seq;
/// use sequery::sequence::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let sequence = seq![1u32, 2, 3];
///     let configuration = BincodeConfiguration::new();
///
///     let bytes = sequence.bincode(&configuration)?;
///     let decoded = Sequence::<u32>::from_bincode(&bytes, &configuration)?;
///     assert_eq!(decoded, sequence);
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Bincode<T>: Elements<T> {
    /// Encodes the elements to bytes.
    /// - `Error::Codec` when the configured byte limit is exceeded.
    #[must_use = "Bincode serialization output must serve a purpose!"]
    fn bincode(&self, configuration: &BincodeConfiguration) -> Result<Vec<u8>>
    where
        T: serde::Serialize,
    {
        let encoded = match configuration.byte_limit {
            Some(limit) => bincode::options().with_limit(limit).serialize(self.elements())?,
            None => bincode::options().serialize(self.elements())?,
        };
        Ok(encoded)
    }

    /// Decodes bytes produced by [`Bincode::bincode`] into an owned
    /// sequence.
    /// - `Error::Codec` when the bytes are malformed or the configured byte
    ///   limit is exceeded.
    fn from_bincode(bytes: &[u8], configuration: &BincodeConfiguration) -> Result<Sequence<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let elements: Vec<T> = match configuration.byte_limit {
            // slice-based deserialization discards configured limits; the
            // bounded path must read through std::io::Read for the limit to
            // count
            Some(limit) => bincode::options().with_limit(limit).deserialize_from(bytes)?,
            None => bincode::options().deserialize(bytes)?,
        };
        Ok(Sequence::from_vec(elements))
    }
}

// Exposing elements is the single opt-in: every container that does gets the
// full capability set through these blanket impls.
impl<T, C> Search<T> for C where C: Elements<T> {}
impl<T, C> Aggregation<T> for C where C: Elements<T> {}
impl<T, C> Projection<T> for C where C: Elements<T> {}
impl<T, C> Filtering<T> for C where C: Elements<T> {}
impl<T, C> Reordering<T> for C where C: Elements<T> {}
impl<T, C> Combination<T> for C where C: Elements<T> {}
impl<T, C> Bincode<T> for C where C: Elements<T> {}
