//! Query-style sequence operations over generic containers.
//!
//! The [`sequence`] module provides [`Sequence<T>`](sequence::Sequence), an
//! owned ordered container, together with the capability traits that attach
//! query operations (search, aggregation, projection, filtering, reordering,
//! set-like combination, binary codec) to any container exposing its
//! elements. The [`shared`] module provides
//! [`SharedSequence<T>`](shared::SharedSequence), a copy-on-write variant
//! for concurrent use whose frozen snapshots answer the same queries.
//!
//! Everything is re-exported through [`sequence::prelude`].

use thiserror::Error;

pub mod sequence;
pub mod shared;

/// Constructs a [`Sequence`](sequence::Sequence) like `vec!` constructs a
/// vector.
///
/// ### -> `Usage`
///
/// ```
/// use sequery::seq;
/// use sequery::sequence::prelude::*;
///
/// let empty: Sequence<i32> = seq![];
/// assert!(empty.is_empty());
///
/// let counted = seq![1, 2, 3];
/// assert_eq!(counted.len(), 3);
///
/// let repeated = seq![0u8; 4];
/// assert_eq!(repeated.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::sequence::Sequence::new()
    };
    ($element:expr; $count:expr) => {
        $crate::sequence::Sequence::from_vec(vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::Sequence::from_vec(vec![$($element),+])
    };
}

/// ### -> `Error`
///
/// Every failure the crate can surface.
///
/// Queries and container mutations are total wherever the contract allows
/// it; the remaining failure cases are a search that matches nothing, an
/// index-addressed mutation past the end, and the binary codec.
#[derive(Debug, Error)]
pub enum Error {
    /// A `first`/`last` style search had nothing to return: the sequence was
    /// empty or no element satisfied the predicate.
    #[error("no element satisfies the requested condition")]
    NotFound,

    /// An index-addressed mutation (`set`, `remove`) received an index at or
    /// past the end of the sequence.
    #[error("index {index} out of bounds for sequence of length {length}")]
    OutOfBounds { index: usize, length: usize },

    /// Binary encode/decode failed, including byte-limit violations raised
    /// through [`BincodeConfiguration`].
    #[error("bincode codec failure: {0}")]
    Codec(#[from] bincode::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// ### -> `BincodeConfiguration`
///
/// Controls the binary codec exposed by the
/// [`Bincode`](sequence::prelude::Bincode) capability.
///
/// - `byte_limit: Some(n)` bounds both the encoded output and the bytes a
///   decode may consume; exceeding it surfaces as [`Error::Codec`].
/// - `byte_limit: None` (the default) places no bound.
#[derive(Debug, Clone, Default)]
pub struct BincodeConfiguration {
    pub byte_limit: Option<u64>,
}

impl BincodeConfiguration {
    /// Unlimited configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration enforcing `limit` bytes on encode and decode.
    pub fn with_byte_limit(limit: u64) -> Self {
        Self {
            byte_limit: Some(limit),
        }
    }
}
