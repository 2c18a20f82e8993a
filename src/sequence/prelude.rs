
pub use {
    crate::sequence::Sequence,
    crate::sequence::traits::{Elements, Length, Search, Aggregation, Projection, Filtering, Reordering, Combination, SnapShot, Bincode},
    crate::shared::{SharedSequence, Snapshot},
    crate::{BincodeConfiguration, Error},
};
