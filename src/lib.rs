#![forbid(unsafe_code)]
//! rill: lazy, push-based stream combinators.
//!
//! A `Stream` is a replayable value that produces elements only when driven
//! by a `Consumer`; combinators compose streams without running them. The
//! workspace splits along the same seams as the member crates:
//! - `rill-core`: the Stream/Consumer protocol, comparators, config.
//! - `rill-index`: the pluggable key-indexing strategies.
//! - `rill-operators`: key-indexed, set-algebra, and sort combinators.
//! - `rill-exec`: workers, channels, and cancellation for concurrent merges.
//!
//! This facade re-exports the public surface of all four.

pub use rill_core::{Comparator, Consumer, MergeConfig, StopProbe, Stream};
pub use rill_index::{HashIndex, HashMaker, IndexMaker, KeyStore, SortedIndex, SortedMaker};
pub use rill_operators::{
    intersection_all, union_all, DistinctExt, KeyedExt, SetExt, SortExt,
};
pub use rill_exec::{
    combine_or_discard_with, combine_with, zip_with, CancelSource, CancelToken, ExecError,
    MergeExt,
};

/// Convenient re-exports for downstream crates.
pub mod prelude {
    pub use rill_core::prelude::*;
    pub use rill_exec::{CancelSource, CancelToken, MergeExt};
    pub use rill_index::{HashMaker, IndexMaker, KeyStore, SortedMaker};
    pub use rill_operators::{DistinctExt, KeyedExt, SetExt, SortExt};
}
