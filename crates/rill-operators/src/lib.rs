#![forbid(unsafe_code)]
//! rill-operators: combinators built on the Stream protocol and the key
//! index.
//!
//! Design intent:
//! - Streaming ops (distinct) emit as elements arrive and short-circuit
//!   cleanly; materializing ops (grouping, set indexing, sort) drain their
//!   upstream fully before emitting anything.
//! - Which index strategy backs an op is the caller's `IndexMaker` choice;
//!   nothing in here knows how membership is implemented.

pub mod distinct;
pub mod group;
pub mod set;
pub mod sort;

pub use distinct::DistinctExt;
pub use group::KeyedExt;
pub use set::{intersection_all, union_all, SetExt};
pub use sort::SortExt;
