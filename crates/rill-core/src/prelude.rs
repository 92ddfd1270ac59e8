//! Convenient re-exports for downstream crates.

pub use crate::comparator::Comparator;
pub use crate::config::MergeConfig;
pub use crate::consumer::{Consumer, StopProbe};
pub use crate::stream::Stream;
