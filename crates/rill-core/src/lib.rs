#![forbid(unsafe_code)]
//! rill-core: the lazy, push-based Stream/Consumer protocol.
//!
//! Design intent:
//! - A `Stream` is a value; building one never produces an element. Driving
//!   it with a `Consumer` does, and re-driving it reproduces the sequence.
//! - Early termination is ordinary control flow: a consumer returns `false`,
//!   the producer stops, and the stop outcome propagates up as the run's
//!   return value. Nothing in this crate panics or raises for it.
//! - Keep this crate pure and synchronous; workers/channels live in
//!   `rill-exec`, key indexing in `rill-index`.

pub mod comparator;
pub mod config;
pub mod consumer;
pub mod prelude;
pub mod stream;

pub use comparator::Comparator;
pub use config::MergeConfig;
pub use consumer::{Consumer, StopProbe};
pub use stream::Stream;
