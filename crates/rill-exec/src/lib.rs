#![forbid(unsafe_code)]
//! rill-exec: the concurrency layer under the merge combinators.
//!
//! Stream is a synchronous push protocol, so positionally pairing two
//! independently-driven streams needs real workers: one feeder thread per
//! source, a channel per feeder, and a per-invocation cancellation signal
//! that can release a feeder parked on a blocking send. Everything here is
//! scoped to a single stream invocation; a merge run joins its workers
//! before returning, so no background work ever outlives it.

pub mod cancel;
pub mod channel;
pub mod error;
pub mod merge;
pub mod metrics;

pub use cancel::{CancelSource, CancelToken};
pub use channel::{from_channel, join_worker, send_all, spawn_send_all};
pub use error::ExecError;
pub use merge::{combine_or_discard_with, combine_with, zip_with, MergeExt};
