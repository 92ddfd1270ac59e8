//! Concurrent merge combinators: zip, combine, combine-or-discard.
//!
//! Each invocation spawns one feeder per input stream; feeders funnel
//! elements through their own channel, racing every send against a shared
//! per-invocation cancellation signal. The coordinator (the merge stream's
//! own run) receives one element per channel per step and applies the
//! combine function, so pairing is strictly by position index, never by
//! wall-clock arrival. It raises the signal when either channel closes or
//! its own downstream stops, then joins both feeders before returning:
//! zero background work survives the invocation, whatever the outcome.
//!
//! Workers, channels, and the signal are created fresh per invocation;
//! nothing is reused across runs, so merge streams replay like any other.

use crossbeam::channel::{bounded, unbounded, Receiver, Sender};

use rill_core::{MergeConfig, Stream};

use crate::cancel::CancelSource;
use crate::channel::{join_worker, spawn_send_all};

/// Merge operations with the default [`MergeConfig`]; the `*_with` free
/// functions accept an explicit one.
pub trait MergeExt<A> {
    /// Pair elements positionally. Output length is the shorter input's.
    fn zip<B>(self, other: Stream<B>) -> Stream<(A, B)>
    where
        B: Send + 'static;

    /// Apply a pure function to each aligned pair.
    fn combine<B, C, F>(self, other: Stream<B>, combine: F) -> Stream<C>
    where
        B: Send + 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static;

    /// Like [`combine`](MergeExt::combine), but `None` drops the pair's
    /// position from the output without breaking the alignment of later
    /// positions.
    fn combine_or_discard<B, C, F>(self, other: Stream<B>, combine: F) -> Stream<C>
    where
        B: Send + 'static,
        C: 'static,
        F: Fn(A, B) -> Option<C> + Send + Sync + 'static;
}

impl<A: Send + 'static> MergeExt<A> for Stream<A> {
    fn zip<B>(self, other: Stream<B>) -> Stream<(A, B)>
    where
        B: Send + 'static,
    {
        zip_with(self, other, MergeConfig::default())
    }

    fn combine<B, C, F>(self, other: Stream<B>, combine: F) -> Stream<C>
    where
        B: Send + 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        combine_with(self, other, MergeConfig::default(), combine)
    }

    fn combine_or_discard<B, C, F>(self, other: Stream<B>, combine: F) -> Stream<C>
    where
        B: Send + 'static,
        C: 'static,
        F: Fn(A, B) -> Option<C> + Send + Sync + 'static,
    {
        combine_or_discard_with(self, other, MergeConfig::default(), combine)
    }
}

pub fn zip_with<A, B>(left: Stream<A>, right: Stream<B>, config: MergeConfig) -> Stream<(A, B)>
where
    A: Send + 'static,
    B: Send + 'static,
{
    combine_or_discard_with(left, right, config, |a, b| Some((a, b)))
}

pub fn combine_with<A, B, C, F>(
    left: Stream<A>,
    right: Stream<B>,
    config: MergeConfig,
    combine: F,
) -> Stream<C>
where
    A: Send + 'static,
    B: Send + 'static,
    C: 'static,
    F: Fn(A, B) -> C + Send + Sync + 'static,
{
    combine_or_discard_with(left, right, config, move |a, b| Some(combine(a, b)))
}

/// The general form the other merges reduce to.
pub fn combine_or_discard_with<A, B, C, F>(
    left: Stream<A>,
    right: Stream<B>,
    config: MergeConfig,
    combine: F,
) -> Stream<C>
where
    A: Send + 'static,
    B: Send + 'static,
    C: 'static,
    F: Fn(A, B) -> Option<C> + Send + Sync + 'static,
{
    Stream::new(move |out| {
        let mut cancel = CancelSource::new();
        let (left_tx, left_rx) = channel_pair::<A>(&config);
        let (right_tx, right_rx) = channel_pair::<B>(&config);
        let left_worker = spawn_send_all(left.clone(), left_tx, cancel.token());
        let right_worker = spawn_send_all(right.clone(), right_tx, cancel.token());

        let mut completed = true;
        loop {
            // A closed channel means that source is exhausted; the merge
            // ends at the shorter input.
            let a = match left_rx.recv() {
                Ok(a) => a,
                Err(_) => break,
            };
            let b = match right_rx.recv() {
                Ok(b) => b,
                Err(_) => break,
            };
            if let Some(item) = combine(a, b) {
                if !out.accept(item) {
                    completed = false;
                    break;
                }
            }
        }

        cancel.cancel();
        drop(left_rx);
        drop(right_rx);
        for worker in [left_worker, right_worker] {
            if let Err(_panic) = join_worker(worker) {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_panic, "merge feeder panicked");
            }
        }
        completed
    })
}

fn channel_pair<T: Send + 'static>(config: &MergeConfig) -> (Sender<T>, Receiver<T>) {
    match config.channel_capacity {
        Some(cap) => bounded(cap),
        None => unbounded(),
    }
}
