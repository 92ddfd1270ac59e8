//! Stream protocol: laziness, replay, short-circuit, cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rill_core::{Comparator, Stream};

/// Source that counts how many elements it actually produced.
fn counted(items: Vec<i64>, produced: Arc<AtomicUsize>) -> Stream<i64> {
    Stream::new(move |out| {
        for item in &items {
            produced.fetch_add(1, Ordering::SeqCst);
            if !out.accept(*item) {
                return false;
            }
        }
        true
    })
}

#[test]
fn test_map_filter_collect() {
    let out = Stream::from_vec(vec![1, 2, 3, 4, 5])
        .map(|n| n * 10)
        .filter(|n| *n > 20)
        .collect();
    assert_eq!(out, vec![30, 40, 50]);
}

#[test]
fn test_building_is_lazy() {
    let produced = Arc::new(AtomicUsize::new(0));
    let stream = counted(vec![1, 2, 3], produced.clone()).map(|n| n + 1);
    assert_eq!(produced.load(Ordering::SeqCst), 0);
    let _ = stream.collect();
    assert_eq!(produced.load(Ordering::SeqCst), 3);
}

#[test]
fn test_replay_reproduces_sequence() {
    let stream = Stream::from_vec(vec![3, 1, 2]).map(|n| n * 2);
    assert_eq!(stream.collect(), vec![6, 2, 4]);
    assert_eq!(stream.collect(), vec![6, 2, 4]);
}

#[test]
fn test_limit_cuts_upstream_production() {
    let produced = Arc::new(AtomicUsize::new(0));
    let stream = counted((0..10).collect(), produced.clone()).limit(3);
    assert_eq!(stream.collect(), vec![0, 1, 2]);
    assert_eq!(produced.load(Ordering::SeqCst), 3);
}

#[test]
fn test_limit_zero_and_past_the_end() {
    let produced = Arc::new(AtomicUsize::new(0));
    assert_eq!(counted(vec![1, 2], produced.clone()).limit(0).count(), 0);
    assert_eq!(produced.load(Ordering::SeqCst), 0);
    assert_eq!(Stream::from_vec(vec![1, 2]).limit(5).collect(), vec![1, 2]);
}

#[test]
fn test_limit_cut_is_not_a_downstream_stop() {
    // Driven by an always-continue consumer, a limit cut must still report
    // exhaustion so enclosing combinators (union) move on to their next
    // source instead of aborting.
    let stream = Stream::from_vec(vec![1, 2, 3]).limit(1);
    let mut seen = 0;
    let finished = stream.run(&mut |_n: i64| {
        seen += 1;
        true
    });
    assert!(finished);
    assert_eq!(seen, 1);
}

#[test]
fn test_stop_outcome_propagates_and_production_ceases() {
    let stream = Stream::from_vec(vec![1, 2, 3]);
    let mut got = Vec::new();
    let finished = stream.run(&mut |n: i64| {
        got.push(n);
        n < 2
    });
    assert!(!finished);
    assert_eq!(got, vec![1, 2]);
}

#[test]
fn test_skip() {
    assert_eq!(Stream::from_vec(vec![1, 2, 3, 4]).skip(2).collect(), vec![3, 4]);
    assert_eq!(Stream::from_vec(vec![1, 2]).skip(5).count(), 0);
}

#[test]
fn test_cache_drains_once_then_replays() {
    let produced = Arc::new(AtomicUsize::new(0));
    let cached = counted(vec![1, 2, 3], produced.clone()).cache();
    assert_eq!(cached.collect(), vec![1, 2, 3]);
    assert_eq!(cached.collect(), vec![1, 2, 3]);
    assert_eq!(produced.load(Ordering::SeqCst), 3);
}

#[test]
fn test_cache_fills_fully_despite_early_stop() {
    let produced = Arc::new(AtomicUsize::new(0));
    let cached = counted(vec![1, 2, 3, 4], produced.clone()).cache();
    assert_eq!(cached.first(), Some(1));
    // The buffer filled in that one pass, and later runs replay it.
    assert_eq!(produced.load(Ordering::SeqCst), 4);
    assert_eq!(cached.collect(), vec![1, 2, 3, 4]);
    assert_eq!(produced.load(Ordering::SeqCst), 4);
}

#[test]
fn test_first_last_reduce_min_max() {
    let stream = Stream::from_vec(vec![4, 7, 1, 9]);
    let natural = Comparator::natural();
    assert_eq!(stream.first(), Some(4));
    assert_eq!(stream.last(), Some(9));
    assert_eq!(stream.reduce(|a, b| a + b), Some(21));
    assert_eq!(stream.min(&natural), Some(1));
    assert_eq!(stream.max(&natural), Some(9));

    let empty = Stream::<i64>::empty();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
    assert_eq!(empty.reduce(|a, b| a + b), None);
    assert_eq!(empty.min(&natural), None);
    assert_eq!(empty.max(&natural), None);
}

#[test]
fn test_once() {
    assert_eq!(Stream::once(42).collect(), vec![42]);
}
