//! Concurrent merges: positional pairing, discard alignment, worker
//! lifecycle.

use rill_core::{MergeConfig, Stream};
use rill_exec::{from_channel, metrics, zip_with, MergeExt};

#[test]
fn test_zip_pairs_by_position() {
    let nums = Stream::from_vec(vec![1, 2, 3]);
    let letters = Stream::from_vec(vec!["a", "b"]);
    assert_eq!(nums.zip(letters).collect(), vec![(1, "a"), (2, "b")]);
}

#[test]
fn test_zip_length_is_min_of_inputs() {
    let long = Stream::from_vec((0..100).collect::<Vec<i64>>());
    let short = Stream::from_vec((0..7).collect::<Vec<i64>>());
    assert_eq!(long.clone().zip(short.clone()).count(), 7);
    assert_eq!(short.zip(long).count(), 7);
}

#[test]
fn test_zip_with_empty_side() {
    let none = Stream::<i64>::empty().zip(Stream::from_vec(vec![1, 2, 3]));
    assert_eq!(none.count(), 0);
}

#[test]
fn test_zip_replays_with_fresh_workers() {
    let zipped = Stream::from_vec(vec![1, 2]).zip(Stream::from_vec(vec![3, 4]));
    assert_eq!(zipped.collect(), vec![(1, 3), (2, 4)]);
    assert_eq!(zipped.collect(), vec![(1, 3), (2, 4)]);
}

#[test]
fn test_combine_applies_function() {
    let sums = Stream::from_vec(vec![1, 2, 3])
        .combine(Stream::from_vec(vec![10, 20, 30]), |a, b| a + b);
    assert_eq!(sums.collect(), vec![11, 22, 33]);
}

#[test]
fn test_combine_composes_with_map() {
    let left = Stream::from_vec((0..4).collect::<Vec<i64>>()).map(|n| n * n);
    let right = Stream::from_vec((0..4).collect::<Vec<i64>>());
    let diffs = left.combine(right, |a, b| a - b);
    assert_eq!(diffs.collect(), vec![0, 0, 2, 6]);
}

#[test]
fn test_combine_or_discard_keeps_positional_alignment() {
    let left = Stream::from_vec((0..6).collect::<Vec<i64>>());
    let right = Stream::from_vec((0..6).map(|n| n * 10).collect::<Vec<i64>>());
    let picked = left.combine_or_discard(right, |a, b| {
        if a % 2 == 0 {
            Some((a, b))
        } else {
            None
        }
    });
    // Dropped positions vanish without shifting later pairs.
    assert_eq!(picked.collect(), vec![(0, 0), (2, 20), (4, 40)]);
}

#[test]
fn test_zip_early_stop_joins_its_workers() {
    let exited_before = metrics::workers_exited();
    let zipped = Stream::from_vec(vec![1, 2, 3])
        .zip(Stream::from_vec(vec![4, 5, 6]))
        .limit(1);
    assert_eq!(zipped.collect(), vec![(1, 4)]);
    // The merge run cancels and joins both feeders before returning, so
    // their exits are already visible here.
    assert!(metrics::workers_exited() >= exited_before + 2);
}

#[test]
fn test_zip_with_rendezvous_and_unbounded_channels() {
    let configs = [
        MergeConfig {
            channel_capacity: Some(0),
        },
        MergeConfig {
            channel_capacity: None,
        },
    ];
    for config in configs {
        let pairs = zip_with(
            Stream::from_vec(vec![1, 2]),
            Stream::from_vec(vec![9, 8, 7]),
            config,
        )
        .collect();
        assert_eq!(pairs, vec![(1, 9), (2, 8)]);
    }
}

#[test]
fn test_zip_with_channel_backed_source() {
    use crossbeam::channel;

    let (tx, rx) = channel::unbounded();
    for n in 0..3 {
        tx.send(n).expect("fill channel");
    }
    drop(tx);

    let pairs = from_channel(rx).zip(Stream::from_vec(vec!["a", "b", "c", "d"]));
    assert_eq!(pairs.collect(), vec![(0, "a"), (1, "b"), (2, "c")]);
}
