//! Materializing key-indexed combinators over key/value streams.
//!
//! All three drain the upstream completely before emitting: every input
//! value lands in its key's slot first, then the store's entries stream out
//! in the index's iteration order (hash: unspecified; sorted: ascending).

use rill_core::Stream;
use rill_index::IndexMaker;

pub trait KeyedExt<K, V> {
    /// Collect each key's values into a list, preserving arrival order
    /// within the key.
    fn group_by_key<M>(self, maker: M) -> Stream<(K, Vec<V>)>
    where
        M: IndexMaker<K>;

    /// Fold each key's values pairwise; the first value seeds the
    /// accumulator.
    fn reduce_by_key<M, R>(self, maker: M, reducer: R) -> Stream<(K, V)>
    where
        M: IndexMaker<K>,
        R: Fn(V, V) -> V + Send + Sync + 'static;

    /// General accumulation: `init` seeds a fresh accumulator per key,
    /// `fold` absorbs each value, `finish` maps the accumulator to the
    /// emitted result. Permits an accumulator type distinct from both the
    /// input and output types.
    fn aggregate_by_key<A, R, M, I, F, G>(
        self,
        maker: M,
        init: I,
        fold: F,
        finish: G,
    ) -> Stream<(K, R)>
    where
        A: 'static,
        R: 'static,
        M: IndexMaker<K>,
        I: Fn() -> A + Send + Sync + 'static,
        F: Fn(A, V) -> A + Send + Sync + 'static,
        G: Fn(A) -> R + Send + Sync + 'static;
}

impl<K, V> KeyedExt<K, V> for Stream<(K, V)>
where
    K: 'static,
    V: 'static,
{
    fn group_by_key<M>(self, maker: M) -> Stream<(K, Vec<V>)>
    where
        M: IndexMaker<K>,
    {
        Stream::new(move |out| {
            let mut groups = maker.make::<Vec<V>>();
            self.run(&mut |(key, value): (K, V)| {
                match groups.remove(&key) {
                    Some(mut list) => {
                        list.push(value);
                        groups.put(key, list);
                    }
                    None => {
                        groups.put(key, vec![value]);
                    }
                }
                true
            });
            for entry in groups.into_entries() {
                if !out.accept(entry) {
                    return false;
                }
            }
            true
        })
    }

    fn reduce_by_key<M, R>(self, maker: M, reducer: R) -> Stream<(K, V)>
    where
        M: IndexMaker<K>,
        R: Fn(V, V) -> V + Send + Sync + 'static,
    {
        Stream::new(move |out| {
            let mut accs = maker.make::<V>();
            self.run(&mut |(key, value): (K, V)| {
                match accs.remove(&key) {
                    Some(prev) => {
                        accs.put(key, reducer(prev, value));
                    }
                    None => {
                        accs.put(key, value);
                    }
                }
                true
            });
            for entry in accs.into_entries() {
                if !out.accept(entry) {
                    return false;
                }
            }
            true
        })
    }

    fn aggregate_by_key<A, R, M, I, F, G>(
        self,
        maker: M,
        init: I,
        fold: F,
        finish: G,
    ) -> Stream<(K, R)>
    where
        A: 'static,
        R: 'static,
        M: IndexMaker<K>,
        I: Fn() -> A + Send + Sync + 'static,
        F: Fn(A, V) -> A + Send + Sync + 'static,
        G: Fn(A) -> R + Send + Sync + 'static,
    {
        Stream::new(move |out| {
            let mut accs = maker.make::<A>();
            self.run(&mut |(key, value): (K, V)| {
                let acc = match accs.remove(&key) {
                    Some(acc) => acc,
                    None => init(),
                };
                accs.put(key, fold(acc, value));
                true
            });
            for (key, acc) in accs.into_entries() {
                if !out.accept((key, finish(acc))) {
                    return false;
                }
            }
            true
        })
    }
}
