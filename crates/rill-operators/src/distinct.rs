//! Streaming dedup over a key index.

use rill_core::Stream;
use rill_index::IndexMaker;

/// Suppress repeats, preserving first-occurrence order.
///
/// Streaming, not materializing: an unseen element is emitted the moment it
/// arrives, so dedup composes with early stops without draining upstream.
pub trait DistinctExt<E> {
    /// Dedup on the elements themselves.
    fn distinct<M>(self, maker: M) -> Stream<E>
    where
        M: IndexMaker<E>;

    /// Dedup on a derived key.
    fn distinct_by<K, F, M>(self, key_of: F, maker: M) -> Stream<E>
    where
        K: 'static,
        F: Fn(&E) -> K + Send + Sync + 'static,
        M: IndexMaker<K>;
}

impl<E> DistinctExt<E> for Stream<E>
where
    E: Clone + Send + Sync + 'static,
{
    fn distinct<M>(self, maker: M) -> Stream<E>
    where
        M: IndexMaker<E>,
    {
        self.distinct_by(|item: &E| item.clone(), maker)
    }

    fn distinct_by<K, F, M>(self, key_of: F, maker: M) -> Stream<E>
    where
        K: 'static,
        F: Fn(&E) -> K + Send + Sync + 'static,
        M: IndexMaker<K>,
    {
        Stream::new(move |out| {
            let mut seen = maker.make::<()>();
            self.run(&mut |item: E| {
                let key = key_of(&item);
                if seen.contains(&key) {
                    return true;
                }
                seen.put(key, ());
                out.accept(item)
            })
        })
    }
}
