//! Set algebra over the key index.
//!
//! Every operation treats its inputs as sets: duplicate elements collapse
//! to one membership entry. The shared shape is index-then-probe: one input
//! is drained into a store of marker values, then the other streams against
//! it. Result order follows the streamed side.

use rill_core::Stream;
use rill_index::IndexMaker;

use crate::distinct::DistinctExt;

pub trait SetExt<E> {
    /// Concatenation in argument order. A downstream stop during `self`
    /// prevents `other` from starting.
    fn union(self, other: Stream<E>) -> Stream<E>;

    /// Elements of `self` that are members of `other`, each emitted once,
    /// in `self`'s order. Indexes `other` fully per run.
    fn intersection<M>(self, other: Stream<E>, maker: M) -> Stream<E>
    where
        M: IndexMaker<E>;

    /// Elements of `self` that are not members of `other`, each emitted
    /// once, in `self`'s order.
    fn difference<M>(self, other: Stream<E>, maker: M) -> Stream<E>
    where
        M: IndexMaker<E>;

    /// Union of both one-sided differences.
    fn symmetric_difference<M>(self, other: Stream<E>, maker: M) -> Stream<E>
    where
        M: IndexMaker<E>;

    /// Terminal: every element of `self` is a member of `other`. Stops
    /// driving `self` at the first missing element.
    fn is_subset<M>(&self, other: &Stream<E>, maker: M) -> bool
    where
        M: IndexMaker<E>;

    /// Terminal: every element of `other` is a member of `self`.
    fn is_superset<M>(&self, other: &Stream<E>, maker: M) -> bool
    where
        M: IndexMaker<E>;

    /// Terminal: subset in both directions.
    fn set_equal<M>(&self, other: &Stream<E>, maker: M) -> bool
    where
        M: IndexMaker<E>;
}

impl<E> SetExt<E> for Stream<E>
where
    E: Clone + Send + Sync + 'static,
{
    fn union(self, other: Stream<E>) -> Stream<E> {
        union_all(vec![self, other])
    }

    fn intersection<M>(self, other: Stream<E>, maker: M) -> Stream<E>
    where
        M: IndexMaker<E>,
    {
        Stream::new(move |out| {
            let mut members = maker.make::<()>();
            other.run(&mut |item: E| {
                members.put(item, ());
                true
            });
            self.run(&mut |item: E| {
                // Consuming the entry on emission collapses duplicates.
                if members.remove(&item).is_some() {
                    out.accept(item)
                } else {
                    true
                }
            })
        })
    }

    fn difference<M>(self, other: Stream<E>, maker: M) -> Stream<E>
    where
        M: IndexMaker<E>,
    {
        Stream::new(move |out| {
            let mut members = maker.make::<()>();
            other.run(&mut |item: E| {
                members.put(item, ());
                true
            });
            self.run(&mut |item: E| {
                if members.contains(&item) {
                    return true;
                }
                // Emitted keys join the index so later repeats collapse.
                members.put(item.clone(), ());
                out.accept(item)
            })
        })
    }

    fn symmetric_difference<M>(self, other: Stream<E>, maker: M) -> Stream<E>
    where
        M: IndexMaker<E>,
    {
        let forward = self.clone().difference(other.clone(), maker.clone());
        let backward = other.difference(self, maker);
        forward.union(backward)
    }

    fn is_subset<M>(&self, other: &Stream<E>, maker: M) -> bool
    where
        M: IndexMaker<E>,
    {
        let mut members = maker.make::<()>();
        other.run(&mut |item: E| {
            members.put(item, ());
            true
        });
        self.run(&mut |item: E| members.contains(&item))
    }

    fn is_superset<M>(&self, other: &Stream<E>, maker: M) -> bool
    where
        M: IndexMaker<E>,
    {
        other.is_subset(self, maker)
    }

    fn set_equal<M>(&self, other: &Stream<E>, maker: M) -> bool
    where
        M: IndexMaker<E>,
    {
        self.is_subset(other, maker.clone()) && other.is_subset(self, maker)
    }
}

/// Concatenate any number of sources in order; a downstream stop during
/// source i prevents source i+1 from starting.
pub fn union_all<E: 'static>(sources: Vec<Stream<E>>) -> Stream<E> {
    Stream::new(move |out| {
        for source in &sources {
            if !source.run(&mut *out) {
                return false;
            }
        }
        true
    })
}

/// Intersect any number of sources: s1 against the intersection of the
/// rest, recursively. Each level materializes its right-hand side, so n
/// sources cost up to n nested index builds; kept for its simplicity.
pub fn intersection_all<E, M>(sources: Vec<Stream<E>>, maker: M) -> Stream<E>
where
    E: Clone + Send + Sync + 'static,
    M: IndexMaker<E>,
{
    let mut iter = sources.into_iter();
    let first = match iter.next() {
        Some(first) => first,
        None => return Stream::empty(),
    };
    let rest: Vec<Stream<E>> = iter.collect();
    if rest.is_empty() {
        // Sole source: still collapse duplicates so the result is a set.
        return first.distinct(maker);
    }
    first.intersection(intersection_all(rest, maker.clone()), maker)
}
