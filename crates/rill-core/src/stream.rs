//! The Stream value and its basic combinators.
//!
//! A `Stream<E>` wraps a run function: invoking it with a consumer drives
//! production, and the `bool` it returns reports whether the upstream was
//! exhausted (`true`) or the consumer stopped it early (`false`).
//!
//! Composability rules every combinator here honors:
//! - never offer an element to a consumer that has returned `false`;
//! - stop pulling upstream as soon as downstream stops;
//! - propagate the stop outcome by returning `false`.

use std::sync::{Arc, Mutex};

use crate::comparator::Comparator;
use crate::consumer::{Consumer, StopProbe};

type RunFn<E> = dyn Fn(&mut dyn Consumer<E>) -> bool + Send + Sync;

/// A lazy, replayable sequence of `E`, driven by a [`Consumer`].
///
/// Cloning is cheap (the run function is shared). A stream built from pure
/// inputs is side-effect free and re-runnable; [`cache`](Stream::cache) is
/// the one stateful exception.
pub struct Stream<E> {
    drive: Arc<RunFn<E>>,
}

impl<E> Clone for Stream<E> {
    fn clone(&self) -> Self {
        Self {
            drive: Arc::clone(&self.drive),
        }
    }
}

impl<E: 'static> Stream<E> {
    /// Wrap a run function. The function must be re-invocable: each call is
    /// one independent production of the sequence.
    pub fn new<R>(drive: R) -> Self
    where
        R: Fn(&mut dyn Consumer<E>) -> bool + Send + Sync + 'static,
    {
        Self {
            drive: Arc::new(drive),
        }
    }

    /// Drive production into `consumer`. Returns `true` iff the upstream
    /// was fully exhausted without the consumer requesting a stop.
    pub fn run(&self, consumer: &mut dyn Consumer<E>) -> bool {
        (self.drive.as_ref())(consumer)
    }

    // --- sources ---

    pub fn empty() -> Self {
        Self::new(|_consumer| true)
    }

    pub fn once(item: E) -> Self
    where
        E: Clone + Send + Sync,
    {
        Self::from_vec(vec![item])
    }

    /// A replayable source over an owned buffer; every run replays it in
    /// order from the start.
    pub fn from_vec(items: Vec<E>) -> Self
    where
        E: Clone + Send + Sync,
    {
        Self::new(move |out| {
            for item in &items {
                if !out.accept(item.clone()) {
                    return false;
                }
            }
            true
        })
    }

    // --- combinators ---

    pub fn map<F, M>(self, mapper: M) -> Stream<F>
    where
        F: 'static,
        M: Fn(E) -> F + Send + Sync + 'static,
    {
        Stream::new(move |out| self.run(&mut |item: E| out.accept(mapper(item))))
    }

    pub fn filter<P>(self, pred: P) -> Stream<E>
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Stream::new(move |out| {
            self.run(&mut |item: E| {
                if pred(&item) {
                    out.accept(item)
                } else {
                    true
                }
            })
        })
    }

    /// At most the first `n` elements. Nothing beyond position `n` is ever
    /// pulled from the upstream. Cutting at the limit is not a downstream
    /// stop: the run reports `false` only when downstream itself stopped.
    pub fn limit(self, n: usize) -> Stream<E> {
        Stream::new(move |out| {
            if n == 0 {
                return true;
            }
            let mut remaining = n;
            let mut stopped = false;
            self.run(&mut |item: E| {
                if !out.accept(item) {
                    stopped = true;
                    return false;
                }
                remaining -= 1;
                remaining > 0
            });
            !stopped
        })
    }

    /// Everything after the first `n` elements.
    pub fn skip(self, n: usize) -> Stream<E> {
        Stream::new(move |out| {
            let mut remaining = n;
            self.run(&mut |item: E| {
                if remaining > 0 {
                    remaining -= 1;
                    true
                } else {
                    out.accept(item)
                }
            })
        })
    }

    /// The one sanctioned stateful combinator: the first run drains the
    /// source fully to fill a shared buffer (forwarding through a
    /// [`StopProbe`] so a downstream stop cannot cut the fill short); later
    /// runs replay the buffer without touching the source again.
    pub fn cache(self) -> Stream<E>
    where
        E: Clone + Send + Sync,
    {
        let filled: Arc<Mutex<Option<Arc<Vec<E>>>>> = Arc::new(Mutex::new(None));
        Stream::new(move |out| {
            let snapshot = filled.lock().unwrap().clone();
            if let Some(items) = snapshot {
                for item in items.iter() {
                    if !out.accept(item.clone()) {
                        return false;
                    }
                }
                return true;
            }
            let mut collected = Vec::new();
            let mut probe = StopProbe::new(out);
            self.run(&mut |item: E| {
                collected.push(item.clone());
                probe.offer(item);
                true
            });
            let stopped = probe.stopped();
            let mut slot = filled.lock().unwrap();
            if slot.is_none() {
                *slot = Some(Arc::new(collected));
            }
            !stopped
        })
    }

    // --- terminal operations ---

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(E),
    {
        self.run(&mut |item: E| {
            f(item);
            true
        });
    }

    pub fn collect(&self) -> Vec<E> {
        let mut items = Vec::new();
        self.for_each(|item| items.push(item));
        items
    }

    pub fn count(&self) -> usize {
        let mut n = 0usize;
        self.for_each(|_item| n += 1);
        n
    }

    /// First element, if any. Stops the upstream immediately after it.
    pub fn first(&self) -> Option<E> {
        let mut found = None;
        self.run(&mut |item: E| {
            found = Some(item);
            false
        });
        found
    }

    pub fn last(&self) -> Option<E> {
        let mut found = None;
        self.for_each(|item| found = Some(item));
        found
    }

    /// Fold all elements pairwise; the first element seeds the accumulator.
    pub fn reduce<R>(&self, reducer: R) -> Option<E>
    where
        R: Fn(E, E) -> E,
    {
        let mut acc: Option<E> = None;
        self.run(&mut |item: E| {
            acc = Some(match acc.take() {
                None => item,
                Some(prev) => reducer(prev, item),
            });
            true
        });
        acc
    }

    pub fn min(&self, cmp: &Comparator<E>) -> Option<E> {
        self.reduce(|a, b| if cmp.compare(&b, &a).is_lt() { b } else { a })
    }

    pub fn max(&self, cmp: &Comparator<E>) -> Option<E> {
        self.reduce(|a, b| if cmp.compare(&b, &a).is_gt() { b } else { a })
    }
}
