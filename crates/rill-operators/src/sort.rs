//! Materialize-sort-replay.

use rill_core::{Comparator, Stream};

pub trait SortExt<E> {
    /// Order the stream by `cmp`. Not lazily orderable: each run drains the
    /// whole upstream into a buffer, sorts it (stable), then replays. A
    /// downstream early stop only shortens the replay phase.
    fn sorted(self, cmp: Comparator<E>) -> Stream<E>;
}

impl<E: 'static> SortExt<E> for Stream<E> {
    fn sorted(self, cmp: Comparator<E>) -> Stream<E> {
        Stream::new(move |out| {
            let mut buffer = Vec::new();
            self.run(&mut |item: E| {
                buffer.push(item);
                true
            });
            buffer.sort_by(|a, b| cmp.compare(a, b));
            for item in buffer {
                if !out.accept(item) {
                    return false;
                }
            }
            true
        })
    }
}
