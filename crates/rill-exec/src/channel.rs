//! Channel-backed sources and channel-collection helpers.
//!
//! The engine owns no I/O; these helpers drain or fill a channel primitive
//! supplied by the caller, and feed the merge combinators.

use std::thread::{self, JoinHandle};

use crossbeam::channel::{Receiver, Sender};
use crossbeam::select;

use rill_core::Stream;

use crate::cancel::CancelToken;
use crate::error::ExecError;
use crate::metrics::WorkerGuard;

/// A source that drains a caller-supplied receiver until every sender is
/// dropped.
///
/// Not replayable in the ordinary sense: elements are taken out of the
/// channel, so a second run only sees what arrived after the first.
pub fn from_channel<E: Send + 'static>(rx: Receiver<E>) -> Stream<E> {
    Stream::new(move |out| {
        while let Ok(item) = rx.recv() {
            if !out.accept(item) {
                return false;
            }
        }
        true
    })
}

/// Synchronously push every element of `stream` into `tx`. Fails when the
/// receiving side has been dropped mid-fill.
pub fn send_all<E: Send + 'static>(stream: &Stream<E>, tx: &Sender<E>) -> Result<(), ExecError> {
    let mut disconnected = false;
    stream.run(&mut |item: E| match tx.send(item) {
        Ok(()) => true,
        Err(_) => {
            disconnected = true;
            false
        }
    });
    if disconnected {
        Err(ExecError::Disconnected(
            "receiver dropped while filling channel".into(),
        ))
    } else {
        Ok(())
    }
}

/// Drive `stream` on a background worker, sending each element into `tx`.
///
/// Every send is raced against `cancel`, so the worker can be released even
/// while parked on a full channel. The worker stops on stream exhaustion, a
/// dropped receiver, or cancellation, and drops `tx` on exit so the
/// receiving side observes the close.
pub fn spawn_send_all<E: Send + 'static>(
    stream: Stream<E>,
    tx: Sender<E>,
    cancel: CancelToken,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let _live = WorkerGuard::enter();
        #[cfg(feature = "tracing")]
        tracing::trace!("merge feeder started");
        stream.run(&mut |item: E| {
            // select! picks among ready operations at random; the explicit
            // check keeps cancellation prompt when the send is also ready.
            if cancel.is_cancelled() {
                return false;
            }
            select! {
                send(tx, item) -> sent => sent.is_ok(),
                recv(cancel.rx) -> _msg => false,
            }
        });
        #[cfg(feature = "tracing")]
        tracing::trace!("merge feeder exiting");
    })
}

/// Join a feeder, surfacing a panic from its user closures as an error.
pub fn join_worker(handle: JoinHandle<()>) -> Result<(), ExecError> {
    handle.join().map_err(|panic| {
        let message = panic
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "opaque panic payload".to_string());
        ExecError::WorkerPanic(message)
    })
}
