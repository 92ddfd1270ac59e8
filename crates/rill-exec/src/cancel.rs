//! Per-invocation cancellation signal.
//!
//! Broadcast-on-close: the source holds the only `Sender` of a zero-
//! capacity channel; nothing is ever sent on it. Raising the signal drops
//! the sender, which disconnects every token's receiver at once, and a
//! disconnected receiver is always ready inside a `select!`. That readiness
//! is what releases a worker parked on a blocking channel send.

use crossbeam::channel::{bounded, Receiver, Sender, TryRecvError};

/// The raising side. Dropping the source also raises the signal, so a
/// coordinator that unwinds early cannot strand its workers.
pub struct CancelSource {
    tx: Option<Sender<()>>,
    rx: Receiver<()>,
}

impl CancelSource {
    pub fn new() -> Self {
        let (tx, rx) = bounded::<()>(0);
        Self { tx: Some(tx), rx }
    }

    /// A listener handle for one worker. Tokens stay valid after the
    /// source raises or drops; they just read as cancelled.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.rx.clone(),
        }
    }

    /// Raise the signal. Idempotent.
    pub fn cancel(&mut self) {
        self.tx = None;
    }
}

impl Default for CancelSource {
    fn default() -> Self {
        Self::new()
    }
}

/// The listening side; cheap to clone, one per worker.
#[derive(Clone)]
pub struct CancelToken {
    pub(crate) rx: Receiver<()>,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// The receiver to watch in a `select!` alongside a send operation.
    pub fn receiver(&self) -> &Receiver<()> {
        &self.rx
    }
}
