use thiserror::Error;

/// Errors at the channel boundary. Stops, exhaustion, and cancellation are
/// control flow, not errors; these cover the two genuinely abnormal cases.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("channel disconnected: {0}")]
    Disconnected(String),

    #[error("worker panicked: {0}")]
    WorkerPanic(String),
}
