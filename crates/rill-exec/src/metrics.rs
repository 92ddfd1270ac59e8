//! Worker-lifecycle counters (starter).
//!
//! This module purposefully avoids pulling a telemetry stack; wire these up
//! to real metrics in the host layer. The counters exist so hosts and tests
//! can verify that no merge worker outlives its invocation.

use std::sync::atomic::{AtomicU64, Ordering};

static SPAWNED: AtomicU64 = AtomicU64::new(0);
static EXITED: AtomicU64 = AtomicU64::new(0);

/// RAII marker for one live worker; the exit count survives panics in the
/// worker body because it is bumped on Drop.
pub struct WorkerGuard(());

impl WorkerGuard {
    pub fn enter() -> Self {
        SPAWNED.fetch_add(1, Ordering::SeqCst);
        WorkerGuard(())
    }
}

impl Drop for WorkerGuard {
    fn drop(&mut self) {
        EXITED.fetch_add(1, Ordering::SeqCst);
    }
}

/// Total feeder workers ever spawned by this process.
pub fn workers_spawned() -> u64 {
    SPAWNED.load(Ordering::SeqCst)
}

/// Total feeder workers that have exited.
pub fn workers_exited() -> u64 {
    EXITED.load(Ordering::SeqCst)
}

/// Workers currently running.
pub fn live_workers() -> u64 {
    workers_spawned().saturating_sub(workers_exited())
}
