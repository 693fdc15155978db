//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::Turn;

/// Fallback reply appended when the remote invocation fails, whatever
/// the cause.
pub const CONNECTION_FALLBACK: &str = "Sorry, I'm having trouble connecting.";

/// Immutable view of the session published after every transition.
/// Consumers use it purely for display and must not feed it back.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub turns: Vec<Turn>,
    pub busy: bool,
}

/// Guard that clears the `busy` flag on drop, ensuring it is always
/// released even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy lock. Returns `None` if a request is
    /// already in flight.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
