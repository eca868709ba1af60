//! UI heartbeat: the pending-work flag and the state-elapsed-time counter.
//!
//! The heartbeat trigger calls [`Heartbeat::tick()`] and returns at once.
//! The background UI loop waits on [`Heartbeat::wait()`] and runs one full
//! debounce + state machine pass per wake-up.
//!
//! The pending flag is a single-slot [`Signal`]: ticks that arrive while a
//! pass is still running collapse into one pending pass. Time is not lost,
//! because the elapsed counter is advanced by the trigger itself rather than
//! by the pass.

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Heartbeat period. The heartbeat runs at 100 Hz.
pub const HEARTBEAT_PERIOD_MS: u32 = 10;

/// Pending flag plus elapsed-time counter shared between the heartbeat
/// trigger and the UI loop.
pub struct Heartbeat {
    pending: Signal<CriticalSectionRawMutex, ()>,
    elapsed_ms: AtomicU32,
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new()
    }
}

impl Heartbeat {
    pub const fn new() -> Self {
        Self {
            pending: Signal::new(),
            elapsed_ms: AtomicU32::new(0),
        }
    }

    /// Record one heartbeat period and mark UI work pending.
    ///
    /// Called from the heartbeat trigger; does no other work.
    pub fn tick(&self) {
        self.elapsed_ms
            .fetch_add(HEARTBEAT_PERIOD_MS, Ordering::Relaxed);
        self.pending.signal(());
    }

    /// Wait until at least one tick is pending, then clear the flag.
    pub async fn wait(&self) {
        self.pending.wait().await;
    }

    /// Clear the pending flag without waiting. Returns whether it was set.
    pub fn take_pending(&self) -> bool {
        self.pending.try_take().is_some()
    }

    /// Time spent in the current UI state, in milliseconds.
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms.load(Ordering::Relaxed)
    }

    /// Zero the elapsed counter on a state transition.
    pub fn restart(&self) {
        self.elapsed_ms.store(0, Ordering::Relaxed);
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn idle_heartbeat_has_nothing_pending() {
        let hb = Heartbeat::new();
        assert!(!hb.take_pending());
        assert_eq!(hb.elapsed_ms(), 0);
    }

    #[test]
    fn tick_marks_pending_and_advances_time() {
        let hb = Heartbeat::new();
        hb.tick();
        assert_eq!(hb.elapsed_ms(), HEARTBEAT_PERIOD_MS);
        assert!(hb.take_pending());
        assert!(!hb.take_pending());
    }

    #[test]
    fn burst_of_ticks_collapses_to_one_pass() {
        let hb = Heartbeat::new();
        hb.tick();
        hb.tick();
        hb.tick();

        assert!(hb.take_pending());
        assert!(!hb.take_pending());
        // ...but no time is lost.
        assert_eq!(hb.elapsed_ms(), 3 * HEARTBEAT_PERIOD_MS);
    }

    #[test]
    fn wait_returns_once_ticked_and_consumes_flag() {
        let hb = Heartbeat::new();
        hb.tick();
        block_on(hb.wait());
        assert!(!hb.take_pending());
    }

    #[test]
    fn restart_zeroes_elapsed_time() {
        let hb = Heartbeat::new();
        hb.tick();
        hb.tick();
        hb.restart();
        assert_eq!(hb.elapsed_ms(), 0);
        hb.tick();
        assert_eq!(hb.elapsed_ms(), HEARTBEAT_PERIOD_MS);
    }
}
