//! Interrupt-side pulse counters
//!
//! ## Concurrency
//!
//! One writer (the edge interrupt), one reader (the poll loop), three
//! independent `AtomicU32` fields with `Relaxed` ordering and no lock. The
//! reader can observe a torn update, say a new interval paired with the old
//! timestamp. That costs at most one implausible sample, which the range
//! check or the smoother absorbs on the next cycle.
//!
//! Only `load` and `store` are used, so the counters work on cores without
//! atomic read-modify-write (Cortex-M0, AVR).

use core::sync::atomic::{AtomicU32, Ordering};

/// Edge timing shared between an interrupt handler and the poll loop
#[derive(Debug)]
pub struct PulseCounter {
    pulse_count: AtomicU32,
    last_pulse_us: AtomicU32,
    last_interval_us: AtomicU32,
}

/// Point-in-time copy of a [`PulseCounter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulseSnapshot {
    /// Accepted edges since reset, wrapping
    pub pulse_count: u32,
    /// `micros()` at the last accepted edge
    pub last_pulse_us: u32,
    /// Period ending at the last accepted edge, 0 until one is complete
    pub last_interval_us: u32,
}

impl PulseCounter {
    /// Counter with no edges seen
    pub const fn new() -> Self {
        Self {
            pulse_count: AtomicU32::new(0),
            last_pulse_us: AtomicU32::new(0),
            last_interval_us: AtomicU32::new(0),
        }
    }

    /// Record a rising edge at `now_us`
    ///
    /// The first edge only primes the timestamp. Later edges closer than
    /// `debounce_us` to the previous accepted edge are bounce and dropped.
    pub fn record_edge(&self, now_us: u32, debounce_us: u32) {
        let count = self.pulse_count.load(Ordering::Relaxed);
        if count == 0 {
            self.last_pulse_us.store(now_us, Ordering::Relaxed);
            self.pulse_count.store(1, Ordering::Relaxed);
            return;
        }

        let interval = now_us.wrapping_sub(self.last_pulse_us.load(Ordering::Relaxed));
        if interval <= debounce_us {
            return;
        }

        self.last_interval_us.store(interval, Ordering::Relaxed);
        self.last_pulse_us.store(now_us, Ordering::Relaxed);
        // Skip 0 on wrap so a live counter never looks unprimed
        self.pulse_count.store(count.wrapping_add(1).max(1), Ordering::Relaxed);
    }

    /// Read all three fields, each independently
    pub fn snapshot(&self) -> PulseSnapshot {
        PulseSnapshot {
            pulse_count: self.pulse_count.load(Ordering::Relaxed),
            last_pulse_us: self.last_pulse_us.load(Ordering::Relaxed),
            last_interval_us: self.last_interval_us.load(Ordering::Relaxed),
        }
    }

    /// Forget all edges
    pub fn reset(&self) {
        self.pulse_count.store(0, Ordering::Relaxed);
        self.last_pulse_us.store(0, Ordering::Relaxed);
        self.last_interval_us.store(0, Ordering::Relaxed);
    }
}

impl Default for PulseCounter {
    fn default() -> Self {
        Self::new()
    }
}
