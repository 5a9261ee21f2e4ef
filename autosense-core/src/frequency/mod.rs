//! Frequency capture
//!
//! Pulse-train sensors (alternator W-phase, hall wheel speed) are measured
//! by period: an interrupt records the time between rising edges, the poll
//! loop turns the latest period into a rate.
//!
//! ```text
//!   edge ISR ──► PulseCounter ◄── poll: snapshot, then clock
//!                (3 × AtomicU32)        │
//!                                        ├─ stopped?  → 0.0
//!                                        ├─ rate out of range → NaN
//!                                        └─ smoothed rate
//! ```
//!
//! "Stopped" is a measurement, not a fault: an engine that is off reads 0.

pub mod counter;
pub mod rpm;
pub mod speed;

pub use counter::{PulseCounter, PulseSnapshot};

use crate::constants::frequency::{RPM_DEBOUNCE_US, SPEED_DEBOUNCE_US, US_PER_MS};

/// Process-wide counter fed by the RPM edge interrupt
pub static RPM_PULSES: PulseCounter = PulseCounter::new();

/// Process-wide counter fed by the speed edge interrupt
pub static SPEED_PULSES: PulseCounter = PulseCounter::new();

/// Rising-edge handler for the RPM input, call with the current `micros()`
pub fn rpm_edge_isr(now_us: u32) {
    RPM_PULSES.record_edge(now_us, RPM_DEBOUNCE_US);
}

/// Rising-edge handler for the speed input, call with the current `micros()`
pub fn speed_edge_isr(now_us: u32) {
    SPEED_PULSES.record_edge(now_us, SPEED_DEBOUNCE_US);
}

/// Which pulse input an interrupt feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseChannel {
    /// Engine speed
    Rpm,
    /// Road speed
    Speed,
}

impl PulseChannel {
    /// Shortest interval accepted as a real edge (µs)
    pub const fn debounce_us(self) -> u32 {
        match self {
            Self::Rpm => RPM_DEBOUNCE_US,
            Self::Speed => SPEED_DEBOUNCE_US,
        }
    }

    /// The process-wide counter for this channel
    pub fn counter(self) -> &'static PulseCounter {
        match self {
            Self::Rpm => &RPM_PULSES,
            Self::Speed => &SPEED_PULSES,
        }
    }

    /// Interrupt handler for this channel
    pub fn handler(self) -> fn(u32) {
        match self {
            Self::Rpm => rpm_edge_isr,
            Self::Speed => speed_edge_isr,
        }
    }
}

/// Poll-side record of when the pulse count last moved
///
/// `micros()` wraps every 71 minutes, so after a long silence the age of the
/// last pulse can look small again. Watching the count in poll time catches
/// that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulseWatch {
    seen_count: u32,
    changed_at_ms: u32,
}

impl PulseWatch {
    /// Note the current count, returning how long it has been unchanged (ms)
    pub fn observe(&mut self, pulse_count: u32, now_ms: u32) -> u32 {
        if pulse_count != self.seen_count {
            self.seen_count = pulse_count;
            self.changed_at_ms = now_ms;
        }
        now_ms.wrapping_sub(self.changed_at_ms)
    }
}

/// Latest complete period, or `None` if the input has stopped
///
/// `snapshot` must be taken before `now_us` and `now_ms` are read, so the
/// last pulse can never appear to be in the future.
pub fn active_interval(
    snapshot: &PulseSnapshot,
    now_us: u32,
    now_ms: u32,
    watch: &mut PulseWatch,
    timeout_ms: u16,
) -> Option<u32> {
    let unchanged_ms = watch.observe(snapshot.pulse_count, now_ms);
    if snapshot.pulse_count == 0 || snapshot.last_interval_us == 0 {
        return None;
    }
    let since_pulse_ms = now_us.wrapping_sub(snapshot.last_pulse_us) / US_PER_MS;
    let timeout = timeout_ms as u32;
    if since_pulse_ms > timeout || unchanged_ms > timeout {
        return None;
    }
    Some(snapshot.last_interval_us)
}

/// One-pole smoother
///
/// The first valid sample after a gap (previous `NaN` or not positive) is
/// taken as is.
pub fn smooth(previous: f32, sample: f32, weight_previous: f32) -> f32 {
    if previous.is_nan() || previous <= 0.0 {
        sample
    } else {
        previous * weight_previous + sample * (1.0 - weight_previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(last_pulse_us: u32) -> PulseSnapshot {
        PulseSnapshot { pulse_count: 10, last_pulse_us, last_interval_us: 1_000 }
    }

    #[test]
    fn no_period_is_stopped() {
        let mut watch = PulseWatch::default();
        let primed = PulseSnapshot { pulse_count: 1, last_pulse_us: 100, last_interval_us: 0 };
        assert_eq!(active_interval(&primed, 200, 0, &mut watch, 2000), None);
        assert_eq!(active_interval(&PulseSnapshot::default(), 200, 0, &mut watch, 2000), None);
    }

    #[test]
    fn recent_pulse_is_active() {
        let mut watch = PulseWatch::default();
        assert_eq!(active_interval(&running(1_000_000), 1_500_000, 1_500, &mut watch, 2000), Some(1_000));
    }

    #[test]
    fn old_pulse_is_stopped() {
        let mut watch = PulseWatch::default();
        assert_eq!(active_interval(&running(1_000_000), 3_100_000, 3_100, &mut watch, 2000), None);
    }

    #[test]
    fn unchanged_count_is_stopped_even_if_micros_wrapped() {
        let mut watch = PulseWatch::default();
        let snap = running(1_000);
        assert!(active_interval(&snap, 2_000, 10, &mut watch, 2000).is_some());
        // micros() has wrapped back to just after the old pulse, millis has not
        assert_eq!(active_interval(&snap, 3_000, 4_294_977, &mut watch, 2000), None);
    }

    #[test]
    fn smoothing_weights() {
        assert_eq!(smooth(f32::NAN, 100.0, 0.8), 100.0);
        assert_eq!(smooth(0.0, 100.0, 0.8), 100.0);
        assert!((smooth(100.0, 200.0, 0.8) - 120.0).abs() < 1e-4);
        assert!((smooth(100.0, 200.0, 0.7) - 130.0).abs() < 1e-4);
    }

    #[test]
    fn channels_map_to_their_floors() {
        assert_eq!(PulseChannel::Rpm.debounce_us(), 100);
        assert_eq!(PulseChannel::Speed.debounce_us(), 500);
        assert!(core::ptr::eq(PulseChannel::Speed.counter(), &SPEED_PULSES));
    }
}
