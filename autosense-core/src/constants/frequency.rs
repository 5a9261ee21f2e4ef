//! Pulse Capture Limits
//!
//! Debounce floors are chosen so that the fastest physically plausible
//! signal is never rejected as noise:
//!
//! ```text
//! RPM:   100 µs floor -> 10 kHz edge rate. A 12-pole alternator on a 3:1
//!        pulley at 10 000 rpm produces 3 kHz, well inside the floor.
//! Speed: 500 µs floor -> 2 kHz edge rate. 100 teeth on a 2 m tyre behind a
//!        3.73 final drive at 300 km/h produce about 1.55 kHz.
//! ```

/// Minimum plausible interval between RPM edges (µs).
pub const RPM_DEBOUNCE_US: u32 = 100;

/// Minimum plausible interval between speed edges (µs).
pub const SPEED_DEBOUNCE_US: u32 = 500;

/// No pulse for this long means the engine or wheel has stopped (ms).
pub const DEFAULT_PULSE_TIMEOUT_MS: u16 = 2000;

/// Weight of the previous RPM value in the one-pole smoother.
pub const RPM_SMOOTHING_PREVIOUS: f32 = 0.8;

/// Weight of the previous speed value in the one-pole smoother.
pub const SPEED_SMOOTHING_PREVIOUS: f32 = 0.7;

/// Microseconds in one minute, the numerator of the RPM formula.
pub const US_PER_MINUTE: f32 = 60_000_000.0;

/// Microseconds in one second.
pub const US_PER_SECOND: f32 = 1_000_000.0;

/// Microseconds per millisecond.
pub const US_PER_MS: u32 = 1000;
