//! Constants for the acquisition engine
//!
//! Every magic number the engine depends on lives here, with the reason it
//! has the value it has.
//!
//! ## Organization
//!
//! - **ADC**: converter geometry, rail detection, bias network defaults
//! - **Frequency**: debounce floors, timeouts, smoothing weights
//! - **Physics**: unit conversion factors and reference atmospheres

/// ADC geometry and analog front-end defaults.
pub mod adc;

/// Pulse capture limits and filter weights for RPM and speed inputs.
pub mod frequency;

/// Physical constants and unit conversion factors.
pub mod physics;

pub use adc::{ADC_RAIL_MARGIN, DEFAULT_ADC_MAX, DEFAULT_AREF_VOLTAGE, DEFAULT_BIAS_RESISTOR};

pub use frequency::{
    RPM_DEBOUNCE_US, SPEED_DEBOUNCE_US, DEFAULT_PULSE_TIMEOUT_MS,
    RPM_SMOOTHING_PREVIOUS, SPEED_SMOOTHING_PREVIOUS,
};

pub use physics::{KELVIN_OFFSET, SEA_LEVEL_PRESSURE_HPA};

/// Minimum time between two reads of the same input when a sensor does not
/// ask for something slower (ms).
pub const DEFAULT_READ_INTERVAL_MS: u16 = 100;
