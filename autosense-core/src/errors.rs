//! Fault and Configuration Error Types
//!
//! ## Two Channels
//!
//! The engine reports problems through two strictly separated channels:
//!
//! 1. **Measurement faults** ([`Fault`]) happen on the hot path, once per read.
//!    They never escape a read: the engine stores `NaN` in the input's value and
//!    hands the fault to the diagnostics macros. Every consumer downstream (CAN
//!    encoder, logger, display, alarms) keys off the `NaN` alone.
//!
//! 2. **Configuration errors** ([`ConfigError`]) happen when a collaborator
//!    assigns a sensor, a calibration or a display unit to an input. These are
//!    ordinary `Result`s because the caller can do something about them.
//!
//! ## Fault Taxonomy
//!
//! ```text
//! Disconnected        ADC sample within the rail margin (open or shorted wiring)
//! DeviceAbsent        digital device reported a fault or never answered a probe
//! CalibrationMissing  table/polynomial model with no matching calibration record
//! Undefined           negative discriminant, non-positive resistance, log domain
//! OutOfRange          computed value outside the descriptor's declared band
//! ```
//!
//! "Stopped" is deliberately absent: a frequency input with no recent pulse
//! reads exactly `0.0`, which is valid data and not a fault.
//!
//! ## Memory Layout
//!
//! Both enums are `Copy` and carry only `f32`, `u8` and `&'static str`
//! payloads, so returning them costs a couple of registers.

use thiserror_no_std::Error;

/// Result of one measurement cycle before it is written to an input.
pub type MeasureResult = Result<f32, Fault>;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Why a measurement cycle produced no trustworthy value
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Fault {
    /// ADC reading stuck near either rail
    #[error("ADC reading {raw} at rail (sensor disconnected or shorted)")]
    Disconnected {
        /// The raw sample that tripped the rail check
        raw: u16,
    },

    /// A bus or SPI device is missing or flagged an internal fault
    #[error("Device absent or faulted: {reason}")]
    DeviceAbsent {
        /// Short description of what the device reported
        reason: &'static str,
    },

    /// No calibration record of the required kind is available
    #[error("No calibration available for this model")]
    CalibrationMissing,

    /// The conversion has no real solution for this input
    #[error("Conversion undefined for this reading")]
    Undefined,

    /// Value computed but outside the sensor's declared range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The computed value
        value: f32,
        /// Declared minimum
        min: f32,
        /// Declared maximum
        max: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for Fault {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Disconnected { raw } =>
                defmt::write!(fmt, "ADC {} at rail", raw),
            Self::DeviceAbsent { reason } =>
                defmt::write!(fmt, "Device absent: {}", reason),
            Self::CalibrationMissing =>
                defmt::write!(fmt, "Calibration missing"),
            Self::Undefined =>
                defmt::write!(fmt, "Conversion undefined"),
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
        }
    }
}

/// Errors raised while configuring an input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Registry index does not exist
    #[error("Unknown sensor index {index}")]
    UnknownSensor {
        /// Requested index
        index: u8,
    },

    /// Registry entry exists but is a placeholder
    #[error("Sensor {name} is not implemented")]
    NotImplemented {
        /// Registry name of the placeholder
        name: &'static str,
    },

    /// The sensor needs a different kind of pin than the one assigned
    #[error("Pin {pin} cannot host a {required} sensor")]
    PinKindMismatch {
        /// Assigned pin
        pin: u8,
        /// Pin kind the sensor requires
        required: &'static str,
    },

    /// A custom calibration was offered for a sensor using a different model
    #[error("Calibration kind {offered} does not match sensor kind {expected}")]
    CalibrationKindMismatch {
        /// Kind the sensor expects
        expected: &'static str,
        /// Kind of the offered record
        offered: &'static str,
    },

    /// The input bank is full
    #[error("Input bank full ({capacity} inputs)")]
    BankFull {
        /// Bank capacity
        capacity: usize,
    },

    /// Display units index unknown or belongs to another measurement
    #[error("Units index {index} not valid for this sensor")]
    UnknownUnits {
        /// Requested units index
        index: u8,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownSensor { index } =>
                defmt::write!(fmt, "Unknown sensor {}", index),
            Self::NotImplemented { name } =>
                defmt::write!(fmt, "Sensor {} not implemented", name),
            Self::PinKindMismatch { pin, required } =>
                defmt::write!(fmt, "Pin {} cannot host {} sensor", pin, required),
            Self::CalibrationKindMismatch { expected, offered } =>
                defmt::write!(fmt, "Calibration {} != {}", offered, expected),
            Self::BankFull { capacity } =>
                defmt::write!(fmt, "Input bank full ({})", capacity),
            Self::UnknownUnits { index } =>
                defmt::write!(fmt, "Units {} invalid", index),
        }
    }
}

/// Turn a model output into a measurement result
///
/// Models signal "no real solution" with `NaN` (or an infinity from a
/// degenerate division); this maps both onto [`Fault::Undefined`].
pub fn defined(value: f32) -> MeasureResult {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Fault::Undefined)
    }
}
