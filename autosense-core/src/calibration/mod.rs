//! Calibration records
//!
//! A calibration is a tagged parameter set: [`CalibrationRecord`] carries the
//! tag and the payload together, so a record can only ever be read as the kind
//! it was built as. Sensor descriptors declare the [`CalibrationKind`] they
//! expect and the resolver refuses anything else.
//!
//! ## Sources
//!
//! ```text
//! 1. custom   InputRecord::custom_calibration, when use_custom_calibration is set
//! 2. preset   SensorDescriptor::preset, compiled in (see `presets`)
//! 3. default  the model's hard-coded parameters (not all models have one)
//! ```

pub mod presets;
pub mod resolver;

pub use resolver::{resolve, CalibrationParams, CalibrationSource, Resolved};

use crate::constants::adc::NTC_DEFAULT_BIAS_RESISTOR;
use crate::constants::frequency::DEFAULT_PULSE_TIMEOUT_MS;

/// Which conversion model a calibration parameterises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationKind {
    /// No calibration (device reports engineering units itself)
    None,
    /// Voltage span to output span
    Linear,
    /// Quadratic resistance curve, inverted
    PolynomialQuadratic,
    /// Resistance to temperature lookup table
    ThermistorTable,
    /// Steinhart-Hart coefficients
    ThermistorSteinhart,
    /// Beta-parameter NTC model
    ThermistorBeta,
    /// Resistance to pressure lookup table
    PressureTable,
    /// Resistive divider in front of the ADC
    VoltageDivider,
    /// Alternator W-phase tachometer
    Rpm,
    /// Hall-effect wheel speed
    Speed,
}

impl CalibrationKind {
    /// Short upper-case name, used in diagnostics and error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Linear => "LINEAR",
            Self::PolynomialQuadratic => "POLYNOMIAL",
            Self::ThermistorTable => "THERMISTOR_TABLE",
            Self::ThermistorSteinhart => "STEINHART",
            Self::ThermistorBeta => "BETA",
            Self::PressureTable => "PRESSURE_TABLE",
            Self::VoltageDivider => "VOLTAGE_DIVIDER",
            Self::Rpm => "RPM",
            Self::Speed => "SPEED",
        }
    }
}

/// Linear span mapping
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearCalibration {
    /// Input voltage at `output_min` (V)
    pub voltage_min: f32,
    /// Input voltage at `output_max` (V)
    pub voltage_max: f32,
    /// Output at `voltage_min`
    pub output_min: f32,
    /// Output at `voltage_max`
    pub output_max: f32,
}

impl LinearCalibration {
    /// Ratiometric 0.5 to 4.5 V sender reading 0 to 5
    pub const DEFAULT: Self = Self::new(0.5, 4.5, 0.0, 5.0);

    /// Build from spans
    pub const fn new(voltage_min: f32, voltage_max: f32, output_min: f32, output_max: f32) -> Self {
        Self { voltage_min, voltage_max, output_min, output_max }
    }
}

/// Quadratic resistance curve `R = a·P² + b·P + c`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolynomialCalibration {
    /// Bias resistor of the divider (Ω)
    pub bias_resistor: f32,
    /// Quadratic coefficient
    pub a: f32,
    /// Linear coefficient
    pub b: f32,
    /// Constant term (Ω)
    pub c: f32,
}

/// Paired lookup table
///
/// `resistance` must be strictly monotonic. Thermistor tables descend (NTC),
/// pressure tables ascend.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableCalibration {
    /// Bias resistor of the divider (Ω)
    pub bias_resistor: f32,
    /// Resistance knots (Ω)
    pub resistance: &'static [f32],
    /// Output value at each knot
    pub values: &'static [f32],
}

impl TableCalibration {
    /// Number of usable knots
    pub fn len(&self) -> usize {
        self.resistance.len().min(self.values.len())
    }

    /// Table has no knots
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Steinhart-Hart coefficients, `1/T = A + B·ln R + C·(ln R)³`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteinhartCalibration {
    /// Bias resistor of the divider (Ω)
    pub bias_resistor: f32,
    /// A coefficient
    pub a: f32,
    /// B coefficient
    pub b: f32,
    /// C coefficient
    pub c: f32,
}

impl SteinhartCalibration {
    /// Generic 10 kΩ NTC
    pub const DEFAULT: Self = Self {
        bias_resistor: NTC_DEFAULT_BIAS_RESISTOR,
        a: 1.129241e-3,
        b: 2.341077e-4,
        c: 8.775468e-8,
    };
}

/// Beta-parameter NTC
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaCalibration {
    /// Bias resistor of the divider (Ω)
    pub bias_resistor: f32,
    /// Beta (K)
    pub beta: f32,
    /// Resistance at `t0` (Ω)
    pub r0: f32,
    /// Reference temperature (°C)
    pub t0: f32,
}

impl BetaCalibration {
    /// Generic 10 kΩ, β = 3950 NTC
    pub const DEFAULT: Self = Self {
        bias_resistor: NTC_DEFAULT_BIAS_RESISTOR,
        beta: 3950.0,
        r0: 10_000.0,
        t0: 25.0,
    };
}

/// Resistive divider ahead of the ADC
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DividerCalibration {
    /// Upper resistor (Ω)
    pub r1: f32,
    /// Lower resistor (Ω)
    pub r2: f32,
    /// Multiplicative trim
    pub correction: f32,
    /// Additive trim (V)
    pub offset: f32,
}

impl DividerCalibration {
    /// Divider with `R2 = 1 kΩ` and the given `(R1 + R2) / R2` ratio
    pub fn from_ratio(ratio: f32) -> Self {
        let r2 = 1000.0;
        Self {
            r1: (ratio - 1.0) * r2,
            r2,
            correction: 1.0,
            offset: 0.0,
        }
    }
}

/// Alternator W-phase tachometer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpmCalibration {
    /// Alternator magnetic poles
    pub poles: u8,
    /// Crank pulley diameter over alternator pulley diameter
    pub pulley_ratio: f32,
    /// Final trim
    pub calibration_mult: f32,
    /// No pulse for this long reads as stopped (ms)
    pub timeout_ms: u16,
    /// Lowest plausible engine speed
    pub min_rpm: u16,
    /// Highest plausible engine speed
    pub max_rpm: u16,
}

impl RpmCalibration {
    /// 12-pole alternator on a 3:1 pulley
    pub const DEFAULT: Self = Self {
        poles: 12,
        pulley_ratio: 3.0,
        calibration_mult: 1.0,
        timeout_ms: DEFAULT_PULSE_TIMEOUT_MS,
        min_rpm: 100,
        max_rpm: 10_000,
    };

    /// W-phase pulses per crank revolution
    pub fn pulses_per_rev(&self) -> f32 {
        (self.poles as f32 / 2.0) * self.pulley_ratio
    }
}

/// Hall-effect wheel or driveshaft speed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedCalibration {
    /// Trigger teeth per shaft revolution
    pub pulses_per_rev: u8,
    /// Rolling circumference (mm)
    pub tire_circumference_mm: u16,
    /// Shaft revolutions per wheel revolution
    pub final_drive_ratio: f32,
    /// Final trim
    pub calibration_mult: f32,
    /// No pulse for this long reads as stopped (ms)
    pub timeout_ms: u16,
    /// Highest plausible road speed (km/h)
    pub max_speed_kph: u16,
}

impl SpeedCalibration {
    /// 100-tooth trigger, 2 m tyre, 3.73 final drive
    pub const DEFAULT: Self = Self {
        pulses_per_rev: 100,
        tire_circumference_mm: 2000,
        final_drive_ratio: 3.73,
        calibration_mult: 1.0,
        timeout_ms: DEFAULT_PULSE_TIMEOUT_MS,
        max_speed_kph: 300,
    };
}

/// A calibration parameter set together with its kind
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CalibrationRecord {
    /// See [`LinearCalibration`]
    Linear(LinearCalibration),
    /// See [`PolynomialCalibration`]
    PolynomialQuadratic(PolynomialCalibration),
    /// Descending resistance to temperature table
    ThermistorTable(TableCalibration),
    /// Ascending resistance to pressure table
    PressureTable(TableCalibration),
    /// See [`SteinhartCalibration`]
    ThermistorSteinhart(SteinhartCalibration),
    /// See [`BetaCalibration`]
    ThermistorBeta(BetaCalibration),
    /// See [`DividerCalibration`]
    VoltageDivider(DividerCalibration),
    /// See [`RpmCalibration`]
    Rpm(RpmCalibration),
    /// See [`SpeedCalibration`]
    Speed(SpeedCalibration),
}

impl CalibrationRecord {
    /// The record's tag
    pub const fn kind(&self) -> CalibrationKind {
        match self {
            Self::Linear(_) => CalibrationKind::Linear,
            Self::PolynomialQuadratic(_) => CalibrationKind::PolynomialQuadratic,
            Self::ThermistorTable(_) => CalibrationKind::ThermistorTable,
            Self::PressureTable(_) => CalibrationKind::PressureTable,
            Self::ThermistorSteinhart(_) => CalibrationKind::ThermistorSteinhart,
            Self::ThermistorBeta(_) => CalibrationKind::ThermistorBeta,
            Self::VoltageDivider(_) => CalibrationKind::VoltageDivider,
            Self::Rpm(_) => CalibrationKind::Rpm,
            Self::Speed(_) => CalibrationKind::Speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_kind_matches_variant() {
        let rec = CalibrationRecord::Rpm(RpmCalibration::DEFAULT);
        assert_eq!(rec.kind(), CalibrationKind::Rpm);

        let table = CalibrationRecord::PressureTable(TableCalibration {
            bias_resistor: 1000.0,
            resistance: &[10.0, 20.0],
            values: &[0.0, 1.0],
        });
        assert_eq!(table.kind(), CalibrationKind::PressureTable);
    }

    #[test]
    fn divider_from_ratio() {
        let cal = DividerCalibration::from_ratio(6.0);
        assert_eq!(cal.r2, 1000.0);
        assert_eq!(cal.r1, 5000.0);
        assert_eq!((cal.r1 + cal.r2) / cal.r2, 6.0);
    }

    #[test]
    fn default_alternator_has_eighteen_pulses_per_rev() {
        assert_eq!(RpmCalibration::DEFAULT.pulses_per_rev(), 18.0);
    }

    #[test]
    fn mismatched_table_lengths_use_shorter() {
        let t = TableCalibration {
            bias_resistor: 1000.0,
            resistance: &[1.0, 2.0, 3.0],
            values: &[1.0, 2.0],
        };
        assert_eq!(t.len(), 2);
        assert!(!t.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn scalar_records_round_trip_through_json() {
        let cal = SpeedCalibration::DEFAULT;
        let json = serde_json::to_string(&cal).unwrap();
        let back: SpeedCalibration = serde_json::from_str(&json).unwrap();
        assert_eq!(cal, back);

        let rec = serde_json::to_string(&CalibrationRecord::Linear(LinearCalibration::DEFAULT)).unwrap();
        assert!(rec.contains("Linear"));
    }
}
