//! Physical Constants and Unit Factors
//!
//! Base units inside the engine: °C, bar, V, rpm, km/h, %RH, m.

/// 0 °C expressed in kelvin.
pub const KELVIN_OFFSET: f32 = 273.15;

/// Standard sea level pressure (hPa), ISA reference.
pub const SEA_LEVEL_PRESSURE_HPA: f32 = 1013.25;

/// Pascals per bar.
pub const PA_PER_BAR: f32 = 100_000.0;

/// Pascals per hectopascal.
pub const PA_PER_HPA: f32 = 100.0;

/// Metres per second to kilometres per hour.
pub const MPS_TO_KPH: f32 = 3.6;

/// Millimetres per metre.
pub const MM_PER_M: f32 = 1000.0;

/// Scale height term of the hypsometric approximation used by BME280 (m).
pub const BAROMETRIC_SCALE_M: f32 = 44_330.0;

/// Exponent of the hypsometric approximation, 1 / 5.255.
pub const BAROMETRIC_EXPONENT: f32 = 0.1903;

/// psi per bar.
pub const PSI_PER_BAR: f32 = 14.503_77;

/// kPa per bar.
pub const KPA_PER_BAR: f32 = 100.0;

/// inHg per bar.
pub const INHG_PER_BAR: f32 = 29.529_98;

/// Miles per kilometre.
pub const MILES_PER_KM: f32 = 0.621_371;

/// Feet per metre.
pub const FEET_PER_M: f32 = 3.280_84;
