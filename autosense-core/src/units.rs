//! Display units
//!
//! Inputs always hold values in base units (°C, bar, V, rpm, km/h, %, m).
//! Display units are a linear view on top: `display = base · factor + offset`.
//! `NaN` passes through both directions unchanged.

use crate::constants::physics::{
    FEET_PER_M, INHG_PER_BAR, KPA_PER_BAR, MILES_PER_KM, PSI_PER_BAR,
};
use crate::registry::MeasurementKind;

/// One display unit
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitsInfo {
    /// Upper-case key
    pub name: &'static str,
    /// Short symbol for displays
    pub symbol: &'static str,
    /// Measurement these units apply to
    pub measurement: MeasurementKind,
    /// Multiplier from base units
    pub factor: f32,
    /// Offset added after scaling
    pub offset: f32,
}

const fn unit(
    name: &'static str,
    symbol: &'static str,
    measurement: MeasurementKind,
    factor: f32,
    offset: f32,
) -> UnitsInfo {
    UnitsInfo { name, symbol, measurement, factor, offset }
}

/// Every display unit, indexed by `InputRecord::units_index`
pub static UNITS: [UnitsInfo; 14] = [
    unit("CELSIUS", "C", MeasurementKind::Temperature, 1.0, 0.0),
    unit("FAHRENHEIT", "F", MeasurementKind::Temperature, 1.8, 32.0),
    unit("BAR", "bar", MeasurementKind::Pressure, 1.0, 0.0),
    unit("PSI", "psi", MeasurementKind::Pressure, PSI_PER_BAR, 0.0),
    unit("KPA", "kPa", MeasurementKind::Pressure, KPA_PER_BAR, 0.0),
    unit("INHG", "inHg", MeasurementKind::Pressure, INHG_PER_BAR, 0.0),
    unit("VOLTS", "V", MeasurementKind::Voltage, 1.0, 0.0),
    unit("RPM", "rpm", MeasurementKind::Rpm, 1.0, 0.0),
    unit("KPH", "km/h", MeasurementKind::Speed, 1.0, 0.0),
    unit("MPH", "mph", MeasurementKind::Speed, MILES_PER_KM, 0.0),
    unit("PERCENT", "%", MeasurementKind::Humidity, 1.0, 0.0),
    unit("METERS", "m", MeasurementKind::Elevation, 1.0, 0.0),
    unit("FEET", "ft", MeasurementKind::Elevation, FEET_PER_M, 0.0),
    unit("STATE", "", MeasurementKind::Digital, 1.0, 0.0),
];

/// Units at `index`
pub fn units(index: u8) -> Option<&'static UnitsInfo> {
    UNITS.get(index as usize)
}

/// Index of the units called `name` (case-insensitive)
pub fn units_by_name(name: &str) -> Option<u8> {
    UNITS
        .iter()
        .position(|u| u.name.eq_ignore_ascii_case(name))
        .map(|i| i as u8)
}

/// Base units of a measurement kind
pub fn default_units_for(kind: MeasurementKind) -> u8 {
    UNITS
        .iter()
        .position(|u| u.measurement == kind)
        .map_or(0, |i| i as u8)
}

/// Convert a base-unit value for display
pub fn convert_from_base(value: f32, index: u8) -> f32 {
    match units(index) {
        Some(u) => value * u.factor + u.offset,
        None => value,
    }
}

/// Convert a displayed value back to base units
pub fn convert_to_base(value: f32, index: u8) -> f32 {
    match units(index) {
        Some(u) if u.factor != 0.0 => (value - u.offset) / u.factor,
        _ => value,
    }
}
