//! ADC Geometry and Analog Front-End Defaults
//!
//! Values describe the default target: a 10-bit converter referenced to 5 V,
//! reading sender resistance through a 1 kΩ bias resistor to the reference.
//! Other boards override the geometry through `PlatformConfig`.

/// Full-scale count of the default 10-bit converter.
pub const DEFAULT_ADC_MAX: u16 = 1023;

/// Reference voltage of the default converter (V).
pub const DEFAULT_AREF_VOLTAGE: f32 = 5.0;

/// Readings within this many counts of 0 or full scale are "railed".
///
/// An open circuit pulls the divider to one rail and a short pulls it to the
/// other. Three counts clears the converter's offset and gain error while
/// keeping almost all of the usable span.
pub const ADC_RAIL_MARGIN: u16 = 3;

/// Bias resistor used by the compiled-in resistive sender presets (Ω).
///
/// VDO senders span roughly 10 Ω to 3.3 kΩ, so 1 kΩ puts the useful part of
/// every curve near mid-scale.
pub const DEFAULT_BIAS_RESISTOR: f32 = 1000.0;

/// Battery divider ratio `(R1 + R2) / R2` assumed when no calibration exists.
///
/// 10 kΩ over 2 kΩ maps 30 V onto a 5 V converter.
pub const DEFAULT_VOLTAGE_DIVIDER_RATIO: f32 = 6.0;

/// Bias resistor assumed by the generic 10 kΩ NTC defaults (Ω).
pub const NTC_DEFAULT_BIAS_RESISTOR: f32 = 10_000.0;

/// First I²C address probed for a BME280.
pub const BME280_PRIMARY_ADDRESS: u8 = 0x76;

/// Second I²C address probed for a BME280.
pub const BME280_SECONDARY_ADDRESS: u8 = 0x77;

/// Pin numbers at or above this value name a bus slot, not a physical pin.
///
/// `0xF0` is bus 0, `0xF1` bus 1, and so on.
pub const BUS_PIN_BASE: u8 = 0xF0;
