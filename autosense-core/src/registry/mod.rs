//! Sensor descriptor registry
//!
//! The catalog of every supported sensor, compiled in as one `static` table
//! and addressed by index. An input record stores only the index; everything
//! else about the sensor (what it measures, how it is calibrated, how it is
//! read, what values are plausible) comes from its descriptor.
//!
//! Index 0 is a placeholder meaning "no sensor". Entries without a label are
//! not implemented, and every validating lookup treats them as absent.
//!
//! ```
//! use autosense_core::registry::{self, MeasurementKind};
//!
//! let idx = registry::index_by_name("vdo_5bar_curve");
//! let info = registry::sensor_info(idx).unwrap();
//! assert_eq!(info.measurement, MeasurementKind::Pressure);
//! assert_eq!(registry::index_by_name("NO_SUCH_SENSOR"), 0);
//! ```

pub mod catalog;
pub mod category;
pub mod hash;

pub use catalog::{SENSOR_CATALOG, SENSOR_COUNT};
pub use category::{
    category_of, count_in_category, index_by_category_and_name, measurement_filter, Category,
};
pub use hash::djb2;

use crate::calibration::{CalibrationKind, CalibrationRecord};
use crate::constants::DEFAULT_READ_INTERVAL_MS;
use crate::sensors::Driver;

/// Physical quantity a sensor reports, in base units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementKind {
    /// °C
    Temperature,
    /// bar
    Pressure,
    /// V
    Voltage,
    /// Engine revolutions per minute
    Rpm,
    /// km/h
    Speed,
    /// % relative humidity
    Humidity,
    /// m above sea level
    Elevation,
    /// 0.0 or 1.0
    Digital,
}

impl MeasurementKind {
    /// Upper-case name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "TEMPERATURE",
            Self::Pressure => "PRESSURE",
            Self::Voltage => "VOLTAGE",
            Self::Rpm => "RPM",
            Self::Speed => "SPEED",
            Self::Humidity => "HUMIDITY",
            Self::Elevation => "ELEVATION",
            Self::Digital => "DIGITAL",
        }
    }
}

/// Kind of pin a sensor must be wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinKind {
    /// ADC-capable pin
    Analog,
    /// Any GPIO (chip select, pulse input, switch)
    Digital,
    /// Virtual pin naming a bus slot (I²C)
    Bus,
}

impl PinKind {
    /// Lower-case name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analog => "analog",
            Self::Digital => "digital",
            Self::Bus => "bus",
        }
    }
}

/// Everything the engine knows about one sensor model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorDescriptor {
    /// Unique upper-case key
    pub name: &'static str,
    /// Human readable name, `None` for placeholders
    pub label: Option<&'static str>,
    /// What the sensor measures
    pub measurement: MeasurementKind,
    /// Calibration model the sensor expects
    pub calibration: CalibrationKind,
    /// Compiled-in calibration, if any
    pub preset: Option<&'static CalibrationRecord>,
    /// Read and init algorithm
    pub driver: Driver,
    /// Minimum time between reads (ms)
    pub min_read_interval_ms: u16,
    /// Lowest plausible value in base units
    pub min_value: f32,
    /// Highest plausible value in base units
    pub max_value: f32,
    /// `djb2(name)`
    pub name_hash: u16,
    /// Pin the sensor must be wired to
    #[cfg(not(feature = "static-config"))]
    pub pin_kind: PinKind,
}

impl SensorDescriptor {
    /// Uncalibrated analog sensor with the default read interval and an open range
    pub const fn new(
        name: &'static str,
        label: &'static str,
        measurement: MeasurementKind,
        driver: Driver,
    ) -> Self {
        Self {
            name,
            label: Some(label),
            measurement,
            calibration: CalibrationKind::None,
            preset: None,
            driver,
            min_read_interval_ms: DEFAULT_READ_INTERVAL_MS,
            min_value: f32::NEG_INFINITY,
            max_value: f32::INFINITY,
            name_hash: djb2(name),
            #[cfg(not(feature = "static-config"))]
            pin_kind: PinKind::Analog,
        }
    }

    /// Unlabeled entry that no input can be configured with
    pub const fn placeholder(name: &'static str) -> Self {
        let mut d = Self::new(name, "", MeasurementKind::Temperature, Driver::None);
        d.label = None;
        d.min_read_interval_ms = 0;
        d.min_value = 0.0;
        d.max_value = 0.0;
        d
    }

    /// Set the calibration kind and compiled-in preset
    pub const fn calibration(
        mut self,
        kind: CalibrationKind,
        preset: Option<&'static CalibrationRecord>,
    ) -> Self {
        self.calibration = kind;
        self.preset = preset;
        self
    }

    /// Set the minimum read interval
    pub const fn interval(mut self, ms: u16) -> Self {
        self.min_read_interval_ms = ms;
        self
    }

    /// Set the plausible value range
    pub const fn range(mut self, min: f32, max: f32) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Set the required pin kind
    #[cfg(not(feature = "static-config"))]
    pub const fn pin(mut self, kind: PinKind) -> Self {
        self.pin_kind = kind;
        self
    }

    /// Pin kinds are not tracked with fixed wiring
    #[cfg(feature = "static-config")]
    pub const fn pin(self, _kind: PinKind) -> Self {
        self
    }

    /// Whether the entry can be assigned to an input
    pub const fn is_implemented(&self) -> bool {
        self.label.is_some()
    }

    /// Whether `value` lies in the declared range
    pub fn in_range(&self, value: f32) -> bool {
        value >= self.min_value && value <= self.max_value
    }
}

/// Raw catalog access without the implemented check
///
/// Used on the read path, where the index was validated at configuration time.
#[inline]
pub fn descriptor(index: u8) -> Option<&'static SensorDescriptor> {
    SENSOR_CATALOG.get(index as usize)
}

/// Descriptor of an implemented sensor
pub fn sensor_info(index: u8) -> Option<&'static SensorDescriptor> {
    descriptor(index).filter(|d| d.is_implemented())
}

/// Index of the sensor whose name hashes to `hash`, 0 if none
pub fn index_by_hash(hash: u16) -> u8 {
    SENSOR_CATALOG
        .iter()
        .position(|d| d.name_hash == hash)
        .map_or(0, |i| i as u8)
}

/// Index of the sensor called `name` (case-insensitive), 0 if none
pub fn index_by_name(name: &str) -> u8 {
    index_by_hash(djb2(name))
}

/// Registry name of a sensor, `None` for an unknown index
pub fn name_of(index: u8) -> Option<&'static str> {
    descriptor(index).map(|d| d.name)
}

/// Measurement kind of an implemented sensor
pub fn measurement_of(index: u8) -> Option<MeasurementKind> {
    sensor_info(index).map(|d| d.measurement)
}

/// Every implemented sensor with its index, placeholder excluded
pub fn implemented() -> impl Iterator<Item = (u8, &'static SensorDescriptor)> {
    SENSOR_CATALOG
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, d)| d.is_implemented())
        .map(|(i, d)| (i as u8, d))
}

/// Number of implemented sensors measuring `kind`
pub fn count_by_measurement(kind: MeasurementKind) -> u8 {
    implemented().filter(|(_, d)| d.measurement == kind).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_not_implemented() {
        assert!(descriptor(0).is_some());
        assert!(sensor_info(0).is_none());
        assert_eq!(name_of(0), Some("NONE"));
        assert_eq!(measurement_of(0), None);
    }

    #[test]
    fn out_of_range_index_is_none() {
        assert!(descriptor(SENSOR_COUNT as u8).is_none());
        assert!(sensor_info(250).is_none());
        assert_eq!(name_of(250), None);
    }

    #[test]
    fn unknown_hash_maps_to_zero() {
        assert_eq!(index_by_hash(0x0000), 0);
        assert_eq!(index_by_name("NOT_A_SENSOR"), 0);
    }

    #[test]
    fn every_name_round_trips() {
        for (i, d) in SENSOR_CATALOG.iter().enumerate() {
            assert_eq!(index_by_name(d.name) as usize, i, "{}", d.name);
            assert_eq!(d.name_hash, djb2(d.name));
        }
    }

    #[test]
    fn hashes_are_unique() {
        for (i, a) in SENSOR_CATALOG.iter().enumerate() {
            for b in &SENSOR_CATALOG[i + 1..] {
                assert_ne!(a.name_hash, b.name_hash, "{} vs {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn only_placeholder_lacks_label() {
        assert_eq!(implemented().count(), SENSOR_COUNT - 1);
    }

    #[test]
    fn measurement_counts_cover_catalog() {
        use MeasurementKind::*;
        let total: u8 = [Temperature, Pressure, Voltage, Rpm, Speed, Humidity, Elevation, Digital]
            .iter()
            .map(|k| count_by_measurement(*k))
            .sum();
        assert_eq!(total as usize, SENSOR_COUNT - 1);
        assert_eq!(count_by_measurement(Rpm), 1);
        assert_eq!(count_by_measurement(Humidity), 1);
    }

    #[test]
    fn ranges_are_ordered() {
        for (_, d) in implemented() {
            assert!(d.min_value < d.max_value, "{}", d.name);
            assert!(d.in_range(d.min_value) && d.in_range(d.max_value));
        }
    }
}
