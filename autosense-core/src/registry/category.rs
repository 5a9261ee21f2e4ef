//! Sensor categories
//!
//! Categories group the catalog by technology for two-step selection (pick a
//! category, then a sensor in it). They are not stored anywhere: each
//! sensor's category is derived from its measurement, calibration and pin
//! kind, first rule wins:
//!
//! ```text
//! pin kind Bus                             → Environmental
//! measures Digital                         → Digital
//! measures Rpm or Speed                    → Frequency
//! measures Voltage                         → Voltage
//! measures Humidity or Elevation           → Environmental
//! measures Pressure                        → Pressure
//! Temperature, no calibration, Digital pin → Thermocouple
//! Temperature otherwise                    → Thermistor
//! ```
//!
//! With `static-config` pin kinds do not exist, so the Bus rule is skipped and
//! every uncalibrated temperature sensor is a thermocouple.

use super::{djb2, implemented, MeasurementKind, SensorDescriptor, SENSOR_CATALOG};
use crate::calibration::CalibrationKind;
#[cfg(not(feature = "static-config"))]
use super::PinKind;

/// Technology group of a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    /// SPI thermocouple amplifiers
    Thermocouple,
    /// NTC thermistors and linear temperature senders
    Thermistor,
    /// Pressure senders
    Pressure,
    /// Voltage measurement
    Voltage,
    /// RPM and road speed
    Frequency,
    /// Bus-attached environmental sensors
    Environmental,
    /// Switches
    Digital,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Self::Thermocouple,
        Self::Thermistor,
        Self::Pressure,
        Self::Voltage,
        Self::Frequency,
        Self::Environmental,
        Self::Digital,
    ];

    /// Upper-case key
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thermocouple => "THERMOCOUPLE",
            Self::Thermistor => "THERMISTOR",
            Self::Pressure => "PRESSURE",
            Self::Voltage => "VOLTAGE",
            Self::Frequency => "FREQUENCY",
            Self::Environmental => "ENVIRONMENTAL",
            Self::Digital => "DIGITAL",
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thermocouple => "K-Type Thermocouples",
            Self::Thermistor => "Thermistor Temperature Sensors",
            Self::Pressure => "Pressure Sensors",
            Self::Voltage => "Voltage Sensors",
            Self::Frequency => "RPM and Speed Sensors",
            Self::Environmental => "Environmental Sensors",
            Self::Digital => "Digital Input Sensors",
        }
    }

    /// `djb2(name())`
    pub const fn name_hash(self) -> u16 {
        djb2(self.name())
    }

    /// Category by name or alias, case-insensitive
    ///
    /// Aliases: `NTC` → Thermistor, `TC` → Thermocouple, `RPM` and `SPEED` →
    /// Frequency.
    pub fn from_name(name: &str) -> Option<Self> {
        const NTC: u16 = djb2("NTC");
        const TC: u16 = djb2("TC");
        const RPM: u16 = djb2("RPM");
        const SPEED: u16 = djb2("SPEED");

        let hash = djb2(name);
        if let Some(cat) = Self::ALL.iter().find(|c| c.name_hash() == hash) {
            return Some(*cat);
        }
        match hash {
            NTC => Some(Self::Thermistor),
            TC => Some(Self::Thermocouple),
            RPM | SPEED => Some(Self::Frequency),
            _ => None,
        }
    }
}

/// Virtual category naming a measurement rather than a technology
///
/// `TEMPERATURE` spans thermocouples, thermistors and the BME280, `PRESSURE`
/// spans senders and the barometer. Other measurement names collide with a
/// real category and resolve through [`Category::from_name`] first.
pub fn measurement_filter(name: &str) -> Option<MeasurementKind> {
    const TEMPERATURE: u16 = djb2("TEMPERATURE");
    const PRESSURE: u16 = djb2("PRESSURE");

    match djb2(name) {
        TEMPERATURE => Some(MeasurementKind::Temperature),
        PRESSURE => Some(MeasurementKind::Pressure),
        _ => None,
    }
}

fn derive(d: &SensorDescriptor) -> Category {
    if bus_pin(d) {
        return Category::Environmental;
    }

    match d.measurement {
        MeasurementKind::Digital => Category::Digital,
        MeasurementKind::Rpm | MeasurementKind::Speed => Category::Frequency,
        MeasurementKind::Voltage => Category::Voltage,
        MeasurementKind::Humidity | MeasurementKind::Elevation => Category::Environmental,
        MeasurementKind::Pressure => Category::Pressure,
        MeasurementKind::Temperature => {
            if d.calibration == CalibrationKind::None && digital_pin(d) {
                Category::Thermocouple
            } else {
                Category::Thermistor
            }
        }
    }
}

#[cfg(not(feature = "static-config"))]
fn bus_pin(d: &SensorDescriptor) -> bool {
    d.pin_kind == PinKind::Bus
}

#[cfg(feature = "static-config")]
fn bus_pin(_d: &SensorDescriptor) -> bool {
    false
}

#[cfg(not(feature = "static-config"))]
fn digital_pin(d: &SensorDescriptor) -> bool {
    d.pin_kind == PinKind::Digital
}

#[cfg(feature = "static-config")]
fn digital_pin(_d: &SensorDescriptor) -> bool {
    true
}

/// Category of the sensor at `index`
///
/// Unknown indices report `Thermocouple`, the first category.
pub fn category_of(index: u8) -> Category {
    SENSOR_CATALOG
        .get(index as usize)
        .map_or(Category::Thermocouple, derive)
}

/// Number of implemented sensors in `category`
pub fn count_in_category(category: Category) -> u8 {
    implemented().filter(|(_, d)| derive(d) == category).count() as u8
}

/// Index of the sensor called `name` within `category`, 0 if none
pub fn index_by_category_and_name(category: Category, name: &str) -> u8 {
    let hash = djb2(name);
    implemented()
        .find(|(_, d)| d.name_hash == hash && derive(d) == category)
        .map_or(0, |(i, _)| i)
}
