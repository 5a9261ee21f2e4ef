//! The sensor catalog
//!
//! Grouped by technology: placeholder, thermocouples, thermistors and
//! temperature senders, pressure, voltage, frequency, environmental, digital.
//! Stored configurations refer to sensors by name hash, not by index.

use super::{MeasurementKind as M, PinKind, SensorDescriptor as S};
use crate::calibration::{presets, CalibrationKind as K};
use crate::sensors::Driver as D;

/// Number of catalog entries, including the placeholder
pub const SENSOR_COUNT: usize = 29;

/// Every supported sensor, indexed by `InputRecord::sensor_index`
pub static SENSOR_CATALOG: [S; SENSOR_COUNT] = [
    S::placeholder("NONE"),
    // ===== THERMOCOUPLES =====
    S::new("MAX6675", "K-Type Thermocouple (0-1024°C)", M::Temperature, D::Max6675)
        .interval(250)
        .range(0.0, 1024.0)
        .pin(PinKind::Digital),
    S::new("MAX31855", "K-Type Thermocouple (-270-1372°C)", M::Temperature, D::Max31855)
        .interval(100)
        .range(-200.0, 1350.0)
        .pin(PinKind::Digital),
    // ===== THERMISTORS =====
    S::new("VDO_120C_TABLE", "VDO 120C (table)", M::Temperature, D::ThermistorTable)
        .calibration(K::ThermistorTable, Some(&presets::VDO_120C_TABLE))
        .range(-40.0, 150.0),
    S::new("VDO_150C_TABLE", "VDO 150C (table)", M::Temperature, D::ThermistorTable)
        .calibration(K::ThermistorTable, Some(&presets::VDO_150C_TABLE))
        .range(-40.0, 180.0),
    S::new("VDO_120C_STEINHART", "VDO 120C (Steinhart-Hart)", M::Temperature, D::ThermistorSteinhart)
        .calibration(K::ThermistorSteinhart, Some(&presets::VDO_120C_STEINHART))
        .range(-40.0, 150.0),
    S::new("VDO_150C_STEINHART", "VDO 150C (Steinhart-Hart)", M::Temperature, D::ThermistorSteinhart)
        .calibration(K::ThermistorSteinhart, Some(&presets::VDO_150C_STEINHART))
        .range(-40.0, 180.0),
    S::new("GENERIC_NTC_TABLE", "Generic NTC (custom table)", M::Temperature, D::ThermistorTable)
        .calibration(K::ThermistorTable, None)
        .range(-40.0, 150.0),
    S::new("GENERIC_NTC_STEINHART", "Generic NTC (custom Steinhart-Hart)", M::Temperature, D::ThermistorSteinhart)
        .calibration(K::ThermistorSteinhart, None)
        .range(-40.0, 150.0),
    S::new("GENERIC_NTC_BETA", "Generic NTC (custom Beta equation)", M::Temperature, D::ThermistorBeta)
        .calibration(K::ThermistorBeta, None)
        .range(-40.0, 150.0),
    S::new("GENERIC_TEMP_LINEAR", "0.5-4.5V linear (-40 to 150°C)", M::Temperature, D::Linear)
        .calibration(K::Linear, Some(&presets::GENERIC_TEMP_LINEAR))
        .range(-40.0, 150.0),
    // ===== PRESSURE =====
    S::new("GENERIC_BOOST", "0.5-4.5V linear (0-5 bar)", M::Pressure, D::Linear)
        .calibration(K::Linear, Some(&presets::GENERIC_BOOST_LINEAR))
        .range(0.0, 5.0),
    S::new("GENERIC_PRESSURE_150PSI", "0.5-4.5V linear (0-150 PSI / 10 bar)", M::Pressure, D::Linear)
        .calibration(K::Linear, Some(&presets::GENERIC_PRESSURE_150PSI))
        .range(0.0, 10.34),
    S::new("AEM_30_2130_150", "AEM 150 PSI (0-150 PSI / 10 bar)", M::Pressure, D::Linear)
        .calibration(K::Linear, Some(&presets::AEM_30_2130_150))
        .range(0.0, 10.34),
    S::new("MPX4250AP", "Freescale/NXP (20-250 kPa)", M::Pressure, D::Linear)
        .calibration(K::Linear, Some(&presets::MPX4250AP))
        .range(0.2, 2.5),
    S::new("MPX5700AP", "Freescale/NXP (15-700 kPa)", M::Pressure, D::Linear)
        .calibration(K::Linear, Some(&presets::MPX5700AP))
        .range(0.15, 7.0),
    S::new("VDO_2BAR_CURVE", "VDO 2 Bar (curve fit)", M::Pressure, D::PressurePolynomial)
        .calibration(K::PolynomialQuadratic, Some(&presets::VDO_2BAR_POLYNOMIAL))
        .range(0.0, 2.0),
    S::new("VDO_5BAR_CURVE", "VDO 5 Bar (curve fit)", M::Pressure, D::PressurePolynomial)
        .calibration(K::PolynomialQuadratic, Some(&presets::VDO_5BAR_POLYNOMIAL))
        .range(0.0, 5.0),
    S::new("VDO_2BAR_TABLE", "VDO 2 Bar (table)", M::Pressure, D::PressureTable)
        .calibration(K::PressureTable, Some(&presets::VDO_2BAR_TABLE))
        .range(0.0, 2.0),
    S::new("VDO_5BAR_TABLE", "VDO 5 Bar (table)", M::Pressure, D::PressureTable)
        .calibration(K::PressureTable, Some(&presets::VDO_5BAR_TABLE))
        .range(0.0, 5.0),
    // ===== VOLTAGE =====
    S::new("VOLTAGE_DIVIDER", "Battery voltage (12V divider)", M::Voltage, D::VoltageDivider)
        .calibration(K::VoltageDivider, None)
        .range(0.0, 30.0),
    S::new("VOLTAGE_DIRECT", "Direct voltage (0-AREF)", M::Voltage, D::VoltageDirect)
        .range(0.0, 5.0),
    // ===== FREQUENCY =====
    S::new("W_PHASE_RPM", "W-phase alternator RPM", M::Rpm, D::WPhaseRpm)
        .calibration(K::Rpm, Some(&presets::W_PHASE_RPM))
        .range(0.0, 10_000.0)
        .pin(PinKind::Digital),
    S::new("HALL_SPEED", "Hall Effect Speed Sensor", M::Speed, D::HallSpeed)
        .calibration(K::Speed, Some(&presets::HALL_SPEED))
        .range(0.0, 300.0)
        .pin(PinKind::Digital),
    // ===== ENVIRONMENTAL =====
    S::new("BME280_TEMP", "BME280 temperature (I2C)", M::Temperature, D::Bme280Temperature)
        .range(-40.0, 85.0)
        .pin(PinKind::Bus),
    S::new("BME280_PRESSURE", "BME280 barometric pressure (I2C)", M::Pressure, D::Bme280Pressure)
        .range(0.3, 1.1)
        .pin(PinKind::Bus),
    S::new("BME280_HUMIDITY", "BME280 relative humidity (I2C)", M::Humidity, D::Bme280Humidity)
        .range(0.0, 100.0)
        .pin(PinKind::Bus),
    S::new("BME280_ELEVATION", "BME280 altitude (I2C)", M::Elevation, D::Bme280Elevation)
        .range(-500.0, 9000.0)
        .pin(PinKind::Bus),
    // ===== DIGITAL =====
    S::new("FLOAT_SWITCH", "Float/level switch (digital)", M::Digital, D::FloatSwitch)
        .range(0.0, 1.0)
        .pin(PinKind::Digital),
];
