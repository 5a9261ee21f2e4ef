//! Sensor drivers
//!
//! [`Driver`] names the read algorithm of a catalog entry. Each variant knows
//! how to prepare its pin once (`init`) and how to turn one hardware
//! interaction into a value or a [`Fault`] (`read`). Drivers never write the
//! input's value; the engine does that after the range check.
//!
//! ```text
//! analog         ADC → resistance or voltage → model
//! thermocouple   SPI frame → °C
//! frequency      pulse counter → rpm, km/h
//! environmental  I²C device → °C, bar, %, m
//! digital        pin level → 0 / 1
//! ```

pub mod analog;
pub mod digital;
pub mod environmental;
pub mod frequency;
pub mod thermocouple;

pub use environmental::EnvironmentalState;

use crate::engine::SensorEngine;
use crate::errors::{Fault, MeasureResult};
use crate::frequency::PulseChannel;
use crate::hal::Board;
use crate::input::InputRecord;
use crate::registry::SensorDescriptor;

/// Read algorithm of a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Driver {
    /// Placeholder, never reads
    None,
    /// MAX6675 K-type amplifier, 16-bit SPI frame
    Max6675,
    /// MAX31855 K-type amplifier, 32-bit SPI frame
    Max31855,
    /// Resistive sender through a descending table
    ThermistorTable,
    /// Resistive sender through Steinhart-Hart
    ThermistorSteinhart,
    /// Resistive sender through the Beta equation
    ThermistorBeta,
    /// Ratiometric voltage sender
    Linear,
    /// Resistive pressure sender through a quadratic curve
    PressurePolynomial,
    /// Resistive pressure sender through an ascending table
    PressureTable,
    /// Rail voltage behind a divider
    VoltageDivider,
    /// Pin voltage
    VoltageDirect,
    /// Alternator W-phase tachometer
    WPhaseRpm,
    /// Hall-effect speed sender
    HallSpeed,
    /// BME280 temperature
    Bme280Temperature,
    /// BME280 barometric pressure
    Bme280Pressure,
    /// BME280 relative humidity
    Bme280Humidity,
    /// BME280 pressure altitude
    Bme280Elevation,
    /// Level or float switch
    FloatSwitch,
}

impl Driver {
    /// One-time pin preparation
    pub fn init<B: Board>(self, input: &InputRecord, board: &mut B) {
        match self {
            Self::Max6675 | Self::Max31855 => thermocouple::init_chip_select(input.pin, board),
            Self::WPhaseRpm => frequency::init_pulse_input(input.pin, PulseChannel::Rpm, board),
            Self::HallSpeed => frequency::init_pulse_input(input.pin, PulseChannel::Speed, board),
            Self::FloatSwitch => digital::init_float_switch(input.pin, board),
            _ => {}
        }
    }

    /// One measurement
    pub fn read<B: Board>(
        self,
        engine: &mut SensorEngine,
        input: &mut InputRecord,
        descriptor: &SensorDescriptor,
        board: &mut B,
    ) -> MeasureResult {
        let platform = &engine.platform;
        match self {
            Self::None => Err(Fault::DeviceAbsent { reason: "no sensor assigned" }),
            Self::Max6675 => thermocouple::read_max6675(input.pin, board),
            Self::Max31855 => thermocouple::read_max31855(input.pin, board),
            Self::ThermistorTable | Self::PressureTable => {
                analog::read_table(input, descriptor, platform, board)
            }
            Self::ThermistorSteinhart => analog::read_steinhart(input, descriptor, platform, board),
            Self::ThermistorBeta => analog::read_beta(input, descriptor, platform, board),
            Self::Linear => analog::read_linear(input, descriptor, platform, board),
            Self::PressurePolynomial => analog::read_polynomial(input, descriptor, platform, board),
            Self::VoltageDivider => analog::read_divider(input, descriptor, platform, board),
            Self::VoltageDirect => analog::read_direct(input, platform, board),
            Self::WPhaseRpm => {
                let counter = engine.counter(PulseChannel::Rpm);
                frequency::read_rpm(input, descriptor, &engine.platform, counter, board)
            }
            Self::HallSpeed => {
                let counter = engine.counter(PulseChannel::Speed);
                frequency::read_speed(input, descriptor, &engine.platform, counter, board)
            }
            Self::Bme280Temperature => engine.environmental.temperature(board),
            Self::Bme280Pressure => engine.environmental.pressure_bar(board),
            Self::Bme280Humidity => engine.environmental.humidity(board),
            Self::Bme280Elevation => {
                let sea_level = engine.platform.sea_level_pressure_hpa;
                engine.environmental.elevation(sea_level, board)
            }
            Self::FloatSwitch => Ok(digital::read_float_switch(input.pin, &engine.platform, board)),
        }
    }
}
