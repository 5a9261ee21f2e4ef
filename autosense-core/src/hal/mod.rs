//! Hardware capability traits
//!
//! The engine never touches registers. Every sensor read goes through one of
//! these narrow capabilities, and a board support crate implements the ones
//! its hardware provides. [`Board`] is the union the engine asks for.
//!
//! ```text
//! AnalogInput       one ADC sample per call
//! DigitalIo         pin modes, levels, rising-edge interrupt attach
//! SpiBus            full-duplex byte transfer (chip select is a DigitalIo pin)
//! Clock             free-running µs and ms counters
//! EnvironmentalBus  BME280-class temperature, pressure, humidity device
//! ```
//!
//! `micros()` wraps after about 71 minutes. Callers use wrapping subtraction.

pub mod mock;

pub use crate::frequency::PulseChannel;
pub use mock::MockBoard;

/// Direction and pull configuration of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// High impedance input
    Input,
    /// Input with the internal pull-up enabled
    InputPullUp,
    /// Push-pull output
    Output,
}

/// One-shot analog sampling
pub trait AnalogInput {
    /// Sample a pin, returning a count in `0..=adc_max`
    fn read_analog(&mut self, pin: u8) -> u16;
}

/// General purpose digital pins
pub trait DigitalIo {
    /// Configure a pin
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode);

    /// Read a pin level, `true` when high
    fn read_digital(&mut self, pin: u8) -> bool;

    /// Drive an output pin
    fn write_digital(&mut self, pin: u8, high: bool);

    /// Route rising edges on `pin` to the handler of `channel`
    ///
    /// The board's interrupt vector must call [`crate::frequency::rpm_edge_isr`]
    /// or [`crate::frequency::speed_edge_isr`] with the current `micros()`.
    fn attach_rising_edge(&mut self, pin: u8, channel: PulseChannel);
}

/// Full-duplex SPI
pub trait SpiBus {
    /// Clock `buf` out and replace its contents with the bytes clocked in
    fn transfer(&mut self, buf: &mut [u8]);
}

/// Free-running time base
pub trait Clock {
    /// Microseconds since boot, wrapping
    fn micros(&self) -> u32;

    /// Milliseconds since boot, wrapping
    fn millis(&self) -> u32;
}

/// BME280-class combined environmental sensor on I²C
pub trait EnvironmentalBus {
    /// Probe and initialise the device at `address`, `true` if it answered
    fn begin(&mut self, address: u8) -> bool;

    /// Temperature (°C)
    fn temperature_c(&mut self) -> f32;

    /// Absolute pressure (Pa)
    fn pressure_pa(&mut self) -> f32;

    /// Relative humidity (%)
    fn humidity_pct(&mut self) -> f32;
}

/// Everything a sensor read may need
pub trait Board: AnalogInput + DigitalIo + SpiBus + Clock + EnvironmentalBus {}

impl<T> Board for T where T: AnalogInput + DigitalIo + SpiBus + Clock + EnvironmentalBus {}
