//! Deterministic in-memory board
//!
//! Stands in for real hardware in unit and integration tests, and doubles as
//! a reference for board support authors. Everything is plain state set by
//! the test: no interrupts fire on their own, time only moves when told to.
//!
//! The analog side models a multiplexed converter: the first sample after
//! switching channels returns [`MockBoard::settling_value`] instead of the
//! pin's level, which is why drivers sample twice.

use super::{AnalogInput, Clock, DigitalIo, EnvironmentalBus, PinMode, PulseChannel, SpiBus};

const PINS: usize = 256;

/// Simulated board state
#[derive(Debug, Clone)]
pub struct MockBoard {
    analog: [u16; PINS],
    levels: [bool; PINS],
    modes: [Option<PinMode>; PINS],
    edges: [Option<PulseChannel>; PINS],
    last_channel: Option<u8>,
    /// Value returned by the first sample after a channel switch
    pub settling_value: u16,
    /// Number of analog samples taken so far
    pub analog_samples: u32,
    spi_response: [u8; 4],
    /// Number of SPI transfers performed so far
    pub spi_transfers: u32,
    elapsed_us: u64,
    env_address: Option<u8>,
    env_started: bool,
    /// Number of environmental probe attempts
    pub env_probes: u32,
    /// Temperature reported by the environmental device (°C)
    pub env_temperature_c: f32,
    /// Pressure reported by the environmental device (Pa)
    pub env_pressure_pa: f32,
    /// Humidity reported by the environmental device (%)
    pub env_humidity_pct: f32,
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBoard {
    /// Board with every pin low, analog pins at zero, time at zero
    pub fn new() -> Self {
        Self {
            analog: [0; PINS],
            levels: [false; PINS],
            modes: [None; PINS],
            edges: [None; PINS],
            last_channel: None,
            settling_value: 0,
            analog_samples: 0,
            spi_response: [0; 4],
            spi_transfers: 0,
            elapsed_us: 0,
            env_address: None,
            env_started: false,
            env_probes: 0,
            env_temperature_c: 20.0,
            env_pressure_pa: 101_325.0,
            env_humidity_pct: 50.0,
        }
    }

    /// Set the level an analog pin settles to
    pub fn set_analog(&mut self, pin: u8, raw: u16) {
        self.analog[pin as usize] = raw;
    }

    /// Set the level of a digital input
    pub fn set_digital(&mut self, pin: u8, high: bool) {
        self.levels[pin as usize] = high;
    }

    /// Current level of a digital pin, including outputs driven by drivers
    pub fn digital_level(&self, pin: u8) -> bool {
        self.levels[pin as usize]
    }

    /// Last mode configured on a pin
    pub fn pin_mode(&self, pin: u8) -> Option<PinMode> {
        self.modes[pin as usize]
    }

    /// Channel attached to a pin's rising edge, if any
    pub fn edge_channel(&self, pin: u8) -> Option<PulseChannel> {
        self.edges[pin as usize]
    }

    /// Answer the next 16-bit SPI frame with `word`, most significant byte first
    pub fn set_spi_word16(&mut self, word: u16) {
        self.spi_response = [0; 4];
        self.spi_response[..2].copy_from_slice(&word.to_be_bytes());
    }

    /// Answer the next 32-bit SPI frame with `word`, most significant byte first
    pub fn set_spi_word32(&mut self, word: u32) {
        self.spi_response = word.to_be_bytes();
    }

    /// Put an environmental device on the bus at `address`
    pub fn attach_environmental(&mut self, address: u8) {
        self.env_address = Some(address);
    }

    /// Whether a successful `begin` has happened
    pub fn environmental_started(&self) -> bool {
        self.env_started
    }

    /// Set the absolute time since boot
    pub fn set_time_us(&mut self, us: u64) {
        self.elapsed_us = us;
    }

    /// Move time forward
    pub fn advance_us(&mut self, us: u64) {
        self.elapsed_us += us;
    }

    /// Move time forward
    pub fn advance_ms(&mut self, ms: u64) {
        self.elapsed_us += ms * 1000;
    }
}

impl AnalogInput for MockBoard {
    fn read_analog(&mut self, pin: u8) -> u16 {
        self.analog_samples += 1;
        let switched = self.last_channel != Some(pin);
        self.last_channel = Some(pin);
        if switched {
            self.settling_value
        } else {
            self.analog[pin as usize]
        }
    }
}

impl DigitalIo for MockBoard {
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode) {
        self.modes[pin as usize] = Some(mode);
        if mode == PinMode::InputPullUp {
            self.levels[pin as usize] = true;
        }
    }

    fn read_digital(&mut self, pin: u8) -> bool {
        self.levels[pin as usize]
    }

    fn write_digital(&mut self, pin: u8, high: bool) {
        self.levels[pin as usize] = high;
    }

    fn attach_rising_edge(&mut self, pin: u8, channel: PulseChannel) {
        self.edges[pin as usize] = Some(channel);
    }
}

impl SpiBus for MockBoard {
    fn transfer(&mut self, buf: &mut [u8]) {
        self.spi_transfers += 1;
        for (out, reply) in buf.iter_mut().zip(self.spi_response.iter()) {
            *out = *reply;
        }
    }
}

impl Clock for MockBoard {
    fn micros(&self) -> u32 {
        self.elapsed_us as u32
    }

    fn millis(&self) -> u32 {
        (self.elapsed_us / 1000) as u32
    }
}

impl EnvironmentalBus for MockBoard {
    fn begin(&mut self, address: u8) -> bool {
        self.env_probes += 1;
        self.env_started = self.env_address == Some(address);
        self.env_started
    }

    fn temperature_c(&mut self) -> f32 {
        self.env_temperature_c
    }

    fn pressure_pa(&mut self) -> f32 {
        self.env_pressure_pa
    }

    fn humidity_pct(&mut self) -> f32 {
        self.env_humidity_pct
    }
}
