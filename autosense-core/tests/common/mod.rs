//! Shared fixtures for integration tests
//!
//! A [`Rig`] is a mock board, an engine and an input bank wired together, so
//! a test can set pin levels, move time and poll like a gauge firmware would.

#![allow(dead_code)]

pub mod scenarios;

use autosense_core::{
    hal::MockBoard, registry, InputBank, InputRecord, PlatformConfig, SensorEngine,
};

/// Bank size used by every rig
pub const BANK: usize = 8;

/// Board, engine and bank under test
pub struct Rig {
    pub board: MockBoard,
    pub engine: SensorEngine,
    pub bank: InputBank<BANK>,
}

impl Rig {
    /// 5 V AVR-class board using the process-wide pulse counters
    pub fn new() -> Self {
        Self::with_engine(SensorEngine::new(PlatformConfig::avr_5v()))
    }

    pub fn with_engine(engine: SensorEngine) -> Self {
        Self { board: MockBoard::new(), engine, bank: InputBank::new() }
    }

    /// Add an input on `pin` running the catalog sensor `name`, returning its slot
    pub fn add(&mut self, pin: u8, name: &str) -> usize {
        self.bank.add(input(pin, name)).expect("bank has room")
    }

    /// Poll once, returning how many inputs were read
    pub fn poll(&mut self) -> usize {
        self.bank.poll(&mut self.engine, &mut self.board)
    }

    /// Value in the given slot
    pub fn value(&self, slot: usize) -> f32 {
        self.bank.get(slot).expect("slot exists").value
    }
}

/// Input on `pin` configured for the catalog sensor `name`
pub fn input(pin: u8, name: &str) -> InputRecord {
    let index = registry::index_by_name(name);
    assert_ne!(index, 0, "unknown sensor {name}");
    let mut input = InputRecord::new(pin);
    input.configure_sensor(index).expect("sensor fits pin");
    input
}

/// ADC count a resistance produces over `bias` on a 10-bit converter
pub fn raw_for_resistance(r: f32, bias: f32) -> u16 {
    (r / (r + bias) * 1023.0).round() as u16
}

/// ADC count a pin voltage produces on a 5 V 10-bit converter
pub fn raw_for_volts(v: f32) -> u16 {
    (v / 5.0 * 1023.0).round() as u16
}

pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
