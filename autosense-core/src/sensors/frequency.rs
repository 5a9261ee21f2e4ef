//! Pulse-train drivers
//!
//! The edge interrupt only counts; all arithmetic happens here, in poll
//! context. Order matters: the counter snapshot is taken before the clock is
//! read.

use crate::calibration::{resolve, RpmCalibration, SpeedCalibration};
use crate::config::PlatformConfig;
use crate::errors::{Fault, MeasureResult};
use crate::frequency::{self, rpm, speed, PulseChannel, PulseCounter};
use crate::hal::{Clock, DigitalIo, PinMode};
use crate::input::InputRecord;
use crate::registry::SensorDescriptor;

/// Plain input with its rising edge routed to `channel`
pub fn init_pulse_input<D: DigitalIo>(pin: u8, channel: PulseChannel, io: &mut D) {
    io.set_pin_mode(pin, PinMode::Input);
    io.attach_rising_edge(pin, channel);
}

fn latest_interval<C: Clock>(
    input: &mut InputRecord,
    counter: &PulseCounter,
    timeout_ms: u16,
    clock: &C,
) -> Option<u32> {
    let snapshot = counter.snapshot();
    let now_us = clock.micros();
    let now_ms = clock.millis();
    frequency::active_interval(&snapshot, now_us, now_ms, &mut input.pulse_watch, timeout_ms)
}

/// Engine speed (rpm)
pub fn read_rpm<C: Clock>(
    input: &mut InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
    counter: &PulseCounter,
    clock: &C,
) -> MeasureResult {
    let cal: RpmCalibration = resolve(input, descriptor, platform)
        .map(|r| r.params)
        .ok_or(Fault::CalibrationMissing)?;
    let interval = latest_interval(input, counter, cal.timeout_ms, clock);
    rpm::update(input.value, interval, &cal)
}

/// Road speed (km/h)
pub fn read_speed<C: Clock>(
    input: &mut InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
    counter: &PulseCounter,
    clock: &C,
) -> MeasureResult {
    let cal: SpeedCalibration = resolve(input, descriptor, platform)
        .map(|r| r.params)
        .ok_or(Fault::CalibrationMissing)?;
    let interval = latest_interval(input, counter, cal.timeout_ms, clock);
    speed::update(input.value, interval, &cal)
}
