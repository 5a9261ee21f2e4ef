//! Switch inputs

use crate::config::PlatformConfig;
use crate::hal::{DigitalIo, PinMode};

/// Float switch input with the internal pull-up
pub fn init_float_switch<D: DigitalIo>(pin: u8, io: &mut D) {
    io.set_pin_mode(pin, PinMode::InputPullUp);
}

/// 1.0 when the float is up, 0.0 when it has dropped
///
/// A normally-closed switch holds the pin high with the float up. Normally-open
/// switches are the other way round and need `float_switch_inverted`.
pub fn read_float_switch<D: DigitalIo>(pin: u8, platform: &PlatformConfig, io: &mut D) -> f32 {
    let high = io.read_digital(pin);
    if high != platform.float_switch_inverted {
        1.0
    } else {
        0.0
    }
}
