//! Analog sampling discipline
//!
//! Every analog driver goes through [`sample`]:
//!
//! 1. Sample twice and keep the second. On a multiplexed converter the first
//!    conversion after a channel switch still carries charge from the previous
//!    channel.
//! 2. Reject readings within [`ADC_RAIL_MARGIN`] counts of either rail. A
//!    sender that has come unplugged pulls the divider to a rail, and no model
//!    output computed from a railed reading means anything.
//!
//! [`resistance`] then recovers the sender resistance of the usual
//! "bias resistor to reference, sender to ground" divider:
//!
//! ```text
//!   Vref ──[ R_bias ]──┬── ADC
//!                      │
//!                  [ R_sender ]
//!                      │
//!                     GND          R_sender = raw · R_bias / (max − raw)
//! ```

use crate::constants::adc::ADC_RAIL_MARGIN;
use crate::errors::Fault;
use crate::hal::AnalogInput;

/// Whether a raw count is clear of both rails
#[inline]
pub fn in_band(raw: u16, adc_max: u16) -> bool {
    raw > ADC_RAIL_MARGIN && raw < adc_max.saturating_sub(ADC_RAIL_MARGIN)
}

/// Take one settled, rail-checked sample
pub fn sample<A: AnalogInput + ?Sized>(adc: &mut A, pin: u8, adc_max: u16) -> Result<u16, Fault> {
    let _ = adc.read_analog(pin);
    let raw = adc.read_analog(pin);
    if in_band(raw, adc_max) {
        Ok(raw)
    } else {
        Err(Fault::Disconnected { raw })
    }
}

/// Sender resistance from a raw count (Ω)
///
/// `NaN` when `raw >= adc_max` (open divider) or the result is not positive.
pub fn resistance(raw: u16, bias_resistor: f32, adc_max: u16) -> f32 {
    if raw >= adc_max {
        return f32::NAN;
    }
    let r = raw as f32 * bias_resistor / (adc_max - raw) as f32;
    if r > 0.0 {
        r
    } else {
        f32::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MockBoard;

    #[test]
    fn resistance_matches_divider_formula() {
        assert!((resistance(512, 1000.0, 1023) - 1001.957).abs() < 0.01);
        assert!((resistance(100, 10_000.0, 1023) - 1083.42).abs() < 0.01);
    }

    #[test]
    fn resistance_at_full_scale_is_nan() {
        assert!(resistance(1023, 1000.0, 1023).is_nan());
        assert!(resistance(1500, 1000.0, 1023).is_nan());
        assert!(resistance(0, 1000.0, 1023).is_nan());
    }

    #[test]
    fn rail_margin_boundaries() {
        assert!(!in_band(3, 1023));
        assert!(in_band(4, 1023));
        assert!(in_band(1019, 1023));
        assert!(!in_band(1020, 1023));
    }

    #[test]
    fn sample_discards_first_conversion() {
        let mut board = MockBoard::new();
        board.settling_value = 1023;
        board.set_analog(0, 400);
        assert_eq!(sample(&mut board, 0, 1023), Ok(400));
        assert_eq!(board.analog_samples, 2);
    }

    #[test]
    fn sample_flags_railed_reading() {
        let mut board = MockBoard::new();
        board.settling_value = 500;
        board.set_analog(1, 1022);
        assert_eq!(sample(&mut board, 1, 1023), Err(Fault::Disconnected { raw: 1022 }));
        board.set_analog(1, 2);
        assert_eq!(sample(&mut board, 1, 1023), Err(Fault::Disconnected { raw: 2 }));
    }
}
