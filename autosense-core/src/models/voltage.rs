//! Voltage measurement
//!
//! Battery and supply rails sit above the converter's reference, so they are
//! read through a resistive divider and scaled back up.

use crate::calibration::DividerCalibration;
use crate::config::PlatformConfig;

/// Rail voltage behind a divider, from the voltage at the pin
pub fn divider(pin_volts: f32, cal: &DividerCalibration) -> f32 {
    if cal.r2 <= 0.0 || cal.r1 < 0.0 {
        return f32::NAN;
    }
    pin_volts * (cal.r1 + cal.r2) / cal.r2 * cal.correction + cal.offset
}

/// Pin voltage from a raw count
pub fn direct(raw: u16, platform: &PlatformConfig) -> f32 {
    platform.counts_to_volts(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divider_scales_by_ratio() {
        let cal = DividerCalibration::from_ratio(6.0);
        assert!((divider(2.2, &cal) - 13.2).abs() < 1e-4);
    }

    #[test]
    fn divider_applies_trim() {
        let cal = DividerCalibration { r1: 10_000.0, r2: 2_000.0, correction: 1.02, offset: 0.1 };
        assert!((divider(2.0, &cal) - (12.0 * 1.02 + 0.1)).abs() < 1e-4);
    }

    #[test]
    fn divider_without_lower_leg_is_nan() {
        let cal = DividerCalibration { r1: 1000.0, r2: 0.0, correction: 1.0, offset: 0.0 };
        assert!(divider(1.0, &cal).is_nan());
    }

    #[test]
    fn direct_is_ratiometric() {
        let cfg = PlatformConfig::avr_5v();
        assert!((direct(1023, &cfg) - 5.0).abs() < 1e-5);
        assert!((direct(512, &cfg) - 2.5024).abs() < 1e-3);
    }
}
