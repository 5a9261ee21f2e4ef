//! Linear span mapping
//!
//! Ratiometric senders output a voltage proportional to the measured
//! quantity over a fixed span, usually 0.5 to 4.5 V. The input voltage is
//! clamped to the span, so a sender sitting slightly outside it reads as its
//! endpoint rather than extrapolating.

use crate::calibration::LinearCalibration;

/// Map `volts` through `cal`
///
/// `NaN` if the voltage span is empty.
pub fn convert(volts: f32, cal: &LinearCalibration) -> f32 {
    let span = cal.voltage_max - cal.voltage_min;
    if span == 0.0 || volts.is_nan() {
        return f32::NAN;
    }
    let (lo, hi) = if span > 0.0 {
        (cal.voltage_min, cal.voltage_max)
    } else {
        (cal.voltage_max, cal.voltage_min)
    };
    let v = volts.clamp(lo, hi);
    cal.output_min + (v - cal.voltage_min) * (cal.output_max - cal.output_min) / span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_exactly() {
        let cal = LinearCalibration::DEFAULT;
        assert_eq!(convert(0.5, &cal), 0.0);
        assert_eq!(convert(4.5, &cal), 5.0);
        assert!((convert(2.5, &cal) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn input_outside_span_clamps() {
        let cal = LinearCalibration::DEFAULT;
        assert_eq!(convert(0.1, &cal), 0.0);
        assert_eq!(convert(4.9, &cal), 5.0);
    }

    #[test]
    fn negative_output_span() {
        let cal = LinearCalibration::new(0.5, 4.5, -40.0, 150.0);
        assert_eq!(convert(0.5, &cal), -40.0);
        assert!((convert(2.5, &cal) - 55.0).abs() < 1e-4);
    }

    #[test]
    fn empty_span_is_nan() {
        let cal = LinearCalibration::new(1.0, 1.0, 0.0, 5.0);
        assert!(convert(1.0, &cal).is_nan());
    }
}
