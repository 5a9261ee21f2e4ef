//! Engine speed from the alternator W-phase
//!
//! The W terminal carries one pulse per pole pair per alternator revolution,
//! and the alternator turns `pulley_ratio` times per crank revolution:
//!
//! ```text
//! pulses/rev = (poles / 2) · pulley_ratio
//! rpm        = 60 000 000 / (interval_us · pulses/rev) · calibration_mult
//! ```

use crate::calibration::RpmCalibration;
use crate::constants::frequency::{RPM_SMOOTHING_PREVIOUS, US_PER_MINUTE};
use crate::errors::{Fault, MeasureResult};

use super::smooth;

/// Unfiltered engine speed for one period
pub fn instantaneous(interval_us: u32, cal: &RpmCalibration) -> f32 {
    US_PER_MINUTE / (interval_us as f32 * cal.pulses_per_rev()) * cal.calibration_mult
}

/// Next engine speed reading
///
/// `interval_us` is `None` when the engine has stopped, which reads 0.
pub fn update(previous: f32, interval_us: Option<u32>, cal: &RpmCalibration) -> MeasureResult {
    let Some(interval) = interval_us else {
        return Ok(0.0);
    };
    let rpm = instantaneous(interval, cal);
    let (min, max) = (cal.min_rpm as f32, cal.max_rpm as f32);
    if !(min..=max).contains(&rpm) {
        return Err(Fault::OutOfRange { value: rpm, min, max });
    }
    Ok(smooth(previous, rpm, RPM_SMOOTHING_PREVIOUS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alternator_at_one_kilohertz() {
        let rpm = instantaneous(1_000, &RpmCalibration::DEFAULT);
        assert!((rpm - 3333.33).abs() < 0.01);
    }

    #[test]
    fn stopped_reads_zero() {
        assert_eq!(update(2500.0, None, &RpmCalibration::DEFAULT), Ok(0.0));
    }

    #[test]
    fn first_sample_is_unsmoothed() {
        let rpm = update(f32::NAN, Some(1_000), &RpmCalibration::DEFAULT).unwrap();
        assert!((rpm - 3333.33).abs() < 0.01);
    }

    #[test]
    fn later_samples_are_smoothed() {
        let rpm = update(3000.0, Some(1_000), &RpmCalibration::DEFAULT).unwrap();
        assert!((rpm - (3000.0 * 0.8 + 3333.333 * 0.2)).abs() < 0.01);
    }

    #[test]
    fn implausible_rates_are_faults() {
        // 18 pulses/rev at 200 µs → 16 667 rpm
        assert!(matches!(
            update(0.0, Some(200), &RpmCalibration::DEFAULT),
            Err(Fault::OutOfRange { .. })
        ));
        // 1 s period → 3.3 rpm, below idle noise floor
        assert!(update(0.0, Some(1_000_000), &RpmCalibration::DEFAULT).is_err());
    }

    #[test]
    fn zero_poles_is_fault() {
        let cal = RpmCalibration { poles: 0, ..RpmCalibration::DEFAULT };
        assert!(update(0.0, Some(1_000), &cal).is_err());
    }
}
