//! Road speed from a hall-effect trigger
//!
//! ```text
//! shaft rev/s = 1 000 000 / interval_us / pulses_per_rev
//! wheel m/s   = shaft rev/s · circumference_m / final_drive_ratio
//! km/h        = wheel m/s · 3.6 · calibration_mult
//! ```

use crate::calibration::SpeedCalibration;
use crate::constants::frequency::{SPEED_SMOOTHING_PREVIOUS, US_PER_SECOND};
use crate::constants::physics::{MM_PER_M, MPS_TO_KPH};
use crate::errors::{Fault, MeasureResult};

use super::smooth;

/// Unfiltered road speed for one period (km/h)
pub fn instantaneous(interval_us: u32, cal: &SpeedCalibration) -> f32 {
    let shaft_hz = US_PER_SECOND / interval_us as f32 / cal.pulses_per_rev as f32;
    let circumference_m = cal.tire_circumference_mm as f32 / MM_PER_M;
    shaft_hz * circumference_m / cal.final_drive_ratio * MPS_TO_KPH * cal.calibration_mult
}

/// Next road speed reading
///
/// `interval_us` is `None` when the vehicle has stopped, which reads 0.
pub fn update(previous: f32, interval_us: Option<u32>, cal: &SpeedCalibration) -> MeasureResult {
    let Some(interval) = interval_us else {
        return Ok(0.0);
    };
    let kph = instantaneous(interval, cal);
    let max = cal.max_speed_kph as f32;
    if !(0.0..=max).contains(&kph) {
        return Err(Fault::OutOfRange { value: kph, min: 0.0, max });
    }
    Ok(smooth(previous, kph, SPEED_SMOOTHING_PREVIOUS))
}
