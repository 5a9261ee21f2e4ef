//! NTC thermistor equations
//!
//! ```text
//! Steinhart-Hart   1/T = A + B·ln R + C·(ln R)³
//! Beta             1/T = 1/T0 + ln(R/R0)/β
//! ```
//!
//! `T` in kelvin on the right, °C returned.

use crate::calibration::{BetaCalibration, SteinhartCalibration};
use crate::constants::physics::KELVIN_OFFSET;

/// Temperature (°C) from resistance (Ω) by Steinhart-Hart
pub fn steinhart_celsius(resistance: f32, cal: &SteinhartCalibration) -> f32 {
    if resistance.is_nan() || resistance <= 0.0 {
        return f32::NAN;
    }
    let ln_r = libm::logf(resistance);
    let inv_t = cal.a + cal.b * ln_r + cal.c * ln_r * ln_r * ln_r;
    if inv_t <= 0.0 {
        return f32::NAN;
    }
    1.0 / inv_t - KELVIN_OFFSET
}

/// Temperature (°C) from resistance (Ω) by the Beta equation
pub fn beta_celsius(resistance: f32, cal: &BetaCalibration) -> f32 {
    if resistance.is_nan() || resistance <= 0.0 || cal.r0 <= 0.0 || cal.beta == 0.0 {
        return f32::NAN;
    }
    let inv_t = 1.0 / (cal.t0 + KELVIN_OFFSET) + libm::logf(resistance / cal.r0) / cal.beta;
    if inv_t <= 0.0 {
        return f32::NAN;
    }
    1.0 / inv_t - KELVIN_OFFSET
}
