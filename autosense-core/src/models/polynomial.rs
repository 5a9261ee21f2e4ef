//! Quadratic resistance curve inversion
//!
//! VDO pressure senders are characterised as `R = a·P² + b·P + c`. Reading
//! pressure means solving `a·P² + b·P + (c − R) = 0` for the root on the
//! sender's working branch. With `a < 0 < b` that is the root nearest zero,
//! computed in the form
//!
//! ```text
//! P = 2·(c − R) / (−b − √(b² − 4·a·(c − R)))
//! ```
//!
//! which equals `(−b + √disc) / 2a` but stays well conditioned as `a → 0`.

use crate::calibration::PolynomialCalibration;

/// Pressure (bar) for a sender resistance (Ω)
///
/// `NaN` for a non-positive resistance or a negative discriminant.
pub fn solve_pressure(resistance: f32, cal: &PolynomialCalibration) -> f32 {
    if resistance.is_nan() || resistance <= 0.0 {
        return f32::NAN;
    }
    let c = cal.c - resistance;
    let disc = cal.b * cal.b - 4.0 * cal.a * c;
    if disc < 0.0 {
        return f32::NAN;
    }
    let denom = -cal.b - libm::sqrtf(disc);
    if denom == 0.0 {
        return f32::NAN;
    }
    2.0 * c / denom
}
