//! Piecewise-linear table interpolation
//!
//! Two directions, matching the two kinds of sender curve:
//!
//! ```text
//! descending  x[0] > x[1] > … > x[n-1]   NTC thermistor (R falls as T rises)
//! ascending   x[0] < x[1] < … < x[n-1]   pressure sender (R rises with P)
//! ```
//!
//! Both clamp to the endpoint values outside the table and return knot
//! values exactly at knots. Empty tables or tables whose columns differ in
//! length give `NaN`.

/// Interpolate in a table whose `x` column descends
pub fn interpolate_descending(value: f32, x: &[f32], y: &[f32]) -> f32 {
    let n = x.len();
    if n == 0 || n != y.len() || value.is_nan() {
        return f32::NAN;
    }
    if value >= x[0] {
        return y[0];
    }
    if value <= x[n - 1] {
        return y[n - 1];
    }
    for i in (1..n).rev() {
        if value <= x[i - 1] {
            return lerp(value, x[i], x[i - 1], y[i], y[i - 1]);
        }
    }
    y[n - 1]
}

/// Interpolate in a table whose `x` column ascends
pub fn interpolate_ascending(value: f32, x: &[f32], y: &[f32]) -> f32 {
    let n = x.len();
    if n == 0 || n != y.len() || value.is_nan() {
        return f32::NAN;
    }
    if value <= x[0] {
        return y[0];
    }
    if value >= x[n - 1] {
        return y[n - 1];
    }
    for i in 1..n {
        if value <= x[i] {
            return lerp(value, x[i - 1], x[i], y[i - 1], y[i]);
        }
    }
    y[n - 1]
}

#[inline]
fn lerp(v: f32, x0: f32, x1: f32, y0: f32, y1: f32) -> f32 {
    if v == x0 {
        return y0;
    }
    if v == x1 {
        return y1;
    }
    let dx = x1 - x0;
    if dx == 0.0 {
        return y0;
    }
    y0 + (v - x0) * (y1 - y0) / dx
}

#[cfg(test)]
mod tests {
    use super::*;

    const R_DESC: [f32; 4] = [1000.0, 500.0, 200.0, 100.0];
    const T_DESC: [f32; 4] = [0.0, 20.0, 50.0, 80.0];

    const R_ASC: [f32; 5] = [10.0, 48.0, 82.0, 116.0, 184.0];
    const P_ASC: [f32; 5] = [0.0, 1.0, 2.0, 3.0, 5.0];

    #[test]
    fn descending_knots_exact() {
        for (r, t) in R_DESC.iter().zip(T_DESC.iter()) {
            assert_eq!(interpolate_descending(*r, &R_DESC, &T_DESC), *t);
        }
    }

    #[test]
    fn descending_clamps_both_ends() {
        assert_eq!(interpolate_descending(5000.0, &R_DESC, &T_DESC), 0.0);
        assert_eq!(interpolate_descending(1.0, &R_DESC, &T_DESC), 80.0);
    }

    #[test]
    fn descending_midpoint() {
        assert!((interpolate_descending(750.0, &R_DESC, &T_DESC) - 10.0).abs() < 1e-5);
        assert!((interpolate_descending(150.0, &R_DESC, &T_DESC) - 65.0).abs() < 1e-5);
    }

    #[test]
    fn ascending_knots_exact() {
        for (r, p) in R_ASC.iter().zip(P_ASC.iter()) {
            assert_eq!(interpolate_ascending(*r, &R_ASC, &P_ASC), *p);
        }
    }

    #[test]
    fn ascending_clamps_and_interpolates() {
        assert_eq!(interpolate_ascending(0.0, &R_ASC, &P_ASC), 0.0);
        assert_eq!(interpolate_ascending(500.0, &R_ASC, &P_ASC), 5.0);
        assert!((interpolate_ascending(150.0, &R_ASC, &P_ASC) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn bad_tables_are_nan() {
        assert!(interpolate_ascending(1.0, &[], &[]).is_nan());
        assert!(interpolate_descending(1.0, &[2.0, 1.0], &[0.0]).is_nan());
        assert!(interpolate_ascending(f32::NAN, &R_ASC, &P_ASC).is_nan());
    }

    #[test]
    fn single_knot_table_is_constant() {
        assert_eq!(interpolate_ascending(3.0, &[5.0], &[7.0]), 7.0);
        assert_eq!(interpolate_descending(9.0, &[5.0], &[7.0]), 7.0);
    }
}
