//! Property tests for the conversion models
//!
//! These pin down shape rather than exact numbers: monotonicity, clamping,
//! and the NaN contract at the edges of each model's domain.

use autosense_core::{
    adc,
    calibration::{
        presets, BetaCalibration, CalibrationRecord, LinearCalibration, PolynomialCalibration,
        SteinhartCalibration,
    },
    models::{linear, polynomial, table, thermistor},
};
use proptest::prelude::*;

fn vdo_120_table() -> (&'static [f32], &'static [f32]) {
    match presets::VDO_120C_TABLE {
        CalibrationRecord::ThermistorTable(t) => (t.resistance, t.values),
        _ => unreachable!(),
    }
}

fn vdo_5bar_table() -> (&'static [f32], &'static [f32]) {
    match presets::VDO_5BAR_TABLE {
        CalibrationRecord::PressureTable(t) => (t.resistance, t.values),
        _ => unreachable!(),
    }
}

fn vdo_5bar_curve() -> PolynomialCalibration {
    match presets::VDO_5BAR_POLYNOMIAL {
        CalibrationRecord::PolynomialQuadratic(p) => p,
        _ => unreachable!(),
    }
}

proptest! {
    #[test]
    fn thermistor_table_is_monotonic(a in 1.0f32..20_000.0, b in 1.0f32..20_000.0) {
        let (r, t) = vdo_120_table();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        // More resistance, colder
        prop_assert!(table::interpolate_descending(hi, r, t) <= table::interpolate_descending(lo, r, t) + 1e-3);
    }

    #[test]
    fn table_output_stays_within_knots(x in 0.0f32..100_000.0) {
        let (r, t) = vdo_120_table();
        let v = table::interpolate_descending(x, r, t);
        let min = t.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = t.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        prop_assert!(v >= min && v <= max, "{} outside [{}, {}]", v, min, max);
    }

    #[test]
    fn pressure_table_is_monotonic(a in 1.0f32..400.0, b in 1.0f32..400.0) {
        let (r, p) = vdo_5bar_table();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(table::interpolate_ascending(lo, r, p) <= table::interpolate_ascending(hi, r, p) + 1e-4);
    }

    #[test]
    fn linear_output_stays_in_span(volts in -10.0f32..10.0) {
        let cal = LinearCalibration::new(0.5, 4.5, -40.0, 150.0);
        let v = linear::convert(volts, &cal);
        prop_assert!(v >= -40.0 - 1e-3 && v <= 150.0 + 1e-3, "{}", v);
    }

    #[test]
    fn resistance_matches_divider_formula(raw in 1u16..1023) {
        let r = adc::resistance(raw, 1_000.0, 1023);
        let expected = raw as f32 * 1_000.0 / (1023 - raw) as f32;
        prop_assert!((r - expected).abs() <= expected * 1e-5);
    }

    #[test]
    fn polynomial_inverts_its_own_curve(p in 0.0f32..5.0) {
        let cal = vdo_5bar_curve();
        let r = cal.a * p * p + cal.b * p + cal.c;
        let solved = polynomial::solve_pressure(r, &cal);
        prop_assert!((solved - p).abs() < 1e-2, "{} -> {} Ω -> {}", p, r, solved);
    }

    #[test]
    fn steinhart_colder_with_more_resistance(a in 100.0f32..100_000.0, b in 100.0f32..100_000.0) {
        let cal = SteinhartCalibration::DEFAULT;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(thermistor::steinhart_celsius(hi, &cal) <= thermistor::steinhart_celsius(lo, &cal) + 1e-3);
    }

    #[test]
    fn beta_is_finite_for_positive_resistance(r in 10.0f32..1_000_000.0) {
        prop_assert!(thermistor::beta_celsius(r, &BetaCalibration::DEFAULT).is_finite());
    }

    #[test]
    fn rail_readings_are_always_rejected(raw in prop_oneof![0u16..=3, 1020u16..=1023]) {
        prop_assert!(!adc::in_band(raw, 1023));
    }
}

#[test]
fn nan_inputs_stay_nan() {
    let (r, t) = vdo_120_table();
    assert!(table::interpolate_descending(f32::NAN, r, t).is_nan());
    assert!(polynomial::solve_pressure(f32::NAN, &vdo_5bar_curve()).is_nan());
    assert!(thermistor::steinhart_celsius(-5.0, &SteinhartCalibration::DEFAULT).is_nan());
    assert!(linear::convert(f32::NAN, &LinearCalibration::DEFAULT).is_nan());
}
