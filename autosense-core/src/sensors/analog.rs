//! Analog sender drivers
//!
//! Every read follows the same shape: resolve the calibration, take one
//! settled rail-checked sample, convert to resistance or voltage, apply the
//! model. Models that cannot run without calibration (tables, polynomial)
//! fail with [`Fault::CalibrationMissing`] before the ADC is touched.

use crate::adc;
use crate::calibration::{
    resolve, BetaCalibration, CalibrationKind, CalibrationParams, DividerCalibration,
    LinearCalibration, PolynomialCalibration, SteinhartCalibration, TableCalibration,
};
use crate::config::PlatformConfig;
use crate::errors::{defined, Fault, MeasureResult};
use crate::hal::AnalogInput;
use crate::input::InputRecord;
use crate::models::{linear, polynomial, table, thermistor, voltage};
use crate::registry::SensorDescriptor;

fn params<P: CalibrationParams>(
    input: &InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
) -> Result<P, Fault> {
    resolve::<P>(input, descriptor, platform)
        .map(|r| r.params)
        .ok_or(Fault::CalibrationMissing)
}

/// Ratiometric sender through a linear span
pub fn read_linear<A: AnalogInput>(
    input: &InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
    adc_in: &mut A,
) -> MeasureResult {
    let cal: LinearCalibration = params(input, descriptor, platform)?;
    let raw = adc::sample(adc_in, input.pin, platform.adc_max)?;
    defined(linear::convert(platform.counts_to_volts(raw), &cal))
}

/// VDO-style pressure sender through its quadratic curve
pub fn read_polynomial<A: AnalogInput>(
    input: &InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
    adc_in: &mut A,
) -> MeasureResult {
    let cal: PolynomialCalibration = params(input, descriptor, platform)?;
    let raw = adc::sample(adc_in, input.pin, platform.adc_max)?;
    let r = adc::resistance(raw, cal.bias_resistor, platform.adc_max);
    defined(polynomial::solve_pressure(r, &cal))
}

/// Resistive sender through a lookup table
///
/// Thermistor tables descend, pressure tables ascend; the descriptor's
/// calibration kind picks the direction.
pub fn read_table<A: AnalogInput>(
    input: &InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
    adc_in: &mut A,
) -> MeasureResult {
    let cal: TableCalibration = params(input, descriptor, platform)?;
    if cal.is_empty() {
        return Err(Fault::CalibrationMissing);
    }
    let raw = adc::sample(adc_in, input.pin, platform.adc_max)?;
    let r = defined(adc::resistance(raw, cal.bias_resistor, platform.adc_max))?;
    let value = match descriptor.calibration {
        CalibrationKind::PressureTable => table::interpolate_ascending(r, cal.resistance, cal.values),
        _ => table::interpolate_descending(r, cal.resistance, cal.values),
    };
    defined(value)
}

/// NTC through Steinhart-Hart
pub fn read_steinhart<A: AnalogInput>(
    input: &InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
    adc_in: &mut A,
) -> MeasureResult {
    let cal: SteinhartCalibration = params(input, descriptor, platform)?;
    let raw = adc::sample(adc_in, input.pin, platform.adc_max)?;
    let r = adc::resistance(raw, cal.bias_resistor, platform.adc_max);
    defined(thermistor::steinhart_celsius(r, &cal))
}

/// NTC through the Beta equation
pub fn read_beta<A: AnalogInput>(
    input: &InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
    adc_in: &mut A,
) -> MeasureResult {
    let cal: BetaCalibration = params(input, descriptor, platform)?;
    let raw = adc::sample(adc_in, input.pin, platform.adc_max)?;
    let r = adc::resistance(raw, cal.bias_resistor, platform.adc_max);
    defined(thermistor::beta_celsius(r, &cal))
}

/// Supply rail behind a resistive divider
pub fn read_divider<A: AnalogInput>(
    input: &InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
    adc_in: &mut A,
) -> MeasureResult {
    let cal: DividerCalibration = params(input, descriptor, platform)?;
    let raw = adc::sample(adc_in, input.pin, platform.adc_max)?;
    defined(voltage::divider(platform.counts_to_volts(raw), &cal))
}

/// Voltage at the pin
pub fn read_direct<A: AnalogInput>(
    input: &InputRecord,
    platform: &PlatformConfig,
    adc_in: &mut A,
) -> MeasureResult {
    let raw = adc::sample(adc_in, input.pin, platform.adc_max)?;
    defined(voltage::direct(raw, platform))
}
