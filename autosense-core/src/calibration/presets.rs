//! Compiled-in calibration presets
//!
//! Manufacturer curves referenced by the sensor catalog. All resistive
//! presets assume the board's [`DEFAULT_BIAS_RESISTOR`].
//!
//! VDO thermistor tables are the published datasheet points every 5 °C,
//! resistance descending. VDO pressure tables are ascending.

use crate::calibration::{
    CalibrationRecord, LinearCalibration, PolynomialCalibration, RpmCalibration,
    SpeedCalibration, SteinhartCalibration, TableCalibration,
};
use crate::constants::adc::DEFAULT_BIAS_RESISTOR;

// ===== THERMISTORS =====

static VDO_120C_RESISTANCE: [f32; 31] = [
    1743.15, 1364.07, 1075.63, 850.09, 676.95, 543.54, 439.29, 356.64,
    291.46, 239.56, 197.29, 161.46, 134.03, 113.96, 97.05, 82.36,
    70.12, 59.73, 51.21, 44.32, 38.47, 33.4, 29.12, 25.53,
    22.44, 19.75, 17.44, 15.46, 13.75, 12.26, 10.96,
];

static VDO_120C_TEMPERATURE: [f32; 31] = [
    0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0,
    55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0, 100.0,
    105.0, 110.0, 115.0, 120.0, 125.0, 130.0, 135.0, 140.0, 145.0, 150.0,
];

static VDO_150C_RESISTANCE: [f32; 37] = [
    3240.18, 2473.60, 1905.87, 1486.65, 1168.64, 926.71, 739.98, 594.90,
    481.53, 392.57, 322.17, 266.19, 221.17, 184.72, 155.29, 131.38,
    112.08, 96.40, 82.96, 71.44, 61.92, 54.01, 47.24, 41.42,
    36.51, 32.38, 28.81, 25.70, 23.0, 20.66, 18.59, 16.74,
    15.11, 13.66, 12.38, 11.25, 10.24,
];

static VDO_150C_TEMPERATURE: [f32; 37] = [
    0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0,
    55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0, 100.0,
    105.0, 110.0, 115.0, 120.0, 125.0, 130.0, 135.0, 140.0, 145.0, 150.0,
    155.0, 160.0, 165.0, 170.0, 175.0, 180.0,
];

/// VDO 120 °C coolant/oil sender, lookup table
pub static VDO_120C_TABLE: CalibrationRecord = CalibrationRecord::ThermistorTable(TableCalibration {
    bias_resistor: DEFAULT_BIAS_RESISTOR,
    resistance: &VDO_120C_RESISTANCE,
    values: &VDO_120C_TEMPERATURE,
});

/// VDO 150 °C coolant/oil sender, lookup table
pub static VDO_150C_TABLE: CalibrationRecord = CalibrationRecord::ThermistorTable(TableCalibration {
    bias_resistor: DEFAULT_BIAS_RESISTOR,
    resistance: &VDO_150C_RESISTANCE,
    values: &VDO_150C_TEMPERATURE,
});

/// VDO 120 °C sender, Steinhart-Hart fit of the table
pub static VDO_120C_STEINHART: CalibrationRecord = CalibrationRecord::ThermistorSteinhart(SteinhartCalibration {
    bias_resistor: DEFAULT_BIAS_RESISTOR,
    a: 1.764445997570e-03,
    b: 2.499534389889e-04,
    c: 6.773335597401e-08,
});

/// VDO 150 °C sender, Steinhart-Hart fit of the table
pub static VDO_150C_STEINHART: CalibrationRecord = CalibrationRecord::ThermistorSteinhart(SteinhartCalibration {
    bias_resistor: DEFAULT_BIAS_RESISTOR,
    a: 1.591623373219e-03,
    b: 2.659356969556e-04,
    c: -1.610552525653e-07,
});

/// Generic 0.5 to 4.5 V linear temperature sender, -40 to 150 °C
pub static GENERIC_TEMP_LINEAR: CalibrationRecord =
    CalibrationRecord::Linear(LinearCalibration::new(0.5, 4.5, -40.0, 150.0));

// ===== PRESSURE =====

/// Generic 0.5 to 4.5 V boost/MAP sensor, 0 to 5 bar
pub static GENERIC_BOOST_LINEAR: CalibrationRecord =
    CalibrationRecord::Linear(LinearCalibration::new(0.5, 4.5, 0.0, 5.0));

/// Generic 0.5 to 4.5 V, 0 to 150 psi (10.34 bar) sensor
pub static GENERIC_PRESSURE_150PSI: CalibrationRecord =
    CalibrationRecord::Linear(LinearCalibration::new(0.5, 4.5, 0.0, 10.34));

/// AEM 30-2130-150, 0.5 to 4.5 V, 0 to 150 psi
pub static AEM_30_2130_150: CalibrationRecord =
    CalibrationRecord::Linear(LinearCalibration::new(0.5, 4.5, 0.0, 10.34));

/// NXP MPX4250AP absolute pressure, 20 to 250 kPa
pub static MPX4250AP: CalibrationRecord =
    CalibrationRecord::Linear(LinearCalibration::new(0.2, 4.7, 0.2, 2.5));

/// NXP MPX5700AP absolute pressure, 15 to 700 kPa
pub static MPX5700AP: CalibrationRecord =
    CalibrationRecord::Linear(LinearCalibration::new(0.2, 4.7, 0.15, 7.0));

/// VDO 0 to 2 bar sender, `R = -3.1515·P² + 93.686·P + 9.6307`
pub static VDO_2BAR_POLYNOMIAL: CalibrationRecord = CalibrationRecord::PolynomialQuadratic(PolynomialCalibration {
    bias_resistor: DEFAULT_BIAS_RESISTOR,
    a: -3.1515,
    b: 93.686,
    c: 9.6307,
});

/// VDO 0 to 5 bar sender, `R = -0.3682·P² + 36.465·P + 10.648`
pub static VDO_5BAR_POLYNOMIAL: CalibrationRecord = CalibrationRecord::PolynomialQuadratic(PolynomialCalibration {
    bias_resistor: DEFAULT_BIAS_RESISTOR,
    a: -0.3682,
    b: 36.465,
    c: 10.648,
});

static VDO_2BAR_RESISTANCE: [f32; 6] = [10.0, 55.0, 100.0, 144.0, 168.0, 184.0];
static VDO_2BAR_PRESSURE: [f32; 6] = [0.0, 0.5, 1.0, 1.5, 1.8, 2.0];

static VDO_5BAR_RESISTANCE: [f32; 5] = [10.0, 48.0, 82.0, 116.0, 184.0];
static VDO_5BAR_PRESSURE: [f32; 5] = [0.0, 1.0, 2.0, 3.0, 5.0];

/// VDO 0 to 2 bar sender, lookup table
pub static VDO_2BAR_TABLE: CalibrationRecord = CalibrationRecord::PressureTable(TableCalibration {
    bias_resistor: DEFAULT_BIAS_RESISTOR,
    resistance: &VDO_2BAR_RESISTANCE,
    values: &VDO_2BAR_PRESSURE,
});

/// VDO 0 to 5 bar sender, lookup table
pub static VDO_5BAR_TABLE: CalibrationRecord = CalibrationRecord::PressureTable(TableCalibration {
    bias_resistor: DEFAULT_BIAS_RESISTOR,
    resistance: &VDO_5BAR_RESISTANCE,
    values: &VDO_5BAR_PRESSURE,
});

// ===== FREQUENCY =====

/// 12-pole alternator, 3:1 pulley
pub static W_PHASE_RPM: CalibrationRecord = CalibrationRecord::Rpm(RpmCalibration::DEFAULT);

/// 12-pole alternator, 2:1 pulley (older vehicles, light trucks)
pub static W_PHASE_RPM_12P_2TO1: CalibrationRecord = CalibrationRecord::Rpm(RpmCalibration {
    pulley_ratio: 2.0,
    ..RpmCalibration::DEFAULT
});

/// Generic 3-wire hall sender on the transmission output
pub static HALL_SPEED: CalibrationRecord = CalibrationRecord::Speed(SpeedCalibration::DEFAULT);
