//! Custom Calibration Example
//!
//! Generic NTC entries ship without a table. Until a calibration is supplied
//! they read `NaN`; a custom record switches them on.
//!
//! ```bash
//! cargo run --example 02_custom_calibration
//! ```

use autosense_core::{
    calibration::{resolve, TableCalibration},
    hal::MockBoard,
    registry, CalibrationRecord, InputRecord, SensorEngine,
};

static OHMS: [f32; 5] = [32_650.0, 10_000.0, 3_603.0, 1_481.0, 678.0];
static DEG_C: [f32; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

fn main() {
    let mut board = MockBoard::new();
    let mut engine = SensorEngine::default();

    let index = registry::index_by_name("GENERIC_NTC_TABLE");
    let mut ntc = InputRecord::new(4);
    ntc.configure_sensor(index).expect("analog pin");

    // 10 kΩ NTC against a 10 kΩ bias reads mid-scale at 25 °C
    board.set_analog(4, 512);

    let before = engine.read(&mut ntc, &mut board);
    println!("Without calibration: {:?} (value {})", before, ntc.value);

    ntc.set_custom_calibration(CalibrationRecord::ThermistorTable(TableCalibration {
        bias_resistor: 10_000.0,
        resistance: &OHMS,
        values: &DEG_C,
    }))
    .expect("table kind matches");

    let descriptor = ntc.descriptor().expect("configured");
    let source = resolve::<TableCalibration>(&ntc, descriptor, &engine.platform).map(|r| r.source);
    println!("Calibration source: {:?}", source);

    let after = engine.read(&mut ntc, &mut board);
    println!("With calibration:    {:?}", after);
}
