//! Dashboard Polling Example
//!
//! A six-gauge dashboard polled against the mock board: oil pressure, coolant
//! temperature, boost, battery voltage, exhaust gas temperature and coolant
//! level.
//!
//! ## What You'll Learn
//!
//! - Picking sensors from the catalog by name
//! - Building an input bank and polling it
//! - How faults show up (as `NaN`, never as a panic)
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_dashboard
//! ```

use autosense_core::{
    hal::MockBoard,
    registry::{self, category_of},
    InputBank, InputRecord, PlatformConfig, SensorEngine,
};

fn main() {
    println!("Autosense Dashboard Example");
    println!("===========================\n");

    let mut board = MockBoard::new();
    let mut engine = SensorEngine::new(PlatformConfig::avr_5v());
    let mut bank: InputBank<8> = InputBank::new();

    let gauges = [
        (0, "VDO_5BAR_CURVE", "OIL"),
        (1, "VDO_120C_TABLE", "CLT"),
        (2, "GENERIC_BOOST", "BOOST"),
        (3, "VOLTAGE_DIVIDER", "BATT"),
        (10, "MAX31855", "EGT"),
        (11, "FLOAT_SWITCH", "LEVEL"),
    ];

    for (pin, sensor, abbr) in gauges {
        let index = registry::index_by_name(sensor);
        let mut input = InputRecord::new(pin);
        input.set_abbr(abbr);
        match input.configure_sensor(index) {
            Ok(()) => println!("  {:<6} pin {:>2}  {:?}  {}", abbr, pin, category_of(index), sensor),
            Err(e) => println!("  {abbr}: {e}"),
        }
        if let Err(e) = bank.add(input) {
            println!("  {abbr}: {e}");
        }
    }
    println!();

    // Simulated sender levels
    board.set_analog(0, 78);
    board.set_analog(1, 90);
    board.set_analog(2, 512);
    board.set_analog(3, 450);
    board.set_spi_word32(1_400 << 18);

    bank.init_all(&mut engine, &mut board);

    for cycle in 0..3 {
        if cycle == 2 {
            println!("(coolant sender unplugged)");
            board.set_analog(1, 1023);
        }
        bank.poll(&mut engine, &mut board);
        println!("t = {} ms", cycle * 100);
        for input in &bank {
            println!("  {:<6} {:>8.2}", input.abbr.as_str(), input.display_value());
        }
        board.advance_ms(100);
    }
}
