//! Integration tests for the acquisition cycle
//!
//! Drives a full input bank against the mock board: configuration, first
//! poll with lazy init, interval gating, fault degradation and display units.

mod common;

use autosense_core::{
    calibration::{LinearCalibration, TableCalibration},
    registry::{self, Category},
    units, CalibrationRecord, ConfigError, InputRecord,
};

use common::{assert_close, input, raw_for_resistance, scenarios, Rig};

#[test]
fn dashboard_first_poll() {
    let (mut rig, slots) = scenarios::dashboard();
    assert_eq!(rig.poll(), 6);

    assert_close(rig.value(slots.oil_pressure), 2.0, 0.05);
    assert_close(rig.value(slots.coolant), 70.0, 1.0);
    assert_close(rig.value(slots.boost), 2.503, 0.01);
    assert_close(rig.value(slots.battery), 450.0 * 5.0 / 1023.0 * 6.0, 1e-3);
    assert_eq!(rig.value(slots.egt), 25.0);
    assert_eq!(rig.value(slots.coolant_level), 1.0);

    for input in &rig.bank {
        assert!(input.flags.initialized, "{}", input.abbr);
    }
}

#[test]
fn inputs_wait_for_their_interval() {
    let (mut rig, _) = scenarios::dashboard();
    assert_eq!(rig.poll(), 6);
    assert_eq!(rig.poll(), 0);

    rig.board.advance_ms(99);
    assert_eq!(rig.poll(), 0);
    rig.board.advance_ms(1);
    assert_eq!(rig.poll(), 6);
}

#[test]
fn disabled_inputs_are_skipped() {
    let (mut rig, slots) = scenarios::dashboard();
    rig.bank.get_mut(slots.boost).unwrap().set_enabled(false);
    assert_eq!(rig.poll(), 5);
    assert!(rig.value(slots.boost).is_nan());
}

#[test]
fn unplugged_sender_reads_nan_then_recovers() {
    let (mut rig, slots) = scenarios::dashboard();
    rig.poll();
    assert!(rig.bank.get(slots.coolant).unwrap().is_valid());

    // Open circuit pulls the pin to the rail
    rig.board.set_analog(1, 1023);
    rig.board.advance_ms(100);
    rig.poll();
    assert!(rig.value(slots.coolant).is_nan());

    rig.board.set_analog(1, 90);
    rig.board.advance_ms(100);
    rig.poll();
    assert_close(rig.value(slots.coolant), 70.0, 1.0);
}

#[test]
fn uncalibrated_table_always_reads_nan() {
    let mut rig = Rig::new();
    let slot = rig.add(5, "GENERIC_NTC_TABLE");
    for raw in [10u16, 200, 512, 900, 1010] {
        rig.board.set_analog(5, raw);
        rig.board.advance_ms(100);
        rig.poll();
        assert!(rig.value(slot).is_nan(), "raw {raw}");
    }
}

#[test]
fn custom_table_turns_generic_ntc_on() {
    static OHMS: [f32; 3] = [9_000.0, 3_000.0, 1_000.0];
    static DEG: [f32; 3] = [0.0, 40.0, 80.0];

    let mut rig = Rig::new();
    let mut ntc = input(5, "GENERIC_NTC_TABLE");
    ntc.set_custom_calibration(CalibrationRecord::ThermistorTable(TableCalibration {
        bias_resistor: 1_000.0,
        resistance: &OHMS,
        values: &DEG,
    }))
    .unwrap();
    let slot = rig.bank.add(ntc).unwrap();

    rig.board.set_analog(5, raw_for_resistance(3_000.0, 1_000.0));
    rig.poll();
    assert_close(rig.value(slot), 40.0, 0.5);
}

#[test]
fn mismatched_custom_calibration_is_rejected() {
    let mut oil = input(0, "VDO_5BAR_CURVE");
    let err = oil
        .set_custom_calibration(CalibrationRecord::Linear(LinearCalibration::DEFAULT))
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::CalibrationKindMismatch { expected: "POLYNOMIAL", offered: "LINEAR" }
    );
    assert!(oil.active_custom_calibration().is_none());
}

#[test]
fn out_of_range_reads_nan() {
    let mut rig = Rig::new();
    let slot = rig.add(6, "MAX6675");
    // 8191 counts = 2047.75 °C, past the 1024 °C ceiling
    rig.board.set_spi_word16(0x1FFF << 3);
    rig.poll();
    assert!(rig.value(slot).is_nan());
}

#[test]
fn display_units_convert_base_values() {
    let (mut rig, slots) = scenarios::dashboard();
    let psi = units::units_by_name("PSI").unwrap();
    let fahrenheit = units::units_by_name("FAHRENHEIT").unwrap();
    rig.bank.get_mut(slots.oil_pressure).unwrap().set_units(psi).unwrap();
    rig.bank.get_mut(slots.egt).unwrap().set_units(fahrenheit).unwrap();
    rig.poll();

    let oil = rig.bank.get(slots.oil_pressure).unwrap();
    assert_close(oil.display_value(), oil.value * 14.50377, 1e-3);
    assert_close(rig.bank.get(slots.egt).unwrap().display_value(), 77.0, 1e-4);

    let mut boost = input(2, "GENERIC_BOOST");
    assert_eq!(boost.set_units(fahrenheit), Err(ConfigError::UnknownUnits { index: fahrenheit }));
}

#[test]
fn reconfiguring_resets_the_input() {
    let (mut rig, slots) = scenarios::dashboard();
    rig.poll();
    let boost = rig.bank.get_mut(slots.boost).unwrap();
    assert!(boost.is_valid());

    boost.configure_sensor(registry::index_by_name("MPX4250AP")).unwrap();
    assert!(boost.value.is_nan());
    assert!(!boost.flags.initialized);
    assert_eq!(boost.last_read_ms, None);
}

#[cfg(not(feature = "static-config"))]
#[test]
fn bus_sensors_need_bus_pins() {
    let mut on_gpio = InputRecord::new(4);
    let err = on_gpio.configure_sensor(registry::index_by_name("BME280_TEMP"));
    assert!(matches!(err, Err(ConfigError::PinKindMismatch { pin: 4, .. })));

    let mut analog_on_bus = InputRecord::new(0xF1);
    let err = analog_on_bus.configure_sensor(registry::index_by_name("GENERIC_BOOST"));
    assert!(matches!(err, Err(ConfigError::PinKindMismatch { .. })));
}

#[test]
fn missing_environmental_device_reads_nan() {
    let mut rig = Rig::new();
    let temp = rig.add(0xF0, "BME280_TEMP");
    let alt = rig.add(0xF0, "BME280_ELEVATION");
    rig.poll();
    assert!(rig.value(temp).is_nan());
    assert!(rig.value(alt).is_nan());
    assert_eq!(rig.board.env_probes, 2);
}

#[test]
fn environmental_device_reports_all_channels() {
    let mut rig = Rig::new();
    rig.board.attach_environmental(0x76);
    rig.board.env_pressure_pa = 90_000.0;
    let slots = [
        rig.add(0xF0, "BME280_TEMP"),
        rig.add(0xF0, "BME280_PRESSURE"),
        rig.add(0xF0, "BME280_HUMIDITY"),
        rig.add(0xF0, "BME280_ELEVATION"),
    ];
    rig.poll();

    assert_eq!(rig.value(slots[0]), 20.0);
    assert_close(rig.value(slots[1]), 0.9, 1e-5);
    assert_eq!(rig.value(slots[2]), 50.0);
    assert_close(rig.value(slots[3]), 988.6, 5.0);
}

#[test]
fn two_step_selection_by_category() {
    let category = Category::from_name("ntc").unwrap();
    let index = registry::index_by_category_and_name(category, "VDO_150C_TABLE");
    assert_ne!(index, 0);
    assert_eq!(registry::category_of(index), Category::Thermistor);

    let mut input = InputRecord::new(1);
    input.configure_sensor(index).unwrap();
    assert_eq!(input.abbr.as_str(), "VDO_150C");
}

#[test]
fn placeholder_and_unknown_indices_are_rejected() {
    let mut input = InputRecord::new(1);
    assert_eq!(
        input.configure_sensor(0),
        Err(ConfigError::NotImplemented { name: "NONE" })
    );
    assert_eq!(input.configure_sensor(200), Err(ConfigError::UnknownSensor { index: 200 }));
}
