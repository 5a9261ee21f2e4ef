//! Typical gauge configurations

use super::Rig;

/// Slots of the dashboard rig
pub struct Dashboard {
    pub oil_pressure: usize,
    pub coolant: usize,
    pub boost: usize,
    pub battery: usize,
    pub egt: usize,
    pub coolant_level: usize,
}

/// Six inputs covering analog, SPI and digital drivers
///
/// Every analog pin starts at a mid-scale reading and the thermocouple frame
/// reads 25 °C.
pub fn dashboard() -> (Rig, Dashboard) {
    let mut rig = Rig::new();
    let slots = Dashboard {
        oil_pressure: rig.add(0, "VDO_5BAR_CURVE"),
        coolant: rig.add(1, "VDO_120C_TABLE"),
        boost: rig.add(2, "GENERIC_BOOST"),
        battery: rig.add(3, "VOLTAGE_DIVIDER"),
        egt: rig.add(10, "MAX31855"),
        coolant_level: rig.add(11, "FLOAT_SWITCH"),
    };
    rig.board.set_analog(0, 78);
    rig.board.set_analog(1, 90);
    rig.board.set_analog(2, 512);
    rig.board.set_analog(3, 450);
    rig.board.set_spi_word32(100 << 18);
    (rig, slots)
}
