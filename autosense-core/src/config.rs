//! Runtime platform configuration
//!
//! Board geometry that the conversion models need but that differs between
//! targets: converter resolution, reference voltage, the battery divider,
//! local sea level pressure and float switch wiring.
//!
//! ```
//! use autosense_core::PlatformConfig;
//!
//! let board = PlatformConfig::rp2040_3v3();
//! assert_eq!(board.adc_max, 4095);
//! assert!((board.aref_voltage - 3.3).abs() < 1e-6);
//! ```

use crate::constants::adc::{
    DEFAULT_ADC_MAX, DEFAULT_AREF_VOLTAGE, DEFAULT_VOLTAGE_DIVIDER_RATIO,
};
use crate::constants::physics::SEA_LEVEL_PRESSURE_HPA;

/// Board-level parameters shared by every input
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformConfig {
    /// Full-scale ADC count (1023 for 10-bit, 4095 for 12-bit)
    pub adc_max: u16,

    /// ADC reference voltage (V)
    pub aref_voltage: f32,

    /// Battery divider ratio `(R1 + R2) / R2` used when no divider calibration exists
    pub voltage_divider_ratio: f32,

    /// Local sea level pressure for elevation (hPa)
    pub sea_level_pressure_hpa: f32,

    /// Normally-open float switch: float up reads from a low pin
    pub float_switch_inverted: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::avr_5v()
    }
}

impl PlatformConfig {
    /// 10-bit converter referenced to 5 V (ATmega boards)
    pub const fn avr_5v() -> Self {
        Self {
            adc_max: DEFAULT_ADC_MAX,
            aref_voltage: DEFAULT_AREF_VOLTAGE,
            voltage_divider_ratio: DEFAULT_VOLTAGE_DIVIDER_RATIO,
            sea_level_pressure_hpa: SEA_LEVEL_PRESSURE_HPA,
            float_switch_inverted: false,
        }
    }

    /// 12-bit converter referenced to 3.3 V (RP2040, STM32)
    pub const fn rp2040_3v3() -> Self {
        Self {
            adc_max: 4095,
            aref_voltage: 3.3,
            // 30 V onto 3.3 V needs roughly 10:1
            voltage_divider_ratio: 10.0,
            sea_level_pressure_hpa: SEA_LEVEL_PRESSURE_HPA,
            float_switch_inverted: false,
        }
    }

    /// Same board with a different local sea level pressure
    pub const fn with_sea_level_pressure(mut self, hpa: f32) -> Self {
        self.sea_level_pressure_hpa = hpa;
        self
    }

    /// Same board with the float switch polarity flipped
    pub const fn with_inverted_float_switch(mut self, inverted: bool) -> Self {
        self.float_switch_inverted = inverted;
        self
    }

    /// Volts represented by one raw ADC count
    pub fn volts_per_count(&self) -> f32 {
        self.aref_voltage / self.adc_max as f32
    }

    /// Convert a raw ADC count to volts at the pin
    pub fn counts_to_volts(&self, raw: u16) -> f32 {
        raw as f32 * self.volts_per_count()
    }
}
