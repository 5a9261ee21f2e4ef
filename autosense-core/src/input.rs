//! Input records and the input bank
//!
//! An [`InputRecord`] is one physical input: a pin, the catalog index of the
//! sensor wired to it, the latest value and a little per-input state. The
//! poll loop owns every record; nothing else writes to one.
//!
//! ```
//! use autosense_core::{InputRecord, registry};
//!
//! let mut oil = InputRecord::new(2);
//! oil.configure_sensor(registry::index_by_name("VDO_5BAR_CURVE")).unwrap();
//! assert!(oil.value.is_nan());
//! assert!(oil.flags.enabled);
//! ```

use heapless::{String, Vec};

use crate::calibration::CalibrationRecord;
use crate::engine::SensorEngine;
use crate::errors::{ConfigError, ConfigResult};
use crate::frequency::PulseWatch;
use crate::hal::Board;
use crate::registry::{self, SensorDescriptor, SENSOR_COUNT};
use crate::units;

#[cfg(not(feature = "static-config"))]
use crate::constants::adc::BUS_PIN_BASE;
#[cfg(not(feature = "static-config"))]
use crate::registry::PinKind;

/// Maximum length of an input abbreviation
pub const ABBR_LEN: usize = 8;

/// Per-input switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputFlags {
    /// Input takes part in polling
    pub enabled: bool,
    /// `custom_calibration` overrides the sensor's preset
    pub use_custom_calibration: bool,
    /// The driver's init has run since the sensor was assigned
    pub initialized: bool,
}

/// One configured input
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    /// Physical pin, or `0xF0 + n` for bus slot `n`
    pub pin: u8,
    /// Catalog index of the attached sensor, 0 for none
    pub sensor_index: u8,
    /// Latest value in base units, `NaN` when invalid
    pub value: f32,
    /// Display units index
    pub units_index: u8,
    /// Short display name
    pub abbr: String<ABBR_LEN>,
    /// Switches
    pub flags: InputFlags,
    /// Runtime calibration override
    pub custom_calibration: Option<CalibrationRecord>,
    /// `millis()` at the last read
    pub last_read_ms: Option<u32>,
    /// Pulse staleness tracking for frequency sensors
    pub pulse_watch: PulseWatch,
}

impl InputRecord {
    /// Empty input on `pin`
    pub fn new(pin: u8) -> Self {
        Self {
            pin,
            sensor_index: 0,
            value: f32::NAN,
            units_index: 0,
            abbr: String::new(),
            flags: InputFlags::default(),
            custom_calibration: None,
            last_read_ms: None,
            pulse_watch: PulseWatch::default(),
        }
    }

    /// Descriptor of the attached sensor
    pub fn descriptor(&self) -> Option<&'static SensorDescriptor> {
        registry::sensor_info(self.sensor_index)
    }

    /// Attach the sensor at catalog `index`
    ///
    /// Resets the value, selects the measurement's base units, drops any
    /// custom calibration and enables the input. The driver's init runs on
    /// the next poll.
    pub fn configure_sensor(&mut self, index: u8) -> ConfigResult<()> {
        let descriptor = registry::sensor_info(index).ok_or_else(|| {
            if (index as usize) < SENSOR_COUNT {
                ConfigError::NotImplemented { name: registry::name_of(index).unwrap_or("") }
            } else {
                ConfigError::UnknownSensor { index }
            }
        })?;

        check_pin(self.pin, descriptor)?;

        self.sensor_index = index;
        self.value = f32::NAN;
        self.units_index = units::default_units_for(descriptor.measurement);
        self.custom_calibration = None;
        self.flags = InputFlags { enabled: true, use_custom_calibration: false, initialized: false };
        self.last_read_ms = None;
        self.pulse_watch = PulseWatch::default();
        if self.abbr.is_empty() {
            self.set_abbr(descriptor.name);
        }
        log_debug!("pin {} configured as {}", self.pin, descriptor.name);
        Ok(())
    }

    /// Override the sensor's calibration
    pub fn set_custom_calibration(&mut self, record: CalibrationRecord) -> ConfigResult<()> {
        let descriptor = self
            .descriptor()
            .ok_or(ConfigError::UnknownSensor { index: self.sensor_index })?;
        if record.kind() != descriptor.calibration {
            return Err(ConfigError::CalibrationKindMismatch {
                expected: descriptor.calibration.name(),
                offered: record.kind().name(),
            });
        }
        self.custom_calibration = Some(record);
        self.flags.use_custom_calibration = true;
        Ok(())
    }

    /// Return to the preset or model default
    pub fn clear_custom_calibration(&mut self) {
        self.custom_calibration = None;
        self.flags.use_custom_calibration = false;
    }

    /// Custom calibration if it is switched on
    pub fn active_custom_calibration(&self) -> Option<&CalibrationRecord> {
        self.custom_calibration
            .as_ref()
            .filter(|_| self.flags.use_custom_calibration)
    }

    /// Choose display units, which must belong to the sensor's measurement
    pub fn set_units(&mut self, index: u8) -> ConfigResult<()> {
        let measurement = self.descriptor().map(|d| d.measurement);
        match units::units(index) {
            Some(u) if Some(u.measurement) == measurement => {
                self.units_index = index;
                Ok(())
            }
            _ => Err(ConfigError::UnknownUnits { index }),
        }
    }

    /// Include or exclude the input from polling
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.enabled = enabled;
    }

    /// Set the display name, truncated to [`ABBR_LEN`] bytes on a char boundary
    pub fn set_abbr(&mut self, abbr: &str) {
        self.abbr.clear();
        for c in abbr.chars() {
            if self.abbr.push(c).is_err() {
                break;
            }
        }
    }

    /// Latest value in the selected display units
    pub fn display_value(&self) -> f32 {
        units::convert_from_base(self.value, self.units_index)
    }

    /// Whether the latest value is usable
    pub fn is_valid(&self) -> bool {
        !self.value.is_nan()
    }

    /// Whether the input should be read at `now_ms`
    pub fn is_due(&self, now_ms: u32, min_interval_ms: u16) -> bool {
        match self.last_read_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= min_interval_ms as u32,
        }
    }
}

#[cfg(not(feature = "static-config"))]
fn check_pin(pin: u8, descriptor: &SensorDescriptor) -> ConfigResult<()> {
    let required = descriptor.pin_kind;
    let on_bus = pin >= BUS_PIN_BASE;
    let ok = match required {
        PinKind::Bus => on_bus,
        PinKind::Analog | PinKind::Digital => !on_bus,
    };
    if ok {
        Ok(())
    } else {
        Err(ConfigError::PinKindMismatch { pin, required: required.name() })
    }
}

#[cfg(feature = "static-config")]
fn check_pin(_pin: u8, _descriptor: &SensorDescriptor) -> ConfigResult<()> {
    Ok(())
}

/// Fixed-capacity set of inputs polled together
#[derive(Debug, Clone, Default)]
pub struct InputBank<const N: usize> {
    inputs: Vec<InputRecord, N>,
}

impl<const N: usize> InputBank<N> {
    /// Empty bank
    pub const fn new() -> Self {
        Self { inputs: Vec::new() }
    }

    /// Append an input, returning its slot
    pub fn add(&mut self, input: InputRecord) -> ConfigResult<usize> {
        self.inputs
            .push(input)
            .map_err(|_| ConfigError::BankFull { capacity: N })?;
        Ok(self.inputs.len() - 1)
    }

    /// Input in `slot`
    pub fn get(&self, slot: usize) -> Option<&InputRecord> {
        self.inputs.get(slot)
    }

    /// Input in `slot`, mutably
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut InputRecord> {
        self.inputs.get_mut(slot)
    }

    /// Input on `pin`
    pub fn find_pin(&self, pin: u8) -> Option<&InputRecord> {
        self.inputs.iter().find(|i| i.pin == pin)
    }

    /// All inputs in slot order
    pub fn iter(&self) -> core::slice::Iter<'_, InputRecord> {
        self.inputs.iter()
    }

    /// Number of inputs
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Bank has no inputs
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Run every enabled input's driver init
    pub fn init_all<B: Board>(&mut self, engine: &mut SensorEngine, board: &mut B) {
        for input in self.inputs.iter_mut().filter(|i| i.flags.enabled && i.sensor_index != 0) {
            engine.init(input, board);
        }
    }

    /// Read every enabled input whose interval has elapsed, returning how many were read
    pub fn poll<B: Board>(&mut self, engine: &mut SensorEngine, board: &mut B) -> usize {
        let now_ms = board.millis();
        let mut read = 0;
        for input in self.inputs.iter_mut() {
            if !input.flags.enabled {
                continue;
            }
            let Some(descriptor) = registry::sensor_info(input.sensor_index) else {
                continue;
            };
            if !input.is_due(now_ms, descriptor.min_read_interval_ms) {
                continue;
            }
            if !input.flags.initialized {
                engine.init(input, board);
            }
            let _ = engine.read(input, board);
            input.last_read_ms = Some(now_ms);
            read += 1;
        }
        read
    }
}

impl<'a, const N: usize> IntoIterator for &'a InputBank<N> {
    type Item = &'a InputRecord;
    type IntoIter = core::slice::Iter<'a, InputRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.inputs.iter()
    }
}
