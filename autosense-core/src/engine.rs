//! Acquisition engine
//!
//! Owns the state that is shared between inputs rather than held by one: the
//! platform description, the pulse counters fed by the edge interrupts, and
//! the environmental bus probe. One read is:
//!
//! ```text
//! descriptor ─► driver.read ─► range check ─► input.value
//!                   │               │
//!                   └── Fault ──────┴──► NaN + diagnostic
//! ```

use crate::config::PlatformConfig;
use crate::errors::{Fault, MeasureResult};
use crate::frequency::{PulseChannel, PulseCounter, RPM_PULSES, SPEED_PULSES};
use crate::hal::Board;
use crate::input::InputRecord;
use crate::sensors::EnvironmentalState;

/// Shared acquisition state
#[derive(Debug)]
pub struct SensorEngine {
    /// Board description used by every conversion
    pub platform: PlatformConfig,
    rpm_pulses: &'static PulseCounter,
    speed_pulses: &'static PulseCounter,
    pub(crate) environmental: EnvironmentalState,
}

impl Default for SensorEngine {
    fn default() -> Self {
        Self::new(PlatformConfig::default())
    }
}

impl SensorEngine {
    /// Engine fed by the process-wide edge handlers
    pub fn new(platform: PlatformConfig) -> Self {
        Self::with_counters(platform, &RPM_PULSES, &SPEED_PULSES)
    }

    /// Engine reading its own counters, for boards that route edges themselves
    pub fn with_counters(
        platform: PlatformConfig,
        rpm_pulses: &'static PulseCounter,
        speed_pulses: &'static PulseCounter,
    ) -> Self {
        Self {
            platform,
            rpm_pulses,
            speed_pulses,
            environmental: EnvironmentalState::new(),
        }
    }

    /// Counter behind `channel`
    pub fn counter(&self, channel: PulseChannel) -> &'static PulseCounter {
        match channel {
            PulseChannel::Rpm => self.rpm_pulses,
            PulseChannel::Speed => self.speed_pulses,
        }
    }

    /// Environmental bus probe state
    pub fn environmental(&self) -> &EnvironmentalState {
        &self.environmental
    }

    /// Prepare the input's pin for its driver
    pub fn init<B: Board>(&mut self, input: &mut InputRecord, board: &mut B) {
        let Some(descriptor) = input.descriptor() else {
            return;
        };
        descriptor.driver.init(input, board);
        input.flags.initialized = true;
        log_info!("{} on pin {} as {}", input.abbr.as_str(), input.pin, descriptor.name);
    }

    /// Take one measurement and store it on the input
    ///
    /// The input's value is always written: the measurement on success, `NaN`
    /// on any fault. The fault is also returned for callers that want it.
    pub fn read<B: Board>(&mut self, input: &mut InputRecord, board: &mut B) -> MeasureResult {
        let result = match input.descriptor() {
            Some(descriptor) => descriptor
                .driver
                .read(self, input, descriptor, board)
                .and_then(|value| {
                    if descriptor.in_range(value) {
                        Ok(value)
                    } else {
                        Err(Fault::OutOfRange {
                            value,
                            min: descriptor.min_value,
                            max: descriptor.max_value,
                        })
                    }
                }),
            None => Err(Fault::DeviceAbsent { reason: "no sensor assigned" }),
        };

        match result {
            Ok(value) => input.value = value,
            Err(fault) => {
                input.value = f32::NAN;
                log_debug!("{}: {}", input.abbr.as_str(), fault);
            }
        }
        result
    }
}
