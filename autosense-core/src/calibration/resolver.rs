//! Calibration resolution
//!
//! Picks exactly one parameter source per read:
//!
//! ```text
//! custom flag set ∧ custom record present ∧ tag matches  → Custom
//! preset present ∧ tag matches                            → Preset
//! model has hard-coded parameters                         → Default
//! otherwise                                               → None (reads NaN)
//! ```
//!
//! A record whose tag disagrees with the sensor's calibration kind is skipped,
//! never reinterpreted.

use crate::calibration::{
    BetaCalibration, CalibrationKind, CalibrationRecord, DividerCalibration,
    LinearCalibration, PolynomialCalibration, RpmCalibration, SpeedCalibration,
    SteinhartCalibration, TableCalibration,
};
use crate::config::PlatformConfig;
use crate::input::InputRecord;
use crate::registry::SensorDescriptor;

/// Where the parameters of a read came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationSource {
    /// Runtime override on the input
    Custom,
    /// Compiled-in preset of the sensor
    Preset,
    /// Model's hard-coded parameters
    Default,
}

/// Resolved parameters and their origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<P> {
    /// The parameters to use
    pub params: P,
    /// Which source supplied them
    pub source: CalibrationSource,
}

/// A parameter set that can be pulled out of a [`CalibrationRecord`]
pub trait CalibrationParams: Copy {
    /// Pull the payload out if `record` is of kind `kind` and carries this type
    fn extract(record: &CalibrationRecord, kind: CalibrationKind) -> Option<Self>;

    /// Model defaults, `None` for models that cannot run without calibration
    fn fallback(_platform: &PlatformConfig) -> Option<Self> {
        None
    }
}

/// Resolve parameters for `input` reading through `descriptor`
pub fn resolve<P: CalibrationParams>(
    input: &InputRecord,
    descriptor: &SensorDescriptor,
    platform: &PlatformConfig,
) -> Option<Resolved<P>> {
    resolve_from(
        input.active_custom_calibration(),
        descriptor.preset,
        descriptor.calibration,
        platform,
    )
}

/// Resolve from explicit sources
pub fn resolve_from<P: CalibrationParams>(
    custom: Option<&CalibrationRecord>,
    preset: Option<&CalibrationRecord>,
    kind: CalibrationKind,
    platform: &PlatformConfig,
) -> Option<Resolved<P>> {
    let matching = |record: Option<&CalibrationRecord>| {
        record
            .filter(|r| r.kind() == kind)
            .and_then(|r| P::extract(r, kind))
    };

    if let Some(params) = matching(custom) {
        return Some(Resolved { params, source: CalibrationSource::Custom });
    }
    if let Some(params) = matching(preset) {
        return Some(Resolved { params, source: CalibrationSource::Preset });
    }
    P::fallback(platform).map(|params| Resolved { params, source: CalibrationSource::Default })
}

impl CalibrationParams for LinearCalibration {
    fn extract(record: &CalibrationRecord, _kind: CalibrationKind) -> Option<Self> {
        match record {
            CalibrationRecord::Linear(cal) => Some(*cal),
            _ => None,
        }
    }

    fn fallback(_platform: &PlatformConfig) -> Option<Self> {
        Some(Self::DEFAULT)
    }
}

impl CalibrationParams for PolynomialCalibration {
    fn extract(record: &CalibrationRecord, _kind: CalibrationKind) -> Option<Self> {
        match record {
            CalibrationRecord::PolynomialQuadratic(cal) => Some(*cal),
            _ => None,
        }
    }
}

impl CalibrationParams for TableCalibration {
    fn extract(record: &CalibrationRecord, kind: CalibrationKind) -> Option<Self> {
        match (record, kind) {
            (CalibrationRecord::ThermistorTable(cal), CalibrationKind::ThermistorTable)
            | (CalibrationRecord::PressureTable(cal), CalibrationKind::PressureTable) => Some(*cal),
            _ => None,
        }
    }
}

impl CalibrationParams for SteinhartCalibration {
    fn extract(record: &CalibrationRecord, _kind: CalibrationKind) -> Option<Self> {
        match record {
            CalibrationRecord::ThermistorSteinhart(cal) => Some(*cal),
            _ => None,
        }
    }

    fn fallback(_platform: &PlatformConfig) -> Option<Self> {
        Some(Self::DEFAULT)
    }
}

impl CalibrationParams for BetaCalibration {
    fn extract(record: &CalibrationRecord, _kind: CalibrationKind) -> Option<Self> {
        match record {
            CalibrationRecord::ThermistorBeta(cal) => Some(*cal),
            _ => None,
        }
    }

    fn fallback(_platform: &PlatformConfig) -> Option<Self> {
        Some(Self::DEFAULT)
    }
}

impl CalibrationParams for DividerCalibration {
    fn extract(record: &CalibrationRecord, _kind: CalibrationKind) -> Option<Self> {
        match record {
            CalibrationRecord::VoltageDivider(cal) => Some(*cal),
            _ => None,
        }
    }

    fn fallback(platform: &PlatformConfig) -> Option<Self> {
        Some(Self::from_ratio(platform.voltage_divider_ratio))
    }
}

impl CalibrationParams for RpmCalibration {
    fn extract(record: &CalibrationRecord, _kind: CalibrationKind) -> Option<Self> {
        match record {
            CalibrationRecord::Rpm(cal) => Some(*cal),
            _ => None,
        }
    }

    fn fallback(_platform: &PlatformConfig) -> Option<Self> {
        Some(Self::DEFAULT)
    }
}

impl CalibrationParams for SpeedCalibration {
    fn extract(record: &CalibrationRecord, _kind: CalibrationKind) -> Option<Self> {
        match record {
            CalibrationRecord::Speed(cal) => Some(*cal),
            _ => None,
        }
    }

    fn fallback(_platform: &PlatformConfig) -> Option<Self> {
        Some(Self::DEFAULT)
    }
}
