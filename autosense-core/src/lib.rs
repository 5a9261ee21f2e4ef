//! Sensor acquisition and calibration engine for automotive gauges
//!
//! Turns raw hardware readings (ADC counts, SPI frames, I²C values, pulse
//! periods) into physical quantities in base units. Downstream consumers
//! (CAN encoders, loggers, displays, alarms) only ever see an `f32` per
//! input; `NaN` means "no trustworthy value".
//!
//! Key constraints:
//! - `no_std`, no heap
//! - Pulse capture safe on cores without atomic read-modify-write
//! - Every fault degrades to `NaN`, nothing panics on the read path
//!
//! ```no_run
//! use autosense_core::{hal::MockBoard, registry, InputBank, InputRecord, SensorEngine};
//!
//! let mut board = MockBoard::new();
//! let mut engine = SensorEngine::default();
//! let mut bank: InputBank<8> = InputBank::new();
//!
//! let mut oil = InputRecord::new(2);
//! oil.configure_sensor(registry::index_by_name("VDO_5BAR_CURVE")).unwrap();
//! bank.add(oil).unwrap();
//!
//! bank.init_all(&mut engine, &mut board);
//! bank.poll(&mut engine, &mut board);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod adc;
pub mod calibration;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod frequency;
pub mod hal;
pub mod input;
pub mod models;
pub mod registry;
pub mod sensors;
pub mod units;

// Public API
pub use calibration::{CalibrationKind, CalibrationRecord};
pub use config::PlatformConfig;
pub use engine::SensorEngine;
pub use errors::{ConfigError, ConfigResult, Fault, MeasureResult};
pub use input::{InputBank, InputRecord};
pub use registry::{Category, MeasurementKind, SensorDescriptor};
pub use sensors::Driver;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
