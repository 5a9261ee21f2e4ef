//! Numeric conversion models
//!
//! Pure functions from an electrical quantity to an engineering value. They
//! are total: inputs with no meaningful answer give `NaN`, never a panic.
//! Range checking is not their job; the engine applies the sensor's declared
//! band afterwards.
//!
//! | Model       | Input        | Output |
//! |-------------|--------------|--------|
//! | linear      | pin voltage  | any    |
//! | polynomial  | resistance   | bar    |
//! | table       | resistance   | any    |
//! | thermistor  | resistance   | °C     |
//! | voltage     | pin voltage  | V      |

pub mod linear;
pub mod polynomial;
pub mod table;
pub mod thermistor;
pub mod voltage;
