//! BME280 combined temperature, pressure and humidity sensor
//!
//! Four catalog entries share one physical device. The first read from any of
//! them probes the bus once, primary address then secondary; the outcome is
//! remembered for the life of the engine. A device that did not answer stays
//! absent and every BME280 input reads `NaN`.

use libm::powf;

use crate::constants::adc::{BME280_PRIMARY_ADDRESS, BME280_SECONDARY_ADDRESS};
use crate::constants::physics::{BAROMETRIC_EXPONENT, BAROMETRIC_SCALE_M, PA_PER_BAR, PA_PER_HPA};
use crate::errors::{defined, Fault, MeasureResult};
use crate::hal::EnvironmentalBus;

const ABSENT: Fault = Fault::DeviceAbsent { reason: "BME280 not found" };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Pending,
    Found(u8),
    Absent,
}

/// Probe outcome shared by every BME280 input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentalState {
    probe: Probe,
}

impl Default for EnvironmentalState {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentalState {
    /// Not yet probed
    pub const fn new() -> Self {
        Self { probe: Probe::Pending }
    }

    /// Address the device answered on, once probed
    pub fn address(&self) -> Option<u8> {
        match self.probe {
            Probe::Found(addr) => Some(addr),
            _ => None,
        }
    }

    /// Whether the probe has run
    pub fn probed(&self) -> bool {
        self.probe != Probe::Pending
    }

    fn ensure<E: EnvironmentalBus>(&mut self, bus: &mut E) -> Result<(), Fault> {
        if self.probe == Probe::Pending {
            self.probe = [BME280_PRIMARY_ADDRESS, BME280_SECONDARY_ADDRESS]
                .into_iter()
                .find(|addr| bus.begin(*addr))
                .map_or(Probe::Absent, Probe::Found);
            match self.probe {
                Probe::Found(addr) => log_info!("BME280 found at {}", addr),
                _ => log_warn!("BME280 not found at {} or {}", BME280_PRIMARY_ADDRESS, BME280_SECONDARY_ADDRESS),
            }
        }
        match self.probe {
            Probe::Found(_) => Ok(()),
            _ => Err(ABSENT),
        }
    }

    /// Temperature (°C)
    pub fn temperature<E: EnvironmentalBus>(&mut self, bus: &mut E) -> MeasureResult {
        self.ensure(bus)?;
        defined(bus.temperature_c())
    }

    /// Absolute pressure (bar)
    pub fn pressure_bar<E: EnvironmentalBus>(&mut self, bus: &mut E) -> MeasureResult {
        self.ensure(bus)?;
        defined(bus.pressure_pa() / PA_PER_BAR)
    }

    /// Relative humidity (%)
    pub fn humidity<E: EnvironmentalBus>(&mut self, bus: &mut E) -> MeasureResult {
        self.ensure(bus)?;
        defined(bus.humidity_pct())
    }

    /// Pressure altitude (m) against `sea_level_hpa`
    pub fn elevation<E: EnvironmentalBus>(&mut self, sea_level_hpa: f32, bus: &mut E) -> MeasureResult {
        self.ensure(bus)?;
        let hpa = bus.pressure_pa() / PA_PER_HPA;
        defined(pressure_altitude(hpa, sea_level_hpa))
    }
}

/// International barometric formula, `NaN` for non-positive pressures
pub fn pressure_altitude(hpa: f32, sea_level_hpa: f32) -> f32 {
    if hpa.is_nan() || hpa <= 0.0 || sea_level_hpa.is_nan() || sea_level_hpa <= 0.0 {
        return f32::NAN;
    }
    BAROMETRIC_SCALE_M * (1.0 - powf(hpa / sea_level_hpa, BAROMETRIC_EXPONENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MockBoard;

    #[test]
    fn probes_primary_then_secondary_once() {
        let mut board = MockBoard::new();
        board.attach_environmental(0x77);
        let mut env = EnvironmentalState::new();

        assert_eq!(env.temperature(&mut board), Ok(20.0));
        assert_eq!(env.address(), Some(0x77));
        assert_eq!(board.env_probes, 2);

        env.humidity(&mut board).unwrap();
        assert_eq!(board.env_probes, 2);
    }

    #[test]
    fn absent_device_is_not_reprobed() {
        let mut board = MockBoard::new();
        let mut env = EnvironmentalState::new();
        assert_eq!(env.temperature(&mut board), Err(ABSENT));
        assert!(env.probed());

        board.attach_environmental(0x76);
        assert_eq!(env.pressure_bar(&mut board), Err(ABSENT));
        assert_eq!(board.env_probes, 2);
    }

    #[test]
    fn pressure_in_bar() {
        let mut board = MockBoard::new();
        board.attach_environmental(0x76);
        let mut env = EnvironmentalState::new();
        let bar = env.pressure_bar(&mut board).unwrap();
        assert!((bar - 1.01325).abs() < 1e-5);
        assert_eq!(board.env_probes, 1);
    }

    #[test]
    fn sea_level_reads_zero_elevation() {
        let mut board = MockBoard::new();
        board.attach_environmental(0x76);
        let mut env = EnvironmentalState::new();
        let m = env.elevation(1013.25, &mut board).unwrap();
        assert!(m.abs() < 0.01);
    }

    #[test]
    fn altitude_formula() {
        // 900 hPa is roughly 990 m in the standard atmosphere
        let m = pressure_altitude(900.0, 1013.25);
        assert!((m - 988.5).abs() < 5.0, "got {m}");
        assert!(pressure_altitude(0.0, 1013.25).is_nan());
    }
}
