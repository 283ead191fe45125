//! Sensor aggregation core for WeatherGuard stations
//!
//! Reduces a weather station's raw inputs over an accumulation window into one
//! compact record per window, plus a CSV line for the uplink.
//!
//! - Interrupt-fed wind and rain pulses, debounced, with gust tracking
//! - Polled temperature, humidity, and pressure screened against plausible
//!   ranges and averaged
//! - Wind direction averaged as a circular mean
//! - Rolling medians that ride out probe glitches
//!
//! Key constraints:
//! - `no_std` without the default `std` feature
//! - No heap allocation anywhere
//! - Interrupt handlers never block and never see a half-drained window
//!
//! ```no_run
//! use weatherguard_core::{PulseInputs, WeatherStation};
//! # use weatherguard_core::time::FixedTime;
//! # use weatherguard_core::traits::{Barometer, ThermoHygroReading, ThermoHygrometer, WindVane};
//! # struct Probe; impl ThermoHygrometer for Probe { type Error = ();
//! #   fn read_temperature_and_humidity(&mut self) -> nb::Result<ThermoHygroReading, ()> { Err(nb::Error::WouldBlock) } }
//! # struct Baro; impl Barometer for Baro { type Error = ();
//! #   fn read_pressure(&mut self) -> nb::Result<f32, ()> { Err(nb::Error::WouldBlock) } }
//! # struct Vane; impl WindVane for Vane { type Error = ();
//! #   fn read_raw(&mut self) -> nb::Result<u16, ()> { Err(nb::Error::WouldBlock) } }
//! # fn upload(_: &str) {}
//!
//! static PULSES: PulseInputs = PulseInputs::new();
//!
//! // Anemometer and rain gauge interrupts
//! fn on_anemometer(tick_ms: u32) { PULSES.on_wind_pulse(tick_ms); }
//! fn on_rain_gauge(tick_ms: u32) { PULSES.on_rain_tip(tick_ms); }
//!
//! let mut station = WeatherStation::new(&PULSES, Probe, Baro, Vane, FixedTime::new(0));
//!
//! // Every few seconds
//! station.capture_wind_vane();
//! station.capture_all();
//!
//! // Once per window
//! let record = station.build_and_reset_record();
//! if let Ok(line) = weatherguard_core::to_csv(&record) {
//!     upload(&line);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod accumulators;
pub mod buffer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod format;
pub mod lookup;
pub mod record;
pub mod station;
pub mod time;
pub mod traits;
pub mod validators;

// Public API
pub use accumulators::{PulseAccumulator, PulseInputs, PulseRate, TipCounter};
pub use buffer::MedianReservoir;
pub use config::{PlausibleRange, StationConfig};
pub use errors::{ConfigError, DirectionError, FormatError, ValidationError, ValidationResult};
pub use format::{to_csv, CsvLine, UsCsv};
pub use record::SensorRecord;
pub use station::WeatherStation;
pub use time::TimeSource;
pub use traits::{Barometer, ThermoHygroReading, ThermoHygrometer, Validator, WindVane};
pub use validators::{HumidityValidator, PressureValidator, TemperatureValidator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
