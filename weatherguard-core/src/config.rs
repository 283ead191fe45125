//! Station configuration
//!
//! Everything the engine needs to turn counts and sums into physical units:
//! the two pulse scale factors and the plausible range for each polled
//! quantity. Defaults match the SparkFun weather meter kit and an outdoor
//! AM2315/MPL3115A2 pair.
//!
//! ```rust
//! use weatherguard_core::config::{PlausibleRange, StationConfig};
//!
//! let config = StationConfig::default()
//!     .with_wind_scale(2.4 / 1.609_34) // km/h anemometer, expressed in mph
//!     .with_pressure_range(PlausibleRange::new(60_000.0, 90_000.0));
//!
//! config.validate()?;
//! # Ok::<(), weatherguard_core::ConfigError>(())
//! ```

use crate::{
    constants::sensors::{
        HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, PRESSURE_MAX_PA, PRESSURE_MIN_PA,
        RAIN_SCALE_INCHES_PER_TIP, TEMP_MAX_F, TEMP_MIN_F, WIND_SCALE_MPH_PER_HZ,
    },
    errors::{ConfigError, ConfigResult},
    validators::{HumidityValidator, PressureValidator, TemperatureValidator},
};

/// Exclusive `(min, max)` window of plausible readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlausibleRange {
    /// Readings must be strictly greater than this
    pub min: f32,
    /// Readings must be strictly less than this
    pub max: f32,
}

impl PlausibleRange {
    /// Window `(min, max)`
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn check(&self, name: &'static str) -> ConfigResult<()> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(ConfigError::EmptyRange { name, min: self.min, max: self.max })
        }
    }
}

/// Scale factors and plausibility windows for one station
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationConfig {
    /// Wind speed in mph for one anemometer pulse per second
    pub wind_scale_mph_per_hz: f32,
    /// Rain in inches per bucket tip
    pub rain_scale_inches_per_tip: f32,
    /// Air temperature window in °F
    pub temperature_f: PlausibleRange,
    /// Relative humidity window in %
    pub humidity_pct: PlausibleRange,
    /// Station pressure window in Pa
    pub pressure_pa: PlausibleRange,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            wind_scale_mph_per_hz: WIND_SCALE_MPH_PER_HZ,
            rain_scale_inches_per_tip: RAIN_SCALE_INCHES_PER_TIP,
            temperature_f: PlausibleRange::new(TEMP_MIN_F, TEMP_MAX_F),
            humidity_pct: PlausibleRange::new(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT),
            pressure_pa: PlausibleRange::new(PRESSURE_MIN_PA, PRESSURE_MAX_PA),
        }
    }
}

impl StationConfig {
    /// Override the anemometer scale (mph per Hz)
    pub fn with_wind_scale(mut self, mph_per_hz: f32) -> Self {
        self.wind_scale_mph_per_hz = mph_per_hz;
        self
    }

    /// Override the rain gauge scale (inches per tip)
    pub fn with_rain_scale(mut self, inches_per_tip: f32) -> Self {
        self.rain_scale_inches_per_tip = inches_per_tip;
        self
    }

    /// Override the temperature window (°F)
    pub fn with_temperature_range(mut self, range: PlausibleRange) -> Self {
        self.temperature_f = range;
        self
    }

    /// Override the humidity window (%)
    pub fn with_humidity_range(mut self, range: PlausibleRange) -> Self {
        self.humidity_pct = range;
        self
    }

    /// Override the pressure window (Pa)
    pub fn with_pressure_range(mut self, range: PlausibleRange) -> Self {
        self.pressure_pa = range;
        self
    }

    /// Check every field, reporting the first problem found
    pub fn validate(&self) -> ConfigResult<()> {
        check_scale("wind", self.wind_scale_mph_per_hz)?;
        check_scale("rain", self.rain_scale_inches_per_tip)?;
        self.temperature_f.check("temperature")?;
        self.humidity_pct.check("humidity")?;
        self.pressure_pa.check("pressure")?;
        Ok(())
    }

    pub(crate) fn temperature_validator(&self) -> TemperatureValidator {
        TemperatureValidator::new_with_limits(self.temperature_f.min, self.temperature_f.max)
    }

    pub(crate) fn humidity_validator(&self) -> HumidityValidator {
        HumidityValidator::new_with_limits(self.humidity_pct.min, self.humidity_pct.max)
    }

    pub(crate) fn pressure_validator(&self) -> PressureValidator {
        PressureValidator::new_with_limits(self.pressure_pa.min, self.pressure_pa.max)
    }
}

fn check_scale(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScale { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.wind_scale_mph_per_hz, 1.492);
        assert_eq!(config.rain_scale_inches_per_tip, 0.011);
    }

    #[test]
    fn rejects_non_positive_scale() {
        let config = StationConfig::default().with_rain_scale(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidScale { name: "rain", value: 0.0 })
        );

        let config = StationConfig::default().with_wind_scale(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScale { name: "wind", .. })
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        let config = StationConfig::default()
            .with_humidity_range(PlausibleRange::new(105.0, 0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRange { name: "humidity", .. })
        ));
    }

    #[test]
    fn rejects_degenerate_range() {
        let config = StationConfig::default()
            .with_temperature_range(PlausibleRange::new(32.0, 32.0));
        assert!(config.validate().is_err());
    }
}
