//! Barometric pressure validation
//!
//! Station pressure in pascals. The default window (80 kPa, 110 kPa) spans
//! record lows at altitude to record highs at sea level. A barometer still
//! converting, or one that lost power, typically reports 0 Pa and is caught
//! here.
//!
//! Source: NOAA, "What are the record high and low pressures?"

use crate::{
    constants::sensors::{PRESSURE_MAX_PA, PRESSURE_MIN_PA},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Pressure validator for readings in pascals
#[derive(Debug, Clone, Copy)]
pub struct PressureValidator {
    min_pascals: f32,
    max_pascals: f32,
}

impl Default for PressureValidator {
    fn default() -> Self {
        Self {
            min_pascals: PRESSURE_MIN_PA,
            max_pascals: PRESSURE_MAX_PA,
        }
    }
}

impl PressureValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        let (min, max) = utils::ordered(min, max);

        Self {
            min_pascals: min,
            max_pascals: max,
        }
    }
}

impl Validator for PressureValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_open_range(value, self.min_pascals, self.max_pascals)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_pascals,
            max_value: self.max_pascals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_atmosphere_is_valid() {
        let validator = PressureValidator::default();
        assert!(validator.validate(101_325.0).is_ok());
    }

    #[test]
    fn unpowered_sensor_reading_is_rejected() {
        let validator = PressureValidator::default();
        assert!(validator.validate(0.0).is_err());
        assert!(validator.validate(80_000.0).is_err());
        assert!(validator.validate(110_000.0).is_err());
    }
}
