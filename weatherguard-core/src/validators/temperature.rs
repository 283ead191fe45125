//! Air temperature validation
//!
//! The station averages temperature in °F, so the validator works in °F as
//! well. The default window (-50 °F, 150 °F) covers every inhabited climate
//! with margin; readings outside it come from a failed probe, not weather.

use crate::{
    constants::sensors::{TEMP_MAX_F, TEMP_MIN_F},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Temperature validator for Fahrenheit readings
#[derive(Debug, Clone, Copy)]
pub struct TemperatureValidator {
    /// Exclusive lower bound in °F
    min_fahrenheit: f32,

    /// Exclusive upper bound in °F
    max_fahrenheit: f32,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self {
            min_fahrenheit: TEMP_MIN_F,
            max_fahrenheit: TEMP_MAX_F,
        }
    }
}

impl TemperatureValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = utils::ordered(min, max);

        Self {
            min_fahrenheit: min,
            max_fahrenheit: max,
        }
    }
}

impl Validator for TemperatureValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_open_range(value, self.min_fahrenheit, self.max_fahrenheit)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_fahrenheit,
            max_value: self.max_fahrenheit,
        }
    }
}
