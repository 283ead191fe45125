//! Relative humidity validation
//!
//! Capacitive probes report slightly above 100 %RH in fog, so the upper bound
//! sits at 105 %. Exactly 0 % is what a probe emits when its frame is empty,
//! which is why the lower bound is exclusive.

use crate::{
    constants::sensors::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Humidity validator for relative humidity percentage
#[derive(Debug, Clone, Copy)]
pub struct HumidityValidator {
    min_percent: f32,
    max_percent: f32,
}

impl Default for HumidityValidator {
    fn default() -> Self {
        Self {
            min_percent: HUMIDITY_MIN_PCT,
            // Allow supersaturation readings in fog/mist
            max_percent: HUMIDITY_MAX_PCT,
        }
    }
}

impl HumidityValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        let (min, max) = utils::ordered(min, max);

        Self {
            min_percent: min,
            max_percent: max,
        }
    }

    /// Validator that rejects anything at or above 100 %RH
    pub fn strict() -> Self {
        Self {
            min_percent: HUMIDITY_MIN_PCT,
            max_percent: 100.0,
        }
    }
}

impl Validator for HumidityValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_open_range(value, self.min_percent, self.max_percent)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_percent,
            max_value: self.max_percent,
        }
    }
}
