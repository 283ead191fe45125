//! Shared validation helpers
//!
//! Pure functions with no side effects, safe to call from any context.

use crate::{
    errors::{ValidationError, ValidationResult},
    traits::Validatable,
};

/// Check that `value` is finite and lies strictly between `min` and `max`
pub fn check_open_range(value: f32, min: f32, max: f32) -> ValidationResult<()> {
    if !value.is_valid() {
        return Err(ValidationError::InvalidValue);
    }

    if value > min && value < max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { value, min, max })
    }
}

/// Order a pair of bounds so that `min <= max`
pub(crate) fn ordered(min: f32, max: f32) -> (f32, f32) {
    if min > max { (max, min) } else { (min, max) }
}
