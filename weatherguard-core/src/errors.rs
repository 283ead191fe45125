//! Error Types for the Aggregation Core
//!
//! ## Design Philosophy
//!
//! Almost nothing in a weather-station window is fatal. A bounced reed switch,
//! a humidity probe that returns garbage, or a wind vane with a broken wire
//! should cost one sample, not one record. The core therefore surfaces very
//! few errors to its callers:
//!
//! 1. **Discarded samples**: validators return [`ValidationError`], but the
//!    capture routines consume it, log it, and carry on.
//!
//! 2. **Unresolvable directions**: [`DirectionError`] replaces the old `-1`
//!    sentinel so a disconnected vane can never be mistaken for an angle.
//!
//! 3. **Setup mistakes**: [`ConfigError`] is returned by
//!    [`StationConfig::validate`](crate::config::StationConfig::validate)
//!    before any sample is taken.
//!
//! 4. **Output overflow**: [`FormatError`] if a CSV line cannot fit the fixed
//!    output buffer.
//!
//! All errors are `Copy`, carry no heap data, and stay a few bytes wide so
//! they can be returned from interrupt-adjacent code without allocation.
//!
//! ## Example
//!
//! ```rust
//! use weatherguard_core::lookup::raw_to_radians;
//! use weatherguard_core::DirectionError;
//!
//! match raw_to_radians(5000) {
//!     Ok(radians) => println!("vane at {radians} rad"),
//!     Err(DirectionError::OpenCircuit { raw }) => println!("vane unplugged ({raw})"),
//!     Err(DirectionError::Unmapped { raw }) => println!("between sectors ({raw})"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Why a raw sensor value was refused by a plausible-range validator
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside the open interval `(min, max)`
    #[error("Value {value} outside range ({min}, {max})")]
    OutOfRange {
        /// The reading that failed validation
        value: f32,
        /// Exclusive lower bound
        min: f32,
        /// Exclusive upper bound
        max: f32,
    },

    /// Value makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

/// Wind-vane readings that do not resolve to a compass sector
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionError {
    /// Reading above the top of the resistor ladder; the vane is most likely
    /// disconnected
    #[error("Wind vane open circuit (raw reading {raw})")]
    OpenCircuit {
        /// Raw ADC reading
        raw: u16,
    },

    /// Reading in a gap between calibrated sector bands
    #[error("Wind vane reading {raw} matches no sector")]
    Unmapped {
        /// Raw ADC reading
        raw: u16,
    },
}

/// Invalid station configuration
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A pulse scale factor must be finite and greater than zero
    #[error("Scale '{name}' must be finite and positive, got {value}")]
    InvalidScale {
        /// Which scale was rejected
        name: &'static str,
        /// The offending value
        value: f32,
    },

    /// A plausible range has `min >= max` or a non-finite bound
    #[error("Range '{name}' is empty: ({min}, {max})")]
    EmptyRange {
        /// Which range was rejected
        name: &'static str,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },
}

/// Failure while rendering a record as text
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The rendered line did not fit the output buffer
    #[error("Formatted line exceeds {capacity} bytes")]
    Capacity {
        /// Size of the output buffer in bytes
        capacity: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside ({}, {})", value, min, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DirectionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OpenCircuit { raw } =>
                defmt::write!(fmt, "Vane open circuit ({})", raw),
            Self::Unmapped { raw } =>
                defmt::write!(fmt, "Vane reading {} unmapped", raw),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidScale { name, value } =>
                defmt::write!(fmt, "Scale {} invalid: {}", name, value),
            Self::EmptyRange { name, min, max } =>
                defmt::write!(fmt, "Range {} empty: ({}, {})", name, min, max),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FormatError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Capacity { capacity } =>
                defmt::write!(fmt, "Line exceeds {} bytes", capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_small() {
        assert!(core::mem::size_of::<ValidationError>() <= 16);
        assert!(core::mem::size_of::<DirectionError>() <= 4);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_problem() {
        let err = DirectionError::OpenCircuit { raw: 4095 };
        assert_eq!(err.to_string(), "Wind vane open circuit (raw reading 4095)");

        let err = ConfigError::EmptyRange { name: "humidity", min: 105.0, max: 0.0 };
        assert!(err.to_string().contains("humidity"));
    }
}
