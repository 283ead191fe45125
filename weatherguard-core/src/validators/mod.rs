//! Plausible-Range Validators
//!
//! ## Overview
//!
//! A weather station sees every failure mode a cheap sensor can produce: the
//! humidity probe answers with all-zero frames when its I2C transaction is cut
//! short, the barometer reports 0 Pa while it is still converting, and a wet
//! connector drags the temperature to nonsense. None of these are worth an
//! error path; they are worth *not averaging in*.
//!
//! Each validator here checks one quantity against an **exclusive** plausible
//! range and rejects non-finite values:
//!
//! | Validator | Unit | Range |
//! |-----------|------|-------|
//! | [`TemperatureValidator`] | °F | (-50, 150) |
//! | [`HumidityValidator`] | %RH | (0, 105) |
//! | [`PressureValidator`] | Pa | (80000, 110000) |
//!
//! The accumulators in [`crate::accumulators`] own a validator and consult it
//! on every capture; rejected samples are logged and dropped.
//!
//! ## Usage Example
//!
//! ```rust
//! use weatherguard_core::validators::{HumidityValidator, PressureValidator};
//! use weatherguard_core::Validator;
//!
//! let humidity = HumidityValidator::default();
//! assert!(humidity.validate(55.0).is_ok());
//! assert!(humidity.validate(0.0).is_err()); // bounds are exclusive
//!
//! // A mountain station can tighten the pressure window
//! let alpine = PressureValidator::new_with_limits(60_000.0, 90_000.0);
//! assert!(alpine.validate(101_325.0).is_err());
//! ```

mod temperature;
mod humidity;
mod pressure;
mod utils;

pub use temperature::TemperatureValidator;
pub use humidity::HumidityValidator;
pub use pressure::PressureValidator;
pub use utils::check_open_range;
