//! Core traits
//!
//! Two families live here:
//! - Sensor capabilities the engine consumes. Drivers for the actual chips
//!   implement these; tests substitute fakes.
//! - The validator interface used to screen raw readings before they reach an
//!   accumulator.
//!
//! Sensor reads return [`nb::Result`]: `WouldBlock` means the device has no
//! fresh sample yet and the capture is simply skipped this poll. `Other`
//! means the device itself flagged the reading as bad.

use crate::errors::ValidationResult;

/// One combined reading from a temperature/humidity probe
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThermoHygroReading {
    /// Air temperature in °C
    pub celsius: f32,
    /// Relative humidity in %
    pub humidity_pct: f32,
}

/// Temperature and relative-humidity probe (AM2315 class)
pub trait ThermoHygrometer {
    /// Driver error, including the probe's own "reading invalid" flag
    type Error;

    /// Read temperature and humidity in one transaction
    fn read_temperature_and_humidity(&mut self) -> nb::Result<ThermoHygroReading, Self::Error>;
}

/// Barometric pressure sensor (MPL3115A2 class)
pub trait Barometer {
    /// Driver error
    type Error;

    /// Station pressure in pascals
    fn read_pressure(&mut self) -> nb::Result<f32, Self::Error>;
}

/// Analog wind-vane position
pub trait WindVane {
    /// ADC error
    type Error;

    /// Raw ADC reading of the vane's resistor ladder
    fn read_raw(&mut self) -> nb::Result<u16, Self::Error>;
}

/// Validator for one kind of raw reading
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Check a single reading
    fn validate(&self, value: Self::Value) -> ValidationResult<()>;

    /// Physical constraints enforced by this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Plausibility bounds for a validator, both exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Readings must be strictly greater than this
    pub min_value: f32,

    /// Readings must be strictly less than this
    pub max_value: f32,
}

/// Values that can be checked for mathematical validity
pub trait Validatable {
    /// False for NaN and infinities
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
