//! Unit Conversion Constants
//!
//! The record stores compact fixed-point values (meters/hour, mm×1000,
//! deci-Kelvin, Pa/10); the CSV line prints US units. These are the exact
//! factors existing consumers were built against.

/// Meters per statute mile, as used for mph ⇄ meters/hour.
pub const METERS_PER_MILE: f32 = 1609.34;

/// Centimeters per statute mile; [`METERS_PER_MILE`] as an exact integer.
pub const CENTIMETERS_PER_MILE: u32 = 160_934;

/// Thousandths of a millimeter per inch.
pub const MMX1000_PER_INCH: u32 = 25_400;

/// 0 °C in deci-Kelvin, used when encoding the mean °F into the record.
pub const DECI_KELVIN_AT_ZERO_C_EXACT: f32 = 2731.5;

/// 0 °C in deci-Kelvin as applied to raw probe readings feeding the
/// temperature median (rounded to whole deci-Kelvin).
pub const DECI_KELVIN_AT_ZERO_C_PROBE: f32 = 2732.0;

/// Divisor from the pressure mean in Pa to the record's pressure field.
pub const PA_PER_HPA_FIELD: f32 = 10.0;

/// Hundredths of a °F per deci-Kelvin (9/50 scaled by 100).
pub const CENTI_FAHRENHEIT_PER_KX10: i32 = 18;

/// Hundredths of a °F at 0 dK: `(0 - 2731.5) * 18 + 3200`.
pub const CENTI_FAHRENHEIT_AT_ZERO_KX10: i32 = -45_967;

/// Divisor from the record's pressure field to inches of mercury.
pub const HPA_FIELD_PER_INHG: f64 = 338.6389;
