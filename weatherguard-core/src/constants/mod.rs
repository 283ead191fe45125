//! Constants for WeatherGuard Core
//!
//! Every scale factor, conversion constant, and plausibility bound used by the
//! aggregation engine lives here with its unit in the name. The CSV consumers
//! downstream depend on several of these values bit-for-bit, so change them
//! only together with the consumers.
//!
//! ## Organization
//!
//! - **Sensors**: pulse scale factors and plausible reading ranges
//! - **Units**: conversion factors between the record's fixed-point fields and
//!   the US units printed in the CSV line
//! - **Time**: debounce window and clock units
//! - **Buffers**: reservoir and output buffer sizes

/// Sensor scale factors and plausible reading ranges.
pub mod sensors;

/// Unit conversion constants for record encoding and CSV rendering.
pub mod units;

/// Time-related constants.
pub mod time;

/// Buffer sizes for fixed-capacity storage.
pub mod buffers;

pub use sensors::{
    WIND_SCALE_MPH_PER_HZ, RAIN_SCALE_INCHES_PER_TIP,
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT,
    TEMP_MIN_F, TEMP_MAX_F,
    PRESSURE_MIN_PA, PRESSURE_MAX_PA,
};

pub use units::{
    METERS_PER_MILE, CENTIMETERS_PER_MILE, MMX1000_PER_INCH, DECI_KELVIN_AT_ZERO_C_EXACT,
    DECI_KELVIN_AT_ZERO_C_PROBE, CENTI_FAHRENHEIT_PER_KX10, CENTI_FAHRENHEIT_AT_ZERO_KX10,
    PA_PER_HPA_FIELD, HPA_FIELD_PER_INHG,
};

pub use time::{DEBOUNCE_MS, MS_PER_SECOND};

pub use buffers::{MEDIAN_WINDOW, CSV_LINE_CAPACITY};
