//! Sensor Scale Factors and Plausible Ranges
//!
//! Scale factors come from the instrument datasheets for the cup anemometer
//! and tipping-bucket rain gauge. Plausible ranges are deliberately loose: they
//! only exist to reject readings no outdoor sensor could produce (a probe that
//! lost its I2C transaction, a barometer that returned zero). All ranges are
//! exclusive on both ends.

// ===== PULSE SCALES =====

/// Wind speed for one anemometer pulse per second (mph/Hz).
///
/// The anemometer closes its reed switch twice per rotation; a steady
/// 1 Hz pulse train corresponds to 1.492 mph.
///
/// Source: SparkFun weather meter datasheet
pub const WIND_SCALE_MPH_PER_HZ: f32 = 1.492;

/// Rain collected per bucket tip (inches).
///
/// Source: SparkFun weather meter datasheet (0.2794 mm per tip)
pub const RAIN_SCALE_INCHES_PER_TIP: f32 = 0.011;

// ===== HUMIDITY =====

/// Lower bound for relative humidity (%), exclusive.
pub const HUMIDITY_MIN_PCT: f32 = 0.0;

/// Upper bound for relative humidity (%), exclusive.
///
/// Slightly above 100% because supersaturated fog readings are real.
pub const HUMIDITY_MAX_PCT: f32 = 105.0;

// ===== AIR TEMPERATURE =====

/// Lower bound for air temperature (°F), exclusive.
pub const TEMP_MIN_F: f32 = -50.0;

/// Upper bound for air temperature (°F), exclusive.
pub const TEMP_MAX_F: f32 = 150.0;

// ===== BAROMETRIC PRESSURE =====

/// Lower bound for station pressure (Pa), exclusive.
///
/// Roughly the pressure at 2000 m in a deep low.
///
/// Source: NOAA record surface pressures
pub const PRESSURE_MIN_PA: f32 = 80_000.0;

/// Upper bound for station pressure (Pa), exclusive.
///
/// Source: NOAA record surface pressures (highest recorded ~108.4 kPa)
pub const PRESSURE_MAX_PA: f32 = 110_000.0;
