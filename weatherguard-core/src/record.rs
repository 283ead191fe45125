//! The per-window sensor record and its fixed-point encodings
//!
//! A record is what leaves the station once per window. Its fields are small
//! integers in unusual units (meters per hour, thousandths of a millimeter,
//! deci-Kelvin) so the whole record packs into a few bytes for the uplink.
//!
//! ## Rounding
//!
//! Every integer field is the **ceiling** of its floating-point source, then
//! saturated into the field's width. The upward bias is part of the format:
//! downstream consumers were calibrated against it, so it is reproduced here
//! rather than corrected to round-to-nearest.
//!
//! The encoders and their inverses are free functions so both directions can
//! be tested without building a station. Decoders return `f64`; the CSV
//! renderer works from the exact integer ratios instead.

use crate::constants::units::{
    CENTIMETERS_PER_MILE, CENTI_FAHRENHEIT_AT_ZERO_KX10, CENTI_FAHRENHEIT_PER_KX10,
    DECI_KELVIN_AT_ZERO_C_EXACT, DECI_KELVIN_AT_ZERO_C_PROBE, HPA_FIELD_PER_INHG, METERS_PER_MILE,
    MMX1000_PER_INCH, PA_PER_HPA_FIELD,
};

/// One window's worth of station data
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorRecord {
    /// RTC time the record was built (unix seconds)
    pub unix_time: u32,
    /// Mean wind direction (whole degrees)
    pub wind_degrees: u16,
    /// Mean wind speed (meters per hour)
    pub wind_metersph: u16,
    /// Median relative humidity (%)
    pub humidity: u8,
    /// Mean air temperature (deci-Kelvin)
    pub air_temp_kx10: u16,
    /// Rain this window (mm × 1000)
    pub rain_mmx1000: u16,
    /// Mean station pressure in Pa / 10
    pub barometer_hpa: f32,
    /// Gust speed (meters per hour)
    pub gust_metersph: u16,
    /// Supply voltage (mV); not measured by the core
    pub millivolts: u16,
    /// Light level (lux); not measured by the core
    pub lux: u16,
}

/// Ceiling of `value` saturated into `u16` (NaN maps to 0)
pub fn ceil_u16(value: f32) -> u16 {
    // Float-to-int `as` casts saturate
    libm::ceilf(value) as u16
}

/// Ceiling of `value` saturated into `u8` (NaN maps to 0)
pub fn ceil_u8(value: f32) -> u8 {
    libm::ceilf(value) as u8
}

/// mph → meters per hour, rounded up
pub fn mph_to_metersph(mph: f32) -> u16 {
    ceil_u16(mph * METERS_PER_MILE)
}

/// Meters per hour → mph
pub fn metersph_to_mph(metersph: u16) -> f64 {
    f64::from(metersph) * 100.0 / f64::from(CENTIMETERS_PER_MILE)
}

/// Inches of rain → mm × 1000, rounded up
pub fn inches_to_mmx1000(inches: f32) -> u16 {
    ceil_u16(inches * MMX1000_PER_INCH as f32)
}

/// mm × 1000 → inches of rain
pub fn mmx1000_to_inches(mmx1000: u16) -> f64 {
    f64::from(mmx1000) / f64::from(MMX1000_PER_INCH)
}

/// °F → deci-Kelvin, rounded up
pub fn fahrenheit_to_kx10(fahrenheit: f32) -> u16 {
    ceil_u16((fahrenheit - 32.0) * 50.0 / 9.0 + DECI_KELVIN_AT_ZERO_C_EXACT)
}

/// Deci-Kelvin → hundredths of a °F, exactly
///
/// `(kx10 - 2731.5) * 9 / 50 + 32` is always a whole number of hundredths.
pub fn kx10_to_centi_fahrenheit(kx10: u16) -> i32 {
    CENTI_FAHRENHEIT_PER_KX10 * i32::from(kx10) + CENTI_FAHRENHEIT_AT_ZERO_KX10
}

/// Deci-Kelvin → °F
pub fn kx10_to_fahrenheit(kx10: u16) -> f64 {
    f64::from(kx10_to_centi_fahrenheit(kx10)) / 100.0
}

/// Probe °C → deci-Kelvin for the temperature median, truncated toward zero
pub fn celsius_to_probe_kx10(celsius: f32) -> u16 {
    (celsius * 10.0 + DECI_KELVIN_AT_ZERO_C_PROBE) as u16
}

/// Pressure mean in Pa → the record's pressure field
pub fn pascals_to_hpa_field(pascals: f32) -> f32 {
    pascals / PA_PER_HPA_FIELD
}

/// Record pressure field → inches of mercury
pub fn hpa_field_to_inhg(hpa_field: f32) -> f64 {
    f64::from(hpa_field) / HPA_FIELD_PER_INHG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoders_round_up() {
        // 10 mph = 16093.4 m/h
        assert_eq!(mph_to_metersph(10.0), 16_094);
        assert_eq!(inches_to_mmx1000(0.5), 12_700);
        assert_eq!(ceil_u16(3.0001), 4);
        assert_eq!(ceil_u16(3.0), 3);
    }

    #[test]
    fn encoders_saturate() {
        assert_eq!(mph_to_metersph(1_000.0), u16::MAX);
        assert_eq!(ceil_u16(-5.0), 0);
        assert_eq!(ceil_u16(f32::NAN), 0);
        assert_eq!(ceil_u8(300.0), u8::MAX);
    }

    #[test]
    fn freezing_point_in_deci_kelvin() {
        // 32 °F = 2731.5 dK, rounded up
        assert_eq!(fahrenheit_to_kx10(32.0), 2732);
        // 212 °F = 3731.5 dK
        assert_eq!(fahrenheit_to_kx10(212.0), 3732);
    }

    #[test]
    fn empty_temperature_window_encodes_zero_fahrenheit() {
        // A window with no valid temperature reads 0 °F = 2553.7 dK
        assert_eq!(fahrenheit_to_kx10(0.0), 2554);
    }

    #[test]
    fn probe_conversion_truncates() {
        assert_eq!(celsius_to_probe_kx10(21.37), 2945);
        assert_eq!(celsius_to_probe_kx10(0.0), 2732);
        assert_eq!(celsius_to_probe_kx10(-300.0), 0);
    }

    #[test]
    fn pressure_field_is_pascals_over_ten() {
        assert_eq!(pascals_to_hpa_field(101_325.0), 10_132.5);
        assert!((hpa_field_to_inhg(10_132.5) - 29.921).abs() < 1e-3);
    }

    #[test]
    fn centi_fahrenheit_is_exact() {
        assert_eq!(kx10_to_centi_fahrenheit(2950), 7_133);
        assert_eq!(kx10_to_centi_fahrenheit(2559), 95);
        assert_eq!(kx10_to_centi_fahrenheit(2304), -4_495);
        assert_eq!(kx10_to_centi_fahrenheit(0), -45_967);
        assert_eq!(kx10_to_centi_fahrenheit(u16::MAX), 1_133_663);
    }

    #[test]
    fn decoders_invert_encoders_closely() {
        assert!((kx10_to_fahrenheit(2950) - 71.33).abs() < 1e-3);
        assert!((metersph_to_mph(16_094) - 10.0).abs() < 1e-3);
        assert!((mmx1000_to_inches(280) - 0.011_023_6).abs() < 1e-6);
    }
}
