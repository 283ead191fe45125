//! CSV rendering of sensor records
//!
//! The uplink consumer ingests one comma-separated line per record, in US
//! units, with a fixed column layout:
//!
//! ```text
//! unix,deg,mph,rh,degF,in,inHg,volts,lux,,,,0
//!           1dp    1dp  3dp 2dp  2dp  1dp
//! ```
//!
//! Decimal columns are printed to a fixed number of places and then have
//! trailing zeros (and a bare trailing point) stripped, so `10.0` goes out as
//! `10` and `0.011` stays `0.011`. Rounding is half away from zero on the
//! decimal value the field stands for: wind, temperature and rain are exact
//! integer ratios of their fields, so `0.95 °F` prints as `1`. Pressure is
//! an `f32` field and is divided in `f64` first.
//!
//! The two steps are separate functions, [`FixedDecimal`] and
//! [`trim_trailing_zeros`], and nothing here allocates: the line is built
//! into a [`CsvLine`] of fixed capacity.
//!
//! ```rust
//! use weatherguard_core::format::to_csv;
//! use weatherguard_core::record::SensorRecord;
//!
//! let record = SensorRecord {
//!     unix_time: 1_600_000_000,
//!     wind_degrees: 270,
//!     wind_metersph: 16_094,
//!     humidity: 55,
//!     air_temp_kx10: 2_950,
//!     rain_mmx1000: 280,
//!     barometer_hpa: 10_132.5,
//!     ..SensorRecord::default()
//! };
//!
//! let line = to_csv(&record)?;
//! assert_eq!(line.as_str(), "1600000000,270,10,55,71.3,0.011,29.92,0,0,,,,0");
//! # Ok::<(), weatherguard_core::FormatError>(())
//! ```

use core::fmt::{self, Write};

use crate::{
    constants::buffers::CSV_LINE_CAPACITY,
    errors::FormatError,
    constants::units::{CENTIMETERS_PER_MILE, MMX1000_PER_INCH},
    record::{hpa_field_to_inhg, kx10_to_centi_fahrenheit, SensorRecord},
};

/// A rendered CSV line
pub type CsvLine = heapless::String<CSV_LINE_CAPACITY>;

/// Most decimal places a [`FixedDecimal`] will carry
pub const MAX_PLACES: u8 = 9;

const POW10: [i64; MAX_PLACES as usize + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

// Sign, 19 digits, point, and slack
const NUMBER_CAPACITY: usize = 32;

/// A number rounded to a fixed count of decimal places
///
/// Stored as a scaled integer so the rendered digits are exactly the rounded
/// value. `Display` always prints `places` fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDecimal {
    scaled: i64,
    places: u8,
}

impl FixedDecimal {
    /// Round `value` half away from zero to `places` decimals
    ///
    /// `places` is clamped to [`MAX_PLACES`]. NaN renders as zero and
    /// infinities saturate. The binary value is what gets rounded, so a
    /// decimal tie such as `0.95` that `f64` stores just below the midpoint
    /// rounds down; use [`FixedDecimal::from_ratio`] when the value is a
    /// ratio of integers.
    pub fn new(value: f64, places: u8) -> Self {
        let places = places.min(MAX_PLACES);
        let factor = POW10[usize::from(places)] as f64;
        // Float-to-int `as` saturates and maps NaN to 0
        let scaled = libm::round(value * factor) as i64;
        Self { scaled, places }
    }

    /// Round `numerator / denominator` half away from zero to `places`
    /// decimals, exactly
    ///
    /// A zero denominator is treated as one.
    ///
    /// ```rust
    /// use weatherguard_core::format::FixedDecimal;
    ///
    /// assert_eq!(FixedDecimal::from_ratio(95, 100, 1).to_string(), "1.0");
    /// assert_eq!(FixedDecimal::from_ratio(-4_495, 100, 1).to_string(), "-45.0");
    /// ```
    pub fn from_ratio(numerator: i64, denominator: u32, places: u8) -> Self {
        let places = places.min(MAX_PLACES);
        let denominator = u128::from(denominator.max(1));
        // |i64| * 10^9 stays below 2^94
        let num = u128::from(numerator.unsigned_abs()) * POW10[usize::from(places)] as u128;

        let mut magnitude = num / denominator;
        if 2 * (num % denominator) >= denominator {
            magnitude += 1;
        }
        let magnitude = i64::try_from(magnitude).unwrap_or(i64::MAX);
        let scaled = if numerator < 0 { -magnitude } else { magnitude };
        Self { scaled, places }
    }

    /// The rounded value times `10^places`
    pub const fn scaled(&self) -> i64 {
        self.scaled
    }

    /// Number of fractional digits rendered
    pub const fn places(&self) -> u8 {
        self.places
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let factor = POW10[usize::from(self.places)].unsigned_abs();
        let magnitude = self.scaled.unsigned_abs();

        if self.scaled < 0 {
            f.write_char('-')?;
        }
        write!(f, "{}", magnitude / factor)?;
        if self.places > 0 {
            write!(
                f,
                ".{:0width$}",
                magnitude % factor,
                width = usize::from(self.places)
            )?;
        }
        Ok(())
    }
}

/// Strip trailing fractional zeros, then a dangling decimal point
///
/// Strings without a `.` are returned unchanged, so integers keep their
/// zeros.
pub fn trim_trailing_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Write `value` with trailing zeros removed
fn write_minimised(f: &mut fmt::Formatter<'_>, value: FixedDecimal) -> fmt::Result {
    let mut buf: heapless::String<NUMBER_CAPACITY> = heapless::String::new();
    write!(buf, "{}", value)?;
    f.write_str(trim_trailing_zeros(&buf))
}

/// Wind column: meters per hour → mph, 1 place
fn wind_mph(metersph: u16) -> FixedDecimal {
    FixedDecimal::from_ratio(i64::from(metersph) * 100, CENTIMETERS_PER_MILE, 1)
}

/// Temperature column: deci-Kelvin → °F, 1 place
fn air_temp_fahrenheit(kx10: u16) -> FixedDecimal {
    FixedDecimal::from_ratio(i64::from(kx10_to_centi_fahrenheit(kx10)), 100, 1)
}

/// Rain column: mm × 1000 → inches, 3 places
fn rain_inches(mmx1000: u16) -> FixedDecimal {
    FixedDecimal::from_ratio(i64::from(mmx1000), MMX1000_PER_INCH, 3)
}

/// `Display` adapter rendering a record as one US-unit CSV line
#[derive(Debug, Clone, Copy)]
pub struct UsCsv<'a>(pub &'a SensorRecord);

impl fmt::Display for UsCsv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;

        write!(f, "{},{},", r.unix_time, r.wind_degrees)?;
        write_minimised(f, wind_mph(r.wind_metersph))?;
        write!(f, ",{},", r.humidity)?;
        write_minimised(f, air_temp_fahrenheit(r.air_temp_kx10))?;
        f.write_char(',')?;
        write_minimised(f, rain_inches(r.rain_mmx1000))?;
        f.write_char(',')?;
        write_minimised(f, FixedDecimal::new(hpa_field_to_inhg(r.barometer_hpa), 2))?;

        // Supply voltage and light are not measured yet
        f.write_char(',')?;
        write_minimised(f, FixedDecimal::new(0.0, 2))?;
        f.write_char(',')?;
        write_minimised(f, FixedDecimal::new(0.0, 1))?;

        // Reserved columns, then the status column
        f.write_str(",,,,0")
    }
}

/// Render `record` into a fixed-capacity line
pub fn to_csv(record: &SensorRecord) -> Result<CsvLine, FormatError> {
    let mut line = CsvLine::new();
    write!(line, "{}", UsCsv(record)).map_err(|_| FormatError::Capacity {
        capacity: CSV_LINE_CAPACITY,
    })?;
    Ok(line)
}
