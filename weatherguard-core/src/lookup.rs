//! Wind-Vane Sector Lookup
//!
//! ## Hardware Background
//!
//! The vane is a ring of reed switches, each closing a different resistor in a
//! voltage divider. Sixteen headings are distinguishable: eight where a single
//! switch closes and eight in between where two close together. The ADC reads
//! one of sixteen voltages, which are **neither evenly spaced nor in compass
//! order**:
//!
//! ```text
//! raw ADC  1470 ──────────────────────────────────────────────── 4000
//!           ESE ENE E  SSE  SE  SSW S   NNE NE  WSW SW NNW N WNW NW W
//! ```
//!
//! ## Table Design
//!
//! Each band is a half-open `[lo, hi)` window around a measured ladder
//! voltage, widened to cover resistor tolerance on the production boards. The
//! gaps between bands are deliberate: a reading there means the vane is
//! between detents or the ADC caught a transition, and the sample is dropped
//! rather than assigned to the nearest heading.
//!
//! Anything above 4000 means the divider's lower leg is missing, which in the
//! field is nearly always an unplugged vane.
//!
//! The table is a flat array scanned linearly. Sixteen comparisons of `u16`
//! are cheaper than any search structure at this size.

use crate::errors::DirectionError;

/// Readings above this are treated as an open circuit
pub const OPEN_CIRCUIT_THRESHOLD: u16 = 4000;

/// The sixteen compass points the vane can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Sector {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl Sector {
    /// Heading of this sector in radians, at the two-decimal precision the
    /// vane calibration was done in
    pub const fn radians(self) -> f32 {
        match self {
            Sector::N => 0.00,
            Sector::NNE => 0.39,
            Sector::NE => 0.79,
            Sector::ENE => 1.18,
            Sector::E => 1.57,
            Sector::ESE => 1.96,
            Sector::SE => 2.36,
            Sector::SSE => 2.74,
            Sector::S => 3.14,
            Sector::SSW => 3.53,
            Sector::SW => 3.93,
            Sector::WSW => 4.32,
            Sector::W => 4.71,
            Sector::WNW => 5.11,
            Sector::NW => 5.50,
            Sector::NNW => 5.89,
        }
    }

    /// Compass abbreviation
    pub const fn name(self) -> &'static str {
        match self {
            Sector::N => "N",
            Sector::NNE => "NNE",
            Sector::NE => "NE",
            Sector::ENE => "ENE",
            Sector::E => "E",
            Sector::ESE => "ESE",
            Sector::SE => "SE",
            Sector::SSE => "SSE",
            Sector::S => "S",
            Sector::SSW => "SSW",
            Sector::SW => "SW",
            Sector::WSW => "WSW",
            Sector::W => "W",
            Sector::WNW => "WNW",
            Sector::NW => "NW",
            Sector::NNW => "NNW",
        }
    }
}

/// One calibrated `[lo, hi)` window of raw readings
#[derive(Debug, Clone, Copy)]
struct VaneBand {
    lo: u16,
    hi: u16,
    sector: Sector,
}

const fn band(lo: u16, hi: u16, sector: Sector) -> VaneBand {
    VaneBand { lo, hi, sector }
}

/// Calibrated bands for the v2 weather board (12-bit ADC, 3.3 V reference)
const VANE_BANDS: [VaneBand; 16] = [
    band(2200, 2400, Sector::S),
    band(2100, 2200, Sector::SSW),
    band(3200, 3299, Sector::SW),
    band(3100, 3200, Sector::WSW),
    band(3890, 3999, Sector::W),
    band(3700, 3780, Sector::WNW),
    band(3780, 3890, Sector::NW),
    band(3400, 3500, Sector::NNW),
    band(3570, 3700, Sector::N),
    band(2600, 2700, Sector::NNE),
    band(2750, 2850, Sector::NE),
    band(1510, 1580, Sector::ENE),
    band(1580, 1650, Sector::E),
    band(1470, 1510, Sector::ESE),
    band(1900, 2000, Sector::SE),
    band(1700, 1750, Sector::SSE),
];

/// Resolve a raw vane reading to its compass sector
pub fn lookup_sector(raw: u16) -> Result<Sector, DirectionError> {
    VANE_BANDS
        .iter()
        .find(|b| raw >= b.lo && raw < b.hi)
        .map(|b| b.sector)
        .ok_or(if raw > OPEN_CIRCUIT_THRESHOLD {
            DirectionError::OpenCircuit { raw }
        } else {
            DirectionError::Unmapped { raw }
        })
}

/// Resolve a raw vane reading to a heading in radians
pub fn raw_to_radians(raw: u16) -> Result<f32, DirectionError> {
    lookup_sector(raw).map(Sector::radians)
}
