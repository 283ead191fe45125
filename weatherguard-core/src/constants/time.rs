//! Time-Related Constants

/// Milliseconds per second.
pub const MS_PER_SECOND: f32 = 1000.0;

/// Shortest accepted gap between two pulses of the same source (ms).
///
/// Reed switches ring for a few milliseconds after closing. A 10 ms floor
/// caps the measurable wind speed at about 149 mph, well above anything the
/// cups survive.
pub const DEBOUNCE_MS: u32 = 10;
