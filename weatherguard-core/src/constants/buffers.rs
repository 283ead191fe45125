//! Buffer Sizes

/// Samples held by each median reservoir.
///
/// At one capture per minute this is a half-hour rolling window.
pub const MEDIAN_WINDOW: usize = 30;

/// Bytes reserved for one rendered CSV line.
///
/// The widest possible line (every numeric field saturated) is under
/// 100 bytes.
pub const CSV_LINE_CAPACITY: usize = 128;
