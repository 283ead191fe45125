//! Time management for the station
//!
//! Two clocks matter to the core:
//! - The wall clock (battery-backed RTC) stamps each record in unix seconds.
//! - The millisecond tick counter timestamps pulses. It is passed straight
//!   into the pulse handlers by the caller and is allowed to wrap.

/// Record timestamp in seconds since the unix epoch
pub type Timestamp = u32;

/// Pulse timestamp in milliseconds from an arbitrary, wrapping origin
pub type TickMs = u32;

/// Source of wall-clock time for record stamping
///
/// Implemented by the RTC driver on hardware and by [`FixedTime`] in tests.
/// Takes `&mut self` because most RTCs sit behind a bus transaction.
pub trait TimeSource {
    /// Current time in unix seconds
    fn now(&mut self) -> Timestamp;

    /// Whether this source tracks real wall-clock time
    fn is_wall_clock(&self) -> bool {
        true
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &mut T {
    fn now(&mut self) -> Timestamp {
        (**self).now()
    }

    fn is_wall_clock(&self) -> bool {
        (**self).is_wall_clock()
    }
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&mut self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        let secs = StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}

/// Fixed time source for testing and replay
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `secs`
    pub fn advance(&mut self, secs: u32) {
        self.timestamp = self.timestamp.wrapping_add(secs);
    }
}

impl TimeSource for FixedTime {
    fn now(&mut self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}
