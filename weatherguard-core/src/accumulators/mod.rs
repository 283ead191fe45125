//! Windowed Accumulators
//!
//! ## Overview
//!
//! Every quantity in a record is reduced over the same accumulation window,
//! but not in the same way:
//!
//! | Accumulator | Fed from | Reduction | Quantities |
//! |-------------|----------|-----------|------------|
//! | [`PulseAccumulator`] | interrupt | mean rate + peak rate | wind speed, gust |
//! | [`TipCounter`] | interrupt | scaled count | rain |
//! | [`MeanAccumulator`] | polling | arithmetic mean | temperature, humidity, pressure |
//! | [`CircularAccumulator`] | polling | vector mean | wind direction |
//!
//! All of them follow the same lifecycle: *capture* adds one observation,
//! *read-and-reset* returns the window's statistic and clears the state in the
//! same step. An empty window reads as zero, never as an error.
//!
//! ## Interrupt Safety
//!
//! The two pulse accumulators are written from interrupt handlers and drained
//! from the polling loop. Their state is a small `Copy` struct inside a
//! [`critical_section::Mutex`]; both the handler and the drain swap the whole
//! struct inside one critical section, so the drain can never see a period
//! added to the sum but not yet to the count.
//!
//! ```text
//! ISR (anemometer edge)              polling loop
//!   critical_section::with ──┐     ┌── critical_section::with
//!     get → record → set     │     │     get → set(cleared)
//!                            └─────┘
//!            never interleaved
//! ```
//!
//! The polled accumulators are plain `&mut self` types owned by the station.

mod circular;
mod mean;
mod pulse;

pub use circular::CircularAccumulator;
pub use mean::{HumidityMean, MeanAccumulator, PressureMean, TemperatureMean};
pub use pulse::{
    PeriodStats, PulseAccumulator, PulseInputs, PulseOutcome, PulseRate, TipCounter, TipStats,
};
