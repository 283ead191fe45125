//! Interrupt-fed pulse accumulators
//!
//! The anemometer and rain gauge are reed switches that pull a pin low. Each
//! falling edge calls one of the handlers here with the current millisecond
//! tick. The tick counter is allowed to wrap; periods are computed with
//! wrapping subtraction so a wrap in the middle of a gust costs nothing.

use core::cell::Cell;

use critical_section::Mutex;

use crate::{
    constants::time::{DEBOUNCE_MS, MS_PER_SECOND},
    time::TickMs,
};

/// What a single edge did to an accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseOutcome {
    /// First edge ever seen; only its timestamp was kept
    Armed,
    /// Edge arrived inside the debounce window and was ignored
    Bounce,
    /// Edge was counted; `period` is the gap to the previous edge (0 for a
    /// first rain tip)
    Counted {
        /// Milliseconds since the previous accepted edge
        period: u32,
    },
}

/// Rates drained from a [`PulseAccumulator`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PulseRate {
    /// Scaled mean pulse frequency over the window
    pub mean: f32,
    /// Scaled frequency of the shortest period in the window
    pub peak: f32,
}

/// Period statistics for one accumulation window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodStats {
    /// Sum of accepted periods (ms)
    pub period_sum: u32,
    /// Number of accepted periods
    pub period_count: u32,
    /// Shortest accepted period (ms); `None` until one is seen
    pub min_period: Option<u32>,
    /// Tick of the last accepted edge; survives resets
    pub last_event: Option<TickMs>,
}

impl PeriodStats {
    const EMPTY: Self = Self {
        period_sum: 0,
        period_count: 0,
        min_period: None,
        last_event: None,
    };

    fn record(&mut self, now: TickMs, debounce_ms: u32) -> PulseOutcome {
        let Some(last) = self.last_event else {
            self.last_event = Some(now);
            return PulseOutcome::Armed;
        };

        let period = now.wrapping_sub(last);
        if period < debounce_ms {
            return PulseOutcome::Bounce;
        }

        self.min_period = Some(self.min_period.map_or(period, |min| min.min(period)));
        self.period_sum = self.period_sum.saturating_add(period);
        self.period_count = self.period_count.saturating_add(1);
        self.last_event = Some(now);
        PulseOutcome::Counted { period }
    }

    /// Window statistics cleared, edge history kept
    fn cleared(self) -> Self {
        Self {
            last_event: self.last_event,
            ..Self::EMPTY
        }
    }

    /// Convert the window to scaled rates
    ///
    /// `scale` is the reading for one pulse per second. Multiplications run
    /// before the division to keep precision in `f32`.
    pub fn rate(&self, scale: f32) -> PulseRate {
        if self.period_count == 0 || self.period_sum == 0 {
            return PulseRate::default();
        }

        let mean = scale * MS_PER_SECOND * self.period_count as f32 / self.period_sum as f32;
        let peak = match self.min_period {
            Some(min) if min > 0 => scale * MS_PER_SECOND / min as f32,
            _ => 0.0,
        };
        PulseRate { mean, peak }
    }
}

/// Period accumulator for the anemometer
///
/// Tracks the mean pulse period and the shortest one (the gust) over a
/// window. Safe to share between an interrupt handler and the polling loop.
///
/// ```rust
/// use weatherguard_core::accumulators::PulseAccumulator;
///
/// static WIND: PulseAccumulator = PulseAccumulator::new();
///
/// // In the anemometer ISR
/// WIND.on_pulse(1_000);
/// WIND.on_pulse(1_500);
/// WIND.on_pulse(2_000);
///
/// // Once per window, in the polling loop
/// let rate = WIND.read_and_reset_rate(1.492);
/// assert!((rate.mean - 2.984).abs() < 1e-4);
/// ```
pub struct PulseAccumulator {
    state: Mutex<Cell<PeriodStats>>,
    debounce_ms: u32,
}

impl PulseAccumulator {
    /// Accumulator with the standard 10 ms debounce
    pub const fn new() -> Self {
        Self::with_debounce(DEBOUNCE_MS)
    }

    /// Accumulator rejecting periods shorter than `debounce_ms`
    pub const fn with_debounce(debounce_ms: u32) -> Self {
        Self {
            state: Mutex::new(Cell::new(PeriodStats::EMPTY)),
            debounce_ms,
        }
    }

    /// Record an edge at tick `now`; call from the interrupt handler
    pub fn on_pulse(&self, now: TickMs) -> PulseOutcome {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut stats = cell.get();
            let outcome = stats.record(now, self.debounce_ms);
            cell.set(stats);
            outcome
        })
    }

    /// Drain the window and return `(mean, peak)` rates scaled by `scale`
    ///
    /// An empty window yields zero for both.
    pub fn read_and_reset_rate(&self, scale: f32) -> PulseRate {
        self.take().rate(scale)
    }

    /// Drain the window and return its raw statistics
    pub fn take(&self) -> PeriodStats {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let stats = cell.get();
            cell.set(stats.cleared());
            stats
        })
    }

    /// Copy of the current statistics without draining them
    pub fn snapshot(&self) -> PeriodStats {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    /// Shortest accepted period
    pub const fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }
}

impl Default for PulseAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Tip count for one accumulation window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TipStats {
    /// Accepted tips
    pub count: u32,
    /// Tick of the last accepted tip; survives resets
    pub last_event: Option<TickMs>,
}

impl TipStats {
    const EMPTY: Self = Self {
        count: 0,
        last_event: None,
    };

    fn record(&mut self, now: TickMs, debounce_ms: u32) -> PulseOutcome {
        let period = match self.last_event {
            Some(last) => {
                let period = now.wrapping_sub(last);
                if period < debounce_ms {
                    return PulseOutcome::Bounce;
                }
                period
            }
            None => 0,
        };

        self.count = self.count.saturating_add(1);
        self.last_event = Some(now);
        PulseOutcome::Counted { period }
    }
}

/// Tip counter for the rain gauge
///
/// Every non-bounce tip is one bucket of rain, including the very first.
pub struct TipCounter {
    state: Mutex<Cell<TipStats>>,
    debounce_ms: u32,
}

impl TipCounter {
    /// Counter with the standard 10 ms debounce
    pub const fn new() -> Self {
        Self::with_debounce(DEBOUNCE_MS)
    }

    /// Counter rejecting tips closer than `debounce_ms` to the previous one
    pub const fn with_debounce(debounce_ms: u32) -> Self {
        Self {
            state: Mutex::new(Cell::new(TipStats::EMPTY)),
            debounce_ms,
        }
    }

    /// Record a tip at tick `now`; call from the interrupt handler
    pub fn on_tip(&self, now: TickMs) -> PulseOutcome {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut stats = cell.get();
            let outcome = stats.record(now, self.debounce_ms);
            cell.set(stats);
            outcome
        })
    }

    /// Drain the window and return `scale * count`
    pub fn read_and_reset_count(&self, scale: f32) -> f32 {
        let count = critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let stats = cell.get();
            cell.set(TipStats { count: 0, ..stats });
            stats.count
        });
        scale * count as f32
    }

    /// Copy of the current tally without draining it
    pub fn snapshot(&self) -> TipStats {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }
}

impl Default for TipCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// The station's two interrupt-fed inputs
///
/// Meant to live in a `static` so interrupt handlers can reach it:
///
/// ```rust
/// use weatherguard_core::accumulators::PulseInputs;
///
/// static PULSES: PulseInputs = PulseInputs::new();
///
/// fn anemometer_isr(tick_ms: u32) {
///     PULSES.on_wind_pulse(tick_ms);
/// }
///
/// fn rain_gauge_isr(tick_ms: u32) {
///     PULSES.on_rain_tip(tick_ms);
/// }
/// # anemometer_isr(0);
/// # rain_gauge_isr(0);
/// ```
#[derive(Default)]
pub struct PulseInputs {
    /// Anemometer periods
    pub wind: PulseAccumulator,
    /// Rain gauge tips
    pub rain: TipCounter,
}

impl PulseInputs {
    /// Both inputs with the standard debounce
    pub const fn new() -> Self {
        Self {
            wind: PulseAccumulator::new(),
            rain: TipCounter::new(),
        }
    }

    /// Anemometer edge at tick `now`
    pub fn on_wind_pulse(&self, now: TickMs) -> PulseOutcome {
        self.wind.on_pulse(now)
    }

    /// Rain gauge edge at tick `now`
    pub fn on_rain_tip(&self, now: TickMs) -> PulseOutcome {
        self.rain.on_tip(now)
    }
}
