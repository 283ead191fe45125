//! Producer/drainer race on the pulse accumulators
//!
//! One thread plays the anemometer and rain-gauge interrupts while another
//! drains windows as fast as it can. Every accepted period must show up in
//! exactly one drained window.

#![cfg(test)]

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use weatherguard_core::accumulators::{PeriodStats, PulseAccumulator, PulseInputs, TipCounter};

use common::generators::pulse_train;

const EDGES: usize = 200_000;

fn gaps(count: usize) -> Vec<u32> {
    // Deterministic spread over 10..=50 ms, all above the debounce window
    (0..count).map(|i| 10 + ((i * 7_919) % 41) as u32).collect()
}

#[derive(Default)]
struct Totals {
    sum: u64,
    count: u64,
    min: Option<u32>,
    windows: usize,
}

impl Totals {
    fn absorb(&mut self, stats: PeriodStats) {
        self.sum += u64::from(stats.period_sum);
        self.count += u64::from(stats.period_count);
        if let Some(min) = stats.min_period {
            self.min = Some(self.min.map_or(min, |m| m.min(min)));
        }
        self.windows += 1;
    }
}

#[test]
fn test_drained_windows_conserve_every_period() {
    static WIND: PulseAccumulator = PulseAccumulator::new();
    static DONE: AtomicBool = AtomicBool::new(false);

    let gaps = gaps(EDGES - 1);
    let ticks = pulse_train(u32::MAX - 5_000, &gaps);

    let producer = thread::spawn(move || {
        for tick in ticks {
            WIND.on_pulse(tick);
        }
        DONE.store(true, Ordering::Release);
    });

    let drainer = thread::spawn(|| {
        let mut totals = Totals::default();
        while !DONE.load(Ordering::Acquire) {
            let stats = WIND.take();
            // A torn read would show a count without its periods
            assert!(u64::from(stats.period_sum) >= 10 * u64::from(stats.period_count));
            totals.absorb(stats);
        }
        totals.absorb(WIND.take());
        totals
    });

    producer.join().unwrap();
    let totals = drainer.join().unwrap();

    assert_eq!(totals.count, (EDGES - 1) as u64);
    assert_eq!(totals.sum, gaps.iter().map(|&g| u64::from(g)).sum::<u64>());
    assert_eq!(totals.min, gaps.iter().copied().min());
    assert!(totals.windows >= 1);
}

#[test]
fn test_drained_rain_conserves_every_tip() {
    static RAIN: TipCounter = TipCounter::new();
    static DONE: AtomicBool = AtomicBool::new(false);

    let ticks = pulse_train(0, &gaps(EDGES - 1));

    let producer = thread::spawn(move || {
        for tick in ticks {
            RAIN.on_tip(tick);
        }
        DONE.store(true, Ordering::Release);
    });

    let drainer = thread::spawn(|| {
        let mut tips = 0.0_f64;
        while !DONE.load(Ordering::Acquire) {
            tips += f64::from(RAIN.read_and_reset_count(1.0));
        }
        tips + f64::from(RAIN.read_and_reset_count(1.0))
    });

    producer.join().unwrap();
    let tips = drainer.join().unwrap();

    // Every tip counts, the first included
    assert_eq!(tips, EDGES as f64);
}

#[test]
fn test_bounce_filtered_under_contention() {
    static PULSES: PulseInputs = PulseInputs::new();
    static DONE: AtomicBool = AtomicBool::new(false);

    let producer = thread::spawn(|| {
        let mut now = 0u32;
        for _ in 0..50_000 {
            PULSES.on_wind_pulse(now);
            // Contact bounce 2 ms later
            PULSES.on_wind_pulse(now + 2);
            now += 20;
        }
        DONE.store(true, Ordering::Release);
    });

    let drainer = thread::spawn(|| {
        let mut totals = Totals::default();
        while !DONE.load(Ordering::Acquire) {
            totals.absorb(PULSES.wind.take());
        }
        totals.absorb(PULSES.wind.take());
        totals
    });

    producer.join().unwrap();
    let totals = drainer.join().unwrap();

    assert_eq!(totals.count, 49_999);
    assert_eq!(totals.sum, 49_999 * 20);
    assert_eq!(totals.min, Some(20));
}
