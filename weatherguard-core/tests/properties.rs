//! Property-based tests for the accumulators and encoders.
//!
//! Run with: cargo test -p weatherguard-core --test properties

use proptest::prelude::*;
use weatherguard_core::{
    accumulators::{CircularAccumulator, PulseAccumulator},
    buffer::MedianReservoir,
    format::{trim_trailing_zeros, FixedDecimal},
    record::mph_to_metersph,
};

// =============================================================================
// Strategies
// =============================================================================

/// Gaps that always clear the debounce window
fn clean_gaps() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(10u32..5_000, 0..200)
}

/// Gaps that include contact bounce
fn noisy_gaps() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..100, 0..300)
}

fn feed(wind: &PulseAccumulator, start: u32, gaps: &[u32]) {
    let mut now = start;
    wind.on_pulse(now);
    for &gap in gaps {
        now = now.wrapping_add(gap);
        wind.on_pulse(now);
    }
}

fn reference_median(window: &[u16]) -> Option<u16> {
    if window.is_empty() {
        return None;
    }
    let mut sorted = window.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some(((u32::from(sorted[mid - 1]) + u32::from(sorted[mid])) / 2) as u16)
    }
}

// =============================================================================
// Pulse accumulator
// =============================================================================

proptest! {
    #[test]
    fn clean_train_is_counted_exactly(start in any::<u32>(), gaps in clean_gaps()) {
        let wind = PulseAccumulator::new();
        feed(&wind, start, &gaps);

        let stats = wind.take();
        prop_assert_eq!(stats.period_count as usize, gaps.len());
        prop_assert_eq!(u64::from(stats.period_sum), gaps.iter().map(|&g| u64::from(g)).sum::<u64>());
        prop_assert_eq!(stats.min_period, gaps.iter().copied().min());
    }

    #[test]
    fn drained_windows_never_hold_bounce(
        start in any::<u32>(),
        gaps in noisy_gaps(),
        drain_every in 1usize..20,
    ) {
        let wind = PulseAccumulator::new();
        let mut now = start;
        wind.on_pulse(now);

        for (i, &gap) in gaps.iter().enumerate() {
            now = now.wrapping_add(gap);
            wind.on_pulse(now);

            if i % drain_every == 0 {
                let stats = wind.take();
                prop_assert!(u64::from(stats.period_sum) >= 10 * u64::from(stats.period_count));
                if let Some(min) = stats.min_period {
                    prop_assert!(min >= 10);
                }
            }
        }
    }

    #[test]
    fn wind_peak_never_below_mean(gaps in noisy_gaps(), scale in 0.1f32..10.0) {
        let wind = PulseAccumulator::new();
        feed(&wind, 0, &gaps);

        let rate = wind.read_and_reset_rate(scale);
        prop_assert!(rate.mean >= 0.0);
        prop_assert!(rate.peak >= rate.mean * (1.0 - 1e-5));
    }
}

// =============================================================================
// Median reservoir
// =============================================================================

proptest! {
    #[test]
    fn median_matches_sorting(samples in prop::collection::vec(any::<u16>(), 0..100)) {
        let mut reservoir: MedianReservoir = MedianReservoir::new();
        for &sample in &samples {
            reservoir.add(sample);
        }

        let window = &samples[samples.len().saturating_sub(30)..];
        prop_assert_eq!(reservoir.median(), reference_median(window));
        prop_assert_eq!(reservoir.iter().collect::<Vec<_>>(), window.to_vec());
    }
}

// =============================================================================
// Circular mean and encoders
// =============================================================================

proptest! {
    #[test]
    fn circular_mean_stays_on_the_compass(
        angles in prop::collection::vec(0.01f32..6.28, 1..50),
    ) {
        let mut vane = CircularAccumulator::new();
        for &angle in &angles {
            vane.capture(angle);
        }

        let degrees = vane.read_and_reset();
        prop_assert!((0.0..=360.0).contains(&degrees) || degrees.is_nan());
        prop_assert_eq!(vane.count(), 0);
    }

    #[test]
    fn ceiling_encoder_is_monotonic(a in 0.0f32..40.0, b in 0.0f32..40.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(mph_to_metersph(lo) <= mph_to_metersph(hi));
        prop_assert!(f32::from(mph_to_metersph(lo)) >= lo * 1_609.34 - 1e-2);
    }

    #[test]
    fn trimmed_decimal_keeps_its_value(value in -10_000.0f64..10_000.0, places in 0u8..4) {
        let fixed = FixedDecimal::new(value, places);
        let rendered = fixed.to_string();
        let trimmed = trim_trailing_zeros(&rendered);

        let expected = fixed.scaled() as f64 / 10f64.powi(i32::from(places));
        prop_assert_eq!(trimmed.parse::<f64>().unwrap(), expected);
        if trimmed.contains('.') {
            prop_assert!(!trimmed.ends_with('0'));
        }
        prop_assert!(!trimmed.ends_with('.'));
    }

    #[test]
    fn ratio_rounding_is_within_half_a_step(
        numerator in -1_000_000i64..1_000_000,
        denominator in 1u32..200_000,
        places in 0u8..4,
    ) {
        let fixed = FixedDecimal::from_ratio(numerator, denominator, places);
        let step = 10i128.pow(u32::from(places));
        // |scaled / step - n / d| <= 1 / (2 * step), scaled by 2 * d * step
        let error = (i128::from(fixed.scaled()) * i128::from(denominator) - i128::from(numerator) * step).abs();
        prop_assert!(2 * error <= i128::from(denominator));
    }
}
