//! Pulse-train generators
//!
//! Anemometer and rain-gauge reed switches produce a clean edge per
//! revolution or tip, plus a burst of contact bounce a few milliseconds after
//! some of them. These helpers produce tick sequences of both kinds.

/// Ticks of a pulse train starting at `start` with the given gaps (ms)
///
/// Ticks wrap like the hardware counter does.
pub fn pulse_train(start: u32, gaps: &[u32]) -> Vec<u32> {
    let mut ticks = Vec::with_capacity(gaps.len() + 1);
    let mut now = start;
    ticks.push(now);
    for &gap in gaps {
        now = now.wrapping_add(gap);
        ticks.push(now);
    }
    ticks
}

/// Steady pulse train: `count` edges `period` ms apart
pub fn steady(start: u32, period: u32, count: usize) -> Vec<u32> {
    pulse_train(start, &vec![period; count.saturating_sub(1)])
}

/// Insert a bounce edge `offset` ms after every `every`-th clean edge
///
/// `offset` must stay under the debounce window for the bounce to be
/// filtered.
pub fn with_bounce(clean: &[u32], every: usize, offset: u32) -> Vec<u32> {
    let mut ticks = Vec::with_capacity(clean.len() * 2);
    for (i, &tick) in clean.iter().enumerate() {
        ticks.push(tick);
        if every > 0 && i % every == 0 {
            ticks.push(tick.wrapping_add(offset));
        }
    }
    ticks
}

/// Mph that a steady train of `period` ms reads with `scale` mph/Hz
pub fn expected_mph(scale: f32, period: u32) -> f32 {
    scale * 1000.0 / period as f32
}
