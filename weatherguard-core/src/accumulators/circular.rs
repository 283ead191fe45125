//! Circular-mean accumulator for wind direction
//!
//! Averaging angles directly fails at the wrap: the mean of 350° and 10° is
//! 0°, not 180°. Each sample is instead treated as a unit vector; the window's
//! direction is the angle of the summed vector.

use core::f32::consts::{PI, TAU};

/// Vector sum of angular samples
///
/// ```rust
/// use weatherguard_core::accumulators::CircularAccumulator;
///
/// let mut vane = CircularAccumulator::new();
/// vane.capture(90f32.to_radians());
/// vane.capture(180f32.to_radians());
/// assert!((vane.read_and_reset() - 135.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CircularAccumulator {
    cos_sum: f32,
    sin_sum: f32,
    count: u32,
}

impl CircularAccumulator {
    /// Empty accumulator
    pub const fn new() -> Self {
        Self {
            cos_sum: 0.0,
            sin_sum: 0.0,
            count: 0,
        }
    }

    /// Add an angle in radians if it lies strictly inside `(0, 2π)`
    pub fn capture(&mut self, radians: f32) -> bool {
        if !(radians > 0.0 && radians < TAU) {
            wg_debug!("dropping direction sample {} rad", radians);
            return false;
        }

        self.cos_sum += libm::cosf(radians);
        self.sin_sum += libm::sinf(radians);
        self.count = self.count.saturating_add(1);
        true
    }

    /// Mean direction in degrees `[0, 360)` (0 when empty), then clear
    pub fn read_and_reset(&mut self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }

        let avg_cos = self.cos_sum / self.count as f32;
        let avg_sin = self.sin_sum / self.count as f32;
        let mut degrees = libm::atanf(avg_sin / avg_cos) * 180.0 / PI;

        self.cos_sum = 0.0;
        self.sin_sum = 0.0;
        self.count = 0;

        // atan only resolves a half circle; the cosine sign picks the half
        if avg_cos < 0.0 {
            degrees += 180.0;
        }
        if degrees < 0.0 {
            degrees += 360.0;
        }
        degrees
    }

    /// Samples accepted this window
    pub fn count(&self) -> u32 {
        self.count
    }
}
