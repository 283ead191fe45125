//! Arithmetic-mean accumulator for polled scalar readings

use crate::{
    traits::Validator,
    validators::{HumidityValidator, PressureValidator, TemperatureValidator},
};

/// Mean air temperature in °F
pub type TemperatureMean = MeanAccumulator<TemperatureValidator>;

/// Mean relative humidity in %
pub type HumidityMean = MeanAccumulator<HumidityValidator>;

/// Mean station pressure in Pa
pub type PressureMean = MeanAccumulator<PressureValidator>;

/// Running sum and count of validated readings
///
/// Readings the validator refuses are dropped and logged; they never reach
/// the sum.
///
/// ```rust
/// use weatherguard_core::accumulators::PressureMean;
///
/// let mut pressure = PressureMean::default();
/// pressure.capture(101_325.0);
/// pressure.capture(0.0); // unpowered sensor, dropped
/// assert_eq!(pressure.read_and_reset(), 101_325.0);
/// assert_eq!(pressure.read_and_reset(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct MeanAccumulator<V> {
    sum: f32,
    count: u32,
    validator: V,
}

impl<V> MeanAccumulator<V>
where
    V: Validator<Value = f32>,
{
    /// Empty accumulator screening readings with `validator`
    pub fn new(validator: V) -> Self {
        Self {
            sum: 0.0,
            count: 0,
            validator,
        }
    }

    /// Add `value` if the validator accepts it; returns whether it was kept
    #[cfg_attr(not(any(feature = "log", feature = "defmt")), allow(unused_variables))]
    pub fn capture(&mut self, value: f32) -> bool {
        match self.validator.validate(value) {
            Ok(()) => {
                self.sum += value;
                self.count = self.count.saturating_add(1);
                true
            }
            Err(err) => {
                wg_debug!("dropping reading: {:?}", err);
                false
            }
        }
    }

    /// Mean of the window (0 when empty), then clear
    pub fn read_and_reset(&mut self) -> f32 {
        let mean = self.mean().unwrap_or(0.0);
        self.sum = 0.0;
        self.count = 0;
        mean
    }

    /// Mean of the window without clearing it
    pub fn mean(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f32)
        }
    }

    /// Readings accepted this window
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The validator screening captures
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<V> Default for MeanAccumulator<V>
where
    V: Validator<Value = f32> + Default,
{
    fn default() -> Self {
        Self::new(V::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_accepted_readings() {
        let mut temperature = TemperatureMean::default();
        assert!(temperature.capture(60.0));
        assert!(temperature.capture(70.0));
        assert!(temperature.capture(80.0));

        assert_eq!(temperature.count(), 3);
        assert_eq!(temperature.read_and_reset(), 70.0);
        assert_eq!(temperature.count(), 0);
    }

    #[test]
    fn out_of_range_readings_are_dropped() {
        let mut humidity = HumidityMean::default();
        assert!(!humidity.capture(0.0));
        assert!(!humidity.capture(105.0));
        assert!(!humidity.capture(f32::NAN));
        assert!(humidity.capture(48.0));

        assert_eq!(humidity.count(), 1);
        assert_eq!(humidity.read_and_reset(), 48.0);
    }

    #[test]
    fn empty_window_is_zero() {
        let mut pressure = PressureMean::default();
        assert_eq!(pressure.mean(), None);
        assert_eq!(pressure.read_and_reset(), 0.0);
    }

    #[test]
    fn standard_atmosphere_mean_is_exact() {
        let mut pressure = PressureMean::default();
        for _ in 0..3 {
            pressure.capture(101_325.0);
        }
        assert_eq!(pressure.read_and_reset(), 101_325.0);
    }

    #[test]
    fn custom_validator_window() {
        let mut pressure = PressureMean::new(PressureValidator::new_with_limits(60_000.0, 90_000.0));
        assert!(!pressure.capture(101_325.0));
        assert!(pressure.capture(70_000.0));
    }
}
