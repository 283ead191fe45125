//! Weather Station Aggregation Engine
//!
//! ## Overview
//!
//! [`WeatherStation`] owns every polled accumulator and borrows the
//! interrupt-fed [`PulseInputs`]. The firmware drives it from two places:
//!
//! ```text
//!  ISRs ──► PulseInputs (static) ◄──────────────┐
//!                                               │ drain
//!  poll loop ──► capture_all / capture_wind_vane│
//!                   │                           │
//!                   ▼                           │
//!          mean / circular / median ──► build_and_reset_record ──► to_csv
//! ```
//!
//! ## Window Semantics
//!
//! [`WeatherStation::build_and_reset_record`] drains every accumulator that
//! contributes to the record, in a fixed order: wind, rain, direction,
//! temperature, then pressure. Humidity is the exception: the record carries
//! the rolling humidity **median**, which is read without resetting, while the
//! humidity mean is left for [`WeatherStation::humidity_rh_and_reset`].
//!
//! ## Failure Handling
//!
//! Nothing in here returns an error once the station is built. A sensor that
//! has no sample yet (`WouldBlock`), flags its own reading as invalid, or
//! produces an implausible value simply contributes nothing to the window.
//!
//! ## Example
//!
//! ```rust
//! use weatherguard_core::accumulators::PulseInputs;
//! use weatherguard_core::station::WeatherStation;
//! use weatherguard_core::time::FixedTime;
//! use weatherguard_core::traits::{Barometer, ThermoHygroReading, ThermoHygrometer, WindVane};
//!
//! struct Probe;
//! impl ThermoHygrometer for Probe {
//!     type Error = ();
//!     fn read_temperature_and_humidity(&mut self) -> nb::Result<ThermoHygroReading, ()> {
//!         Ok(ThermoHygroReading { celsius: 20.0, humidity_pct: 50.0 })
//!     }
//! }
//!
//! struct Baro;
//! impl Barometer for Baro {
//!     type Error = ();
//!     fn read_pressure(&mut self) -> nb::Result<f32, ()> {
//!         Ok(101_325.0)
//!     }
//! }
//!
//! struct Vane;
//! impl WindVane for Vane {
//!     type Error = ();
//!     fn read_raw(&mut self) -> nb::Result<u16, ()> {
//!         Ok(2300) // south
//!     }
//! }
//!
//! static PULSES: PulseInputs = PulseInputs::new();
//!
//! let mut station = WeatherStation::new(&PULSES, Probe, Baro, Vane, FixedTime::new(1_600_000_000));
//! station.capture_all();
//! station.capture_wind_vane();
//!
//! let record = station.build_and_reset_record();
//! assert_eq!(record.wind_degrees, 180);
//! assert_eq!(record.humidity, 50);
//! assert_eq!(record.barometer_hpa, 10_132.5);
//! ```

use crate::{
    accumulators::{
        CircularAccumulator, HumidityMean, PressureMean, PulseInputs, PulseRate, TemperatureMean,
    },
    buffer::MedianReservoir,
    config::StationConfig,
    errors::{ConfigResult, DirectionError, FormatError},
    format::{to_csv, CsvLine},
    lookup::raw_to_radians,
    record::{
        celsius_to_probe_kx10, ceil_u16, fahrenheit_to_kx10, inches_to_mmx1000, mph_to_metersph,
        pascals_to_hpa_field, SensorRecord,
    },
    time::TimeSource,
    traits::{Barometer, ThermoHygrometer, WindVane},
};

/// Take a sample from a non-blocking read, logging why there is none
#[cfg_attr(not(any(feature = "log", feature = "defmt")), allow(unused_variables))]
fn poll<T, E>(sensor: &'static str, result: nb::Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(nb::Error::WouldBlock) => {
            wg_trace!("{} not ready", sensor);
            None
        }
        Err(nb::Error::Other(_)) => {
            wg_debug!("{} reported an invalid reading", sensor);
            None
        }
    }
}

/// Periodic aggregation engine for one station
///
/// Generic over the four injected capabilities so drivers and test fakes plug
/// in the same way:
/// - `P`: temperature/humidity probe
/// - `B`: barometer
/// - `V`: wind vane ADC
/// - `C`: wall clock
pub struct WeatherStation<'a, P, B, V, C> {
    pulses: &'a PulseInputs,
    probe: P,
    barometer: B,
    vane: V,
    clock: C,
    config: StationConfig,

    temperature: TemperatureMean,
    humidity: HumidityMean,
    pressure: PressureMean,
    direction: CircularAccumulator,

    /// Probe temperature in deci-Kelvin
    temperature_median: MedianReservoir,
    /// Probe humidity in whole percent
    humidity_median: MedianReservoir,

    last_record: Option<SensorRecord>,
}

impl<'a, P, B, V, C> WeatherStation<'a, P, B, V, C>
where
    P: ThermoHygrometer,
    B: Barometer,
    V: WindVane,
    C: TimeSource,
{
    /// Station with the default configuration
    pub fn new(pulses: &'a PulseInputs, probe: P, barometer: B, vane: V, clock: C) -> Self {
        Self::build(pulses, probe, barometer, vane, clock, StationConfig::default())
    }

    /// Station with a custom configuration, rejected if it does not validate
    pub fn with_config(
        pulses: &'a PulseInputs,
        probe: P,
        barometer: B,
        vane: V,
        clock: C,
        config: StationConfig,
    ) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(pulses, probe, barometer, vane, clock, config))
    }

    fn build(
        pulses: &'a PulseInputs,
        probe: P,
        barometer: B,
        vane: V,
        clock: C,
        config: StationConfig,
    ) -> Self {
        Self {
            pulses,
            probe,
            barometer,
            vane,
            clock,
            temperature: TemperatureMean::new(config.temperature_validator()),
            humidity: HumidityMean::new(config.humidity_validator()),
            pressure: PressureMean::new(config.pressure_validator()),
            direction: CircularAccumulator::new(),
            temperature_median: MedianReservoir::new(),
            humidity_median: MedianReservoir::new(),
            last_record: None,
            config,
        }
    }

    // Capture

    /// Sample the wind vane into the direction accumulator
    ///
    /// Returns whether a direction was accumulated.
    #[cfg_attr(not(any(feature = "log", feature = "defmt")), allow(unused_variables))]
    pub fn capture_wind_vane(&mut self) -> bool {
        let Some(raw) = poll("wind vane", self.vane.read_raw()) else {
            return false;
        };

        match raw_to_radians(raw) {
            Ok(radians) => self.direction.capture(radians),
            Err(err @ DirectionError::OpenCircuit { .. }) => {
                wg_warn!("{:?}; is the vane connected?", err);
                false
            }
            Err(err) => {
                wg_debug!("dropping vane sample: {:?}", err);
                false
            }
        }
    }

    /// Sample the probe into the temperature and humidity accumulators
    ///
    /// A reading the probe accepts always feeds both medians; the means
    /// additionally apply their plausible ranges. Returns whether the probe
    /// produced a valid reading.
    pub fn capture_air_temp_humidity(&mut self) -> bool {
        let Some(reading) = poll("thermo-hygrometer", self.probe.read_temperature_and_humidity())
        else {
            return false;
        };

        if reading.celsius.is_finite() {
            self.temperature_median
                .add(celsius_to_probe_kx10(reading.celsius));
        }
        if reading.humidity_pct.is_finite() {
            // Truncated to whole percent; saturates at the u16 bounds
            self.humidity_median.add(reading.humidity_pct as u16);
        }

        self.humidity.capture(reading.humidity_pct);
        self.temperature
            .capture(reading.celsius * 9.0 / 5.0 + 32.0);
        true
    }

    /// Sample the barometer into the pressure accumulator
    ///
    /// Returns whether the reading was accumulated.
    pub fn capture_pressure(&mut self) -> bool {
        match poll("barometer", self.barometer.read_pressure()) {
            Some(pascals) => self.pressure.capture(pascals),
            None => false,
        }
    }

    /// Sample the probe, then the barometer
    pub fn capture_all(&mut self) {
        self.capture_air_temp_humidity();
        self.capture_pressure();
    }

    // Per-quantity drains

    /// Mean and gust wind speed in mph; clears the wind window
    pub fn wind_mph_and_reset(&mut self) -> PulseRate {
        self.pulses
            .wind
            .read_and_reset_rate(self.config.wind_scale_mph_per_hz)
    }

    /// Rain in inches; clears the rain count
    pub fn rain_inches_and_reset(&mut self) -> f32 {
        self.pulses
            .rain
            .read_and_reset_count(self.config.rain_scale_inches_per_tip)
    }

    /// Mean wind direction in degrees; clears the direction window
    pub fn wind_degrees_and_reset(&mut self) -> f32 {
        self.direction.read_and_reset()
    }

    /// Mean air temperature in °F; clears the temperature window
    pub fn temp_f_and_reset(&mut self) -> f32 {
        self.temperature.read_and_reset()
    }

    /// Mean relative humidity in %; clears the humidity window
    pub fn humidity_rh_and_reset(&mut self) -> f32 {
        self.humidity.read_and_reset()
    }

    /// Mean station pressure in Pa; clears the pressure window
    pub fn pressure_pa_and_reset(&mut self) -> f32 {
        self.pressure.read_and_reset()
    }

    // Medians

    /// Rolling median of probe temperature in deci-Kelvin
    pub fn air_temp_median_kx10(&self) -> Option<u16> {
        self.temperature_median.median()
    }

    /// Rolling median of probe humidity in whole percent
    pub fn humidity_median(&self) -> Option<u16> {
        self.humidity_median.median()
    }

    /// Read the barometer directly, bypassing the pressure accumulator
    pub fn read_pressure(&mut self) -> nb::Result<f32, B::Error> {
        self.barometer.read_pressure()
    }

    // Record

    /// Drain the window into a record and keep it as the last record
    pub fn build_and_reset_record(&mut self) -> SensorRecord {
        let unix_time = self.clock.now();

        let wind = self.wind_mph_and_reset();
        let rain_inches = self.rain_inches_and_reset();
        let degrees = self.wind_degrees_and_reset();
        let fahrenheit = self.temp_f_and_reset();
        let humidity = self.humidity_median().unwrap_or(0);
        let pascals = self.pressure_pa_and_reset();

        let record = SensorRecord {
            unix_time,
            wind_degrees: ceil_u16(degrees),
            wind_metersph: mph_to_metersph(wind.mean),
            humidity: u8::try_from(humidity).unwrap_or(u8::MAX),
            air_temp_kx10: fahrenheit_to_kx10(fahrenheit),
            rain_mmx1000: inches_to_mmx1000(rain_inches),
            barometer_hpa: pascals_to_hpa_field(pascals),
            gust_metersph: mph_to_metersph(wind.peak),
            millivolts: 0,
            lux: 0,
        };

        wg_trace!(
            "record t={} dir={} wind={} gust={} rain={}",
            record.unix_time,
            record.wind_degrees,
            record.wind_metersph,
            record.gust_metersph,
            record.rain_mmx1000
        );

        self.last_record = Some(record);
        record
    }

    /// Most recent record built, if any
    pub fn last_record(&self) -> Option<SensorRecord> {
        self.last_record
    }

    /// The most recent record as a CSV line, if any
    pub fn last_csv(&self) -> Result<Option<CsvLine>, FormatError> {
        self.last_record.as_ref().map(to_csv).transpose()
    }

    // Access

    /// Active configuration
    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// The interrupt-fed inputs this station drains
    pub fn pulses(&self) -> &'a PulseInputs {
        self.pulses
    }

    /// Mutable access to the probe driver
    pub fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    /// Mutable access to the barometer driver
    pub fn barometer_mut(&mut self) -> &mut B {
        &mut self.barometer
    }

    /// Mutable access to the wind vane driver
    pub fn vane_mut(&mut self) -> &mut V {
        &mut self.vane
    }

    /// Mutable access to the clock
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
