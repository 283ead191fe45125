//! Simulated Station Example
//!
//! Runs a station for three ten-minute windows against simulated sensors and
//! prints each record and its CSV line.
//!
//! ## What You'll Learn
//!
//! - Sharing `PulseInputs` between "interrupt handlers" and the engine
//! - Implementing the sensor traits for your own drivers
//! - Building records and rendering them for the uplink
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example simulated_station
//! ```

use weatherguard_core::{
    accumulators::PulseInputs,
    format::UsCsv,
    station::WeatherStation,
    time::FixedTime,
    traits::{Barometer, ThermoHygroReading, ThermoHygrometer, WindVane},
};

/// Probe that warms slowly and drops every seventh reading
struct SimProbe {
    polls: u32,
}

impl ThermoHygrometer for SimProbe {
    type Error = &'static str;

    fn read_temperature_and_humidity(&mut self) -> nb::Result<ThermoHygroReading, Self::Error> {
        self.polls += 1;
        if self.polls % 7 == 0 {
            return Err(nb::Error::Other("checksum mismatch"));
        }
        Ok(ThermoHygroReading {
            celsius: 18.0 + self.polls as f32 * 0.05,
            humidity_pct: 62.0 - self.polls as f32 * 0.1,
        })
    }
}

struct SimBarometer;

impl Barometer for SimBarometer {
    type Error = ();

    fn read_pressure(&mut self) -> nb::Result<f32, ()> {
        Ok(101_100.0)
    }
}

/// Vane swinging between SW, WSW, and W
struct SimVane {
    step: usize,
}

impl WindVane for SimVane {
    type Error = ();

    fn read_raw(&mut self) -> nb::Result<u16, ()> {
        const READINGS: [u16; 4] = [3_250, 3_150, 3_950, 3_150];
        self.step = (self.step + 1) % READINGS.len();
        Ok(READINGS[self.step])
    }
}

static PULSES: PulseInputs = PulseInputs::new();

fn main() {
    println!("WeatherGuard Simulated Station");
    println!("==============================\n");

    let mut station = WeatherStation::new(
        &PULSES,
        SimProbe { polls: 0 },
        SimBarometer,
        SimVane { step: 0 },
        FixedTime::new(1_700_000_000),
    );

    let mut tick_ms = 0u32;
    for window in 0..3 {
        // Ten minutes of anemometer pulses; the wind picks up each window
        let period_ms = 400 - window * 100;
        for _ in 0..(600_000 / period_ms) {
            tick_ms = tick_ms.wrapping_add(period_ms);
            PULSES.on_wind_pulse(tick_ms);
            // Contact bounce, filtered by the debounce window
            PULSES.on_wind_pulse(tick_ms.wrapping_add(3));
        }
        for _ in 0..window * 2 {
            tick_ms = tick_ms.wrapping_add(30_000);
            PULSES.on_rain_tip(tick_ms);
        }

        // One poll every five seconds
        for _ in 0..120 {
            station.capture_wind_vane();
            station.capture_all();
        }

        let record = station.build_and_reset_record();
        println!("Window {}:", window + 1);
        println!("  {:?}", record);
        println!("  {}\n", UsCsv(&record));

        station.clock_mut().advance(600);
    }

    match station.last_csv() {
        Ok(Some(line)) => println!("Last uplink line: {}", line),
        Ok(None) => println!("No record built"),
        Err(err) => println!("Formatting failed: {}", err),
    }
}
