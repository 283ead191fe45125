//! Common test utilities for integration tests
//!
//! This module provides:
//! - Scripted fakes for the probe, barometer, and wind vane
//! - Pulse-train generators with optional contact bounce
//! - A station constructor wired to the fakes

#![allow(dead_code)]

pub mod generators;

use std::collections::VecDeque;

use weatherguard_core::{
    accumulators::PulseInputs,
    station::WeatherStation,
    time::FixedTime,
    traits::{Barometer, ThermoHygroReading, ThermoHygrometer, WindVane},
};

/// Error reported by every fake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError;

/// Replays a scripted sequence of results, then reports `WouldBlock`
#[derive(Debug)]
pub struct Script<T> {
    queue: VecDeque<nb::Result<T, FakeError>>,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self { queue: VecDeque::new() }
    }
}

impl<T> Script<T> {
    pub fn push(&mut self, value: T) -> &mut Self {
        self.queue.push_back(Ok(value));
        self
    }

    pub fn push_invalid(&mut self) -> &mut Self {
        self.queue.push_back(Err(nb::Error::Other(FakeError)));
        self
    }

    pub fn push_not_ready(&mut self) -> &mut Self {
        self.queue.push_back(Err(nb::Error::WouldBlock));
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    fn next(&mut self) -> nb::Result<T, FakeError> {
        self.queue.pop_front().unwrap_or(Err(nb::Error::WouldBlock))
    }
}

/// Temperature/humidity probe fake
#[derive(Debug, Default)]
pub struct FakeProbe {
    pub readings: Script<ThermoHygroReading>,
}

impl FakeProbe {
    pub fn reading(&mut self, celsius: f32, humidity_pct: f32) -> &mut Self {
        self.readings.push(ThermoHygroReading { celsius, humidity_pct });
        self
    }
}

impl ThermoHygrometer for FakeProbe {
    type Error = FakeError;

    fn read_temperature_and_humidity(&mut self) -> nb::Result<ThermoHygroReading, FakeError> {
        self.readings.next()
    }
}

/// Barometer fake
#[derive(Debug, Default)]
pub struct FakeBarometer {
    pub pascals: Script<f32>,
}

impl Barometer for FakeBarometer {
    type Error = FakeError;

    fn read_pressure(&mut self) -> nb::Result<f32, FakeError> {
        self.pascals.next()
    }
}

/// Wind vane fake
#[derive(Debug, Default)]
pub struct FakeVane {
    pub raw: Script<u16>,
}

impl WindVane for FakeVane {
    type Error = FakeError;

    fn read_raw(&mut self) -> nb::Result<u16, FakeError> {
        self.raw.next()
    }
}

pub type TestStation<'a> = WeatherStation<'a, FakeProbe, FakeBarometer, FakeVane, FixedTime>;

/// Station with empty scripts and the clock at `start`
pub fn station(pulses: &PulseInputs, start: u32) -> TestStation<'_> {
    WeatherStation::new(
        pulses,
        FakeProbe::default(),
        FakeBarometer::default(),
        FakeVane::default(),
        FixedTime::new(start),
    )
}

/// Raw vane readings at the centre of a few sectors
pub mod vane {
    pub const NNE: u16 = 2650;
    pub const E: u16 = 1600;
    pub const S: u16 = 2300;
    pub const W: u16 = 3900;
    pub const NNW: u16 = 3450;
    pub const OPEN: u16 = 4095;
}
