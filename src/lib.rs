use std::io::Write;

use anyhow::{Context, Error};
use log::{debug, info};

use crate::config::Config;
use crate::displays::DisplayKind;
use crate::pub_sub::{Measurement, SharedObserver};
use crate::weather_data::WeatherData;

pub mod config;
pub mod displays;
pub mod pub_sub;
pub mod weather_data;

pub static APP_DIR: &str = "weather-station";
pub static STATION_CONFIG_FILE: &str = "station.toml";

/// A weather data subject wired to the displays named in the config.
///
/// The station owns the display handles; the subject only holds them weakly.
pub struct Station {
    weather_data: WeatherData,
    displays: Vec<(DisplayKind, SharedObserver)>,
    readings: Vec<Measurement>,
}

impl Station {
    /// Builds every configured display, each writing to a sink from `output`,
    /// and registers them in config order.
    pub fn new<W, F>(config: &Config, mut output: F) -> Self
    where
        W: Write + 'static,
        F: FnMut() -> W,
    {
        let mut weather_data = WeatherData::new();
        let mut displays = Vec::with_capacity(config.displays.len());
        for kind in &config.displays {
            let display = kind.create(output());
            weather_data.register_observer(&display);
            debug!("Registered {:?} display", kind);
            displays.push((*kind, display));
        }
        Self { weather_data, displays, readings: config.readings.clone() }
    }

    /// Publishes every configured reading in order, stopping at the first
    /// reading a display fails on.
    pub fn run(&mut self) -> Result<(), Error> {
        info!("Publishing {} reading(s) to {} display(s)", self.readings.len(), self.displays.len());
        for (index, reading) in self.readings.iter().enumerate() {
            debug!("Reading {}: {}", index + 1, reading);
            self.weather_data
                .set_measurements(reading.temperature, reading.humidity, reading.pressure)
                .with_context(|| format!("Reading {} ({}) was not fully delivered", index + 1, reading))?;
        }
        Ok(())
    }

    pub fn weather_data(&self) -> &WeatherData {
        &self.weather_data
    }

    pub fn weather_data_mut(&mut self) -> &mut WeatherData {
        &mut self.weather_data
    }

    pub fn displays(&self) -> impl Iterator<Item = &(DisplayKind, SharedObserver)> {
        self.displays.iter()
    }
}
