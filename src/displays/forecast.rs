use std::fmt;
use std::io::Write;

use anyhow::{Context, Error};

use crate::pub_sub::{Measurement, Observer};

const COOL_BELOW: f32 = 80.0;
const HUMID_ABOVE: f32 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forecast {
    CoolerRainy,
    MoreOfTheSame,
    Improving,
}

impl Forecast {
    /// Temperature is checked before humidity; the first rule that matches wins.
    pub fn from_measurement(measurement: &Measurement) -> Self {
        if measurement.temperature < COOL_BELOW {
            Forecast::CoolerRainy
        } else if measurement.humidity > HUMID_ABOVE {
            Forecast::MoreOfTheSame
        } else {
            Forecast::Improving
        }
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Forecast::CoolerRainy => "Watch out for cooler, rainy weather",
            Forecast::MoreOfTheSame => "More of the same",
            Forecast::Improving => "Improving weather on the way!",
        };
        f.write_str(text)
    }
}

pub struct ForecastDisplay<W: Write> {
    out: W,
}

impl<W: Write> ForecastDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Observer for ForecastDisplay<W> {
    fn update(&mut self, measurement: Measurement) -> Result<(), Error> {
        let forecast = Forecast::from_measurement(&measurement);
        writeln!(self.out, "Forecast: {}", forecast).context("Could not write forecast")
    }
}
