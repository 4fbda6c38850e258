use std::io::Write;

use anyhow::{Context, Error};

use crate::pub_sub::{Measurement, Observer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    pub avg: f32,
    pub max: f32,
    pub min: f32,
}

impl TemperatureStats {
    /// `history` must hold at least one temperature. The sum is taken in
    /// `f64` so long histories and values near `f32::MAX` stay exact.
    fn of(history: &[f32]) -> Self {
        let sum: f64 = history.iter().map(|&t| f64::from(t)).sum();
        let max = history.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let min = history.iter().copied().fold(f32::INFINITY, f32::min);
        Self { avg: (sum / history.len() as f64) as f32, max, min }
    }
}

/// Running temperature statistics over every update ever received.
///
/// The history is never trimmed, so the same reading delivered twice moves
/// the average.
pub struct StatisticsDisplay<W: Write> {
    out: W,
    temperatures: Vec<f32>,
}

impl<W: Write> StatisticsDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out, temperatures: Vec::new() }
    }

    pub fn summary(&self) -> Option<TemperatureStats> {
        if self.temperatures.is_empty() {
            return None;
        }
        Some(TemperatureStats::of(&self.temperatures))
    }

    pub fn temperatures(&self) -> &[f32] {
        &self.temperatures
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Observer for StatisticsDisplay<W> {
    fn update(&mut self, measurement: Measurement) -> Result<(), Error> {
        self.temperatures.push(measurement.temperature);
        let stats = TemperatureStats::of(&self.temperatures);
        writeln!(self.out, "Avg/Max/Min temperature: {}/{}/{}", stats.avg, stats.max, stats.min)
            .context("Could not write temperature statistics")
    }
}
