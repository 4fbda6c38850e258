use std::io::Write;

use anyhow::{Context, Error};

use crate::pub_sub::{Measurement, Observer};

pub struct CurrentConditionsDisplay<W: Write> {
    out: W,
    current: Option<Measurement>,
}

impl<W: Write> CurrentConditionsDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out, current: None }
    }

    /// Last measurement received, `None` before the first update.
    pub fn current(&self) -> Option<Measurement> {
        self.current
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Observer for CurrentConditionsDisplay<W> {
    fn update(&mut self, measurement: Measurement) -> Result<(), Error> {
        self.current = Some(measurement);
        writeln!(
            self.out,
            "Current conditions: {} degrees and {}% humidity",
            measurement.temperature, measurement.humidity
        )
        .context("Could not write current conditions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_temperature_and_humidity() {
        let mut display = CurrentConditionsDisplay::new(Vec::new());
        assert_eq!(display.current(), None);

        display.update(Measurement::new(80.0, 65.0, 1010.0)).unwrap();
        display.update(Measurement::new(82.5, 70.0, 1012.0)).unwrap();

        assert_eq!(display.current(), Some(Measurement::new(82.5, 70.0, 1012.0)));
        assert_eq!(
            String::from_utf8_lossy(display.output()),
            "Current conditions: 80 degrees and 65% humidity\n\
             Current conditions: 82.5 degrees and 70% humidity\n"
        );
    }
}
