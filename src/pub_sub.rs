use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_derive::{Deserialize, Serialize};

/// One reading published by the weather data subject.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Measurement {
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self { temperature, humidity, pressure }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}F/{}%/{}hPa", self.temperature, self.humidity, self.pressure)
    }
}

/// Receives every measurement the subject publishes.
///
/// An error returned from `update` stops the fan-out it was called from.
pub trait Observer {
    fn update(&mut self, measurement: Measurement) -> Result<(), anyhow::Error>;
}

/// Handle the caller keeps alive for as long as it wants notifications.
pub type SharedObserver = Rc<RefCell<dyn Observer>>;
