use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use serde_derive::{Deserialize, Serialize};

use crate::pub_sub::SharedObserver;

pub mod current_conditions;
pub mod forecast;
pub mod statistics;

pub use current_conditions::CurrentConditionsDisplay;
pub use forecast::{Forecast, ForecastDisplay};
pub use statistics::{StatisticsDisplay, TemperatureStats};

/// The display variants that can be named in the config file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DisplayKind {
    CurrentConditions,
    Statistics,
    Forecast,
}

impl DisplayKind {
    pub fn create<W: Write + 'static>(self, out: W) -> SharedObserver {
        match self {
            DisplayKind::CurrentConditions => Rc::new(RefCell::new(CurrentConditionsDisplay::new(out))),
            DisplayKind::Statistics => Rc::new(RefCell::new(StatisticsDisplay::new(out))),
            DisplayKind::Forecast => Rc::new(RefCell::new(ForecastDisplay::new(out))),
        }
    }
}
