use std::ptr;
use std::rc::{Rc, Weak};
use std::cell::RefCell;

use anyhow::Error;
use log::{debug, error};

use crate::pub_sub::{Measurement, Observer, SharedObserver};

/// Subject holding the latest measurement and the observers subscribed to it.
///
/// Observers are held weakly: the subject never keeps a display alive, and a
/// display whose last handle is dropped simply stops being notified.
#[derive(Default)]
pub struct WeatherData {
    observers: Vec<Weak<RefCell<dyn Observer>>>,
    measurement: Measurement,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer`. Registering the same handle twice means it is
    /// notified twice per update.
    pub fn register_observer(&mut self, observer: &SharedObserver) {
        self.observers.retain(|entry| entry.strong_count() > 0);
        self.observers.push(Rc::downgrade(observer));
        debug!("Observer registered, {} subscribed", self.observers.len());
    }

    /// Removes the first registration of `observer`, if any.
    pub fn remove_observer(&mut self, observer: &SharedObserver) {
        let target = Rc::as_ptr(observer);
        match self.observers.iter().position(|entry| ptr::addr_eq(entry.as_ptr(), target)) {
            Some(index) => {
                self.observers.remove(index);
                debug!("Observer at position {} removed, {} subscribed", index, self.observers.len());
            }
            None => debug!("Observer to remove was not registered, ignoring"),
        }
    }

    /// Calls every live observer in registration order with the current
    /// measurement. The first failure aborts the pass and is returned.
    pub fn notify_observers(&self) -> Result<(), Error> {
        debug!("Notifying {} observer(s) of {}", self.observers.len(), self.measurement);
        for (position, entry) in self.observers.iter().enumerate() {
            let Some(cell) = entry.upgrade() else {
                debug!("Observer at position {} was dropped, skipping", position);
                continue;
            };
            let mut observer = cell
                .try_borrow_mut()
                .map_err(|_| Error::msg(format!("observer at position {} is already being updated", position)))?;
            if let Err(e) = observer.update(self.measurement) {
                error!("Observer at position {} failed, aborting notification: {:?}", position, e);
                return Err(e.context(format!("observer at position {} failed", position)));
            }
        }
        Ok(())
    }

    pub fn set_measurements(&mut self, temperature: f32, humidity: f32, pressure: f32) -> Result<(), Error> {
        self.measurement = Measurement::new(temperature, humidity, pressure);
        self.measurements_changed()
    }

    fn measurements_changed(&self) -> Result<(), Error> {
        self.notify_observers()
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Number of registrations, duplicates included.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
