use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use simplelog::{LevelFilter, TestLogger};
use weather_station::config::Config;
use weather_station::displays::DisplayKind;
use weather_station::pub_sub::Measurement;
use weather_station::Station;

/// Every display writes into the same buffer so the interleaving is visible.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, simplelog::Config::default());
}

#[test]
fn default_run_prints_every_display_in_registration_order() {
    init_logger();
    let buffer = SharedBuffer::default();
    let mut station = Station::new(&Config::default(), || buffer.clone());

    station.run().unwrap();

    assert_eq!(
        buffer.contents(),
        "Current conditions: 80 degrees and 65% humidity\n\
         Avg/Max/Min temperature: 80/80/80\n\
         Forecast: Improving weather on the way!\n\
         Current conditions: 82 degrees and 70% humidity\n\
         Avg/Max/Min temperature: 81/82/80\n\
         Forecast: Improving weather on the way!\n\
         Current conditions: 78 degrees and 90% humidity\n\
         Avg/Max/Min temperature: 80/82/78\n\
         Forecast: Watch out for cooler, rainy weather\n"
    );
    assert_eq!(station.weather_data().measurement(), Measurement::new(78.0, 90.0, 1008.0));
}

#[test]
fn removed_display_goes_quiet() {
    init_logger();
    let buffer = SharedBuffer::default();
    let config = Config {
        displays: vec![DisplayKind::Statistics, DisplayKind::Forecast],
        readings: vec![Measurement::new(85.0, 90.0, 1000.0)],
        ..Config::default()
    };
    let mut station = Station::new(&config, || buffer.clone());
    let statistics = station
        .displays()
        .find(|(kind, _)| *kind == DisplayKind::Statistics)
        .map(|(_, display)| display.clone())
        .unwrap();

    station.weather_data_mut().remove_observer(&statistics);
    station.run().unwrap();

    assert_eq!(buffer.contents(), "Forecast: More of the same\n");
    assert_eq!(station.weather_data().len(), 1);
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "display disconnected"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failing_display_stops_the_run() {
    init_logger();
    let config = Config { displays: vec![DisplayKind::Forecast], ..Config::default() };
    let mut station = Station::new(&config, || ClosedPipe);

    let err = station.run().unwrap_err();

    assert!(format!("{:#}", err).contains("Reading 1"));
    // the first reading was stored before delivery failed, later ones never arrived
    assert_eq!(station.weather_data().measurement(), Measurement::new(80.0, 65.0, 1010.0));
}
