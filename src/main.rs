use std::io;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use weather_station::config::{parse_reading, Config};
use weather_station::pub_sub::Measurement;
use weather_station::Station;

fn cli() -> Command {
    Command::new("weather-station")
        .about("Publishes weather readings to the current conditions, statistics and forecast displays")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Config file to use instead of the per-user one"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(|level: &str| {
                    level.parse::<LevelFilter>().map_err(|_| format!("unknown log level `{}`", level))
                })
                .help("Overrides the configured log level"),
        )
        .arg(
            Arg::new("reading")
                .short('r')
                .long("reading")
                .value_name("T,H,P")
                .action(ArgAction::Append)
                .value_parser(parse_reading)
                .help("Reading to publish, replaces the configured readings"),
        )
}

fn main() -> Result<(), anyhow::Error> {
    let matches = cli().get_matches();

    // Displays own stdout, so logs go to stderr. The filter is narrowed once
    // the config is known.
    TermLogger::init(LevelFilter::Trace, simplelog::Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    log::set_max_level(LevelFilter::Info);

    let mut config = Config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let level = match matches.get_one::<LevelFilter>("log-level") {
        Some(level) => *level,
        None => config.log_level_filter()?,
    };
    log::set_max_level(level);
    if let Some(readings) = matches.get_many::<Measurement>("reading") {
        config.readings = readings.copied().collect();
    }

    info!("Started the weather station");
    let mut station = Station::new(&config, io::stdout);
    station.run()?;
    info!("All readings published");
    Ok(())
}
