use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Error};
use directories::BaseDirs;
use log::{error, info, LevelFilter};
use serde_derive::{Deserialize, Serialize};

use crate::displays::DisplayKind;
use crate::pub_sub::Measurement;
use crate::{APP_DIR, STATION_CONFIG_FILE};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub displays: Vec<DisplayKind>,
    pub readings: Vec<Measurement>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            displays: vec![DisplayKind::CurrentConditions, DisplayKind::Statistics, DisplayKind::Forecast],
            readings: vec![
                Measurement::new(80.0, 65.0, 1010.0),
                Measurement::new(82.0, 70.0, 1012.0),
                Measurement::new(78.0, 90.0, 1008.0),
            ],
        }
    }
}

impl Config {
    /// Reads `path` when given, otherwise the per-user config file, which is
    /// created from the defaults the first time.
    pub fn load(path: Option<&Path>) -> Result<Config, Error> {
        match path {
            Some(path) => Config::read_toml(path),
            None => match Config::get_full_config_path() {
                Some(path) if path.exists() => Config::read_toml(&path),
                Some(path) => Ok(Config::create_default(path)),
                None => Ok(Config::default()),
            },
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Config, Error> {
        toml::from_str(contents).map_err(Error::from)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, Error> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("Unknown log level `{}`", self.log_level))
    }

    fn read_toml(path: &Path) -> Result<Config, Error> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read file `{}`", path.display()))?;
        let config = Config::from_toml_str(&contents)
            .with_context(|| format!("Unable to load data from `{}`", path.display()))?;
        info!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    fn create_default(path: PathBuf) -> Config {
        let config = Config::default();
        let written = toml::to_string(&config).map_err(Error::from).and_then(|toml| {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&path, toml)?;
            Ok(())
        });
        // Running without a config file on disk is fine; just report it.
        match written {
            Ok(_) => info!("New config file created at '{}' location, edit it to change the displays or readings.", path.display()),
            Err(e) => error!("Error creating {} file: {:#}", path.display(), e),
        }
        config
    }

    fn get_full_config_path() -> Option<PathBuf> {
        let proj_dir = BaseDirs::new()?;
        Some(proj_dir.config_dir().join(APP_DIR).join(STATION_CONFIG_FILE))
    }
}

/// Parses a `temperature,humidity,pressure` triple given on the command line.
pub fn parse_reading(value: &str) -> Result<Measurement, Error> {
    let fields = value
        .split(',')
        .map(|field| field.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid number in reading `{}`", value))?;
    match fields.as_slice() {
        [temperature, humidity, pressure] => Ok(Measurement::new(*temperature, *humidity, *pressure)),
        _ => Err(anyhow!("Reading `{}` must be temperature,humidity,pressure", value)),
    }
}
