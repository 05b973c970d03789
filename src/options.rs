//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use args::{get_args, Args};
pub use config::Config;
pub use error::OptionError;
pub(crate) use error::OptionResult;

use self::args::GeneralArgs;
use crate::constants::*;

/// The resolved settings a report runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterSettings {
    pub device: PathBuf,
    pub nvme_binary: PathBuf,
}

impl Default for ReporterSettings {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            nvme_binary: PathBuf::from(DEFAULT_NVME_BINARY),
        }
    }
}

impl ReporterSettings {
    /// Builds the settings, with arguments taking priority over the config
    /// file, and the config file over the defaults.
    pub fn new(args: &GeneralArgs, config: &Config) -> OptionResult<Self> {
        Ok(Self {
            device: get_path(
                "device",
                args.device.as_ref(),
                config.device.as_ref(),
                DEFAULT_DEVICE,
            )?,
            nvme_binary: get_path(
                "nvme_binary",
                args.nvme_binary.as_ref(),
                config.nvme_binary.as_ref(),
                DEFAULT_NVME_BINARY,
            )?,
        })
    }
}

fn get_path(
    name: &str, arg: Option<&PathBuf>, config: Option<&PathBuf>, default: &str,
) -> OptionResult<PathBuf> {
    // Empty argument values are already rejected by clap, so only the config
    // file can hand us an empty path.
    match (arg, config) {
        (Some(path), _) => Ok(path.clone()),
        (None, Some(path)) if path.as_os_str().is_empty() => {
            Err(OptionError::invalid_config_value(name))
        }
        (None, Some(path)) => Ok(path.clone()),
        (None, None) => Ok(PathBuf::from(default)),
    }
}

/// Returns the default config file path, if the platform has a config
/// directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config_dir| config_dir.join(DEFAULT_CONFIG_FILE_LOCATION))
}

/// Reads the config file.
///
/// A config file given explicitly has to exist. If none is given, the default
/// location is tried, and an empty config is used if there is nothing there.
pub fn read_config(config_location: Option<&Path>) -> OptionResult<Config> {
    let path = match config_location {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    debug!("Reading config file at {}", path.display());
    let config_string = fs::read_to_string(&path).map_err(|err| {
        OptionError::config(format!("unable to read '{}': {err}", path.display()))
    })?;

    Ok(toml_edit::de::from_str(&config_string)?)
}
