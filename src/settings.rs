use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::capitalise::CapitaliseMode;
pub use crate::error::{Error, Result};
use crate::words::WordlistMode;

/// Prefix of the environment variables that override the settings file.
pub const ENV_PREFIX: &str = "MEMORABLE_PASSWORD";
pub const DEFAULT_NUM_DIGITS: usize = 3;

/// The configuration a password is generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub num_digits: usize,
    pub capitalise_mode: CapitaliseMode,
    pub wordlist_mode: WordlistMode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            num_digits: DEFAULT_NUM_DIGITS,
            capitalise_mode: CapitaliseMode::None,
            wordlist_mode: WordlistMode::AbstractOnly,
        }
    }
}

impl Settings {
    /// Reads the settings out of an already merged configuration.
    pub fn from_config(config: &config::Config) -> Result<Settings> {
        let num_digits = config.get_int("num_digits").map_err(|err| {
            Error::InvalidConfiguration(format!("num_digits isn't a number: {err}"))
        })?;
        if num_digits < 0 {
            return Err(Error::InvalidConfiguration(format!(
                "num_digits can't be negative: {num_digits}"
            )));
        }

        Ok(Settings {
            num_digits: num_digits as usize,
            capitalise_mode: config.get_str("capitalise_mode")?.parse()?,
            wordlist_mode: config.get_str("wordlist_mode")?.parse()?,
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        let mut table = toml::value::Table::new();
        table.insert(
            "num_digits".to_owned(),
            toml::Value::Integer(self.num_digits as i64),
        );
        table.insert(
            "capitalise_mode".to_owned(),
            toml::Value::String(self.capitalise_mode.to_string()),
        );
        table.insert(
            "wordlist_mode".to_owned(),
            toml::Value::String(self.wordlist_mode.to_string()),
        );

        Ok(toml::to_string(&toml::Value::Table(table))?)
    }
}

fn default_settings() -> Result<config::Config> {
    let defaults = Settings::default();
    let mut settings = config::Config::default();

    settings.set_default("num_digits", defaults.num_digits as i64)?;
    settings.set_default("capitalise_mode", defaults.capitalise_mode.as_str())?;
    settings.set_default("wordlist_mode", defaults.wordlist_mode.as_str())?;

    Ok(settings)
}

/// Where the settings file lives, `$XDG_CONFIG_HOME/memorable-password/settings.toml` or
/// `$HOME/.config/memorable-password/settings.toml`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    match xdg_config_home {
        Some(p) => Ok(p.join("memorable-password").join("settings.toml")),
        None => match home {
            Some(h) => Ok(h
                .join(".config")
                .join("memorable-password")
                .join("settings.toml")),
            None => Err(Error::Generic("no home directory set")),
        },
    }
}

pub fn file_settings(file: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(file.to_path_buf())
        .format(config::FileFormat::Toml)
        .required(false)
}

/// Merges the defaults, the settings file and the environment, in that order.
pub fn read_config(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<config::Config> {
    let mut settings = default_settings()?;

    match xdg_config_file_location(home, xdg_config_home) {
        Ok(path) => {
            log::debug!("reading settings from {}", path.display());
            settings.merge(file_settings(&path))?;
        }
        Err(err) => log::debug!("skipping settings file: {err}"),
    }

    settings.merge(config::Environment::with_prefix(ENV_PREFIX))?;

    Ok(settings)
}

pub fn read_settings(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<Settings> {
    Settings::from_config(&read_config(home, xdg_config_home)?)
}

pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, settings.to_toml()?)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_tests;
