//! TOML configuration file support.
//!
//! A config file is just another explicit caller: [`Config::apply`] goes through
//! the public setters, so its values beat `CT_LOG_LEVEL` and `CT_DEBUG` the same
//! way a direct API call would.

mod structs;

pub use structs::{GeneralConfig, ModulesConfig};

use crate::internal;
use crate::level::Level;
use crate::logger;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "coretrace.toml";

/// A completely empty file is valid and changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub modules: ModulesConfig,
}

impl Config {
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on invalid TOML or mistyped values.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/coretrace/coretrace.toml`, e.g. `~/.config/coretrace/coretrace.toml` on Linux.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigDirNotFound`] when no home directory can be determined.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "coretrace")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Loads the file at [`Self::default_path`].
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(Self::default_path()?)
    }

    /// Loads an explicit path. A leading `~` is expanded; a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let raw = path.as_ref().to_string_lossy();
        let expanded = shellexpand::tilde(&raw);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Pushes every present setting into the process-wide logger.
    ///
    /// `enabled` goes first so that diagnostics about the remaining values are visible.
    pub fn apply(&self) {
        let general = &self.general;

        match general.enabled {
            Some(true) => logger::enable_logging(),
            Some(false) => logger::disable_logging(),
            None => {}
        }
        if let Some(prefix) = &general.prefix {
            logger::set_prefix(prefix);
        }
        if let Some(enabled) = general.thread_safe {
            logger::set_thread_safe(enabled);
        }
        if let Some(enabled) = general.timestamps {
            logger::set_timestamps(enabled);
        }
        if let Some(enabled) = general.source_location {
            logger::set_source_location(enabled);
        }
        if let Some(level) = &general.level {
            match level.parse::<Level>() {
                Ok(level) => logger::set_min_level(level),
                Err(e) => internal::warn(&format!("ignoring config level: {e}")),
            }
        }

        if let Some(modules) = &self.modules.enabled {
            logger::enable_all_modules();
            for name in modules {
                logger::enable_module(name);
            }
        }
    }
}
