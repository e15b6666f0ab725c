//! Startup defaults taken from the environment.
//!
//! These only ever seed the configuration: a value set through the API beats
//! them no matter whether it arrives before or after they are read.

use super::modules::ModuleTable;
use crate::level::Level;

/// `info`, `warn` or `error`, case-insensitive. Anything else means Info.
pub const LEVEL_VAR: &str = "CT_LOG_LEVEL";

/// Comma-separated module names, e.g. `alloc,trace`.
pub const MODULES_VAR: &str = "CT_DEBUG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDefaults {
    /// `None` when the level variable is absent.
    pub level: Option<Level>,
    /// Already filtered down to names the module table would accept.
    pub modules: Vec<String>,
}

impl EnvDefaults {
    /// Reads [`LEVEL_VAR`] and [`MODULES_VAR`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = lookup(LEVEL_VAR).map(|value| Level::from_env_token(&value));
        let modules = lookup(MODULES_VAR)
            .map(|list| parse_module_list(&list).map(str::to_owned).collect())
            .unwrap_or_default();
        Self { level, modules }
    }
}

/// Splits a comma-separated list, trims each token and drops the ones
/// [`ModuleTable::is_valid_name`] rejects.
pub fn parse_module_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',')
        .map(str::trim)
        .filter(|name| ModuleTable::is_valid_name(name))
}
