//! Configuration struct definitions.
//!
//! Every field is optional: an absent key leaves the corresponding setting alone.

use serde::Deserialize;

/// `[general]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Turns logging on or off.
    pub enabled: Option<bool>,
    /// Minimum level: `info`, `warn` or `error`.
    pub level: Option<String>,
    /// Tag printed after the pid field.
    pub prefix: Option<String>,
    /// Serialize whole lines across threads.
    pub thread_safe: Option<bool>,
    /// Leading UTC timestamp field.
    pub timestamps: Option<bool>,
    /// `file:line` field.
    pub source_location: Option<bool>,
}

/// `[modules]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    /// Replaces the module table. An empty list disables module filtering.
    pub enabled: Option<Vec<String>>,
}
