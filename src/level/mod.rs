//! Severity levels that gate which messages reach the sink.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the dispatcher can compare a message's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Normal operational milestones. Passes the default filter.
    #[default]
    Info = 0,
    /// Non-fatal anomalies that may need attention.
    Warn = 1,
    /// Failures that prevent an operation from completing.
    Error = 2,
}

impl Level {
    /// Lowercase because config files and `CT_LOG_LEVEL` use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// The text between the brackets of the level field of an output line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Info, Self::Warn, Self::Error]
    }

    /// Interprets a `CT_LOG_LEVEL` value. Unlike `FromStr` this never fails:
    /// anything other than `warn` or `error` means Info.
    #[must_use]
    pub fn from_env_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("warn") {
            Self::Warn
        } else if token.eq_ignore_ascii_case("error") {
            Self::Error
        } else {
            Self::Info
        }
    }

    pub(crate) const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Out-of-range values fall back to Info so a corrupted flag can never hide errors.
    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Warn,
            2 => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
