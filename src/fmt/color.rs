//! Symbolic SGR colors and the once-per-process decision whether to emit them.
//!
//! The decision is taken the first time anything asks for it and is never
//! re-evaluated: setting `NO_COLOR` or redirecting stderr afterwards has no effect.

use crate::level::Level;
use std::io::{self, IsTerminal};
use std::sync::OnceLock;

/// Presence of this variable (with any value) turns color off.
pub const NO_COLOR_VAR: &str = "NO_COLOR";

static COLORS_ENABLED: OnceLock<bool> = OnceLock::new();

/// Every style the line formatter or a caller may ask for. Plain 16-color SGR only,
/// so output renders on any terminal that understands ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,

    Dim,
    Bold,
    Underline,
    Italic,
    Blink,
    Reverse,
    Hidden,
    Strike,

    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,

    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,

    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,

    BgGray,
    BgBrightRed,
    BgBrightGreen,
    BgBrightYellow,
    BgBrightBlue,
    BgBrightMagenta,
    BgBrightCyan,
    BgBrightWhite,
}

impl Color {
    /// The raw escape sequence, regardless of whether color output is active.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Reset => "\x1b[0m",

            Self::Dim => "\x1b[2m",
            Self::Bold => "\x1b[1m",
            Self::Underline => "\x1b[4m",
            Self::Italic => "\x1b[3m",
            Self::Blink => "\x1b[5m",
            Self::Reverse => "\x1b[7m",
            Self::Hidden => "\x1b[8m",
            Self::Strike => "\x1b[9m",

            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",

            Self::Gray => "\x1b[90m",
            Self::BrightRed => "\x1b[91m",
            Self::BrightGreen => "\x1b[92m",
            Self::BrightYellow => "\x1b[93m",
            Self::BrightBlue => "\x1b[94m",
            Self::BrightMagenta => "\x1b[95m",
            Self::BrightCyan => "\x1b[96m",
            Self::BrightWhite => "\x1b[97m",

            Self::BgBlack => "\x1b[40m",
            Self::BgRed => "\x1b[41m",
            Self::BgGreen => "\x1b[42m",
            Self::BgYellow => "\x1b[43m",
            Self::BgBlue => "\x1b[44m",
            Self::BgMagenta => "\x1b[45m",
            Self::BgCyan => "\x1b[46m",
            Self::BgWhite => "\x1b[47m",

            Self::BgGray => "\x1b[100m",
            Self::BgBrightRed => "\x1b[101m",
            Self::BgBrightGreen => "\x1b[102m",
            Self::BgBrightYellow => "\x1b[103m",
            Self::BgBrightBlue => "\x1b[104m",
            Self::BgBrightMagenta => "\x1b[105m",
            Self::BgBrightCyan => "\x1b[106m",
            Self::BgBrightWhite => "\x1b[107m",
        }
    }

    /// Green for info, yellow for warn, red for error.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Info => Self::Green,
            Level::Warn => Self::Yellow,
            Level::Error => Self::Red,
        }
    }
}

/// Whether log lines carry escape sequences. Computed on first use, then cached.
pub fn colors_enabled() -> bool {
    *COLORS_ENABLED.get_or_init(|| {
        detect_colors(
            std::env::var_os(NO_COLOR_VAR).is_some(),
            io::stderr().is_terminal(),
        )
    })
}

/// `NO_COLOR` wins over terminal detection; otherwise color follows whether stderr is a tty.
#[must_use]
pub const fn detect_colors(no_color_set: bool, stderr_is_terminal: bool) -> bool {
    !no_color_set && stderr_is_terminal
}

/// The escape for `color`, or an empty string when color output is off.
#[must_use]
pub fn color(color: Color) -> &'static str {
    if colors_enabled() { color.ansi() } else { "" }
}

/// The escape used for a level's `[LABEL]` field, or empty when color output is off.
#[must_use]
pub fn level_color(level: Level) -> &'static str {
    color(Color::for_level(level))
}

/// The bracketed text of a level field, e.g. `WARN`.
#[must_use]
pub const fn level_label(level: Level) -> &'static str {
    level.label()
}
