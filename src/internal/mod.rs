//! coretrace's own diagnostics, routed through the public dispatcher under a
//! reserved module tag so they obey the same enable, level and module gates as
//! application output. Before the host enables logging they silently vanish.

use crate::fmt::CallSite;
use crate::level::Level;
use crate::logger;

/// Module tag carried by every internal diagnostic line.
pub const MODULE: &str = "coretrace";

/// Non-fatal anomalies such as a config value that could not be applied.
#[track_caller]
pub fn warn(msg: &str) {
    logger::log_at(
        Level::Warn,
        Some(MODULE),
        CallSite::caller(),
        format_args!("{msg}\n"),
    );
}
