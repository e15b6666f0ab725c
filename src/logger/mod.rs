//! The public call surface. Each `log*` call walks the same gate sequence:
//! env defaults, enabled flag, minimum level, module filter, message rendering,
//! then one atomic line emission.

mod render;
mod thread;

pub use render::Render;
pub use thread::thread_id;

use crate::fmt::{
    CallSite, DEC_CAPACITY, HEX_CAPACITY, LineFormatter, Record, colors_enabled, format_dec,
    format_hex,
};
use crate::level::Level;
use crate::output::{self, OutputGuard};
use crate::state::CONFIG;
use chrono::Utc;
use std::sync::OnceLock;

/// Written instead of a line whose message failed to render.
pub const FORMAT_ERROR_FALLBACK: &str = "coretrace: log format error\n";

/// Strong type for module tags so `log_module` cannot be confused with a message argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module<'a>(pub &'a str);

impl<'a> Module<'a> {
    #[must_use]
    pub const fn new(name: &'a str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn name(self) -> &'a str {
        self.0
    }
}

static PID: OnceLock<u32> = OnceLock::new();

/// Process id, looked up once and reused for every line.
pub fn pid() -> u32 {
    *PID.get_or_init(std::process::id)
}

// ============================================================================
// Enable / disable
// ============================================================================

/// Logging starts disabled; nothing is emitted until this is called.
pub fn enable_logging() {
    CONFIG.flags.set_enabled(true);
}

pub fn disable_logging() {
    CONFIG.flags.set_enabled(false);
}

#[must_use]
pub fn log_is_enabled() -> bool {
    CONFIG.flags.is_enabled()
}

/// Replaces the `==ct==` tag. Values longer than 63 bytes are truncated.
pub fn set_prefix(prefix: &str) {
    CONFIG.set_prefix(prefix);
}

// ============================================================================
// Level filtering
// ============================================================================

/// Messages below `level` are dropped. Overrides `CT_LOG_LEVEL` for the rest of the process.
pub fn set_min_level(level: Level) {
    CONFIG.set_min_level(level);
}

#[must_use]
pub fn min_level() -> Level {
    CONFIG.flags.min_level()
}

// ============================================================================
// Module filtering
// ============================================================================

/// Registers `name`; once any module is registered, tagged calls for other modules are dropped.
/// Empty names and names over 31 bytes are ignored. Overrides `CT_DEBUG`.
pub fn enable_module(name: &str) {
    CONFIG.enable_module(name);
}

pub fn disable_module(name: &str) {
    CONFIG.disable_module(name);
}

/// Clears the table so every module passes again.
pub fn enable_all_modules() {
    CONFIG.enable_all_modules();
}

/// True when no filter is active or `name` is registered.
#[must_use]
pub fn module_is_enabled(name: &str) -> bool {
    CONFIG.module_is_enabled(name)
}

// ============================================================================
// Output settings
// ============================================================================

/// With `false`, concurrent lines may interleave. Only for single-threaded hot paths.
pub fn set_thread_safe(enabled: bool) {
    CONFIG.flags.set_thread_safe(enabled);
}

pub fn set_timestamps(enabled: bool) {
    CONFIG.flags.set_timestamps(enabled);
}

pub fn set_source_location(enabled: bool) {
    CONFIG.flags.set_source_location(enabled);
}

// ============================================================================
// Logging
// ============================================================================

/// Logs an untagged message.
///
/// ```
/// coretrace::log(coretrace::Level::Warn, format_args!("count={}\n", 42));
/// ```
#[track_caller]
pub fn log(level: Level, message: impl Render) {
    log_at(level, None, CallSite::caller(), message);
}

/// Logs a message that only passes while `module` is allowed by the module filter.
#[track_caller]
pub fn log_module(level: Level, module: Module<'_>, message: impl Render) {
    log_at(level, Some(module.name()), CallSite::caller(), message);
}

/// Core dispatch with an explicit call site, for callers that capture locations themselves.
pub fn log_at(level: Level, module: Option<&str>, call_site: CallSite<'_>, message: impl Render) {
    CONFIG.ensure_env_defaults();

    if !CONFIG.flags.is_enabled() || level < CONFIG.flags.min_level() {
        return;
    }
    if let Some(name) = module
        && !name.is_empty()
        && !CONFIG.module_is_enabled(name)
    {
        return;
    }

    let mut body = String::new();
    if message.render(&mut body).is_err() {
        output::write_raw(FORMAT_ERROR_FALLBACK.as_bytes());
        return;
    }
    if body.is_empty() {
        return;
    }

    write_log_line(level, module, call_site, &body);
}

/// Dispatch for a module tag that arrived as raw bytes, e.g. across the C ABI.
///
/// The filter compares bytes, so a tag that is not UTF-8 is dropped whenever a
/// filter is active. Otherwise it is printed lossily.
#[cfg(feature = "ffi")]
pub(crate) fn log_at_raw_module(
    level: Level,
    module: &[u8],
    call_site: CallSite<'_>,
    message: impl Render,
) {
    CONFIG.ensure_env_defaults();
    if !CONFIG.module_bytes_enabled(module) {
        return;
    }
    let name = String::from_utf8_lossy(module);
    log_at(level, Some(name.as_ref()), call_site, message);
}

/// Byte-level [`module_is_enabled`]. Does not apply env defaults.
#[cfg(feature = "ffi")]
pub(crate) fn module_bytes_enabled(name: &[u8]) -> bool {
    CONFIG.module_bytes_enabled(name)
}

/// Formats and emits one complete line, bypassing the enabled/level/module gates.
///
/// With thread safety on, no other line can interleave with this one.
pub fn write_log_line(level: Level, module: Option<&str>, call_site: CallSite<'_>, message: &str) {
    let prefix = CONFIG.prefix_snapshot();
    let _output = OutputGuard::acquire(CONFIG.flags.thread_safe());

    let formatter = LineFormatter::new(prefix.as_bytes(), pid())
        .colors(colors_enabled())
        .timestamp(CONFIG.flags.timestamps().then(Utc::now))
        .source_location(CONFIG.flags.source_location());

    let record = Record {
        level,
        module,
        call_site,
        message,
    };

    let mut line = Vec::with_capacity(128 + prefix.len() + message.len());
    formatter.render(&record, &mut line);
    output::write_raw(&line);
}

// ============================================================================
// Low-level writes
// ============================================================================

pub fn write_str(value: &str) {
    output::write_raw(value.as_bytes());
}

/// Decimal, no heap allocation.
pub fn write_dec(value: u64) {
    let mut buf = [0u8; DEC_CAPACITY];
    output::write_raw(format_dec(value, &mut buf));
}

/// `0x`-prefixed lowercase hex, no heap allocation.
pub fn write_hex(value: usize) {
    let mut buf = [0u8; HEX_CAPACITY];
    output::write_raw(format_hex(value, &mut buf));
}

/// Writes `|pid| prefix [LEVEL] ` to the sink. Not serialized against other lines;
/// use [`write_log_line`] when atomicity matters.
pub fn write_prefix(level: Level) {
    let prefix = CONFIG.prefix_snapshot();
    let mut head = Vec::with_capacity(64 + prefix.len());
    LineFormatter::new(prefix.as_bytes(), pid())
        .colors(colors_enabled())
        .render_head(level, &mut head);
    head.push(b' ');
    output::write_raw(&head);
}
