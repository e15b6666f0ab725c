//! C-ABI bindings so C and C++ code can log through the same process-wide
//! logger as the Rust side of the program.
//!
//! Message bodies arrive pre-rendered as NUL-terminated UTF-8. NULL pointers and
//! invalid UTF-8 are ignored rather than reported: logging never fails.

#![allow(unsafe_code)]

use std::ffi::{CStr, c_char, c_int};

use crate::fmt::CallSite;
use crate::level::Level;
use crate::logger;
use crate::output::{self, Sink};

/// Named constants so FFI callers avoid magic numbers in their log calls.
pub const CORETRACE_LEVEL_INFO: c_int = 0;
pub const CORETRACE_LEVEL_WARN: c_int = 1;
pub const CORETRACE_LEVEL_ERROR: c_int = 2;

/// `void (*)(const char *data, size_t size)`.
pub type CoretraceSinkFn = unsafe extern "C" fn(data: *const c_char, size: usize);

/// Maps the C-side integer constants back to the Rust enum; unknown values mean Info.
const fn level_from_int(level: c_int) -> Level {
    match level {
        CORETRACE_LEVEL_WARN => Level::Warn,
        CORETRACE_LEVEL_ERROR => Level::Error,
        _ => Level::Info,
    }
}

const fn level_to_int(level: Level) -> c_int {
    match level {
        Level::Info => CORETRACE_LEVEL_INFO,
        Level::Warn => CORETRACE_LEVEL_WARN,
        Level::Error => CORETRACE_LEVEL_ERROR,
    }
}

/// Borrows a C string's bytes without the terminator, or `None` for NULL.
///
/// # Safety
/// `ptr` must be NULL or point to a NUL-terminated string that outlives `'a`.
unsafe fn borrow_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: ptr is non-null and the caller guarantees NUL termination
    Some(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

/// Borrows a C string as `&str`, or `None` for NULL or invalid UTF-8.
///
/// # Safety
/// Same contract as [`borrow_bytes`].
unsafe fn borrow_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    // SAFETY: forwarded caller guarantee
    unsafe { borrow_bytes(ptr) }.and_then(|bytes| std::str::from_utf8(bytes).ok())
}

/// Adapts a C callback to the [`Sink`] trait.
struct CSink(CoretraceSinkFn);

impl Sink for CSink {
    fn write(&self, bytes: &[u8]) {
        // SAFETY: bytes is a live slice for the duration of the call; the callback
        // was supplied by the C caller, who guarantees it is safe to invoke
        unsafe { (self.0)(bytes.as_ptr().cast::<c_char>(), bytes.len()) };
    }
}

// ============================================================================
// Enable / disable
// ============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn coretrace_enable_logging() {
    logger::enable_logging();
}

#[unsafe(no_mangle)]
pub extern "C" fn coretrace_disable_logging() {
    logger::disable_logging();
}

/// Returns 1 when logging is enabled, 0 otherwise.
#[unsafe(no_mangle)]
pub extern "C" fn coretrace_log_is_enabled() -> c_int {
    c_int::from(logger::log_is_enabled())
}

/// # Safety
/// `prefix` must be NULL or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn coretrace_set_prefix(prefix: *const c_char) {
    // SAFETY: forwarded caller guarantee
    if let Some(prefix) = unsafe { borrow_str(prefix) } {
        logger::set_prefix(prefix);
    }
}

// ============================================================================
// Filtering
// ============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn coretrace_set_min_level(level: c_int) {
    logger::set_min_level(level_from_int(level));
}

#[unsafe(no_mangle)]
pub extern "C" fn coretrace_min_level() -> c_int {
    level_to_int(logger::min_level())
}

/// # Safety
/// `name` must be NULL or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn coretrace_enable_module(name: *const c_char) {
    // SAFETY: forwarded caller guarantee
    if let Some(name) = unsafe { borrow_str(name) } {
        logger::enable_module(name);
    }
}

/// # Safety
/// `name` must be NULL or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn coretrace_disable_module(name: *const c_char) {
    // SAFETY: forwarded caller guarantee
    if let Some(name) = unsafe { borrow_str(name) } {
        logger::disable_module(name);
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn coretrace_enable_all_modules() {
    logger::enable_all_modules();
}

/// Returns 1 when `name` would pass the module filter. NULL is treated as untagged.
/// Names are compared byte for byte, so one that is not UTF-8 only passes while
/// no filter is active.
///
/// # Safety
/// `name` must be NULL or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn coretrace_module_is_enabled(name: *const c_char) -> c_int {
    // SAFETY: forwarded caller guarantee
    unsafe { borrow_bytes(name) }.map_or(1, |name| c_int::from(logger::module_bytes_enabled(name)))
}

// ============================================================================
// Output settings
// ============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn coretrace_set_thread_safe(enabled: c_int) {
    logger::set_thread_safe(enabled != 0);
}

#[unsafe(no_mangle)]
pub extern "C" fn coretrace_set_timestamps(enabled: c_int) {
    logger::set_timestamps(enabled != 0);
}

#[unsafe(no_mangle)]
pub extern "C" fn coretrace_set_source_location(enabled: c_int) {
    logger::set_source_location(enabled != 0);
}

/// Redirects output to `sink`. `None` (a NULL function pointer) reverts to stderr.
#[unsafe(no_mangle)]
pub extern "C" fn coretrace_set_sink(sink: Option<CoretraceSinkFn>) {
    match sink {
        Some(callback) => output::set_sink(CSink(callback)),
        None => output::reset_sink(),
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn coretrace_reset_sink() {
    output::reset_sink();
}

/// Same value as the Rust-side `thread_id()`.
#[unsafe(no_mangle)]
pub extern "C" fn coretrace_thread_id() -> u64 {
    logger::thread_id()
}

// ============================================================================
// Logging
// ============================================================================

/// Logs a pre-rendered message.
///
/// `module` may be NULL for an untagged line. A module that is not UTF-8 is
/// filtered on its raw bytes and printed lossily. `file` may be NULL, in which
/// case the location field reads `<unknown>:line`.
///
/// # Safety
/// Every pointer must be NULL or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn coretrace_log(
    level: c_int,
    module: *const c_char,
    file: *const c_char,
    line: u32,
    message: *const c_char,
) {
    // SAFETY: forwarded caller guarantee
    let Some(message) = (unsafe { borrow_str(message) }) else {
        return;
    };
    // SAFETY: forwarded caller guarantee
    let module = unsafe { borrow_bytes(module) };
    // SAFETY: forwarded caller guarantee
    let file = unsafe { borrow_str(file) }.unwrap_or("<unknown>");

    let level = level_from_int(level);
    let call_site = CallSite::new(file, line);
    match module {
        None => logger::log_at(level, None, call_site, message),
        Some(raw) => match std::str::from_utf8(raw) {
            Ok(name) => logger::log_at(level, Some(name), call_site, message),
            Err(_) => logger::log_at_raw_module(level, raw, call_site, message),
        },
    }
}
