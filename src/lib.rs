// Deny unsafe code except when the ffi feature is enabled; the thread id lookup opts in locally
#![cfg_attr(not(feature = "ffi"), deny(unsafe_code))]

//! `coretrace` - a process-wide logging core.
//!
//! One shared logger per process, configured through free functions and used
//! from any thread:
//! - Three levels with a runtime minimum
//! - Optional module tags with a bounded allow-list filter
//! - Pluggable output sink (stderr by default)
//! - Whole-line atomic emission under concurrency
//! - `CT_LOG_LEVEL` / `CT_DEBUG` startup defaults that explicit calls always override
//!
//! Every line has the shape
//! `[timestamp] |pid| prefix [LEVEL] file:line (module) message`,
//! where the bracketed timestamp, the location and the module only appear when enabled.
//!
//! # Example
//!
//! ```
//! use coretrace::Level;
//! use std::sync::{Arc, Mutex};
//!
//! let captured = Arc::new(Mutex::new(Vec::new()));
//! let buffer = Arc::clone(&captured);
//! coretrace::set_sink(move |bytes: &[u8]| buffer.lock().unwrap().extend_from_slice(bytes));
//!
//! coretrace::enable_logging();
//! coretrace::set_min_level(Level::Warn);
//!
//! coretrace::info!("dropped\n");
//! coretrace::warn!(module: "net", "retrying in {}s\n", 2);
//!
//! let text = String::from_utf8_lossy(&captured.lock().unwrap()).into_owned();
//! assert!(text.contains("[WARN]"));
//! assert!(!text.contains("dropped"));
//! ```
//!
//! # Features
//!
//! - `ffi`: C-ABI bindings (`coretrace_*` functions)

mod macros;

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod state;

// FFI module (feature-gated)
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{CallSite, Color, color, level_color, level_label};
pub use level::Level;
pub use logger::{
    FORMAT_ERROR_FALLBACK, Module, Render, disable_logging, disable_module, enable_all_modules,
    enable_logging, enable_module, log, log_at, log_is_enabled, log_module, min_level,
    module_is_enabled, pid, set_min_level, set_prefix, set_source_location, set_thread_safe,
    set_timestamps, thread_id, write_dec, write_hex, write_log_line, write_prefix, write_str,
};
pub use output::{Sink, StderrSink, reset_sink, set_shared_sink, set_sink, write_raw};

// FFI re-exports
#[cfg(feature = "ffi")]
pub use ffi::{
    CORETRACE_LEVEL_ERROR, CORETRACE_LEVEL_INFO, CORETRACE_LEVEL_WARN, CoretraceSinkFn,
    coretrace_disable_logging, coretrace_disable_module, coretrace_enable_all_modules,
    coretrace_enable_logging, coretrace_enable_module, coretrace_log, coretrace_log_is_enabled,
    coretrace_min_level, coretrace_module_is_enabled, coretrace_reset_sink, coretrace_set_min_level,
    coretrace_set_prefix, coretrace_set_sink, coretrace_set_source_location,
    coretrace_set_thread_safe, coretrace_set_timestamps, coretrace_thread_id,
};
