//! Shared helpers for tests that drive the process-wide logger.

#![allow(dead_code)]

use coretrace::{Level, Sink};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static SERIAL: Mutex<()> = Mutex::new(());

/// Tests in one binary share the global logger, so each holds this guard for its
/// whole body. The logger is reset to its defaults before the guard is returned.
pub fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    reset();
    guard
}

pub fn reset() {
    coretrace::disable_logging();
    coretrace::set_min_level(Level::Info);
    coretrace::enable_all_modules();
    coretrace::set_prefix("==ct==");
    coretrace::set_thread_safe(true);
    coretrace::set_timestamps(false);
    coretrace::set_source_location(false);
    coretrace::reset_sink();
}

/// In-memory sink that records every byte it is handed.
#[derive(Clone, Default)]
pub struct Capture {
    bytes: Arc<Mutex<Vec<u8>>>,
    calls: Arc<Mutex<usize>>,
}

impl Sink for Capture {
    fn write(&self, bytes: &[u8]) {
        self.bytes.lock().unwrap().extend_from_slice(bytes);
        *self.calls.lock().unwrap() += 1;
    }
}

impl Capture {
    /// Creates a capture and makes it the active sink.
    pub fn install() -> Self {
        let capture = Self::default();
        coretrace::set_sink(capture.clone());
        capture
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Captured output with ANSI escapes removed, so assertions hold on a tty too.
    pub fn text(&self) -> String {
        strip_ansi(&String::from_utf8_lossy(&self.bytes()))
    }

    /// Newline-terminated lines, without the terminator.
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

/// Removes `ESC [ ... m` sequences.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
