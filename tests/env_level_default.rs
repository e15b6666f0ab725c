//! `CT_LOG_LEVEL` seeds the minimum level until the application sets one.
//!
//! Environment defaults are read once per process, so this file holds a single test.

mod common;

use common::Capture;
use coretrace::Level;

#[test]
fn env_level_applies_until_explicit_call() {
    // SAFETY: single-threaded at this point; no other test runs in this binary
    unsafe {
        std::env::remove_var("CT_DEBUG");
        std::env::set_var("CT_LOG_LEVEL", "WaRn");
    }

    let capture = Capture::install();
    coretrace::enable_logging();

    coretrace::log(Level::Info, "info via env\n");
    coretrace::log(Level::Warn, "warn via env\n");
    assert_eq!(coretrace::min_level(), Level::Warn);

    coretrace::set_min_level(Level::Info);
    coretrace::log(Level::Info, "info after explicit\n");

    // Changing the variable later has no effect: it was read exactly once.
    // SAFETY: see above
    unsafe { std::env::set_var("CT_LOG_LEVEL", "error") };
    coretrace::log(Level::Info, "info still visible\n");

    let text = capture.text();
    assert!(!text.contains("info via env"));
    assert!(text.contains("warn via env"));
    assert!(text.contains("info after explicit"));
    assert!(text.contains("info still visible"));
    assert_eq!(coretrace::min_level(), Level::Info);
}
