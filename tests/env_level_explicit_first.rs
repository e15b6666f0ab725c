//! An explicit level set before the first log call beats `CT_LOG_LEVEL`.

mod common;

use common::Capture;
use coretrace::Level;

#[test]
fn explicit_level_before_first_log_wins() {
    // SAFETY: single-threaded at this point; no other test runs in this binary
    unsafe {
        std::env::remove_var("CT_DEBUG");
        std::env::set_var("CT_LOG_LEVEL", "error");
    }

    let capture = Capture::install();
    coretrace::enable_logging();
    coretrace::set_min_level(Level::Info);

    coretrace::log(Level::Info, "info passes\n");
    coretrace::log(Level::Warn, "warn passes\n");

    let text = capture.text();
    assert!(text.contains("info passes"));
    assert!(text.contains("warn passes"));
    assert_eq!(coretrace::min_level(), Level::Info);
}
