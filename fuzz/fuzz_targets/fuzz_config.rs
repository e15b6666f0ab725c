#![no_main]
use coretrace::Config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any input; parse errors are fine.
    let _ = Config::from_toml_str(data);
});
