#![no_main]
use coretrace::Level;
use coretrace::fmt::{CallSite, LineFormatter, Record};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, u32, bool, &str, &str, &str)| {
    let (level, line, colors, prefix, module, message) = input;
    let level = Level::all()[usize::from(level) % 3];
    let record = Record {
        level,
        module: Some(module),
        call_site: CallSite::new(module, line),
        message,
    };

    let mut out = Vec::new();
    LineFormatter::new(prefix.as_bytes(), line)
        .colors(colors)
        .source_location(true)
        .render(&record, &mut out);

    // The message is always the verbatim tail of the line.
    assert!(out.ends_with(message.as_bytes()));
});
