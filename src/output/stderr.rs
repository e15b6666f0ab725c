//! The default destination: the process's standard error stream.

use super::Sink;
use std::io::{self, ErrorKind, Write};

/// Unbuffered stderr writer.
///
/// Interrupted writes are retried; any other failure drops the rest of the
/// bytes without telling anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, bytes: &[u8]) {
        write_retrying(&mut io::stderr().lock(), bytes);
    }
}

/// Loops until `bytes` is exhausted, retrying only on `Interrupted`.
pub(crate) fn write_retrying(writer: &mut impl Write, mut bytes: &[u8]) {
    while !bytes.is_empty() {
        match writer.write(bytes) {
            Ok(0) => break,
            Ok(written) => bytes = &bytes[written..],
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(_) => break,
        }
    }
}
