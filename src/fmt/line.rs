//! Byte-exact rendering of one output line.
//!
//! Field order is fixed:
//! `[timestamp] |pid| prefix [LEVEL] file:line (module) message`.
//! Optional fields vanish together with the single space that separates them
//! from their neighbour, and the message is copied verbatim with no framing.

use super::color::Color;
use super::number::{DEC_CAPACITY, format_dec};
use super::timestamp::render_timestamp;
use crate::level::Level;
use chrono::{DateTime, Utc};
use std::panic::Location;

/// Where a log call was made. Only the final path segment of `file` is ever printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl CallSite<'static> {
    /// Captures the location of the nearest caller not marked `#[track_caller]`.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl<'a> CallSite<'a> {
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// `src/net/socket.rs` becomes `socket.rs`. Both separators count so Windows paths shorten too.
    #[must_use]
    pub fn file_name(&self) -> &'a str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }
}

/// Everything a single line needs that varies per call.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    /// `None` and `Some("")` both mean "untagged".
    pub module: Option<&'a str>,
    pub call_site: CallSite<'a>,
    pub message: &'a str,
}

/// Per-call rendering settings, assembled from a snapshot of the logger configuration.
#[derive(Debug, Clone, Copy)]
pub struct LineFormatter<'a> {
    prefix: &'a [u8],
    pid: u32,
    colors: bool,
    timestamp: Option<DateTime<Utc>>,
    source_location: bool,
}

impl<'a> LineFormatter<'a> {
    /// Plain output: no colors, no timestamp, no source location.
    #[must_use]
    pub const fn new(prefix: &'a [u8], pid: u32) -> Self {
        Self {
            prefix,
            pid,
            colors: false,
            timestamp: None,
            source_location: false,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// `None` omits the timestamp field entirely.
    #[must_use]
    pub const fn timestamp(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.timestamp = at;
        self
    }

    #[must_use]
    pub const fn source_location(mut self, enabled: bool) -> Self {
        self.source_location = enabled;
        self
    }

    /// Appends the complete line for `record` to `out`.
    pub fn render(&self, record: &Record<'_>, out: &mut Vec<u8>) {
        if let Some(at) = &self.timestamp {
            out.extend_from_slice(&render_timestamp(at));
        }

        self.render_head(record.level, out);

        if self.source_location {
            out.push(b' ');
            self.paint(out, Color::Dim);
            out.extend_from_slice(record.call_site.file_name().as_bytes());
            out.push(b':');
            let mut digits = [0u8; DEC_CAPACITY];
            out.extend_from_slice(format_dec(u64::from(record.call_site.line), &mut digits));
            self.paint(out, Color::Reset);
        }

        if let Some(module) = record.module.filter(|name| !name.is_empty()) {
            out.push(b' ');
            self.paint(out, Color::Dim);
            out.push(b'(');
            out.extend_from_slice(module.as_bytes());
            out.push(b')');
            self.paint(out, Color::Reset);
        }

        out.push(b' ');
        out.extend_from_slice(record.message.as_bytes());
    }

    /// The mandatory `|pid| prefix [LEVEL]` run, without a trailing space.
    pub fn render_head(&self, level: Level, out: &mut Vec<u8>) {
        self.paint(out, Color::Dim);
        out.push(b'|');
        let mut digits = [0u8; DEC_CAPACITY];
        out.extend_from_slice(format_dec(u64::from(self.pid), &mut digits));
        out.push(b'|');
        self.paint(out, Color::Reset);
        out.push(b' ');

        self.paint(out, Color::Gray);
        self.paint(out, Color::Italic);
        out.extend_from_slice(self.prefix);
        out.push(b' ');
        self.paint(out, Color::Reset);

        self.paint(out, Color::for_level(level));
        out.push(b'[');
        out.extend_from_slice(level.label().as_bytes());
        out.push(b']');
        self.paint(out, Color::Reset);
    }

    fn paint(&self, out: &mut Vec<u8>, color: Color) {
        if self.colors {
            out.extend_from_slice(color.ansi().as_bytes());
        }
    }
}
