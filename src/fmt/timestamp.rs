//! The optional leading `[YYYY-MM-DDThh:mm:ss.mmm] ` field.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Length of the rendered field including brackets and the trailing space.
pub const TIMESTAMP_LEN: usize = 26;

/// Renders `at` as a bracketed UTC timestamp with millisecond precision.
///
/// Written digit by digit into a fixed array so the hot path never allocates.
/// Years outside `0..=9999` are clamped to keep the field width fixed.
#[must_use]
pub fn render_timestamp(at: &DateTime<Utc>) -> [u8; TIMESTAMP_LEN] {
    let year = at.year().clamp(0, 9999).unsigned_abs();
    // chrono folds leap seconds into the nanosecond field.
    let millis = at.timestamp_subsec_millis().min(999);

    let mut out = [0u8; TIMESTAMP_LEN];
    out[0] = b'[';
    put_digits(&mut out[1..5], year);
    out[5] = b'-';
    put_digits(&mut out[6..8], at.month());
    out[8] = b'-';
    put_digits(&mut out[9..11], at.day());
    out[11] = b'T';
    put_digits(&mut out[12..14], at.hour());
    out[14] = b':';
    put_digits(&mut out[15..17], at.minute());
    out[17] = b':';
    put_digits(&mut out[18..20], at.second());
    out[20] = b'.';
    put_digits(&mut out[21..24], millis);
    out[24] = b']';
    out[25] = b' ';
    out
}

/// Zero-padded decimal filling exactly `slot.len()` digits.
fn put_digits(slot: &mut [u8], mut value: u32) {
    for byte in slot.iter_mut().rev() {
        *byte = b'0' + (value % 10) as u8;
        value /= 10;
    }
}
