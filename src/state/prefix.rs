//! The configurable tag printed after the pid field.

/// Longest prefix kept; anything beyond is cut off at this byte count.
pub const PREFIX_CAPACITY: usize = 63;

const DEFAULT_PREFIX: &[u8] = b"==ct==";

/// Inline fixed-size buffer so copying a snapshot out of the state lock never allocates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    bytes: [u8; PREFIX_CAPACITY],
    len: usize,
}

impl Prefix {
    /// `==ct==`.
    pub const DEFAULT: Self = Self::from_bytes(DEFAULT_PREFIX);

    /// Keeps at most [`PREFIX_CAPACITY`] bytes of `value`. Truncation is byte-based
    /// and may split a multi-byte character; the prefix is emitted as raw bytes.
    #[must_use]
    pub const fn new(value: &str) -> Self {
        Self::from_bytes(value.as_bytes())
    }

    const fn from_bytes(value: &[u8]) -> Self {
        let len = if value.len() > PREFIX_CAPACITY {
            PREFIX_CAPACITY
        } else {
            value.len()
        };
        let mut bytes = [0u8; PREFIX_CAPACITY];
        let mut i = 0;
        while i < len {
            bytes[i] = value[i];
            i += 1;
        }
        Self { bytes, len }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Debug for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Prefix")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
