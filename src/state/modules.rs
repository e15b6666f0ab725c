//! Bounded, ordered set of module names used for coarse-grained filtering.
//!
//! An empty table means "no filter": every tag passes. Registering the first
//! name switches filtering on, removing the last one switches it off again.
//! Nothing here ever reports an error. Invalid names, duplicates, and inserts
//! into a full table are silently ignored.

/// Most names the table holds at once.
pub const MAX_MODULES: usize = 32;

/// Longest accepted module name in bytes.
pub const MAX_MODULE_NAME_LEN: usize = 31;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleTable {
    names: Vec<String>,
}

impl ModuleTable {
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Names must be non-empty and at most [`MAX_MODULE_NAME_LEN`] bytes.
    #[must_use]
    pub const fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name.len() <= MAX_MODULE_NAME_LEN
    }

    /// Returns whether `name` was added. Invalid names, duplicates and a full table
    /// all leave the table untouched.
    pub fn insert(&mut self, name: &str) -> bool {
        if !Self::is_valid_name(name) || self.contains(name) || self.names.len() >= MAX_MODULES {
            return false;
        }
        self.names.push(name.to_owned());
        true
    }

    /// Removes `name` while keeping the remaining entries in registration order.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(index) = self.names.iter().position(|entry| entry == name) else {
            return false;
        };
        self.names.remove(index);
        true
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Exact, case-sensitive byte comparison.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|entry| entry == name)
    }

    /// The filter decision: everything passes while the table is empty.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        self.allows_bytes(name.as_bytes())
    }

    /// [`Self::allows`] for a raw tag. Registered names are always UTF-8, so a
    /// tag that is not only passes while the table is empty.
    #[must_use]
    pub fn allows_bytes(&self, name: &[u8]) -> bool {
        !self.is_filtering() || self.names.iter().any(|entry| entry.as_bytes() == name)
    }

    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.names.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
