//! Lock-free settings read on every log call.
//!
//! Each flag is independent: a reader only ever needs one of them per decision,
//! so acquire/release on the individual atomic is all the ordering required.

use crate::level::Level;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

pub struct Flags {
    enabled: AtomicBool,
    min_level: AtomicU8,
    thread_safe: AtomicBool,
    timestamps: AtomicBool,
    source_location: AtomicBool,
    level_explicit: AtomicBool,
    modules_explicit: AtomicBool,
}

impl Flags {
    /// Logging off, Info minimum, thread-safe on, optional fields off, nothing explicit yet.
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            min_level: AtomicU8::new(Level::Info.as_u8()),
            thread_safe: AtomicBool::new(true),
            timestamps: AtomicBool::new(false),
            source_location: AtomicBool::new(false),
            level_explicit: AtomicBool::new(false),
            modules_explicit: AtomicBool::new(false),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn store_min_level(&self, level: Level) {
        self.min_level.store(level.as_u8(), Ordering::Release);
    }

    pub fn min_level(&self) -> Level {
        Level::from_u8(self.min_level.load(Ordering::Acquire))
    }

    pub fn set_thread_safe(&self, enabled: bool) {
        self.thread_safe.store(enabled, Ordering::Release);
    }

    pub fn thread_safe(&self) -> bool {
        self.thread_safe.load(Ordering::Acquire)
    }

    pub fn set_timestamps(&self, enabled: bool) {
        self.timestamps.store(enabled, Ordering::Release);
    }

    pub fn timestamps(&self) -> bool {
        self.timestamps.load(Ordering::Acquire)
    }

    pub fn set_source_location(&self, enabled: bool) {
        self.source_location.store(enabled, Ordering::Release);
    }

    pub fn source_location(&self) -> bool {
        self.source_location.load(Ordering::Acquire)
    }

    /// One-way: once the application chose a level, env defaults never touch it again.
    pub fn mark_level_explicit(&self) {
        self.level_explicit.store(true, Ordering::Release);
    }

    pub fn level_explicit(&self) -> bool {
        self.level_explicit.load(Ordering::Acquire)
    }

    /// One-way, like [`Self::mark_level_explicit`], for the module table.
    pub fn mark_modules_explicit(&self) {
        self.modules_explicit.store(true, Ordering::Release);
    }

    pub fn modules_explicit(&self) -> bool {
        self.modules_explicit.load(Ordering::Acquire)
    }
}
