//! The single process-wide configuration object and its two storage domains:
//! lock-free [`flags`] read on every call, and the prefix plus module table
//! behind the state lock.
//!
//! The state lock is only ever held for short copy-or-mutate sections and is
//! always released before the output lock is taken, so the two never nest.

pub mod env;
mod flags;
mod modules;
mod prefix;

pub use env::{EnvDefaults, LEVEL_VAR, MODULES_VAR, parse_module_list};
pub use modules::{MAX_MODULE_NAME_LEN, MAX_MODULES, ModuleTable};
pub use prefix::{PREFIX_CAPACITY, Prefix};

pub(crate) use flags::Flags;

use crate::level::Level;
use std::sync::{Mutex, MutexGuard, Once, PoisonError};

/// Everything guarded by the state lock.
#[derive(Debug)]
struct Store {
    prefix: Prefix,
    modules: ModuleTable,
}

pub(crate) struct Configuration {
    pub(crate) flags: Flags,
    store: Mutex<Store>,
    env_once: Once,
}

/// Lives for the whole process; constant-initialized so there is no construction race.
pub(crate) static CONFIG: Configuration = Configuration::new();

impl Configuration {
    const fn new() -> Self {
        Self {
            flags: Flags::new(),
            store: Mutex::new(Store {
                prefix: Prefix::DEFAULT,
                modules: ModuleTable::new(),
            }),
            env_once: Once::new(),
        }
    }

    /// A panic inside a critical section must not disable logging for the rest of the process.
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies env defaults the first time any thread gets here; a no-op afterwards.
    /// Concurrent callers block until the first one has finished applying them.
    pub(crate) fn ensure_env_defaults(&self) {
        self.env_once
            .call_once(|| self.apply_env_defaults(&EnvDefaults::from_env()));
    }

    /// Runs inside the `Once`, so it must never call back into anything that
    /// calls [`Self::ensure_env_defaults`].
    fn apply_env_defaults(&self, defaults: &EnvDefaults) {
        if !self.flags.level_explicit()
            && let Some(level) = defaults.level
        {
            self.flags.store_min_level(level);
        }

        if !self.flags.modules_explicit() && !defaults.modules.is_empty() {
            let mut store = self.store();
            for name in &defaults.modules {
                store.modules.insert(name);
            }
        }
    }

    pub(crate) fn set_min_level(&self, level: Level) {
        self.flags.mark_level_explicit();
        self.ensure_env_defaults();
        self.flags.store_min_level(level);
    }

    pub(crate) fn set_prefix(&self, prefix: &str) {
        let prefix = Prefix::new(prefix);
        self.store().prefix = prefix;
    }

    /// Copied out under the state lock; the caller formats from the copy.
    pub(crate) fn prefix_snapshot(&self) -> Prefix {
        self.store().prefix
    }

    pub(crate) fn enable_module(&self, name: &str) {
        if !ModuleTable::is_valid_name(name) {
            return;
        }
        self.flags.mark_modules_explicit();
        self.ensure_env_defaults();
        self.store().modules.insert(name);
    }

    pub(crate) fn disable_module(&self, name: &str) {
        if name.is_empty() {
            return;
        }
        self.flags.mark_modules_explicit();
        self.ensure_env_defaults();
        self.store().modules.remove(name);
    }

    pub(crate) fn enable_all_modules(&self) {
        self.flags.mark_modules_explicit();
        self.ensure_env_defaults();
        self.store().modules.clear();
    }

    pub(crate) fn module_is_enabled(&self, name: &str) -> bool {
        self.store().modules.allows(name)
    }

    pub(crate) fn module_bytes_enabled(&self, name: &[u8]) -> bool {
        self.store().modules.allows_bytes(name)
    }
}
