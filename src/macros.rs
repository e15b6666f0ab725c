//! `format_args!`-based front ends. The call-site location is that of the macro invocation.

/// Logs at an explicit level, optionally tagged with a module.
///
/// ```
/// use coretrace::Level;
///
/// coretrace::log!(Level::Info, "plain {}\n", 1);
/// coretrace::log!(Level::Warn, module: "alloc", "size={}\n", 64);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, module: $module:expr, $($arg:tt)+) => {
        $crate::log_module($level, $crate::Module::new($module), ::core::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log($level, ::core::format_args!($($arg)+))
    };
}

/// [`log!`] at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::log!($crate::Level::Info, module: $module, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// [`log!`] at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warn {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, module: $module, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// [`log!`] at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::log!($crate::Level::Error, module: $module, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}
