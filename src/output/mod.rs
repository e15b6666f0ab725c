//! Where rendered bytes go. By default that is stderr; the `Sink` trait lets callers
//! capture or redirect output without touching the formatter.
//!
//! Two pieces of shared state live here: the active sink slot and the output lock
//! that keeps concurrently emitted lines from interleaving.

mod stderr;

pub use stderr::StderrSink;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// `Send + Sync` because every thread that logs may call into the same sink concurrently.
///
/// Sinks receive whole fields or whole lines, never partial ones, and must not fail:
/// there is nobody to report an error to.
pub trait Sink: Send + Sync {
    fn write(&self, bytes: &[u8]);
}

impl<F> Sink for F
where
    F: Fn(&[u8]) + Send + Sync,
{
    fn write(&self, bytes: &[u8]) {
        self(bytes);
    }
}

/// `None` routes output to [`StderrSink`].
static SINK: RwLock<Option<Arc<dyn Sink>>> = RwLock::new(None);

/// Serializes complete lines while thread-safe mode is on.
static OUTPUT_LOCK: Mutex<()> = Mutex::new(());

/// Replaces the active sink. Calls already holding the previous sink finish with it.
pub fn set_sink(sink: impl Sink + 'static) {
    install(Some(Arc::new(sink)));
}

/// Same as [`set_sink`] for a sink that is already shared.
pub fn set_shared_sink(sink: Arc<dyn Sink>) {
    install(Some(sink));
}

/// Routes output back to stderr.
pub fn reset_sink() {
    install(None);
}

fn install(sink: Option<Arc<dyn Sink>>) {
    *SINK.write().unwrap_or_else(PoisonError::into_inner) = sink;
}

/// The slot lock is released before the sink runs, so a slow sink never blocks a swap.
fn current_sink() -> Option<Arc<dyn Sink>> {
    SINK.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Hands `bytes` to the active sink. Empty input is dropped without calling the sink.
pub fn write_raw(bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }

    match current_sink() {
        Some(sink) => sink.write(bytes),
        None => StderrSink.write(bytes),
    }
}

/// Held for the full render-and-emit of one line.
pub(crate) struct OutputGuard {
    _guard: Option<MutexGuard<'static, ()>>,
}

impl OutputGuard {
    /// Takes the output lock only when `thread_safe` is set; otherwise returns a no-op guard.
    pub(crate) fn acquire(thread_safe: bool) -> Self {
        let guard = thread_safe.then(|| OUTPUT_LOCK.lock().unwrap_or_else(PoisonError::into_inner));
        Self { _guard: guard }
    }
}
