//! Id of the calling thread, as the OS reports it to debuggers and `top -H`.

#![allow(unsafe_code)]

/// Id of the calling thread.
///
/// Linux and Android report the kernel tid, Apple platforms the system-wide
/// `pthread_threadid_np` value, and other Unix systems the `pthread_t` handle.
/// Elsewhere every thread draws a process-unique number on first use.
#[must_use]
pub fn thread_id() -> u64 {
    imp::current()
}

#[cfg(any(target_os = "linux", target_os = "android"))]
mod imp {
    pub fn current() -> u64 {
        // SAFETY: gettid takes no arguments and always succeeds
        let tid = unsafe { libc::syscall(libc::SYS_gettid) };
        u64::try_from(tid).unwrap_or_default()
    }
}

#[cfg(target_vendor = "apple")]
mod imp {
    pub fn current() -> u64 {
        let mut tid = 0u64;
        // SAFETY: pthread_self names the calling thread and tid is a live out-pointer
        unsafe { libc::pthread_threadid_np(libc::pthread_self(), &raw mut tid) };
        tid
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "linux", target_os = "android", target_vendor = "apple"))
))]
mod imp {
    pub fn current() -> u64 {
        // SAFETY: pthread_self has no preconditions
        unsafe { libc::pthread_self() as u64 }
    }
}

#[cfg(not(unix))]
mod imp {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT: AtomicU64 = AtomicU64::new(1);

    thread_local! {
        static ID: u64 = NEXT.fetch_add(1, Ordering::Relaxed);
    }

    pub fn current() -> u64 {
        ID.with(|id| *id)
    }
}
