//! The calling thread's `errno`.

use core::ffi::c_int;
use core::fmt;

/// Snapshot of the C error indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Errno(pub c_int);

impl Errno {
    /// "No error".
    pub const NONE: Errno = Errno(0);

    pub fn is_set(self) -> bool {
        self.0 != 0
    }

    /// Reads the current thread's `errno`.
    pub fn last() -> Errno {
        // SAFETY: the location is thread-local and valid for the thread's lifetime.
        unsafe { Errno(*errno_location()) }
    }

    /// Overwrites the current thread's `errno`.
    pub fn set(value: Errno) {
        // SAFETY: as in `last`.
        unsafe { *errno_location() = value.0 }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errno {}", self.0)
    }
}

#[cfg(feature = "std")]
impl From<Errno> for std::io::Error {
    fn from(errno: Errno) -> Self {
        std::io::Error::from_raw_os_error(errno.0)
    }
}

#[cfg(any(target_os = "linux", target_os = "emscripten"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno_location()
}

#[cfg(any(target_os = "android", target_os = "openbsd", target_os = "netbsd"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno()
}

#[cfg(any(target_vendor = "apple", target_os = "freebsd"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__error()
}
