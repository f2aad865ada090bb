//! Bounded `vsnprintf` over a borrowed `va_list`.

mod result;

pub use result::FormatResult;

use core::ffi::{c_char, c_int, c_void, CStr};
use core::ptr;

use libc::size_t;
use log::{debug, trace};

use crate::errno::Errno;
use crate::variadic::VaListRef;

extern "C" {
    fn ffi_vsnprintf(
        buffer: *mut c_char,
        size: size_t,
        format: *const c_char,
        va_list: *mut c_void,
        err: *mut c_int,
    ) -> c_int;
}

/// Formats into `destination`, writing at most `destination.len()` bytes
/// including the terminating null.
///
/// An empty `destination` is a sizing call: nothing is written but the
/// count still reports the full length. `args` is copied before use and
/// can be passed to further calls.
///
/// # Safety
/// The conversion specifiers in `format` must match, in order and type,
/// the arguments remaining in `args`.
pub unsafe fn format_bounded(
    destination: &mut [u8],
    format: &CStr,
    args: &VaListRef<'_>,
) -> FormatResult {
    let buffer = if destination.is_empty() {
        ptr::null_mut()
    } else {
        destination.as_mut_ptr() as *mut c_char
    };

    format_bounded_raw(buffer, destination.len(), format.as_ptr(), args)
}

/// [`format_bounded`] over raw pointers.
///
/// # Safety
/// `destination` must be writable for `capacity` bytes, or may be null when
/// `capacity` is 0. `format` must be a valid null-terminated string whose
/// specifiers match `args`.
pub unsafe fn format_bounded_raw(
    destination: *mut c_char,
    capacity: usize,
    format: *const c_char,
    args: &VaListRef<'_>,
) -> FormatResult {
    trace!("vsnprintf: capacity {}", capacity);

    let mut err: c_int = 0;
    let count = ffi_vsnprintf(destination, capacity as size_t, format, args.as_ptr(), &mut err);
    let result = FormatResult::new(count, Errno(err));

    if result.is_failure() {
        debug!("vsnprintf: returned {} ({})", count, result.errno());
    } else if result.is_truncated(capacity) {
        trace!("vsnprintf: {} bytes truncated to {}", count, capacity);
    }

    // a logger may have touched errno; callers read it after we return
    Errno::set(result.errno());

    result
}
