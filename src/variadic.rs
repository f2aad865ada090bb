//! Borrowed handles to C `va_list` storage.
//!
//! The layout and size of a `va_list` differ between platforms, so it is
//! never held or passed by value on the Rust side. A [`VaListRef`] is just
//! a pointer to storage owned by some C frame, valid for `'a`.

use core::ffi::{c_int, c_void};
use core::marker::PhantomData;
use core::ptr::NonNull;

/// Callback shape accepted by `ffi_with_va_list`.
pub type VaListCallback = unsafe extern "C" fn(ctx: *mut c_void, args: *mut c_void) -> c_int;

extern "C" {
    /// Runs `callback(ctx, &args)` where `args` is started over the
    /// trailing variadic arguments.
    pub fn ffi_with_va_list(callback: VaListCallback, ctx: *mut c_void, ...) -> c_int;
}

/// Opaque, borrowed pointer to a platform `va_list`.
#[repr(transparent)]
#[derive(Debug)]
pub struct VaListRef<'a> {
    ap: NonNull<c_void>,
    _borrow: PhantomData<&'a mut c_void>,
}

impl<'a> VaListRef<'a> {
    /// Wraps a `va_list *` received from C.
    ///
    /// # Safety
    /// `ap` must point to an initialized `va_list` that stays alive, and is
    /// not `va_end`ed, for `'a`.
    pub unsafe fn from_raw(ap: *mut c_void) -> Option<Self> {
        NonNull::new(ap).map(|ap| VaListRef {
            ap,
            _borrow: PhantomData,
        })
    }

    pub fn as_ptr(&self) -> *mut c_void {
        self.ap.as_ptr()
    }
}

struct Scope<F, R> {
    f: Option<F>,
    out: Option<R>,
}

unsafe extern "C" fn trampoline<F, R>(ctx: *mut c_void, args: *mut c_void) -> c_int
where
    F: FnOnce(VaListRef<'_>) -> R,
{
    let scope = &mut *(ctx as *mut Scope<F, R>);
    match (scope.f.take(), VaListRef::from_raw(args)) {
        (Some(f), Some(args)) => {
            scope.out = Some(f(args));
            0
        }
        _ => -1,
    }
}

/// Backs [`with_va_list!`]. `enter` must call `ffi_with_va_list` with the
/// given callback and context exactly once.
#[doc(hidden)]
pub unsafe fn __scope<F, R, E>(f: F, enter: E) -> Option<R>
where
    F: FnOnce(VaListRef<'_>) -> R,
    E: FnOnce(VaListCallback, *mut c_void) -> c_int,
{
    let mut scope = Scope { f: Some(f), out: None };
    enter(
        trampoline::<F, R>,
        &mut scope as *mut Scope<F, R> as *mut c_void,
    );
    scope.out
}

/// Builds a real C `va_list` over the given arguments and lends it to a
/// closure.
///
/// Evaluates to `Option<R>`, `None` only if the native side never ran the
/// closure. Arguments must already have C variadic types (`c_int`,
/// `c_long`, `c_double`, raw pointers). Must be used inside `unsafe`.
///
/// The closure runs behind an `extern "C"` frame; a panic in it aborts.
///
/// ```ignore
/// let n = unsafe {
///     with_va_list!(|args| format_bounded(&mut buf, c"%d", &args), 7 as c_int)
/// };
/// ```
#[macro_export]
macro_rules! with_va_list {
    ($f:expr $(, $arg:expr)* $(,)?) => {
        $crate::variadic::__scope($f, |callback, ctx| {
            $crate::variadic::ffi_with_va_list(callback, ctx $(, $arg)*)
        })
    };
}
