//! Bounded `vsnprintf` for Rust callers that hold a C `va_list` but cannot
//! size or copy one themselves.
//!
//! The native half in `src/c/vsnprintf.c` copies the list, clears `errno`,
//! and calls the platform `vsnprintf`. This crate wraps it as
//! [`format_bounded`], returning a [`FormatResult`] with the count and the
//! `errno` snapshot.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod errno;
pub mod error;
pub mod printf;
pub mod variadic;

pub use errno::Errno;
pub use error::{Error, Result};
pub use printf::{format_bounded, format_bounded_raw, FormatResult};
pub use variadic::VaListRef;
