use core::ffi::c_int;

use crate::errno::Errno;
use crate::error::{Error, Result};

/// Outcome of one bounded format call.
///
/// `count` is what `vsnprintf` returned: the length the full output would
/// have, without the terminator, or negative on failure. `errno` is the
/// indicator as it stood right after the call and only means something when
/// `count` is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatResult {
    count: c_int,
    errno: Errno,
}

impl FormatResult {
    pub(crate) fn new(count: c_int, errno: Errno) -> Self {
        FormatResult { count, errno }
    }

    pub fn count(&self) -> c_int {
        self.count
    }

    pub fn errno(&self) -> Errno {
        self.errno
    }

    pub fn is_failure(&self) -> bool {
        self.count < 0
    }

    /// Logical output length, `None` on failure.
    pub fn len(&self) -> Option<usize> {
        if self.is_failure() {
            None
        } else {
            Some(self.count as usize)
        }
    }

    /// Whether a buffer of `capacity` bytes was too small for the output
    /// plus its terminator.
    pub fn is_truncated(&self, capacity: usize) -> bool {
        match self.len() {
            Some(len) => len >= capacity,
            None => false,
        }
    }

    /// Bytes of text actually stored in a buffer of `capacity` bytes,
    /// excluding the terminator.
    pub fn written(&self, capacity: usize) -> usize {
        match self.len() {
            Some(len) => len.min(capacity.saturating_sub(1)),
            None => 0,
        }
    }

    pub fn into_result(self) -> Result<usize> {
        self.len().ok_or_else(|| Error::from_errno(self.errno))
    }
}

#[cfg(test)]
mod tests {
    use super::FormatResult;
    use crate::errno::Errno;
    use crate::error::Error;

    #[test]
    fn success() {
        let result = FormatResult::new(5, Errno::NONE);
        assert!(!result.is_failure());
        assert_eq!(result.len(), Some(5));
        assert_eq!(result.into_result(), Ok(5));
    }

    #[test]
    fn truncation_is_not_a_failure() {
        let result = FormatResult::new(5, Errno::NONE);
        assert!(result.is_truncated(0));
        assert!(result.is_truncated(3));
        assert!(result.is_truncated(5));
        assert!(!result.is_truncated(6));

        assert_eq!(result.written(0), 0);
        assert_eq!(result.written(1), 0);
        assert_eq!(result.written(3), 2);
        assert_eq!(result.written(6), 5);
        assert_eq!(result.written(100), 5);

        assert_eq!(result.into_result(), Ok(5));
    }

    #[test]
    fn failure_with_errno() {
        let result = FormatResult::new(-1, Errno(libc::EILSEQ));
        assert!(result.is_failure());
        assert_eq!(result.len(), None);
        assert!(!result.is_truncated(0));
        assert_eq!(result.written(16), 0);
        assert_eq!(result.into_result(), Err(Error::Failed(Errno(libc::EILSEQ))));
    }

    #[test]
    fn failure_without_errno_is_ambiguous() {
        let result = FormatResult::new(-1, Errno::NONE);
        assert_eq!(result.into_result(), Err(Error::Ambiguous));
    }

    #[test]
    fn stale_errno_on_success_is_ignored() {
        let result = FormatResult::new(3, Errno(libc::ENOMEM));
        assert_eq!(result.into_result(), Ok(3));
    }
}
