use thiserror::Error as ThisError;

use crate::errno::Errno;

pub type Result<T> = core::result::Result<T, Error>;

/// A negative count from the platform formatter.
///
/// Truncation is not represented here; it is a successful call.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Encoding or output failure, with the cause reported by the platform.
    #[error("vsnprintf failed: {0}")]
    Failed(Errno),

    /// The formatter failed without setting `errno`.
    #[error("vsnprintf failed with no errno set")]
    Ambiguous,
}

impl Error {
    pub(crate) fn from_errno(errno: Errno) -> Self {
        if errno.is_set() {
            Error::Failed(errno)
        } else {
            Error::Ambiguous
        }
    }

    pub fn errno(&self) -> Errno {
        match self {
            Error::Failed(errno) => *errno,
            Error::Ambiguous => Errno::NONE,
        }
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Failed(errno) => errno.into(),
            Error::Ambiguous => std::io::Error::new(std::io::ErrorKind::Other, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::errno::Errno;

    #[test]
    fn classification() {
        assert_eq!(Error::from_errno(Errno(libc::EILSEQ)), Error::Failed(Errno(libc::EILSEQ)));
        assert_eq!(Error::from_errno(Errno::NONE), Error::Ambiguous);
        assert_eq!(Error::Ambiguous.errno(), Errno::NONE);
    }

    #[cfg(feature = "std")]
    #[test]
    fn into_io_error() {
        let io: std::io::Error = Error::Failed(Errno(libc::EOVERFLOW)).into();
        assert_eq!(io.raw_os_error(), Some(libc::EOVERFLOW));

        let io: std::io::Error = Error::Ambiguous.into();
        assert_eq!(io.kind(), std::io::ErrorKind::Other);
        assert_eq!(io.raw_os_error(), None);
    }
}
