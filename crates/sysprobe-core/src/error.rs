//! Error type shared by every accessor.

use std::io;

/// Errors returned by metric accessors.
///
/// Malformed or partial source data is never an error: absent fields come
/// back as zero. Only an unreadable source or an unsupported metric fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file, directory or system call failed. Passed through
    /// unchanged from the I/O layer.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The metric cannot be produced on this platform, kernel or privilege
    /// level.
    #[error("not implemented on {platform}")]
    NotImplemented { platform: String },
}

impl Error {
    pub fn not_implemented(platform: impl Into<String>) -> Self {
        Error::NotImplemented {
            platform: platform.into(),
        }
    }

    /// Returns true for the capability-gate error.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::NotImplemented { .. })
    }

    /// Returns true when the error means a process vanished between
    /// enumeration and the read (its `/proc/<pid>` entry is gone).
    ///
    /// Callers should treat this as "no data right now", not as a fault.
    pub fn is_process_gone(&self) -> bool {
        match self {
            Error::Io(e) => {
                e.kind() == io::ErrorKind::NotFound || e.raw_os_error() == Some(libc::ESRCH)
            }
            Error::NotImplemented { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_display() {
        let err = Error::not_implemented("plan9");
        assert_eq!(err.to_string(), "not implemented on plan9");
        assert!(err.is_not_implemented());
        assert!(!err.is_process_gone());
    }

    #[test]
    fn test_io_error_passes_through() {
        let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "denied");
        assert!(!err.is_not_implemented());
        assert!(!err.is_process_gone());
    }

    #[test]
    fn test_process_gone() {
        let err = Error::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_process_gone());

        let err = Error::from(io::Error::from_raw_os_error(libc::ESRCH));
        assert!(err.is_process_gone());
    }
}
