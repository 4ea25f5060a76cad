//! Error handling for the cmdsh HAL
//!
//! Every filesystem call made by the HAL is wrapped so that the raw
//! `std::io::Error` is classified into an [`FsFault`] and tagged with the
//! operation and path that produced it.

use std::fmt;
use std::io;
use std::path::Path;
use std::result;

/// Result type for HAL operations
pub type HalResult<T> = result::Result<T, HalError>;

/// Error types for HAL operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum HalError {
    /// I/O operation failed
    #[error("{0}")]
    Io(IoError),
    /// Invalid argument or state
    #[error("Invalid operation: {0}")]
    Invalid(String),
}

/// Coarse classification of an OS-level filesystem failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsFault {
    NotFound,
    AlreadyExists,
    PermissionDenied,
    NotADirectory,
    CrossDevice,
    InvalidInput,
    Other,
}

#[derive(Debug, Clone)]
pub struct IoError {
    pub operation: &'static str,
    pub path: String,
    pub fault: FsFault,
    pub message: String,
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}': {}", self.operation, self.path, self.message)
    }
}

#[cfg(unix)]
const EXDEV: i32 = 18;
#[cfg(windows)]
const EXDEV: i32 = 17; // ERROR_NOT_SAME_DEVICE
#[cfg(not(any(unix, windows)))]
const EXDEV: i32 = -1;

// Windows has no error code equivalent to ENOTDIR.
#[cfg(unix)]
const ENOTDIR: i32 = 20;
#[cfg(not(unix))]
const ENOTDIR: i32 = -1;

impl FsFault {
    /// Classify a raw `io::Error`.
    pub fn classify(err: &io::Error) -> Self {
        match err.raw_os_error() {
            Some(code) if code == EXDEV => return FsFault::CrossDevice,
            Some(code) if code == ENOTDIR => return FsFault::NotADirectory,
            _ => {}
        }
        match err.kind() {
            io::ErrorKind::NotFound => FsFault::NotFound,
            io::ErrorKind::AlreadyExists => FsFault::AlreadyExists,
            io::ErrorKind::PermissionDenied => FsFault::PermissionDenied,
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => FsFault::InvalidInput,
            _ => FsFault::Other,
        }
    }
}

impl From<io::Error> for HalError {
    fn from(err: io::Error) -> Self {
        HalError::Io(IoError {
            operation: "unknown",
            path: String::new(),
            fault: FsFault::classify(&err),
            message: err.to_string(),
        })
    }
}

// Helper functions for creating specific error types
impl HalError {
    pub fn io_error(operation: &'static str, path: &Path, err: io::Error) -> Self {
        HalError::Io(IoError {
            operation,
            path: path.display().to_string(),
            fault: FsFault::classify(&err),
            message: err.to_string(),
        })
    }

    /// A failure detected by a precondition check rather than returned by the OS.
    pub fn fault(operation: &'static str, path: &Path, fault: FsFault, message: &str) -> Self {
        HalError::Io(IoError {
            operation,
            path: path.display().to_string(),
            fault,
            message: message.to_string(),
        })
    }

    pub fn invalid(message: &str) -> Self {
        HalError::Invalid(message.to_string())
    }

    /// The filesystem fault behind this error, if it came from an I/O call.
    pub fn fs_fault(&self) -> Option<FsFault> {
        match self {
            HalError::Io(err) => Some(err.fault),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_kinds() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(FsFault::classify(&err), FsFault::NotFound);
        let err = io::Error::new(io::ErrorKind::AlreadyExists, "there");
        assert_eq!(FsFault::classify(&err), FsFault::AlreadyExists);
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "no");
        assert_eq!(FsFault::classify(&err), FsFault::PermissionDenied);
    }

    #[cfg(unix)]
    #[test]
    fn classifies_raw_cross_device() {
        let err = io::Error::from_raw_os_error(18);
        assert_eq!(FsFault::classify(&err), FsFault::CrossDevice);
    }

    #[cfg(unix)]
    #[test]
    fn classifies_raw_not_a_directory() {
        let err = io::Error::from_raw_os_error(20);
        assert_eq!(FsFault::classify(&err), FsFault::NotADirectory);
    }

    #[cfg(windows)]
    #[test]
    fn invalid_directory_name_is_not_a_directory_fault() {
        // ERROR_DIRECTORY: "The directory name is invalid."
        let err = io::Error::from_raw_os_error(267);
        assert_ne!(FsFault::classify(&err), FsFault::NotADirectory);
    }

    #[test]
    fn io_error_display_names_operation_and_path() {
        let err = HalError::io_error(
            "cannot delete",
            Path::new("missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.to_string(), "cannot delete 'missing.txt': No such file or directory");
        assert_eq!(err.fs_fault(), Some(FsFault::NotFound));
    }
}
