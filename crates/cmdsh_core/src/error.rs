//! Error handling for cmdsh
//!
//! Every failure a command can produce is a [`ShellError`]. The
//! [`ErrorKind`] splits them into the three user-facing categories: usage
//! errors (the operation was not attempted), OS-level I/O failures, and
//! runtime lookups that came up empty (unknown command, unknown alias).
//! None of them are fatal to the interactive loop.

use std::fmt;

use cmdsh_hal::{FsFault, HalError};

/// Result type for all cmdsh operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Main error type for all cmdsh operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Categories of errors that can occur in cmdsh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing arguments
    UsageError,
    /// The OS refused a filesystem operation
    IoError(IoErrorKind),
    /// Lookup failures inside the shell itself
    RuntimeError(RuntimeErrorKind),
}

/// I/O error subcategories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
    NotFound,
    AlreadyExists,
    PermissionError,
    NotADirectory,
    CrossDevice,
    InvalidPath,
    Other,
}

/// Runtime error subcategories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    CommandNotFound,
    AliasNotFound,
}

impl ShellError {
    /// Create a new shell error
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UsageError, message)
    }

    /// Create a command not found error
    pub fn command_not_found(command: &str) -> Self {
        Self::new(
            ErrorKind::RuntimeError(RuntimeErrorKind::CommandNotFound),
            format!("unknown command: {command}"),
        )
    }

    pub fn alias_not_found(name: &str) -> Self {
        Self::new(
            ErrorKind::RuntimeError(RuntimeErrorKind::AliasNotFound),
            format!("alias not found: {name}"),
        )
    }

    /// Prefix the message with the path the failure concerns.
    pub fn with_path(mut self, path: &str) -> Self {
        self.message = format!("{path}: {}", self.message);
        self
    }

    pub fn is_usage(&self) -> bool {
        self.kind == ErrorKind::UsageError
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::IoError(IoErrorKind::NotFound) | ErrorKind::RuntimeError(_)
        )
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UsageError => write!(f, "Usage error"),
            ErrorKind::IoError(kind) => write!(f, "I/O error: {kind:?}"),
            ErrorKind::RuntimeError(kind) => write!(f, "Runtime error: {kind:?}"),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<FsFault> for IoErrorKind {
    fn from(fault: FsFault) -> Self {
        match fault {
            FsFault::NotFound => IoErrorKind::NotFound,
            FsFault::AlreadyExists => IoErrorKind::AlreadyExists,
            FsFault::PermissionDenied => IoErrorKind::PermissionError,
            FsFault::NotADirectory => IoErrorKind::NotADirectory,
            FsFault::CrossDevice => IoErrorKind::CrossDevice,
            FsFault::InvalidInput => IoErrorKind::InvalidPath,
            FsFault::Other => IoErrorKind::Other,
        }
    }
}

impl From<HalError> for ShellError {
    fn from(err: HalError) -> Self {
        let kind = match &err {
            HalError::Io(io) => ErrorKind::IoError(io.fault.into()),
            HalError::Invalid(_) => ErrorKind::IoError(IoErrorKind::InvalidPath),
        };
        Self::new(kind, err.to_string())
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        let kind = ErrorKind::IoError(FsFault::classify(&err).into());
        Self::new(kind, format!("I/O error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn hal_errors_keep_their_classification() {
        let hal = HalError::io_error(
            "cannot delete",
            Path::new("gone.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        let err = ShellError::from(hal);
        assert_eq!(err.kind, ErrorKind::IoError(IoErrorKind::NotFound));
        assert_eq!(err.to_string(), "cannot delete 'gone.txt': No such file or directory");
        assert!(err.is_not_found());
    }

    #[test]
    fn command_not_found_names_the_token() {
        let err = ShellError::command_not_found("frobnicate");
        assert_eq!(err.to_string(), "unknown command: frobnicate");
        assert!(!err.is_usage());
    }
}
