//! Error types for the tree scanner

use std::path::PathBuf;
use thiserror::Error;

/// Error kinds that can occur during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Scan root does not exist or is not a directory
    NotFound,
    /// Permission denied while listing a directory
    PermissionDenied,
    /// A file could not be opened or read
    ReadError,
    /// A file's content is not valid text
    DecodeError,
    /// The output sink could not be written to
    WriteError,
    /// Other I/O error during traversal
    IoError,
}

/// Represents an error that occurred during scanning
#[derive(Debug, Clone, Error)]
#[error("{kind:?}: {message} (path: {path:?})")]
pub struct ScanError {
    /// The kind of error
    pub kind: ScanErrorKind,
    /// The path where the error occurred
    pub path: Option<PathBuf>,
    /// Human-readable error message
    pub message: String,
}

impl ScanError {
    /// Create a new scan error
    pub fn new(kind: ScanErrorKind, path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            message: message.into(),
        }
    }

    /// Create a not found error for a scan root
    pub fn not_found(path: PathBuf) -> Self {
        Self::new(
            ScanErrorKind::NotFound,
            Some(path.clone()),
            format!("not a directory or does not exist: {}", path.display()),
        )
    }

    /// Create a permission denied error
    pub fn permission_denied(path: PathBuf, message: impl Into<String>) -> Self {
        Self::new(ScanErrorKind::PermissionDenied, Some(path), message)
    }

    /// Create a file read error
    pub fn read_error(path: PathBuf, message: impl Into<String>) -> Self {
        Self::new(ScanErrorKind::ReadError, Some(path), message)
    }

    /// Create a text decode error
    pub fn decode_error(path: PathBuf, message: impl Into<String>) -> Self {
        Self::new(ScanErrorKind::DecodeError, Some(path), message)
    }

    /// Create a sink write error
    pub fn write_error(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(ScanErrorKind::WriteError, path, message)
    }

    /// Whether this error aborts the run.
    ///
    /// Only root resolution and sink failures are fatal; traversal and
    /// per-file errors are recovered locally and counted.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind,
            ScanErrorKind::NotFound | ScanErrorKind::WriteError
        )
    }

    /// Classify a per-file read failure into read vs decode
    pub fn from_file_read(path: PathBuf, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::InvalidData => Self::decode_error(path, err.to_string()),
            _ => Self::read_error(path, err.to_string()),
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::PermissionDenied => ScanErrorKind::PermissionDenied,
            std::io::ErrorKind::NotFound => ScanErrorKind::NotFound,
            std::io::ErrorKind::InvalidData => ScanErrorKind::DecodeError,
            _ => ScanErrorKind::IoError,
        };
        Self::new(kind, None, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality_by_kind() {
        assert!(ScanError::not_found(PathBuf::from("/missing")).is_fatal());
        assert!(ScanError::write_error(None, "disk full").is_fatal());
        assert!(!ScanError::read_error(PathBuf::from("/f"), "gone").is_fatal());
        assert!(!ScanError::permission_denied(PathBuf::from("/d"), "denied").is_fatal());
    }

    #[test]
    fn test_file_read_classification() {
        let decode = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err = ScanError::from_file_read(PathBuf::from("/f"), &decode);
        assert_eq!(err.kind, ScanErrorKind::DecodeError);

        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ScanError::from_file_read(PathBuf::from("/f"), &missing);
        assert_eq!(err.kind, ScanErrorKind::ReadError);
    }
}
