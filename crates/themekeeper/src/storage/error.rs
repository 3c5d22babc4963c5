//! Storage backend errors.

use std::io;
use std::path::PathBuf;

/// Error returned by a [`Storage`](super::Storage) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access storage file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("storage file {path} is not a JSON object of strings: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The backend refused the operation (quota, permissions, disabled storage)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = StorageError::Io {
            path: PathBuf::from("/tmp/prefs.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/prefs.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_unavailable_display() {
        let err = StorageError::Unavailable("quota exceeded".into());
        assert_eq!(err.to_string(), "storage unavailable: quota exceeded");
    }
}
