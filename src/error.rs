//! Error types for hover-detect.
//!
//! Probes and the consensus vote never fail; an unanswerable query becomes
//! a conservative default instead. [`HoverError`] covers the layers around
//! them: loading environment descriptions and driving the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hover-detect operations.
#[derive(Debug, Error)]
pub enum HoverError {
    /// Environment file not found at the given location.
    #[error("Environment file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse an environment file.
    #[error("Failed to parse environment file at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Requested preset does not exist.
    #[error("Unknown preset '{name}' (expected one of: desktop, phone, hybrid-tablet, legacy)")]
    UnknownPreset { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hover-detect operations.
pub type Result<T> = std::result::Result<T, HoverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = HoverError::ConfigNotFound {
            path: PathBuf::from("/foo/device.yml"),
        };
        assert!(err.to_string().contains("/foo/device.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = HoverError::ConfigParseError {
            path: PathBuf::from("/device.yml"),
            message: "invalid type".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/device.yml"));
        assert!(msg.contains("invalid type"));
    }

    #[test]
    fn unknown_preset_lists_choices() {
        let err = HoverError::UnknownPreset {
            name: "watch".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("watch"));
        assert!(msg.contains("hybrid-tablet"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HoverError = io_err.into();
        assert!(matches!(err, HoverError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: HoverError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
