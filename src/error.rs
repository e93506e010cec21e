//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading composer.json / composer.lock
//! - ConfigError: Issues with CLI configuration
//!
//! The classifier itself is total and has no error type.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to composer file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// A section exists but has the wrong shape
    #[error("invalid '{section}' section in {path}: {message}")]
    InvalidSection {
        path: PathBuf,
        section: String,
        message: String,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid ad-hoc package specification
    #[error("invalid package '{value}': expected 'vendor/name' or 'vendor/name:type'")]
    InvalidPackageSpec { value: String },

    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidSection error
    pub fn invalid_section(
        path: impl Into<PathBuf>,
        section: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ManifestError::InvalidSection {
            path: path.into(),
            section: section.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidPackageSpec error
    pub fn invalid_package_spec(value: impl Into<String>) -> Self {
        ConfigError::InvalidPackageSpec {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/composer.lock");
        let msg = format!("{}", err);
        assert!(msg.contains("manifest file not found"));
        assert!(msg.contains("composer.lock"));
    }

    #[test]
    fn test_manifest_error_read() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ManifestError::read_error("/path/to/composer.json", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read manifest file"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_manifest_error_json_parse() {
        let err = ManifestError::json_parse_error("/path/to/composer.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_manifest_error_invalid_section() {
        let err = ManifestError::invalid_section(
            "/path/to/composer.json",
            "extra.shared-package",
            "expected an object",
        );
        let msg = format!("{}", err);
        assert!(msg.contains("invalid 'extra.shared-package' section"));
        assert!(msg.contains("expected an object"));
    }

    #[test]
    fn test_config_error_invalid_package_spec() {
        let err = ConfigError::invalid_package_spec(":library");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid package ':library'"));
    }

    #[test]
    fn test_config_error_invalid_path() {
        let err = ConfigError::InvalidPath {
            path: "/missing".into(),
            message: "not a directory".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("invalid path '/missing'"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError = ManifestError::not_found("/path").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("manifest file not found"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::invalid_package_spec("bad:").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("invalid package"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
