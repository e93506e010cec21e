//! Composer file loading
//!
//! This module provides functionality to:
//! - Read the shared-package configuration from composer.json
//! - Read the package catalog from composer.lock

mod composer_json;
mod composer_lock;

pub use composer_json::{ComposerJsonParser, SHARED_PACKAGE_SECTION};
pub use composer_lock::ComposerLockParser;

use crate::config::SharedPackageConfig;
use crate::domain::Package;
use crate::error::ManifestError;
use std::fs;
use std::path::Path;

/// Project manifest filename
pub const COMPOSER_JSON: &str = "composer.json";

/// Lock filename
pub const COMPOSER_LOCK: &str = "composer.lock";

/// Read a composer file into a string
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Load the shared-package configuration from a composer.json path
pub fn load_config(path: &Path) -> Result<SharedPackageConfig, ManifestError> {
    let content = read_manifest(path)?;
    ComposerJsonParser.parse(&content).map_err(|e| with_path(e, path))
}

/// Load the package catalog from a composer.lock path
pub fn load_packages(path: &Path) -> Result<Vec<Package>, ManifestError> {
    let content = read_manifest(path)?;
    ComposerLockParser.parse(&content).map_err(|e| with_path(e, path))
}

/// Replace the bare filename parsers report with the real path
fn with_path(err: ManifestError, path: &Path) -> ManifestError {
    match err {
        ManifestError::JsonParseError { message, .. } => {
            ManifestError::json_parse_error(path, message)
        }
        ManifestError::InvalidSection {
            section, message, ..
        } => ManifestError::invalid_section(path, section, message),
        other => other,
    }
}
