//! composer.json reader for the shared-package settings
//!
//! Handles:
//! - `extra.shared-package.package-list`
//! - `extra.shared-package.package-include-list`
//! - `extra.shared-package.package-exclude-list`
//!
//! Other keys of the section (`vendor-dir`, `symlink-dir`, ...) belong to the
//! installer and are ignored here.

use crate::config::SharedPackageConfig;
use crate::error::ManifestError;
use serde_json::Value;
use std::path::PathBuf;

/// Section of `extra` holding the plugin settings
pub const SHARED_PACKAGE_SECTION: &str = "shared-package";

/// Parser for composer.json files
pub struct ComposerJsonParser;

impl ComposerJsonParser {
    /// Extract the shared-package configuration from composer.json content
    pub fn parse(&self, content: &str) -> Result<SharedPackageConfig, ManifestError> {
        let path = PathBuf::from(super::COMPOSER_JSON);
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(&path, e.to_string()))?;

        let section = match json.get("extra").and_then(|v| v.get(SHARED_PACKAGE_SECTION)) {
            Some(section) => section,
            None => {
                tracing::debug!("no extra.{} section, using defaults", SHARED_PACKAGE_SECTION);
                return Ok(SharedPackageConfig::default());
            }
        };

        let section_name = format!("extra.{}", SHARED_PACKAGE_SECTION);
        if !section.is_object() {
            return Err(ManifestError::invalid_section(
                &path,
                section_name,
                "expected an object",
            ));
        }

        serde_json::from_value(section.clone())
            .map_err(|e| ManifestError::invalid_section(&path, section_name, e.to_string()))
    }
}
