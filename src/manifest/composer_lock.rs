//! composer.lock reader for the package catalog
//!
//! Handles:
//! - `packages` section (production)
//! - `packages-dev` section (development)
//! - Missing `type`, which Composer treats as `library`

use crate::domain::{Package, DEFAULT_PACKAGE_TYPE};
use crate::error::ManifestError;
use serde::Deserialize;
use std::path::PathBuf;

/// Parser for composer.lock files
pub struct ComposerLockParser;

#[derive(Debug, Deserialize)]
struct LockFile {
    #[serde(default)]
    packages: Vec<LockedPackage>,
    #[serde(default, rename = "packages-dev")]
    packages_dev: Vec<LockedPackage>,
}

#[derive(Debug, Deserialize)]
struct LockedPackage {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default, rename = "type")]
    package_type: Option<String>,
}

impl LockedPackage {
    fn into_package(self, is_dev: bool) -> Package {
        let package_type = self
            .package_type
            .unwrap_or_else(|| DEFAULT_PACKAGE_TYPE.to_string());
        let mut package = Package::new(self.name, package_type).dev(is_dev);
        if let Some(version) = self.version {
            package = package.with_version(version);
        }
        package
    }
}

impl ComposerLockParser {
    /// Parse every locked package, production entries first
    pub fn parse(&self, content: &str) -> Result<Vec<Package>, ManifestError> {
        let lock: LockFile = serde_json::from_str(content).map_err(|e| {
            ManifestError::json_parse_error(PathBuf::from(super::COMPOSER_LOCK), e.to_string())
        })?;

        let packages: Vec<Package> = lock
            .packages
            .into_iter()
            .map(|p| p.into_package(false))
            .chain(lock.packages_dev.into_iter().map(|p| p.into_package(true)))
            .collect();

        tracing::debug!(count = packages.len(), "parsed composer.lock");
        Ok(packages)
    }
}
