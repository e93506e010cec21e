//! Installable package as seen by the classifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Composer's implicit package type when `type` is omitted
pub const DEFAULT_PACKAGE_TYPE: &str = "library";

/// Represents an installable package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Pretty name, usually `vendor/name`
    pub pretty_name: String,
    /// Declared package type
    pub package_type: String,
    /// Locked version, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Whether this is a development dependency
    pub is_dev: bool,
}

impl Package {
    /// Creates a new production package without a version
    pub fn new(pretty_name: impl Into<String>, package_type: impl Into<String>) -> Self {
        Self {
            pretty_name: pretty_name.into(),
            package_type: package_type.into(),
            version: None,
            is_dev: false,
        }
    }

    /// Creates a package of the default `library` type
    pub fn library(pretty_name: impl Into<String>) -> Self {
        Self::new(pretty_name, DEFAULT_PACKAGE_TYPE)
    }

    /// Sets the locked version (builder pattern)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Marks the package as a development dependency (builder pattern)
    pub fn dev(mut self, is_dev: bool) -> Self {
        self.is_dev = is_dev;
        self
    }

    pub fn pretty_name(&self) -> &str {
        &self.pretty_name
    }

    pub fn package_type(&self) -> &str {
        &self.package_type
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_name)?;
        if let Some(version) = &self.version {
            write!(f, "@{}", version)?;
        }
        let dev_marker = if self.is_dev { " (dev)" } else { "" };
        write!(f, "{} [{}]", dev_marker, self.package_type)
    }
}
