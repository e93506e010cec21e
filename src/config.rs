//! Resolved shared-package configuration
//!
//! Mirrors the `extra.shared-package` section of `composer.json`. The plugin
//! identity is supplied by the host rather than read from the file.

use serde::{Deserialize, Serialize};

/// Pretty name of the installer plugin's own package
pub const PLUGIN_PRETTY_NAME: &str = "letudiant/composer-shared-package-plugin";

/// Package type marking packages managed by the plugin
pub const PLUGIN_PACKAGE_TYPE: &str = "shared-package";

/// Host-supplied constants the classifier compares against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginIdentity {
    /// The plugin's own pretty name, never shared
    pub pretty_name: String,
    /// Package type that is always shared
    pub package_type: String,
}

impl PluginIdentity {
    pub fn new(pretty_name: impl Into<String>, package_type: impl Into<String>) -> Self {
        Self {
            pretty_name: pretty_name.into(),
            package_type: package_type.into(),
        }
    }
}

impl Default for PluginIdentity {
    fn default() -> Self {
        Self::new(PLUGIN_PRETTY_NAME, PLUGIN_PACKAGE_TYPE)
    }
}

/// Configuration consumed by [`crate::solver::SharedPackageSolver`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SharedPackageConfig {
    /// Literal names or `*` patterns; a lone `"*"` shares everything
    #[serde(default)]
    pub package_list: Vec<String>,
    /// Substring patterns a package must match to stay shared
    #[serde(default, rename = "package-include-list")]
    pub include_list: Vec<String>,
    /// Substring patterns that force a package back to the vendor dir
    #[serde(default, rename = "package-exclude-list")]
    pub exclude_list: Vec<String>,
    #[serde(skip)]
    pub plugin: PluginIdentity,
}

impl SharedPackageConfig {
    /// Create an empty configuration with the default plugin identity
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package list
    pub fn with_package_list<I, S>(mut self, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.package_list = list.into_iter().map(Into::into).collect();
        self
    }

    /// Set the include list
    pub fn with_include_list<I, S>(mut self, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_list = list.into_iter().map(Into::into).collect();
        self
    }

    /// Set the exclude list
    pub fn with_exclude_list<I, S>(mut self, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_list = list.into_iter().map(Into::into).collect();
        self
    }

    /// Override the host plugin identity
    pub fn with_plugin(mut self, plugin: PluginIdentity) -> Self {
        self.plugin = plugin;
        self
    }

    pub fn package_list(&self) -> &[String] {
        &self.package_list
    }

    pub fn include_list(&self) -> &[String] {
        &self.include_list
    }

    pub fn exclude_list(&self) -> &[String] {
        &self.exclude_list
    }
}
