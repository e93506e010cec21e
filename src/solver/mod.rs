//! Shared package classification
//!
//! Decides whether a package is installed once into the shared directory or
//! normally into the project's vendor directory. Rules, first match wins:
//! 1. The plugin's own package is never shared
//! 2. `package-list: ["*"]` or the plugin package type shares everything else
//! 3. Any `package-list` entry matching the pretty name shares it
//! 4. Include and exclude lists filter by substring
//! 5. Otherwise the package is shared

mod matcher;

pub use matcher::Matcher;

use crate::config::{PluginIdentity, SharedPackageConfig};
use crate::domain::{Decision, Package, Reason};

/// Marker that means "every package" in `package-list`
const ALL_PACKAGES: &str = "*";

/// Classifier built once per run and queried per package
#[derive(Debug, Clone)]
pub struct SharedPackageSolver {
    all_shared: bool,
    matchers: Vec<Matcher>,
    include_list: Vec<String>,
    exclude_list: Vec<String>,
    plugin: PluginIdentity,
}

impl SharedPackageSolver {
    /// Build the classifier. Never fails; bad entries compile to matchers
    /// that never match.
    pub fn new(config: SharedPackageConfig) -> Self {
        let SharedPackageConfig {
            package_list,
            include_list,
            exclude_list,
            plugin,
        } = config;

        let all_shared = package_list.iter().any(|p| p == ALL_PACKAGES);
        let matchers = if all_shared {
            Vec::new()
        } else {
            package_list.iter().map(|p| Matcher::compile(p)).collect()
        };

        tracing::debug!(
            all_shared,
            matchers = matchers.len(),
            includes = include_list.len(),
            excludes = exclude_list.len(),
            "built shared package solver"
        );

        Self {
            all_shared,
            matchers,
            include_list,
            exclude_list,
            plugin,
        }
    }

    /// Returns true if the package should be installed to the shared location
    pub fn is_shared(&self, package: &Package) -> bool {
        self.decide(package).shared
    }

    /// Run the decision chain and report which rule settled it
    pub fn decide(&self, package: &Package) -> Decision {
        let decision = self.evaluate(package);
        tracing::debug!(
            package = package.pretty_name(),
            shared = decision.shared,
            rule = decision.reason.label(),
            "classified package"
        );
        decision
    }

    fn evaluate(&self, package: &Package) -> Decision {
        let pretty_name = package.pretty_name();

        // On first install the plugin lands in the vendor dir, keep it there
        if pretty_name == self.plugin.pretty_name {
            return Decision::local(Reason::SelfExcluded);
        }

        if self.all_shared {
            return Decision::shared(Reason::AllShared);
        }
        if package.package_type() == self.plugin.package_type {
            return Decision::shared(Reason::PackageType);
        }

        if let Some(matcher) = self.matchers.iter().find(|m| m.matches(pretty_name)) {
            return Decision::shared(Reason::PackageList {
                pattern: matcher.pattern().to_string(),
            });
        }

        if self.include_list.is_empty() && self.exclude_list.is_empty() {
            return Decision::shared(Reason::Default);
        }

        // Each include entry overwrites the verdict, so only the last one counts
        let mut decision = Decision::shared(Reason::Default);
        for pattern in &self.include_list {
            decision = if pretty_name.contains(&strip_wildcards(pattern)) {
                Decision::shared(Reason::Included {
                    pattern: pattern.clone(),
                })
            } else {
                Decision::local(Reason::NotIncluded)
            };
        }

        // Later excludes only restate the verdict, first matching one is reported
        if let Some(pattern) = self
            .exclude_list
            .iter()
            .find(|p| pretty_name.contains(&strip_wildcards(p)))
        {
            decision = Decision::local(Reason::Excluded {
                pattern: pattern.clone(),
            });
        }

        decision
    }

    pub fn is_all_shared(&self) -> bool {
        self.all_shared
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    pub fn include_list(&self) -> &[String] {
        &self.include_list
    }

    pub fn exclude_list(&self) -> &[String] {
        &self.exclude_list
    }

    pub fn plugin(&self) -> &PluginIdentity {
        &self.plugin
    }
}

fn strip_wildcards(pattern: &str) -> String {
    pattern.replace('*', "")
}
