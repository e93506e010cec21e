//! Classifier verdicts and the rule that produced them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule of the decision chain settled the verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Reason {
    /// The plugin's own package, never shared
    SelfExcluded,
    /// `package-list` contains `*`
    AllShared,
    /// Package declares the plugin-managed type
    PackageType,
    /// A `package-list` entry matched the name
    PackageList { pattern: String },
    /// The last include pattern matched and no exclude did
    Included { pattern: String },
    /// The last include pattern did not match
    NotIncluded,
    /// An exclude pattern matched
    Excluded { pattern: String },
    /// No rule applied
    Default,
}

impl Reason {
    /// Short machine-friendly label
    pub fn label(&self) -> &'static str {
        match self {
            Reason::SelfExcluded => "self_excluded",
            Reason::AllShared => "all_shared",
            Reason::PackageType => "package_type",
            Reason::PackageList { .. } => "package_list",
            Reason::Included { .. } => "included",
            Reason::NotIncluded => "not_included",
            Reason::Excluded { .. } => "excluded",
            Reason::Default => "default",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::SelfExcluded => write!(f, "plugin package"),
            Reason::AllShared => write!(f, "all packages shared"),
            Reason::PackageType => write!(f, "shared package type"),
            Reason::PackageList { pattern } => write!(f, "package list '{}'", pattern),
            Reason::Included { pattern } => write!(f, "included by '{}'", pattern),
            Reason::NotIncluded => write!(f, "not included"),
            Reason::Excluded { pattern } => write!(f, "excluded by '{}'", pattern),
            Reason::Default => write!(f, "default"),
        }
    }
}

/// Verdict for a single package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Install to the shared location
    pub shared: bool,
    /// Rule that produced the verdict
    pub reason: Reason,
}

impl Decision {
    pub fn shared(reason: Reason) -> Self {
        Self {
            shared: true,
            reason,
        }
    }

    pub fn local(reason: Reason) -> Self {
        Self {
            shared: false,
            reason,
        }
    }
}
