//! Classification result summary types
//!
//! Provides structures for tracking verdicts per package and overall.

use super::{Decision, Package};
use serde::{Deserialize, Serialize};

/// Verdict for one package of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The classified package
    pub package: Package,
    /// The classifier's verdict
    pub decision: Decision,
}

impl Classification {
    pub fn new(package: Package, decision: Decision) -> Self {
        Self { package, decision }
    }

    pub fn is_shared(&self) -> bool {
        self.decision.shared
    }
}

/// Overall summary of a classification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    /// Verdicts in catalog order
    pub classifications: Vec<Classification>,
    /// Whether `package-list` contained `*`
    pub all_shared: bool,
}

impl ClassificationSummary {
    /// Creates a new empty summary
    pub fn new(all_shared: bool) -> Self {
        Self {
            classifications: Vec::new(),
            all_shared,
        }
    }

    /// Adds a verdict
    pub fn add(&mut self, classification: Classification) {
        self.classifications.push(classification);
    }

    /// Returns the number of packages classified
    pub fn total(&self) -> usize {
        self.classifications.len()
    }

    /// Returns the number of shared packages
    pub fn shared_count(&self) -> usize {
        self.shared().count()
    }

    /// Returns the number of packages installed per project
    pub fn local_count(&self) -> usize {
        self.local().count()
    }

    /// Returns all shared verdicts
    pub fn shared(&self) -> impl Iterator<Item = &Classification> {
        self.classifications.iter().filter(|c| c.is_shared())
    }

    /// Returns all per-project verdicts
    pub fn local(&self) -> impl Iterator<Item = &Classification> {
        self.classifications.iter().filter(|c| !c.is_shared())
    }

    pub fn is_empty(&self) -> bool {
        self.classifications.is_empty()
    }
}
