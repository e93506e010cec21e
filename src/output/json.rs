//! JSON output formatter for machine processing

use crate::domain::{Classification, ClassificationSummary};
use crate::output::{visible, OutputFormatter};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Omit packages installed per project
    shared_only: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(shared_only: bool) -> Self {
        Self { shared_only }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether `package-list` contained `*`
    all_shared: bool,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-package verdicts
    packages: Vec<JsonPackage<'a>>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    shared: usize,
    local: usize,
}

/// JSON representation of a verdict
#[derive(Serialize)]
struct JsonPackage<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    package_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    dev: bool,
    shared: bool,
    /// Rule label, e.g. `package_list`
    reason: &'static str,
    /// Pattern that triggered the rule, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
}

impl<'a> From<&'a Classification> for JsonPackage<'a> {
    fn from(classification: &'a Classification) -> Self {
        use crate::domain::Reason;

        let package = &classification.package;
        let reason = &classification.decision.reason;
        let pattern = match reason {
            Reason::PackageList { pattern }
            | Reason::Included { pattern }
            | Reason::Excluded { pattern } => Some(pattern.as_str()),
            _ => None,
        };

        Self {
            name: &package.pretty_name,
            package_type: &package.package_type,
            version: package.version.as_deref(),
            dev: package.is_dev,
            shared: classification.decision.shared,
            reason: reason.label(),
            pattern,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(
        &self,
        summary: &ClassificationSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            all_shared: summary.all_shared,
            summary: JsonSummary {
                total: summary.total(),
                shared: summary.shared_count(),
                local: summary.local_count(),
            },
            packages: visible(summary, self.shared_only)
                .map(JsonPackage::from)
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
