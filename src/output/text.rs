//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One aligned line per package with its verdict
//! - The rule behind each verdict in verbose mode
//! - A closing summary line

use crate::domain::{Classification, ClassificationSummary};
use crate::output::{visible, OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Omit packages installed per project
    shared_only: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, shared_only: bool, color: bool) -> Self {
        Self {
            verbosity,
            shared_only,
            color,
        }
    }

    fn verdict_label(&self, shared: bool) -> String {
        let label = if shared { "shared" } else { "local " };
        match (self.color, shared) {
            (false, _) => label.to_string(),
            (true, true) => label.green().to_string(),
            (true, false) => label.dimmed().to_string(),
        }
    }

    fn write_line(
        &self,
        classification: &Classification,
        name_width: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let package = &classification.package;

        if self.verbosity == Verbosity::Quiet {
            return writeln!(writer, "{}", package.pretty_name);
        }

        let version = package.version.as_deref().unwrap_or("");
        let dev_marker = if package.is_dev { " (dev)" } else { "" };
        let name = format!("{:width$}", package.pretty_name, width = name_width);
        let name = if self.color && classification.is_shared() {
            name.bold().to_string()
        } else {
            name
        };

        write!(
            writer,
            "  {} {} {}{}",
            self.verdict_label(classification.is_shared()),
            name,
            version,
            dev_marker
        )?;

        if self.verbosity == Verbosity::Verbose {
            let reason = format!("[{}]", classification.decision.reason);
            if self.color {
                write!(writer, " {}", reason.dimmed())?;
            } else {
                write!(writer, " {}", reason)?;
            }
        }
        writeln!(writer)
    }

    fn write_summary(
        &self,
        summary: &ClassificationSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let line = format!(
            "{} packages: {} shared, {} local",
            summary.total(),
            summary.shared_count(),
            summary.local_count()
        );
        writeln!(writer)?;
        if self.color {
            writeln!(writer, "{}", line.bold())
        } else {
            writeln!(writer, "{}", line)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(
        &self,
        summary: &ClassificationSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if summary.is_empty() {
            if self.verbosity != Verbosity::Quiet {
                writeln!(writer, "No packages to classify.")?;
            }
            return Ok(());
        }

        if summary.all_shared && self.verbosity != Verbosity::Quiet {
            writeln!(writer, "All packages are shared (package-list contains \"*\").")?;
        }

        // Quiet mode lists shared names only
        let shared_only = self.shared_only || self.verbosity == Verbosity::Quiet;
        let name_width = visible(summary, shared_only)
            .map(|c| c.package.pretty_name.chars().count())
            .max()
            .unwrap_or(0);

        for classification in visible(summary, shared_only) {
            self.write_line(classification, name_width, writer)?;
        }

        if self.verbosity != Verbosity::Quiet {
            self.write_summary(summary, writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decision, Package, Reason};

    fn sample_summary() -> ClassificationSummary {
        let mut summary = ClassificationSummary::new(false);
        summary.add(Classification::new(
            Package::library("acme/foo").with_version("1.0.0"),
            Decision::shared(Reason::PackageList {
                pattern: "acme/*".to_string(),
            }),
        ));
        summary.add(Classification::new(
            Package::library("phpunit/phpunit").dev(true),
            Decision::local(Reason::NotIncluded),
        ));
        summary
    }

    fn render(formatter: TextFormatter, summary: &ClassificationSummary) -> String {
        let mut out = Vec::new();
        formatter.format(summary, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_normal() {
        let text = render(
            TextFormatter::with_color(Verbosity::Normal, false, false),
            &sample_summary(),
        );
        assert!(text.contains("  shared acme/foo        1.0.0"));
        assert!(text.contains("  local  phpunit/phpunit  (dev)"));
        assert!(text.contains("2 packages: 1 shared, 1 local"));
        assert!(!text.contains("package list"));
    }

    #[test]
    fn test_text_verbose_shows_reason() {
        let text = render(
            TextFormatter::with_color(Verbosity::Verbose, false, false),
            &sample_summary(),
        );
        assert!(text.contains("[package list 'acme/*']"));
        assert!(text.contains("[not included]"));
    }

    #[test]
    fn test_text_quiet_shared_only() {
        let text = render(
            TextFormatter::with_color(Verbosity::Quiet, true, false),
            &sample_summary(),
        );
        assert_eq!(text, "acme/foo\n");
    }

    #[test]
    fn test_text_quiet_lists_only_shared() {
        let mut summary = ClassificationSummary::new(false);
        summary.add(Classification::new(
            Package::library("acme/foo"),
            Decision::shared(Reason::Default),
        ));
        summary.add(Classification::new(
            Package::library("zzz/local"),
            Decision::local(Reason::NotIncluded),
        ));
        let text = render(
            TextFormatter::with_color(Verbosity::Quiet, false, false),
            &summary,
        );
        assert_eq!(text, "acme/foo\n");
    }

    #[test]
    fn test_text_aligns_non_ascii_names() {
        let mut summary = ClassificationSummary::new(false);
        summary.add(Classification::new(
            Package::library("acmé/foo").with_version("1.0.0"),
            Decision::shared(Reason::Default),
        ));
        summary.add(Classification::new(
            Package::library("acme/bar").with_version("2.0.0"),
            Decision::shared(Reason::Default),
        ));
        let text = render(
            TextFormatter::with_color(Verbosity::Normal, false, false),
            &summary,
        );
        assert!(text.contains("  shared acmé/foo 1.0.0\n"));
        assert!(text.contains("  shared acme/bar 2.0.0\n"));
    }

    #[test]
    fn test_text_empty_summary() {
        let text = render(
            TextFormatter::with_color(Verbosity::Normal, false, false),
            &ClassificationSummary::new(false),
        );
        assert_eq!(text, "No packages to classify.\n");
    }

    #[test]
    fn test_text_all_shared_banner() {
        let mut summary = ClassificationSummary::new(true);
        summary.add(Classification::new(
            Package::library("acme/foo"),
            Decision::shared(Reason::AllShared),
        ));
        let text = render(
            TextFormatter::with_color(Verbosity::Normal, false, false),
            &summary,
        );
        assert!(text.starts_with("All packages are shared"));
    }
}
