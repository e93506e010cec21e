//! CLI argument parsing module for sharepkg

use crate::domain::Package;
use crate::error::ConfigError;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse an ad-hoc package in format: `vendor/name` or `vendor/name:type`
fn parse_package(s: &str) -> Result<Package, String> {
    let s = s.trim();
    let (name, package_type) = match s.split_once(':') {
        Some((name, package_type)) => (name.trim(), Some(package_type.trim())),
        None => (s, None),
    };

    if name.is_empty() || package_type.is_some_and(str::is_empty) {
        return Err(ConfigError::invalid_package_spec(s).to_string());
    }

    Ok(match package_type {
        Some(package_type) => Package::new(name, package_type),
        None => Package::library(name),
    })
}

/// Shared package classifier for Composer projects
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sharepkg",
    version,
    about = "Show which Composer packages are installed as shared packages"
)]
pub struct CliArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// composer.json to read `extra.shared-package` from (default: PATH/composer.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// composer.lock to read packages from (default: PATH/composer.lock)
    #[arg(long, value_name = "FILE")]
    pub lock: Option<PathBuf>,

    /// Classify this package instead of the lock file (can be specified multiple times)
    #[arg(long = "package", value_name = "NAME[:TYPE]", action = ArgAction::Append, value_parser = parse_package)]
    pub packages: Vec<Package>,

    /// Skip packages-dev from composer.lock
    #[arg(long)]
    pub no_dev: bool,

    // Output options
    /// Only list packages that would be shared
    #[arg(long)]
    pub shared_only: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output (shows the rule behind each verdict)
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - only package names
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Path of the composer.json holding the configuration
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.path.join(crate::manifest::COMPOSER_JSON))
    }

    /// Path of the composer.lock holding the package catalog
    pub fn lock_path(&self) -> PathBuf {
        self.lock
            .clone()
            .unwrap_or_else(|| self.path.join(crate::manifest::COMPOSER_LOCK))
    }

    /// Check if packages were given on the command line
    pub fn has_adhoc_packages(&self) -> bool {
        !self.packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["sharepkg"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(args.config.is_none());
        assert!(args.lock.is_none());
        assert!(args.packages.is_empty());
        assert!(!args.no_dev);
        assert!(!args.shared_only);
        assert!(!args.json);
        assert!(!args.no_color);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_path_argument() {
        let args = CliArgs::parse_from(["sharepkg", "/some/path"]);
        assert_eq!(args.path, PathBuf::from("/some/path"));
        assert_eq!(args.config_path(), PathBuf::from("/some/path/composer.json"));
        assert_eq!(args.lock_path(), PathBuf::from("/some/path/composer.lock"));
    }

    #[test]
    fn test_explicit_files() {
        let args = CliArgs::parse_from([
            "sharepkg",
            "--config",
            "/etc/composer.json",
            "--lock",
            "/tmp/composer.lock",
        ]);
        assert_eq!(args.config_path(), PathBuf::from("/etc/composer.json"));
        assert_eq!(args.lock_path(), PathBuf::from("/tmp/composer.lock"));
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["sharepkg", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["sharepkg", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_package_multiple() {
        let args = CliArgs::parse_from([
            "sharepkg",
            "--package",
            "acme/foo",
            "--package",
            "acme/bar:shared-package",
        ]);
        assert!(args.has_adhoc_packages());
        assert_eq!(args.packages[0], Package::library("acme/foo"));
        assert_eq!(args.packages[1], Package::new("acme/bar", "shared-package"));
    }

    #[test]
    fn test_parse_package() {
        assert_eq!(parse_package("acme/foo").unwrap(), Package::library("acme/foo"));
        assert_eq!(
            parse_package(" acme/foo : metapackage ").unwrap(),
            Package::new("acme/foo", "metapackage")
        );
    }

    #[test]
    fn test_parse_package_invalid() {
        assert!(parse_package("").is_err());
        assert!(parse_package(":library").is_err());
        assert!(parse_package("acme/foo:").is_err());
    }

    #[test]
    fn test_invalid_package_rejected_by_clap() {
        let result = CliArgs::try_parse_from(["sharepkg", "--package", ":library"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "sharepkg",
            "/path/to/project",
            "--no-dev",
            "--verbose",
            "--shared-only",
            "--json",
            "--no-color",
        ]);
        assert_eq!(args.path, PathBuf::from("/path/to/project"));
        assert!(args.no_dev);
        assert!(args.verbose);
        assert!(args.shared_only);
        assert!(args.json);
        assert!(args.no_color);
    }
}
