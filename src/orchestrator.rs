//! Classification orchestrator
//!
//! Workflow: load config → build solver once → load catalog → classify each
//! package in catalog order.

use crate::cli::CliArgs;
use crate::config::SharedPackageConfig;
use crate::domain::{Classification, ClassificationSummary, Package};
use crate::error::{AppError, ConfigError};
use crate::manifest::{load_config, load_packages};
use crate::solver::SharedPackageSolver;

/// Orchestrator for a classification run
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        if !args.path.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: args.path.clone(),
                message: "not a directory".to_string(),
            }
            .into());
        }
        Ok(Self { args })
    }

    /// Run the classification
    pub fn run(&self) -> Result<ClassificationSummary, AppError> {
        let config = self.load_config()?;
        let solver = SharedPackageSolver::new(config);
        let packages = self.load_packages()?;

        tracing::info!(
            packages = packages.len(),
            all_shared = solver.is_all_shared(),
            "classifying packages"
        );
        Ok(classify(&solver, packages))
    }

    fn load_config(&self) -> Result<SharedPackageConfig, AppError> {
        let path = self.args.config_path();
        if self.args.config.is_none() && !path.exists() {
            tracing::info!(path = %path.display(), "no composer.json, using defaults");
            return Ok(SharedPackageConfig::default());
        }
        Ok(load_config(&path)?)
    }

    fn load_packages(&self) -> Result<Vec<Package>, AppError> {
        if self.args.has_adhoc_packages() {
            return Ok(self.args.packages.clone());
        }

        let packages = load_packages(&self.args.lock_path())?;
        if self.args.no_dev {
            return Ok(packages.into_iter().filter(|p| !p.is_dev).collect());
        }
        Ok(packages)
    }
}

/// Classify packages in order with an already built solver
pub fn classify(
    solver: &SharedPackageSolver,
    packages: impl IntoIterator<Item = Package>,
) -> ClassificationSummary {
    let mut summary = ClassificationSummary::new(solver.is_all_shared());
    for package in packages {
        let decision = solver.decide(&package);
        summary.add(Classification::new(package, decision));
    }
    summary
}
