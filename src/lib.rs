//! sharepkg - Shared package classifier library
//!
//! Decides whether a Composer package is installed once into a shared
//! directory and linked into projects, or installed normally into the
//! project's vendor directory:
//! - Configuration from `extra.shared-package` (composer.json)
//! - Package catalog from composer.lock
//! - Rule-based classification with `package-list`, include and exclude lists

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod solver;
