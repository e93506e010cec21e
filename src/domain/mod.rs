//! Core domain models for sharepkg
//!
//! This module contains the fundamental types used throughout the application:
//! - Installable package information
//! - Classifier verdicts and the rule behind each one
//! - Summary structures for a classification run

mod decision;
mod package;
mod summary;

pub use decision::{Decision, Reason};
pub use package::{Package, DEFAULT_PACKAGE_TYPE};
pub use summary::{Classification, ClassificationSummary};
