// k8up-docs - Documentation tooling for K8up
// Checks page references in the Antora docs and customizes restore manifests

pub mod cli;
pub mod models;
pub mod parser;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{OrphanError, OrphanReport, Target};
pub use validator::{OrphanChecker, PageSet};
