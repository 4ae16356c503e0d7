use crate::validator::{check_docs, DocsLayout};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::env;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CheckOrphansArgs {
    /// Directory holding the page files
    #[arg(long, default_value = "modules/ROOT/pages")]
    pub pages_dir: PathBuf,

    /// Top-level document that includes every page
    #[arg(long, default_value = "k8up.adoc")]
    pub primary: PathBuf,

    /// Navigation document that cross-references every page
    #[arg(long, default_value = "modules/ROOT/nav.adoc")]
    pub nav: PathBuf,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&CheckOrphansArgs> for DocsLayout {
    fn from(args: &CheckOrphansArgs) -> Self {
        Self {
            pages_dir: args.pages_dir.clone(),
            primary: args.primary.clone(),
            nav: args.nav.clone(),
        }
    }
}

/// Check for orphan pages and print the report
///
/// Returns the process exit code: 0 when every page is referenced, 1 otherwise.
pub fn run(args: &CheckOrphansArgs) -> Result<i32> {
    let project_root = env::current_dir()?;
    let report = check_docs(&project_root, &DocsLayout::from(args))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_clean() {
        println!("{}", report.success_message());
    } else {
        for line in report.lines() {
            println!("{}", line);
        }
        eprintln!(
            "{}",
            format!("✗ {} orphan reference(s) found", report.orphan_count()).red()
        );
    }

    Ok(report.exit_code())
}
