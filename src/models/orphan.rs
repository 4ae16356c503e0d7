use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A page file that is not referenced from a tracked document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanError {
    /// Page file name (not the full path)
    pub file: String,
    /// Document the page is missing from, as given on the command line
    pub document: PathBuf,
}

impl OrphanError {
    /// Create a new orphan finding
    pub fn new(file: impl Into<String>, document: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            document: document.into(),
        }
    }
}

impl fmt::Display for OrphanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File \"{}\" not in {}", self.file, self.document.display())
    }
}

/// Collected orphan findings across all checked documents
///
/// Findings are kept in insertion order: document-check order first, then
/// page order within each document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrphanReport {
    /// Documents that were checked, in check order
    pub documents: Vec<PathBuf>,
    /// All orphan findings
    pub orphans: Vec<OrphanError>,
}

impl OrphanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a document has been checked
    pub fn add_document(&mut self, document: &Path) {
        self.documents.push(document.to_path_buf());
    }

    pub fn push(&mut self, error: OrphanError) {
        self.orphans.push(error);
    }

    /// True when no page is orphaned
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty()
    }

    pub fn orphan_count(&self) -> usize {
        self.orphans.len()
    }

    /// One line per finding, in insertion order
    pub fn lines(&self) -> Vec<String> {
        self.orphans.iter().map(|e| e.to_string()).collect()
    }

    /// Success message naming every checked document
    pub fn success_message(&self) -> String {
        let names: Vec<String> = self
            .documents
            .iter()
            .map(|d| d.display().to_string())
            .collect();
        format!("No orphan files in either {}", names.join(" or "))
    }

    /// Exit code for the report: 0 when clean, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }
}
