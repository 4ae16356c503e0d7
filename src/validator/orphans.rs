use crate::models::{OrphanError, OrphanReport};
use crate::parser::ReferencePattern;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File names of the pages in a documentation module
///
/// Only regular files directly inside the directory are listed; symlinks
/// count when they resolve to a regular file. Names are sorted so reports
/// come out in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSet {
    names: Vec<OsString>,
}

impl PageSet {
    /// List the pages in `pages_dir`
    pub fn scan(pages_dir: &Path) -> Result<Self> {
        if !pages_dir.is_dir() {
            anyhow::bail!("Pages directory not found: {}", pages_dir.display());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(pages_dir).min_depth(1).max_depth(1) {
            let entry =
                entry.with_context(|| format!("Failed to list {}", pages_dir.display()))?;
            let file_type = entry.file_type();
            // Dangling links resolve to nothing and are skipped
            let is_page = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
            if is_page {
                names.push(entry.file_name().to_os_string());
            }
        }
        names.sort();

        Ok(Self { names })
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut names: Vec<OsString> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn names(&self) -> &[OsString] {
        &self.names
    }
}

/// A page is referenced only when its name matches a captured name exactly
fn is_referenced(page: &OsStr, references: &HashSet<String>) -> bool {
    page.to_str().is_some_and(|name| references.contains(name))
}

/// Checks a page set against the documents that should reference it
///
/// Every document is checked independently against the full page set: a
/// page referenced from the top-level document but missing from the
/// navigation is still reported.
pub struct OrphanChecker {
    pages: PageSet,
    report: OrphanReport,
}

impl OrphanChecker {
    pub fn new(pages: PageSet) -> Self {
        Self {
            pages,
            report: OrphanReport::new(),
        }
    }

    /// Record every page that `pattern` does not find in `document`
    pub fn check(&mut self, document: &Path, pattern: &ReferencePattern) -> Result<()> {
        self.check_at(document, document, pattern)
    }

    /// Read `path` but report findings under the name `document`
    pub fn check_at(
        &mut self,
        path: &Path,
        document: &Path,
        pattern: &ReferencePattern,
    ) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", document.display()))?;
        self.check_content(document, &content, pattern);
        Ok(())
    }

    /// Same as [`check`](Self::check) with the document text already loaded
    pub fn check_content(&mut self, document: &Path, content: &str, pattern: &ReferencePattern) {
        let references = pattern.extract(content);
        self.report.add_document(document);

        for page in self.pages.names() {
            if !is_referenced(page, &references) {
                let name = Path::new(page).display().to_string();
                self.report.push(OrphanError::new(name, document));
            }
        }
    }

    /// Finish checking and hand out the collected findings
    pub fn into_report(self) -> OrphanReport {
        self.report
    }
}

/// Locations of the documentation inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsLayout {
    pub pages_dir: PathBuf,
    pub primary: PathBuf,
    pub nav: PathBuf,
}

impl Default for DocsLayout {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("modules/ROOT/pages"),
            primary: PathBuf::from("k8up.adoc"),
            nav: PathBuf::from("modules/ROOT/nav.adoc"),
        }
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Run both checks: includes in the top-level document, then navigation xrefs
///
/// Paths in `layout` are resolved against `root`; reports name the documents
/// the way `layout` spells them.
pub fn check_docs(root: &Path, layout: &DocsLayout) -> Result<OrphanReport> {
    let pages = PageSet::scan(&resolve(root, &layout.pages_dir))?;
    let include = ReferencePattern::include(&layout.pages_dir.to_string_lossy())?;
    let xref = ReferencePattern::xref()?;

    let mut checker = OrphanChecker::new(pages);
    checker.check_at(&resolve(root, &layout.primary), &layout.primary, &include)?;
    checker.check_at(&resolve(root, &layout.nav), &layout.nav, &xref)?;

    Ok(checker.into_report())
}
