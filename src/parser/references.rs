//! Page reference extraction
//!
//! References are found by plain text matching, not by parsing AsciiDoc.
//! A directive inside a comment or a listing block still counts.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::HashSet;

/// A regex with exactly one capture group that yields referenced page names
#[derive(Debug, Clone)]
pub struct ReferencePattern {
    regex: Regex,
}

impl ReferencePattern {
    /// `include::<pages_dir>/<name>[]` directives of the top-level document
    pub fn include(pages_dir: &str) -> Result<Self> {
        let dir = pages_dir.trim_end_matches('/');
        let pattern = format!(r"include::{}/(.+)\[\]", regex::escape(dir));
        Self::custom(&pattern)
    }

    /// `xref:<name>[` cross references of the navigation document
    pub fn xref() -> Result<Self> {
        Self::custom(r"xref:(.+)\[")
    }

    /// Arbitrary pattern; must contain exactly one capture group
    pub fn custom(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid reference pattern: {}", pattern))?;
        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            bail!(
                "Reference pattern must have exactly one capture group, found {}: {}",
                groups,
                pattern
            );
        }
        Ok(Self { regex })
    }

    /// Collect the captured names of every match in `content`
    pub fn extract(&self, content: &str) -> HashSet<String> {
        self.regex
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_pattern_extracts_names() {
        let content = "= K8up\n\n\
            include::modules/ROOT/pages/a.adoc[]\n\
            include::modules/ROOT/pages/how-tos/b.adoc[]\n";
        let refs = ReferencePattern::include("modules/ROOT/pages").unwrap().extract(content);
        assert_eq!(refs.len(), 2);
        assert!(refs.contains("a.adoc"));
        assert!(refs.contains("how-tos/b.adoc"));
    }

    #[test]
    fn test_include_pattern_requires_empty_brackets() {
        let content = "include::modules/ROOT/pages/a.adoc[leveloffset=+1]\n";
        let refs = ReferencePattern::include("modules/ROOT/pages").unwrap().extract(content);
        assert!(refs.is_empty());
    }

    #[test]
    fn test_include_pattern_ignores_other_directories() {
        let content = "include::modules/ROOT/partials/a.adoc[]\n";
        let refs = ReferencePattern::include("modules/ROOT/pages").unwrap().extract(content);
        assert!(refs.is_empty());
    }

    #[test]
    fn test_include_pattern_escapes_directory() {
        let content = "include::docsXpages/a.adoc[]\ninclude::docs.pages/b.adoc[]\n";
        let refs = ReferencePattern::include("docs.pages/").unwrap().extract(content);
        assert_eq!(refs.len(), 1);
        assert!(refs.contains("b.adoc"));
    }

    #[test]
    fn test_xref_pattern_extracts_names() {
        let content = "* xref:index.adoc[Introduction]\n** xref:how-tos/backup.adoc[Backup]\n";
        let refs = ReferencePattern::xref().unwrap().extract(content);
        assert!(refs.contains("index.adoc"));
        assert!(refs.contains("how-tos/backup.adoc"));
    }

    #[test]
    fn test_match_is_greedy_within_a_line() {
        // The capture runs to the last bracket on the line
        let content = "xref:a.adoc[A] and xref:b.adoc[B]\n";
        let refs = ReferencePattern::xref().unwrap().extract(content);
        assert_eq!(refs.len(), 1);
        assert!(refs.contains("a.adoc[A] and xref:b.adoc"));
    }

    #[test]
    fn test_match_does_not_cross_lines() {
        let content = "xref:a.adoc\n[A]\n";
        assert!(ReferencePattern::xref().unwrap().extract(content).is_empty());
    }

    #[test]
    fn test_references_in_comments_count() {
        let content = "// xref:hidden.adoc[]\n";
        assert!(ReferencePattern::xref().unwrap().extract(content).contains("hidden.adoc"));
    }

    #[test]
    fn test_custom_pattern_requires_one_group() {
        assert!(ReferencePattern::custom(r"xref:(.+)\[").is_ok());
        assert!(ReferencePattern::custom(r"xref:.+\[").is_err());
        assert!(ReferencePattern::custom(r"(xref):(.+)\[").is_err());
        assert!(ReferencePattern::custom(r"xref:(.+\[").is_err());
    }
}
