//! Restore manifest handling
//!
//! Loads a restore manifest, sets `spec.snapshot` and renders the document
//! back to YAML. Untouched values keep their content and key order, but the
//! output uses serde_yaml's formatting rather than the source layout.

use crate::models::Target;
use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

const SPEC_KEY: &str = "spec";
const SNAPSHOT_KEY: &str = "snapshot";

/// Structural problems of a restore manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Manifest is not a YAML mapping")]
    NotAMapping,

    #[error("Manifest has no top-level 'spec' key")]
    MissingSpec,

    #[error("'spec' is not a mapping")]
    SpecNotAMapping,
}

/// Directory holding the restore manifests, relative to `base_dir`
///
/// `base_dir` is the directory of the running executable; the manifests live
/// in the sibling `restore` directory.
pub fn restore_dir(base_dir: &Path) -> PathBuf {
    base_dir.join("..").join("restore")
}

/// Path of the manifest for `target` inside `restore_dir`
pub fn manifest_path(restore_dir: &Path, target: Target) -> PathBuf {
    restore_dir.join(target.manifest_file_name())
}

/// Parse manifest text into a YAML value
pub fn parse_manifest(content: &str) -> Result<Value> {
    serde_yaml::from_str(content).context("Failed to parse restore manifest YAML")
}

/// Read and parse the manifest at `path`
pub fn load_manifest(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_manifest(&content).with_context(|| format!("Invalid manifest {}", path.display()))
}

/// Set `spec.snapshot`, creating the key when absent
pub fn set_snapshot(document: &mut Value, snapshot: &str) -> Result<(), ManifestError> {
    let root = document.as_mapping_mut().ok_or(ManifestError::NotAMapping)?;
    let spec = root.get_mut(SPEC_KEY).ok_or(ManifestError::MissingSpec)?;
    let spec: &mut Mapping = spec.as_mapping_mut().ok_or(ManifestError::SpecNotAMapping)?;
    spec.insert(
        Value::String(SNAPSHOT_KEY.to_string()),
        Value::String(snapshot.to_string()),
    );
    Ok(())
}

/// Render a manifest back to YAML
pub fn render_manifest(document: &Value) -> Result<String> {
    serde_yaml::to_string(document).context("Failed to serialize restore manifest")
}

/// Load the manifest for `target`, patch its snapshot and return the YAML
pub fn customize(restore_dir: &Path, target: Target, snapshot: &str) -> Result<String> {
    let path = manifest_path(restore_dir, target);
    let mut document = load_manifest(&path)?;
    set_snapshot(&mut document, snapshot)
        .with_context(|| format!("Cannot set snapshot in {}", path.display()))?;
    render_manifest(&document)
}
