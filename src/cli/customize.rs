use crate::models::Target;
use crate::parser::manifest;
use crate::Result;
use anyhow::Context;
use clap::Args;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct CustomizeArgs {
    /// Target PVC to restore
    #[arg(value_enum)]
    pub target: Target,

    /// Restic snapshot to restore
    pub snapshot: String,

    /// Directory holding the restore manifests
    /// (default: ../restore next to the executable)
    #[arg(long)]
    pub restore_dir: Option<PathBuf>,
}

/// Print the restore manifest for the target with its snapshot replaced
pub fn run(args: &CustomizeArgs) -> Result<()> {
    let restore_dir = resolve_restore_dir(args.restore_dir.as_deref(), &env::current_exe()?)?;

    let yaml = manifest::customize(&restore_dir, args.target, &args.snapshot)?;
    print!("{}", yaml);
    Ok(())
}

/// Explicit `--restore-dir`, or `../restore` relative to the executable's directory
fn resolve_restore_dir(explicit: Option<&Path>, exe: &Path) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let exe_dir = exe.parent().context("Executable path has no parent directory")?;
    Ok(manifest::restore_dir(exe_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_restore_dir_is_next_to_executable() {
        let dir = resolve_restore_dir(None, Path::new("/opt/tutorial/scripts/k8up-docs")).unwrap();
        assert_eq!(dir, Path::new("/opt/tutorial/scripts/../restore"));
    }

    #[test]
    fn test_explicit_restore_dir_wins() {
        let dir = resolve_restore_dir(
            Some(Path::new("manifests")),
            Path::new("/opt/tutorial/scripts/k8up-docs"),
        )
        .unwrap();
        assert_eq!(dir, Path::new("manifests"));
    }

    #[test]
    fn test_default_resolution_ignores_working_directory() {
        let exe = env::current_exe().unwrap();
        let dir = resolve_restore_dir(None, &exe).unwrap();
        assert_eq!(dir, exe.parent().unwrap().join("..").join("restore"));
    }

    #[test]
    fn test_default_resolution_loads_sibling_manifest() {
        let tutorial = TempDir::new().unwrap();
        fs::create_dir_all(tutorial.path().join("scripts")).unwrap();
        fs::create_dir_all(tutorial.path().join("restore")).unwrap();
        fs::write(
            tutorial.path().join("restore/mariadb.yaml"),
            "spec:\n  snapshot: old123\n",
        )
        .unwrap();

        let exe = tutorial.path().join("scripts").join("k8up-docs");
        let restore_dir = resolve_restore_dir(None, &exe).unwrap();
        let yaml = manifest::customize(&restore_dir, Target::Mariadb, "new456").unwrap();

        assert!(yaml.contains("snapshot: new456"));
        assert!(!yaml.contains("old123"));
    }
}
