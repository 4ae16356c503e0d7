use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Restore manifest selector
///
/// Each variant names a `<target>.yaml` file in the tutorial's `restore`
/// directory. Add a variant to support another manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// MariaDB PVC restore
    Mariadb,
    /// WordPress PVC restore
    Wordpress,
}

impl Target {
    /// Name used on the command line and as the manifest file stem
    pub fn name(&self) -> &'static str {
        match self {
            Target::Mariadb => "mariadb",
            Target::Wordpress => "wordpress",
        }
    }

    /// Manifest file name, e.g. `mariadb.yaml`
    pub fn manifest_file_name(&self) -> String {
        format!("{}.yaml", self.name())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
