pub mod manifest;
pub mod references;

pub use manifest::{customize, ManifestError};
pub use references::ReferencePattern;
