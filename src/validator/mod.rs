pub mod orphans;

pub use orphans::{check_docs, DocsLayout, OrphanChecker, PageSet};
