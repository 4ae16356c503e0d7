pub mod orphan;
pub mod target;

pub use orphan::{OrphanError, OrphanReport};
pub use target::Target;
