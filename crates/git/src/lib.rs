// Git integration for the revision tree
// This crate lists the entries of a revision and expands sub-trees on demand

mod repository;

pub use repository::{entry_kind, Repository};
