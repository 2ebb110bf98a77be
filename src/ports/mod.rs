//! Ports - Interfaces to external systems.
//!
//! Ports define the contracts the application layer depends on; adapters
//! provide the implementations.

mod profile_directory;
mod scope_resolver;

pub use profile_directory::{DirectoryError, ProfileDirectory};
pub use scope_resolver::ScopeResolver;
