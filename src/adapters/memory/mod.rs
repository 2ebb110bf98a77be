//! In-memory scope resolution.

mod scope_resolver;

pub use scope_resolver::InMemoryScopeResolver;
