//! PostgreSQL adapters.

mod scope_resolver;

pub use scope_resolver::PostgresScopeResolver;
