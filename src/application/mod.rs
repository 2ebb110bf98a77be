//! Application layer - orchestration over the domain and ports.
//!
//! The two call boundaries the surrounding system (forms, dashboards, AI
//! drafting flows) uses:
//!
//! - [`SessionResolver`] turns an actor's opaque identity into a resolved
//!   `Profile`, with request coalescing, bounded retry, and live-update
//!   merging.
//! - [`AccessControl`] gates operations against the policy engine, loading
//!   ownership scopes through the `ScopeResolver` port.

mod access_control;
mod session_resolver;

pub use access_control::AccessControl;
pub use session_resolver::{SessionError, SessionResolver};
