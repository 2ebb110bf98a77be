//! Policy engine - tenant isolation and ownership rules.
//!
//! The engine is pure, synchronous computation over a resolved `Profile`
//! and a `ResourceRef` whose ownership chain has already been resolved to
//! an organization and optional owner. It never performs I/O; resolving a
//! raw resource ID to its scope is the application layer's job (via the
//! `ScopeResolver` port).

mod access;
mod engine;
mod operation;
mod resource;

pub use access::{AccessDecision, DenialReason};
pub use engine::{authorize, filter_visible};
pub use operation::Operation;
pub use resource::{ResourceKind, ResourceRef, ResourceScope};
