//! Domain layer - pure types and the policy engine.
//!
//! Nothing in this layer performs I/O. The policy engine in particular is
//! synchronous computation over already-resolved data; all suspension points
//! live in the application and adapter layers.

pub mod foundation;
pub mod governance;
pub mod identity;
pub mod policy;
pub mod schedule;
