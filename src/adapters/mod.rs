//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the core to external systems:
//! - `directory` - Profile directory clients (HTTP, in-memory)
//! - `postgres` - Ownership-chain resolution against PostgreSQL
//! - `memory` - In-memory scope resolution for tests and embedding
//! - `events` - Redis pub/sub listener for live profile updates

pub mod directory;
pub mod events;
pub mod memory;
pub mod postgres;
