//! Profile directory adapters.

mod http;
mod memory;

pub use http::{HttpProfileDirectory, ProfileDirectoryClientConfig};
pub use memory::{FetchCounter, FetchOutcome, InMemoryDirectory};
