//! ProfileDirectory port - backend lookup of actor profiles.
//!
//! The directory is the authoritative store of profile rows, keyed by the
//! opaque actor ID the identity provider issues. The session resolver is
//! the only caller; it layers coalescing and bounded retry on top, so
//! implementations should perform exactly one lookup per call and report
//! failures through `DirectoryError` rather than retrying internally.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::identity::Profile;

/// Failure modes of a directory lookup.
///
/// The transient/terminal split drives the resolver's retry policy:
/// transient errors are retried once, terminal errors unwind immediately.
/// A valid actor with no profile row is not an error at all - the lookup
/// returns `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The request did not complete in time. Transient.
    #[error("Directory request timed out")]
    Timeout,

    /// The directory could not be reached or answered with a server
    /// failure. Transient.
    #[error("Directory unavailable: {0}")]
    Unavailable(String),

    /// The directory understood the request and refused it. Terminal.
    #[error("Directory rejected the request: {0}")]
    Rejected(String),
}

impl DirectoryError {
    /// Whether the resolver's retry budget applies to this failure.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DirectoryError::Timeout | DirectoryError::Unavailable(_)
        )
    }
}

/// Port for fetching profile rows from the backend directory.
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Looks up the profile row for an actor.
    ///
    /// Returns `Ok(None)` when the actor is valid but no profile row
    /// exists (an orphaned account) - the resolver turns that into a
    /// terminal `NotFound` that invalidates the session.
    async fn fetch_profile(&self, actor_id: &str) -> Result<Option<Profile>, DirectoryError>;
}
