//! ScopeResolver port - ownership-chain resolution.
//!
//! The policy engine authorizes against a `ResourceScope` that has already
//! been resolved from storage. This port is that resolution seam: given a
//! resource kind and ID, walk the ownership chain (stakeholders, documents,
//! and affected parties through their parent decision; agenda items through
//! their parent meeting) and return the organization and optional owner.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::DomainError;
use crate::domain::policy::{ResourceKind, ResourceScope};

/// Port for resolving a resource reference to its ownership scope.
#[async_trait]
pub trait ScopeResolver: Send + Sync {
    /// Resolves the scope of the given resource.
    ///
    /// Returns `Ok(None)` when no such resource exists. Callers must treat
    /// a miss exactly like a cross-tenant denial: the resource is not
    /// visible, and whether it exists elsewhere is never revealed.
    async fn resolve_scope(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> Result<Option<ResourceScope>, DomainError>;
}
