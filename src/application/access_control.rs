//! AccessControl - the authorization boundary the surrounding system calls.
//!
//! Wraps the pure policy engine with ownership-chain resolution through the
//! `ScopeResolver` port, and converts denials into the errors the caller
//! must surface: list flows silently omit what the actor cannot see, while
//! direct single-resource mutations get an explicit error.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::foundation::DomainError;
use crate::domain::identity::Profile;
use crate::domain::policy::{
    self, AccessDecision, DenialReason, Operation, ResourceKind, ResourceRef,
};
use crate::ports::ScopeResolver;

/// Authorization service over a scope-resolving storage backend.
pub struct AccessControl {
    scopes: Arc<dyn ScopeResolver>,
}

impl AccessControl {
    /// Creates a new access control service.
    pub fn new(scopes: Arc<dyn ScopeResolver>) -> Self {
        Self { scopes }
    }

    /// Decides whether `profile` may perform `operation` on the resource
    /// identified by `(kind, resource_id)`.
    ///
    /// A resource that does not exist resolves to `Deny(NotVisible)`, the
    /// same decision a cross-tenant resource gets - absence and invisibility
    /// are deliberately indistinguishable.
    pub async fn authorize(
        &self,
        profile: &Profile,
        operation: Operation,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> Result<AccessDecision, DomainError> {
        let scope = self.scopes.resolve_scope(kind, resource_id).await?;

        let decision = match scope {
            Some(scope) => policy::authorize(
                profile,
                operation,
                &ResourceRef::new(kind, resource_id, scope),
            ),
            None => AccessDecision::Deny(DenialReason::NotVisible),
        };

        if let AccessDecision::Deny(reason) = decision {
            tracing::debug!(
                "Denied {} on {} {} for {}: {:?}",
                operation,
                kind,
                resource_id,
                profile.user_id,
                reason
            );
        }
        Ok(decision)
    }

    /// Like [`authorize`](Self::authorize), but converts a denial into the
    /// `DomainError` a direct single-resource operation must surface:
    /// `NotVisible` becomes a not-found error, `NotOwner` a forbidden one.
    pub async fn require(
        &self,
        profile: &Profile,
        operation: Operation,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> Result<(), DomainError> {
        self.authorize(profile, operation, kind, resource_id)
            .await?
            .into_domain_result(kind.as_str(), resource_id)
    }

    /// Authorizes a creation targeting the given ownership scope.
    ///
    /// Creation has no existing row to resolve; the caller supplies the
    /// scope the new resource would live in (the bare organization for
    /// decisions and meetings, the parent decision's scope for
    /// sub-entities).
    pub fn authorize_creation(
        &self,
        profile: &Profile,
        kind: ResourceKind,
        scope: crate::domain::policy::ResourceScope,
    ) -> AccessDecision {
        policy::authorize(
            profile,
            Operation::Create,
            &ResourceRef::creation(kind, scope),
        )
    }

    /// Keeps the subset of already-resolved references on which
    /// `operation` is permitted.
    ///
    /// Pure pass-through to the engine's filter; returns the same result
    /// as calling `authorize` on each element and keeping the allowed
    /// ones.
    pub fn filter_visible(
        &self,
        profile: &Profile,
        operation: Operation,
        resources: Vec<ResourceRef>,
    ) -> Vec<ResourceRef> {
        policy::filter_visible(profile, operation, resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScopeResolver;
    use crate::domain::foundation::{ErrorCode, OrganizationId, UserId};
    use crate::domain::policy::ResourceScope;

    fn profile_in(org: OrganizationId, user: &str) -> Profile {
        Profile::new(
            UserId::new(user).unwrap(),
            org,
            user.to_string(),
            format!("{user}@example.com"),
            None,
        )
    }

    fn service_with(
        kind: ResourceKind,
        id: Uuid,
        scope: ResourceScope,
    ) -> AccessControl {
        let scopes = InMemoryScopeResolver::new().with_scope(kind, id, scope);
        AccessControl::new(Arc::new(scopes))
    }

    #[tokio::test]
    async fn missing_resource_is_not_visible() {
        let service = AccessControl::new(Arc::new(InMemoryScopeResolver::new()));
        let profile = profile_in(OrganizationId::new(), "user-a");

        let decision = service
            .authorize(&profile, Operation::Read, ResourceKind::Decision, Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(decision, AccessDecision::Deny(DenialReason::NotVisible));
    }

    #[tokio::test]
    async fn resolves_scope_and_applies_the_rule_table() {
        let org = OrganizationId::new();
        let id = Uuid::new_v4();
        let owner = UserId::new("user-a").unwrap();
        let service = service_with(
            ResourceKind::Decision,
            id,
            ResourceScope::owned(org, owner),
        );

        let member = profile_in(org, "user-b");
        let read = service
            .authorize(&member, Operation::Read, ResourceKind::Decision, id)
            .await
            .unwrap();
        assert!(read.is_allowed());

        let update = service
            .authorize(&member, Operation::Update, ResourceKind::Decision, id)
            .await
            .unwrap();
        assert_eq!(update, AccessDecision::Deny(DenialReason::NotOwner));
    }

    #[tokio::test]
    async fn require_maps_not_visible_to_not_found() {
        let org = OrganizationId::new();
        let id = Uuid::new_v4();
        let service = service_with(
            ResourceKind::Decision,
            id,
            ResourceScope::owned(org, UserId::new("user-a").unwrap()),
        );

        let outsider = profile_in(OrganizationId::new(), "user-c");
        let err = service
            .require(&outsider, Operation::Read, ResourceKind::Decision, id)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[tokio::test]
    async fn require_maps_not_owner_to_forbidden() {
        let org = OrganizationId::new();
        let id = Uuid::new_v4();
        let service = service_with(
            ResourceKind::Decision,
            id,
            ResourceScope::owned(org, UserId::new("user-a").unwrap()),
        );

        let member = profile_in(org, "user-b");
        let err = service
            .require(&member, Operation::Delete, ResourceKind::Decision, id)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn creation_check_gates_sub_entities_on_parent_owner() {
        let org = OrganizationId::new();
        let service = AccessControl::new(Arc::new(InMemoryScopeResolver::new()));
        let owner_scope = ResourceScope::owned(org, UserId::new("user-a").unwrap());

        let owner = profile_in(org, "user-a");
        let member = profile_in(org, "user-b");

        assert!(service
            .authorize_creation(&owner, ResourceKind::Stakeholder, owner_scope.clone())
            .is_allowed());
        assert_eq!(
            service.authorize_creation(&member, ResourceKind::Stakeholder, owner_scope),
            AccessDecision::Deny(DenialReason::NotOwner)
        );
    }
}
