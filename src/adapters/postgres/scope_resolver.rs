//! PostgreSQL implementation of ScopeResolver.
//!
//! Resolves a resource's ownership chain with a single query per lookup:
//! decisions and meetings directly, sub-entities through a join on their
//! parent. These queries are the application-level source of truth for
//! tenant isolation; deployments that also want storage-level enforcement
//! can mirror them as row-security policies, but nothing here depends on
//! that.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, OrganizationId, UserId};
use crate::domain::policy::{ResourceKind, ResourceScope};
use crate::ports::ScopeResolver;

/// PostgreSQL implementation of ScopeResolver.
#[derive(Clone)]
pub struct PostgresScopeResolver {
    pool: PgPool,
}

impl PostgresScopeResolver {
    /// Creates a new PostgresScopeResolver.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The ownership-chain query for each resource kind.
    ///
    /// Every query projects the same two columns: `organization_id` and a
    /// nullable `owner_id`. Meetings and agenda items have no owner; their
    /// write rules are organization-wide.
    fn query_for_kind(kind: ResourceKind) -> &'static str {
        match kind {
            ResourceKind::Decision => {
                "SELECT organization_id, owner_id FROM decisions WHERE id = $1"
            }
            ResourceKind::Stakeholder => {
                r#"
                SELECT d.organization_id, d.owner_id
                FROM stakeholders s
                JOIN decisions d ON d.id = s.decision_id
                WHERE s.id = $1
                "#
            }
            ResourceKind::Document => {
                r#"
                SELECT d.organization_id, d.owner_id
                FROM documents doc
                JOIN decisions d ON d.id = doc.decision_id
                WHERE doc.id = $1
                "#
            }
            ResourceKind::AffectedParty => {
                r#"
                SELECT d.organization_id, d.owner_id
                FROM affected_parties p
                JOIN decisions d ON d.id = p.decision_id
                WHERE p.id = $1
                "#
            }
            ResourceKind::Meeting => {
                "SELECT organization_id, NULL::text AS owner_id FROM meetings WHERE id = $1"
            }
            ResourceKind::AgendaItem => {
                r#"
                SELECT m.organization_id, NULL::text AS owner_id
                FROM agenda_items a
                JOIN meetings m ON m.id = a.meeting_id
                WHERE a.id = $1
                "#
            }
        }
    }
}

#[async_trait]
impl ScopeResolver for PostgresScopeResolver {
    async fn resolve_scope(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> Result<Option<ResourceScope>, DomainError> {
        let row = sqlx::query(Self::query_for_kind(kind))
            .bind(resource_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to resolve {} scope: {}", kind, e))
            })?;

        row.map(row_to_scope).transpose()
    }
}

fn row_to_scope(row: PgRow) -> Result<ResourceScope, DomainError> {
    let organization_id: Uuid = row
        .try_get("organization_id")
        .map_err(|e| DomainError::database(format!("Missing organization_id column: {}", e)))?;
    let owner: Option<String> = row
        .try_get("owner_id")
        .map_err(|e| DomainError::database(format!("Missing owner_id column: {}", e)))?;
    let owner_id = owner.map(UserId::new).transpose()?;

    Ok(ResourceScope {
        organization_id: OrganizationId::from_uuid(organization_id),
        owner_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_entities_resolve_through_their_parent_decision() {
        for kind in [
            ResourceKind::Stakeholder,
            ResourceKind::Document,
            ResourceKind::AffectedParty,
        ] {
            let query = PostgresScopeResolver::query_for_kind(kind);
            assert!(query.contains("JOIN decisions"), "{:?}: {}", kind, query);
            assert!(query.contains("d.owner_id"));
        }
    }

    #[test]
    fn agenda_items_resolve_through_their_parent_meeting() {
        let query = PostgresScopeResolver::query_for_kind(ResourceKind::AgendaItem);
        assert!(query.contains("JOIN meetings"));
    }

    #[test]
    fn unowned_kinds_project_a_null_owner() {
        for kind in [ResourceKind::Meeting, ResourceKind::AgendaItem] {
            let query = PostgresScopeResolver::query_for_kind(kind);
            assert!(query.contains("NULL::text AS owner_id"), "{:?}", kind);
        }
    }
}
