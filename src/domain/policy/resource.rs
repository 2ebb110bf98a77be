//! Resource references - what the policy engine authorizes against.
//!
//! Every resource resolves to an `(organization, owner?)` pair through its
//! ownership chain: directly for decisions and meetings, transitively
//! through the parent decision for stakeholders/documents/affected parties,
//! and through the parent meeting for agenda items. The engine never needs
//! any other field of the resource.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::foundation::{OrganizationId, OwnedByUser, UserId};
use crate::domain::governance::{AffectedParty, Decision, DecisionDocument, Stakeholder};
use crate::domain::schedule::{AgendaItem, Meeting};

/// The kinds of resource the engine knows how to gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Decision,
    Stakeholder,
    Document,
    AffectedParty,
    Meeting,
    AgendaItem,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Decision => "Decision",
            ResourceKind::Stakeholder => "Stakeholder",
            ResourceKind::Document => "Document",
            ResourceKind::AffectedParty => "AffectedParty",
            ResourceKind::Meeting => "Meeting",
            ResourceKind::AgendaItem => "AgendaItem",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The resolved ownership chain of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceScope {
    /// The single organization the resource is reachable from.
    pub organization_id: OrganizationId,

    /// The owning user, for owner-gated resources. `None` for resources
    /// with organization-wide write rules (meetings, agenda items) and for
    /// not-yet-created resources under a `Create` check.
    pub owner_id: Option<UserId>,
}

impl ResourceScope {
    /// Scope for a resource with organization-wide rules.
    pub fn organization(organization_id: OrganizationId) -> Self {
        Self {
            organization_id,
            owner_id: None,
        }
    }

    /// Scope for an owner-gated resource.
    pub fn owned(organization_id: OrganizationId, owner_id: UserId) -> Self {
        Self {
            organization_id,
            owner_id: Some(owner_id),
        }
    }
}

/// A reference to a resource, carrying exactly what the engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    /// The resource's own ID. Nil for creation checks, where the target
    /// does not exist yet.
    pub resource_id: Uuid,
    pub scope: ResourceScope,
}

impl ResourceRef {
    /// Creates a reference from already-resolved parts.
    pub fn new(kind: ResourceKind, resource_id: Uuid, scope: ResourceScope) -> Self {
        Self {
            kind,
            resource_id,
            scope,
        }
    }

    /// Reference for creating a resource that does not exist yet.
    ///
    /// For sub-entities the scope must be the parent's scope, so the owner
    /// gate on creation applies; for decisions and meetings pass the bare
    /// organization scope.
    pub fn creation(kind: ResourceKind, scope: ResourceScope) -> Self {
        Self::new(kind, Uuid::nil(), scope)
    }

    /// Reference to an existing decision.
    pub fn decision(decision: &Decision) -> Self {
        Self::new(
            ResourceKind::Decision,
            *decision.id().as_uuid(),
            ResourceScope::owned(decision.organization_id(), decision.owner_id().clone()),
        )
    }

    /// Reference to a stakeholder, scoped through its parent decision.
    pub fn stakeholder(stakeholder: &Stakeholder, parent: &Decision) -> Self {
        debug_assert_eq!(stakeholder.decision_id(), parent.id());
        Self::new(
            ResourceKind::Stakeholder,
            *stakeholder.id().as_uuid(),
            ResourceScope::owned(parent.organization_id(), parent.owner_id().clone()),
        )
    }

    /// Reference to a document, scoped through its parent decision.
    pub fn document(document: &DecisionDocument, parent: &Decision) -> Self {
        debug_assert_eq!(document.decision_id(), parent.id());
        Self::new(
            ResourceKind::Document,
            *document.id().as_uuid(),
            ResourceScope::owned(parent.organization_id(), parent.owner_id().clone()),
        )
    }

    /// Reference to an affected party, scoped through its parent decision.
    pub fn affected_party(party: &AffectedParty, parent: &Decision) -> Self {
        debug_assert_eq!(party.decision_id(), parent.id());
        Self::new(
            ResourceKind::AffectedParty,
            *party.id().as_uuid(),
            ResourceScope::owned(parent.organization_id(), parent.owner_id().clone()),
        )
    }

    /// Reference to a meeting.
    pub fn meeting(meeting: &Meeting) -> Self {
        Self::new(
            ResourceKind::Meeting,
            *meeting.id().as_uuid(),
            ResourceScope::organization(meeting.organization_id()),
        )
    }

    /// Reference to an agenda item, scoped through its parent meeting.
    pub fn agenda_item(item: &AgendaItem, parent: &Meeting) -> Self {
        debug_assert_eq!(item.meeting_id(), parent.id());
        Self::new(
            ResourceKind::AgendaItem,
            *item.id().as_uuid(),
            ResourceScope::organization(parent.organization_id()),
        )
    }
}
