//! In-memory implementation of the `ScopeResolver` port.
//!
//! Backs the ownership-chain lookup with a registry of entities, for tests
//! and for embedding the core without a database. Registration mirrors the
//! chain the SQL adapter walks: sub-entities are registered together with
//! their parent so their scope is the parent's scope.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::DomainError;
use crate::domain::governance::{AffectedParty, Decision, DecisionDocument, Stakeholder};
use crate::domain::policy::{ResourceKind, ResourceRef, ResourceScope};
use crate::domain::schedule::{AgendaItem, Meeting};
use crate::ports::ScopeResolver;

/// In-memory `ScopeResolver`.
#[derive(Default)]
pub struct InMemoryScopeResolver {
    scopes: Mutex<HashMap<(ResourceKind, Uuid), ResourceScope>>,
}

impl InMemoryScopeResolver {
    /// Creates an empty resolver (every lookup misses).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a raw scope for a resource (builder form).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn with_scope(self, kind: ResourceKind, resource_id: Uuid, scope: ResourceScope) -> Self {
        self.insert(kind, resource_id, scope);
        self
    }

    /// Registers a decision.
    pub fn register_decision(&self, decision: &Decision) {
        let r = ResourceRef::decision(decision);
        self.insert(r.kind, r.resource_id, r.scope);
    }

    /// Registers a stakeholder under its parent decision.
    pub fn register_stakeholder(&self, stakeholder: &Stakeholder, parent: &Decision) {
        let r = ResourceRef::stakeholder(stakeholder, parent);
        self.insert(r.kind, r.resource_id, r.scope);
    }

    /// Registers a document under its parent decision.
    pub fn register_document(&self, document: &DecisionDocument, parent: &Decision) {
        let r = ResourceRef::document(document, parent);
        self.insert(r.kind, r.resource_id, r.scope);
    }

    /// Registers an affected party under its parent decision.
    pub fn register_affected_party(&self, party: &AffectedParty, parent: &Decision) {
        let r = ResourceRef::affected_party(party, parent);
        self.insert(r.kind, r.resource_id, r.scope);
    }

    /// Registers a meeting.
    pub fn register_meeting(&self, meeting: &Meeting) {
        let r = ResourceRef::meeting(meeting);
        self.insert(r.kind, r.resource_id, r.scope);
    }

    /// Registers an agenda item under its parent meeting.
    pub fn register_agenda_item(&self, item: &AgendaItem, parent: &Meeting) {
        let r = ResourceRef::agenda_item(item, parent);
        self.insert(r.kind, r.resource_id, r.scope);
    }

    /// Removes a resource, as a deletion would.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn remove(&self, kind: ResourceKind, resource_id: Uuid) {
        self.scopes
            .lock()
            .expect("InMemoryScopeResolver: lock poisoned")
            .remove(&(kind, resource_id));
    }

    fn insert(&self, kind: ResourceKind, resource_id: Uuid, scope: ResourceScope) {
        self.scopes
            .lock()
            .expect("InMemoryScopeResolver: lock poisoned")
            .insert((kind, resource_id), scope);
    }
}

#[async_trait]
impl ScopeResolver for InMemoryScopeResolver {
    async fn resolve_scope(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> Result<Option<ResourceScope>, DomainError> {
        Ok(self
            .scopes
            .lock()
            .expect("InMemoryScopeResolver: lock poisoned")
            .get(&(kind, resource_id))
            .cloned())
    }
}
