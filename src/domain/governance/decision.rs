//! Decision aggregate - the unit of governance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AgendaItemId, DecisionId, OrganizationId, OwnedByUser, Timestamp, UserId, ValidationError,
};

/// Lifecycle status of a decision record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Draft,
    Active,
    Completed,
}

/// A decision record.
///
/// `organization_id` is immutable after creation, and ownership is fixed at
/// creation time: the creating user becomes the owner and no transfer
/// operation exists. Non-owner organization members get read-only access;
/// all mutation (including linking to an agenda item) is owner-gated by the
/// policy engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    id: DecisionId,
    title: String,
    owner_id: UserId,
    organization_id: OrganizationId,
    status: DecisionStatus,
    decision_type: String,
    /// Back-reference to at most one agenda item this decision is linked to.
    agenda_item_id: Option<AgendaItemId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Decision {
    /// Creates a new draft decision owned by the creating user.
    pub fn new(
        title: impl Into<String>,
        owner_id: UserId,
        organization_id: OrganizationId,
        decision_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: DecisionId::new(),
            title,
            owner_id,
            organization_id,
            status: DecisionStatus::Draft,
            decision_type: decision_type.into(),
            agenda_item_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs a decision from stored fields.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: DecisionId,
        title: String,
        owner_id: UserId,
        organization_id: OrganizationId,
        status: DecisionStatus,
        decision_type: String,
        agenda_item_id: Option<AgendaItemId>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            owner_id,
            organization_id,
            status,
            decision_type,
            agenda_item_id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn status(&self) -> DecisionStatus {
        self.status
    }

    pub fn decision_type(&self) -> &str {
        &self.decision_type
    }

    pub fn agenda_item_id(&self) -> Option<AgendaItemId> {
        self.agenda_item_id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Retitles the decision.
    pub fn update_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        self.title = title;
        self.touch();
        Ok(())
    }

    /// Moves the decision to a new lifecycle status.
    pub fn set_status(&mut self, status: DecisionStatus) {
        self.status = status;
        self.touch();
    }

    /// Links this decision to an agenda item, replacing any existing link.
    ///
    /// A decision is linked to at most one agenda item at a time. The policy
    /// engine treats this as an update on the decision, so it is owner-gated
    /// even though agenda items themselves follow organization-wide write
    /// rules.
    pub fn link_agenda_item(&mut self, agenda_item_id: AgendaItemId) {
        self.agenda_item_id = Some(agenda_item_id);
        self.touch();
    }

    /// Removes the agenda item link, if any.
    pub fn unlink_agenda_item(&mut self) {
        self.agenda_item_id = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl OwnedByUser for Decision {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}
