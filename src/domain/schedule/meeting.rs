//! Meeting - organization-scoped scheduling aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MeetingId, OrganizationId, Timestamp, ValidationError};

/// A meeting belonging directly to an organization.
///
/// Meetings have no single owner: any organization member may create or
/// update one. Deletion is gated on the owner-equivalent role instead
/// (see the policy engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    id: MeetingId,
    organization_id: OrganizationId,
    title: String,
    scheduled_for: Timestamp,
    created_at: Timestamp,
}

impl Meeting {
    /// Schedules a new meeting in an organization.
    pub fn new(
        organization_id: OrganizationId,
        title: impl Into<String>,
        scheduled_for: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id: MeetingId::new(),
            organization_id,
            title,
            scheduled_for,
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> MeetingId {
        self.id
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scheduled_for(&self) -> Timestamp {
        self.scheduled_for
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Retitles the meeting.
    pub fn update_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        self.title = title;
        Ok(())
    }

    /// Reschedules the meeting.
    pub fn reschedule(&mut self, scheduled_for: Timestamp) {
        self.scheduled_for = scheduled_for;
    }
}
