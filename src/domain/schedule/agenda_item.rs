//! Agenda item within a meeting.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AgendaItemId, MeetingId, Timestamp, ValidationError};

/// A single item on a meeting's agenda.
///
/// Agenda items follow organization-wide write rules: any member of the
/// meeting's organization may create, update, or delete them. The optional
/// link from a decision to an agenda item lives on the decision side
/// (`Decision::agenda_item_id`), where it is owner-gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    id: AgendaItemId,
    meeting_id: MeetingId,
    title: String,
    /// Ordering position within the meeting's agenda.
    position: u32,
    created_at: Timestamp,
}

impl AgendaItem {
    /// Adds a new item to a meeting's agenda.
    pub fn new(
        meeting_id: MeetingId,
        title: impl Into<String>,
        position: u32,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id: AgendaItemId::new(),
            meeting_id,
            title,
            position,
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> AgendaItemId {
        self.id
    }

    pub fn meeting_id(&self) -> MeetingId {
        self.meeting_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Retitles the agenda item.
    pub fn update_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        self.title = title;
        Ok(())
    }

    /// Moves the item to a new position in the agenda.
    pub fn reposition(&mut self, position: u32) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_item_with_position() {
        let item = AgendaItem::new(MeetingId::new(), "Budget sign-off", 2).unwrap();
        assert_eq!(item.position(), 2);
    }

    #[test]
    fn rejects_empty_title() {
        assert!(AgendaItem::new(MeetingId::new(), "  ", 0).is_err());
    }

    #[test]
    fn reposition_moves_item() {
        let mut item = AgendaItem::new(MeetingId::new(), "Budget sign-off", 2).unwrap();
        item.reposition(0);
        assert_eq!(item.position(), 0);
    }
}
