//! Affected party attached to a decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AffectedPartyId, DecisionId, Timestamp, ValidationError};

/// A person or group affected by a decision's outcome.
///
/// Same shape and scoping as stakeholders: attached to a decision, scoped
/// transitively through it, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedParty {
    id: AffectedPartyId,
    decision_id: DecisionId,
    name: String,
    /// Free-form note on how this party is affected.
    note: Option<String>,
    created_at: Timestamp,
}

impl AffectedParty {
    /// Records a new affected party on a decision.
    pub fn new(
        decision_id: DecisionId,
        name: impl Into<String>,
        note: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: AffectedPartyId::new(),
            decision_id,
            name,
            note,
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> AffectedPartyId {
        self.id
    }

    pub fn decision_id(&self) -> DecisionId {
        self.decision_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_party_with_note() {
        let p = AffectedParty::new(
            DecisionId::new(),
            "Support team",
            Some("Workload shifts to EU hours".to_string()),
        )
        .unwrap();
        assert_eq!(p.note(), Some("Workload shifts to EU hours"));
    }

    #[test]
    fn rejects_empty_name() {
        assert!(AffectedParty::new(DecisionId::new(), "", None).is_err());
    }
}
