//! Stakeholder - a consultation-log member attached to a decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionId, StakeholderId, Timestamp, UserId, ValidationError};

/// A person consulted about a decision.
///
/// Stakeholders exist only attached to a decision and carry no organization
/// of their own; every access check resolves through the parent decision.
/// They are immutable once created: the only operations are addition and
/// removal, both gated on the parent decision's owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    id: StakeholderId,
    decision_id: DecisionId,
    /// Set when the stakeholder is a platform user; external stakeholders
    /// are recorded by name and email only.
    user_id: Option<UserId>,
    name: String,
    email: String,
    created_at: Timestamp,
}

impl Stakeholder {
    /// Records a new stakeholder on a decision.
    pub fn new(
        decision_id: DecisionId,
        user_id: Option<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: StakeholderId::new(),
            decision_id,
            user_id,
            name,
            email: email.into(),
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> StakeholderId {
        self.id
    }

    pub fn decision_id(&self) -> DecisionId {
        self.decision_id
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_external_stakeholder_without_user_id() {
        let s = Stakeholder::new(DecisionId::new(), None, "Dana", "dana@example.com").unwrap();
        assert!(s.user_id().is_none());
        assert_eq!(s.name(), "Dana");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(Stakeholder::new(DecisionId::new(), None, "", "x@example.com").is_err());
    }
}
