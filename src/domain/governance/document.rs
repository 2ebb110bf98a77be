//! Document attached to a decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionId, DocumentId, Timestamp, ValidationError};

/// A supporting document attached to a decision.
///
/// Like stakeholders, documents carry no organization of their own and are
/// immutable once attached; access resolves through the parent decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionDocument {
    id: DocumentId,
    decision_id: DecisionId,
    name: String,
    /// Storage location, when the document lives in external storage.
    url: Option<String>,
    created_at: Timestamp,
}

impl DecisionDocument {
    /// Attaches a new document to a decision.
    pub fn new(
        decision_id: DecisionId,
        name: impl Into<String>,
        url: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: DocumentId::new(),
            decision_id,
            name,
            url,
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn decision_id(&self) -> DecisionId {
        self.decision_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
