//! Foundation types shared across the domain.
//!
//! Strongly-typed identifiers, timestamps, error types, and the ownership
//! trait that owner-gated aggregates implement.

mod errors;
mod ids;
mod ownership;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    AffectedPartyId, AgendaItemId, DecisionId, DocumentId, MeetingId, OrganizationId,
    StakeholderId, UserId,
};
pub use ownership::OwnedByUser;
pub use timestamp::Timestamp;
