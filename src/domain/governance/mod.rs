//! Governance aggregates: decision records and their sub-entities.
//!
//! A `Decision` is the unit of governance; stakeholders, documents, and
//! affected parties exist only attached to a decision and inherit its
//! organization scope transitively.

mod affected_party;
mod decision;
mod document;
mod stakeholder;

pub use affected_party::AffectedParty;
pub use decision::{Decision, DecisionStatus};
pub use document::DecisionDocument;
pub use stakeholder::Stakeholder;
