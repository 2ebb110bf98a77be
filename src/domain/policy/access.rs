//! Access decisions returned by the policy engine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Why an operation was denied.
///
/// The two reasons are deliberately distinct surfaces: `NotVisible` must be
/// rendered identically to "resource does not exist" so cross-tenant
/// existence never leaks, while `NotOwner` is a real, explicit refusal on a
/// resource the actor can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Tenant mismatch (or no such resource) - treat as absence.
    NotVisible,
    /// Visible but the actor lacks mutation rights.
    NotOwner,
}

/// Result of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The operation is permitted.
    Allow,
    /// The operation is refused for the given reason.
    Deny(DenialReason),
}

impl AccessDecision {
    /// Returns true if the operation is permitted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    /// Returns true if the operation is refused.
    pub fn is_denied(&self) -> bool {
        matches!(self, AccessDecision::Deny(_))
    }

    /// Converts the decision to a Result, with denial becoming an error.
    pub fn into_result(self) -> Result<(), DenialReason> {
        match self {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny(reason) => Err(reason),
        }
    }

    /// Converts a denial into the `DomainError` the caller must surface.
    ///
    /// `NotVisible` maps to a not-found error (absence, never "forbidden
    /// elsewhere"); `NotOwner` maps to an explicit forbidden error.
    pub fn into_domain_result(
        self,
        resource_type: &'static str,
        resource_id: impl std::fmt::Display,
    ) -> Result<(), DomainError> {
        match self {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny(DenialReason::NotVisible) => {
                Err(DomainError::resource_not_found(resource_type, resource_id))
            }
            AccessDecision::Deny(DenialReason::NotOwner) => Err(DomainError::new(
                ErrorCode::Forbidden,
                "Not permitted to modify this resource",
            )
            .with_detail("resource_type", resource_type)
            .with_detail("resource_id", resource_id.to_string())),
        }
    }
}
