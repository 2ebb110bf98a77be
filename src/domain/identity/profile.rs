//! Profile - the resolved, authoritative identity of an actor.
//!
//! A `Profile` is produced by the session resolver and consumed, never
//! mutated, by the policy engine. It carries exactly the fields the
//! authorization rules depend on: who the actor is and which organization
//! they belong to. Re-resolution or a live-update push replaces the whole
//! value; there is no partial mutation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrganizationId, UserId};

/// Role of a user within their organization.
///
/// `Admin` is the owner-equivalent role: the only place the engine
/// distinguishes it is meeting deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
    Admin,
    Member,
}

/// Resolved actor identity and tenant membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The actor's user ID, as issued by the identity provider.
    pub user_id: UserId,

    /// The organization the actor belongs to. One organization per profile.
    pub organization_id: OrganizationId,

    /// Display name shown in collaboration surfaces.
    pub display_name: String,

    /// The actor's email address.
    pub email: String,

    /// Role within the organization, if one has been assigned.
    pub role: Option<OrgRole>,
}

impl Profile {
    /// Creates a new resolved profile.
    pub fn new(
        user_id: UserId,
        organization_id: OrganizationId,
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Option<OrgRole>,
    ) -> Self {
        Self {
            user_id,
            organization_id,
            display_name: display_name.into(),
            email: email.into(),
            role,
        }
    }

    /// Returns the display name, or email as fallback when blank.
    pub fn display_name_or_email(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.email
        } else {
            &self.display_name
        }
    }

    /// Whether this actor holds the owner-equivalent role.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Some(OrgRole::Admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Option<OrgRole>) -> Profile {
        Profile::new(
            UserId::new("user-1").unwrap(),
            OrganizationId::new(),
            "Alice",
            "alice@example.com",
            role,
        )
    }

    #[test]
    fn display_name_or_email_prefers_name() {
        let p = profile(None);
        assert_eq!(p.display_name_or_email(), "Alice");
    }

    #[test]
    fn display_name_or_email_falls_back_to_email() {
        let mut p = profile(None);
        p.display_name = "   ".to_string();
        assert_eq!(p.display_name_or_email(), "alice@example.com");
    }

    #[test]
    fn is_admin_only_for_admin_role() {
        assert!(profile(Some(OrgRole::Admin)).is_admin());
        assert!(!profile(Some(OrgRole::Member)).is_admin());
        assert!(!profile(None).is_admin());
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&OrgRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }
}
