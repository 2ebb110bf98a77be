//! Organization - the root tenant boundary.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrganizationId, Timestamp, ValidationError};

/// An organization is the isolation boundary for all data in the system.
///
/// Organizations are created at signup, may be renamed by admins, and are
/// never merged or split. Every other resource is reachable from exactly
/// one organization, directly or transitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    id: OrganizationId,
    name: String,
    slug: String,
    created_at: Timestamp,
}

impl Organization {
    /// Creates a new organization with a validated name and slug.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let slug = slug.into();
        validate_slug(&slug)?;

        Ok(Self {
            id: OrganizationId::new(),
            name,
            slug,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstructs an organization from stored fields, bypassing creation
    /// defaults. Stored data is assumed already validated.
    pub fn from_parts(
        id: OrganizationId,
        name: String,
        slug: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            created_at,
        }
    }

    pub fn id(&self) -> OrganizationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Renames the organization. The slug never changes after creation.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        self.name = name;
        Ok(())
    }
}

/// Validates an organization slug: lowercase alphanumerics and hyphens,
/// no leading or trailing hyphen.
fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(ValidationError::empty_field("slug"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::invalid_format(
            "slug",
            "only lowercase letters, digits, and hyphens allowed",
        ));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(ValidationError::invalid_format(
            "slug",
            "cannot start or end with a hyphen",
        ));
    }
    Ok(())
}
