//! Identity types: organizations (tenants) and resolved actor profiles.

mod organization;
mod profile;

pub use organization::Organization;
pub use profile::{OrgRole, Profile};
