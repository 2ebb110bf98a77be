//! The rule table and its evaluation.
//!
//! Evaluation is two-step, first match wins, default deny:
//!
//! 1. Tenant gate: a profile from a different organization than the
//!    resource is denied with `NotVisible` for every operation, so a
//!    cross-tenant resource is indistinguishable from one that does not
//!    exist.
//! 2. Operation rule: per-kind ownership/role rules.
//!
//! | Resource       | Read | Create | Update | Delete |
//! |----------------|------|--------|--------|--------|
//! | Decision       | org  | org    | owner  | owner  |
//! | Stakeholder    | org  | owner  | never  | owner  |
//! | Document       | org  | owner  | never  | owner  |
//! | AffectedParty  | org  | owner  | never  | owner  |
//! | Meeting        | org  | org    | org    | admin  |
//! | AgendaItem     | org  | org    | org    | org    |
//!
//! "owner" means the parent decision's owner for sub-entities. "never":
//! stakeholders, documents, and affected parties are immutable once
//! created; update is refused even for the owner.

use crate::domain::identity::Profile;

use super::{AccessDecision, DenialReason, Operation, ResourceKind, ResourceRef};

/// Decides whether `profile` may perform `operation` on `resource`.
///
/// Pure and synchronous: the resource's ownership chain must already be
/// resolved into the `ResourceRef`'s scope.
pub fn authorize(
    profile: &Profile,
    operation: Operation,
    resource: &ResourceRef,
) -> AccessDecision {
    if profile.organization_id != resource.scope.organization_id {
        return AccessDecision::Deny(DenialReason::NotVisible);
    }

    use Operation::*;
    use ResourceKind::*;

    let allowed = match (resource.kind, operation) {
        (Decision, Read | Create) => true,
        (Decision, Update | Delete) => is_owner(profile, resource),

        (Stakeholder | Document | AffectedParty, Read) => true,
        (Stakeholder | Document | AffectedParty, Create | Delete) => {
            is_owner(profile, resource)
        }
        // Immutable once created.
        (Stakeholder | Document | AffectedParty, Update) => false,

        (Meeting, Read | Create | Update) => true,
        (Meeting, Delete) => profile.is_admin(),

        (AgendaItem, _) => true,
    };

    if allowed {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny(DenialReason::NotOwner)
    }
}

/// Keeps the subset of `resources` on which `operation` is permitted.
///
/// Equivalent to calling [`authorize`] on each element and keeping the
/// allowed ones; used by list views to pre-filter collections rather than
/// erroring per item.
pub fn filter_visible(
    profile: &Profile,
    operation: Operation,
    resources: Vec<ResourceRef>,
) -> Vec<ResourceRef> {
    resources
        .into_iter()
        .filter(|resource| authorize(profile, operation, resource).is_allowed())
        .collect()
}

fn is_owner(profile: &Profile, resource: &ResourceRef) -> bool {
    resource.scope.owner_id.as_ref() == Some(&profile.user_id)
}
