//! Ownership trait for user-owned resources.
//!
//! Ownership is fixed at creation time: a `Decision` is owned by the user
//! who created it, and no transfer-of-ownership operation exists. Aggregates
//! that are owner-gated implement this trait so ownership checks read the
//! same everywhere.

use super::{DomainError, UserId};

/// Trait for aggregates that have a single owner.
///
/// Implementors return the `UserId` of the owning user; the trait provides
/// default implementations for ownership checking.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, returning `Err(Forbidden)` if the user is not
    /// the owner.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::forbidden("User does not own this resource")
                .with_detail("owner_id", self.owner_id().to_string())
                .with_detail("requested_by", user_id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    struct Owned {
        owner: UserId,
    }

    impl OwnedByUser for Owned {
        fn owner_id(&self) -> &UserId {
            &self.owner
        }
    }

    #[test]
    fn owner_passes_ownership_check() {
        let owner = UserId::new("user-1").unwrap();
        let resource = Owned {
            owner: owner.clone(),
        };
        assert!(resource.is_owner(&owner));
        assert!(resource.check_ownership(&owner).is_ok());
    }

    #[test]
    fn non_owner_fails_with_forbidden() {
        let resource = Owned {
            owner: UserId::new("user-1").unwrap(),
        };
        let other = UserId::new("user-2").unwrap();
        let err = resource.check_ownership(&other).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.details.get("requested_by"), Some(&"user-2".to_string()));
    }
}
