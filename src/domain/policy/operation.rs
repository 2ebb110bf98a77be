//! Operations the policy engine gates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four operations every authorization check is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Returns true for operations that change state.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Operation::Read)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_is_not_a_mutation() {
        assert!(!Operation::Read.is_mutation());
        assert!(Operation::Create.is_mutation());
        assert!(Operation::Update.is_mutation());
        assert!(Operation::Delete.is_mutation());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Operation::Delete).unwrap(), "\"delete\"");
    }
}
