//! Newtype identifiers for the four aggregates.
//!
//! Each aggregate wraps its own UUID so a repo id can never be handed to
//! an operation expecting a workspace id. Generation uses UUID v7, which
//! sorts by creation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh time-ordered id.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Borrows the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Unwraps into the underlying UUID.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<Uuid>().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifies a user profile.
    UserProfileId
);

define_id!(
    /// Identifies a workspace.
    WorkspaceId
);

define_id!(
    /// Identifies a repo.
    RepoId
);

define_id!(
    /// Identifies a vault.
    VaultId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = WorkspaceId::new();
        assert_ne!(id.to_string(), "");
    }

    #[test]
    fn test_id_equality() {
        let uuid = Uuid::now_v7();
        let id1 = RepoId::from_uuid(uuid);
        let id2 = RepoId::from_uuid(uuid);
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_id_from_string() {
        let id1 = VaultId::new();
        let s = id1.to_string();
        let id2: VaultId = s.parse().unwrap();
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_id_serialization() {
        let id = UserProfileId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: UserProfileId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_different_id_types() {
        let uuid = Uuid::now_v7();
        let workspace_id = WorkspaceId::from_uuid(uuid);
        let repo_id = RepoId::from_uuid(uuid);

        // distinct types, same underlying value
        assert_eq!(workspace_id.as_uuid(), repo_id.as_uuid());
    }
}
