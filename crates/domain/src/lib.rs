//! Symphony Domain Types
//!
//! This crate provides the core domain model for the Symphony workspace
//! management platform. It defines the four aggregates (user profiles,
//! workspaces, repos, vaults), their validation rules, the error taxonomy,
//! and the persistence ports (repositories and unit of work) that any
//! storage backend can satisfy.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **identifiers**: Strongly-typed UUID-based identifiers for all aggregates
//! - **user_profile**: The identity anchor aggregate
//! - **workspace**: Independent working contexts owned by a user profile
//! - **repo**: Git repository metadata within a workspace
//! - **vault**: Secure-storage metadata within a workspace
//! - **validation**: Field validation rules shared by the aggregates
//! - **errors**: Typed error taxonomy with error codes and HTTP statuses
//! - **repositories**: Per-aggregate persistence ports
//! - **unit_of_work**: Transactional scope bundling the repositories
//!
//! ## Usage
//!
//! ```rust
//! use symphony_domain::{user_profile::UserProfile, Attributes};
//!
//! let profile = UserProfile::new("alice", "alice@example.com", Attributes::new()).unwrap();
//! assert_eq!(profile.username, "alice");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod repo;
pub mod repositories;
pub mod unit_of_work;
pub mod user_profile;
pub mod validation;
pub mod vault;
pub mod workspace;

// Re-export commonly used types
pub use errors::{
    AlreadyExistsError, DomainError, DomainResult, LimitExceededError, NotFoundError,
    OwnershipError, ValidationError,
};
pub use identifiers::{RepoId, UserProfileId, VaultId, WorkspaceId};
pub use repo::Repo;
pub use repositories::{
    RepoRepository, ResourceCounts, UserProfileRepository, VaultRepository, WorkspaceRepository,
};
pub use unit_of_work::{UnitOfWork, UnitOfWorkProvider};
pub use user_profile::UserProfile;
pub use vault::Vault;
pub use workspace::{Workspace, WorkspaceType};

/// Open key-value container used for preferences, settings, and metadata.
///
/// Values are arbitrary JSON; no fixed schema is assumed. Whether a given
/// operation merges into or replaces one of these maps is documented at the
/// call site.
pub type Attributes = indexmap::IndexMap<String, serde_json::Value>;

/// Links from a workspace to global resources, keyed by resource type.
///
/// Resource types are open-ended strings (`"contact"`, `"template"`, ...);
/// the values are the ids of the linked resources.
pub type SharedResources = indexmap::IndexMap<String, Vec<uuid::Uuid>>;
