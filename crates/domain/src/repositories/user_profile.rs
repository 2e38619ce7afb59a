//! UserProfile repository port.

use crate::errors::DomainResult;
use crate::identifiers::UserProfileId;
use crate::user_profile::UserProfile;
use async_trait::async_trait;

/// Repository port for the UserProfile aggregate.
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Retrieve a profile by id.
    async fn get(&self, id: UserProfileId) -> DomainResult<Option<UserProfile>>;

    /// Save a profile (create or overwrite, keyed by id).
    async fn save(&self, profile: &UserProfile) -> DomainResult<UserProfile>;

    /// Delete a profile by id, cascading to its workspaces (and their repos
    /// and vaults). No-op if the id is absent.
    async fn delete(&self, id: UserProfileId) -> DomainResult<()>;

    /// Check whether a profile exists.
    async fn exists(&self, id: UserProfileId) -> DomainResult<bool>;

    /// Find a profile by username.
    async fn get_by_username(&self, username: &str) -> DomainResult<Option<UserProfile>>;

    /// Find a profile by email.
    async fn get_by_email(&self, email: &str) -> DomainResult<Option<UserProfile>>;

    /// Check whether a username is in use, optionally excluding one profile
    /// (for updates).
    async fn username_exists(
        &self,
        username: &str,
        exclude: Option<UserProfileId>,
    ) -> DomainResult<bool>;

    /// Check whether an email is in use, optionally excluding one profile
    /// (for updates).
    async fn email_exists(&self, email: &str, exclude: Option<UserProfileId>)
        -> DomainResult<bool>;

    /// Count the workspaces owned by a user.
    async fn count_workspaces(&self, user_id: UserProfileId) -> DomainResult<usize>;
}
