//! Domain services.
//!
//! Each service owns a [`UnitOfWorkProvider`] and runs every operation inside
//! a single unit of work: validate and check preconditions first, mutate, then
//! commit. Any early return drops the unit of work, which discards the
//! transaction.

mod repo;
mod user_profile;
mod vault;
mod workspace;

pub use repo::RepoService;
pub use user_profile::UserProfileService;
pub use vault::VaultService;
pub use workspace::WorkspaceService;

use symphony_domain::{DomainResult, OwnershipError, UserProfileId, Workspace};

/// Resource ceilings enforced by the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum workspaces a single user may own.
    pub max_workspaces_per_user: usize,
    /// Maximum repos inside one workspace.
    pub max_repos_per_workspace: usize,
    /// Maximum vaults inside one workspace.
    pub max_vaults_per_workspace: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_workspaces_per_user: 50,
            max_repos_per_workspace: 100,
            max_vaults_per_workspace: 20,
        }
    }
}

/// Who a read operation is performed as.
///
/// Mutating operations always name the acting user and always enforce
/// ownership. Reads may be issued by internal callers that have already
/// authorized the access, so they take a scope instead of an optional id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// No ownership check; the caller vouches for the access.
    Unchecked,
    /// The result must belong to this user's workspace chain.
    Owner(UserProfileId),
}

impl AccessScope {
    pub(crate) fn check(&self, workspace: &Workspace) -> DomainResult<()> {
        match self {
            Self::Unchecked => Ok(()),
            Self::Owner(user_id) => ensure_owner(workspace, *user_id),
        }
    }
}

impl From<UserProfileId> for AccessScope {
    fn from(user_id: UserProfileId) -> Self {
        Self::Owner(user_id)
    }
}

pub(crate) fn ensure_owner(workspace: &Workspace, user_id: UserProfileId) -> DomainResult<()> {
    if workspace.user_profile_id != user_id {
        return Err(OwnershipError::WorkspaceNotOwnedByUser {
            workspace_id: workspace.id,
            user_id,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_workspaces_per_user, 50);
        assert_eq!(limits.max_repos_per_workspace, 100);
        assert_eq!(limits.max_vaults_per_workspace, 20);
    }

    #[test]
    fn access_scope_from_user_id_is_owner() {
        let user_id = UserProfileId::new();
        assert_eq!(AccessScope::from(user_id), AccessScope::Owner(user_id));
    }
}
