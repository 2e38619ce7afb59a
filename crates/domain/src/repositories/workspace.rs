//! Workspace repository port.

use crate::errors::DomainResult;
use crate::identifiers::{UserProfileId, WorkspaceId};
use crate::workspace::{Workspace, WorkspaceType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Counts of the resources contained in one workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCounts {
    /// Number of repos in the workspace
    pub repos: usize,
    /// Number of vaults in the workspace
    pub vaults: usize,
}

impl ResourceCounts {
    /// Total number of resources.
    pub fn total(&self) -> usize {
        self.repos + self.vaults
    }
}

/// Repository port for the Workspace aggregate.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Retrieve a workspace by id.
    async fn get(&self, id: WorkspaceId) -> DomainResult<Option<Workspace>>;

    /// Save a workspace (create or overwrite, keyed by id).
    async fn save(&self, workspace: &Workspace) -> DomainResult<Workspace>;

    /// Delete a workspace by id, cascading to its repos and vaults. No-op if
    /// the id is absent.
    async fn delete(&self, id: WorkspaceId) -> DomainResult<()>;

    /// Check whether a workspace exists.
    async fn exists(&self, id: WorkspaceId) -> DomainResult<bool>;

    /// Get all workspaces owned by a user.
    async fn get_by_user(&self, user_id: UserProfileId) -> DomainResult<Vec<Workspace>>;

    /// Get a user's workspaces filtered by type.
    async fn get_by_user_and_type(
        &self,
        user_id: UserProfileId,
        workspace_type: WorkspaceType,
    ) -> DomainResult<Vec<Workspace>>;

    /// Count the repos and vaults contained in a workspace.
    async fn count_resources(&self, workspace_id: WorkspaceId) -> DomainResult<ResourceCounts>;

    /// Check whether a workspace contains any repos or vaults.
    async fn has_active_resources(&self, workspace_id: WorkspaceId) -> DomainResult<bool>;
}
