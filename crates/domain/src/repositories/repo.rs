//! Repo repository port.

use crate::errors::DomainResult;
use crate::identifiers::{RepoId, WorkspaceId};
use crate::repo::Repo;
use async_trait::async_trait;

/// Repository port for the Repo aggregate.
#[async_trait]
pub trait RepoRepository: Send + Sync {
    /// Retrieve a repo by id.
    async fn get(&self, id: RepoId) -> DomainResult<Option<Repo>>;

    /// Save a repo (create or overwrite, keyed by id).
    async fn save(&self, repo: &Repo) -> DomainResult<Repo>;

    /// Delete a repo by id. No-op if the id is absent.
    async fn delete(&self, id: RepoId) -> DomainResult<()>;

    /// Check whether a repo exists.
    async fn exists(&self, id: RepoId) -> DomainResult<bool>;

    /// Get all repos in a workspace.
    async fn get_by_workspace(&self, workspace_id: WorkspaceId) -> DomainResult<Vec<Repo>>;

    /// Find a repo by name within a workspace.
    async fn get_by_name(&self, workspace_id: WorkspaceId, name: &str)
        -> DomainResult<Option<Repo>>;

    /// Check whether a repo name is taken within a workspace, optionally
    /// excluding one repo (for updates).
    async fn name_exists_in_workspace(
        &self,
        workspace_id: WorkspaceId,
        name: &str,
        exclude: Option<RepoId>,
    ) -> DomainResult<bool>;

    /// Count the repos in a workspace.
    async fn count_by_workspace(&self, workspace_id: WorkspaceId) -> DomainResult<usize>;
}
