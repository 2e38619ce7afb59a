use std::sync::Arc;

use tracing::{info, instrument};

use symphony_domain::{
    AlreadyExistsError, Attributes, DomainResult, LimitExceededError, NotFoundError, Repo, RepoId,
    RepoRepository, UnitOfWork, UnitOfWorkProvider, UserProfileId, WorkspaceId,
    WorkspaceRepository,
};

use super::workspace::owned_workspace;
use super::{AccessScope, Limits};

/// Repo lifecycle inside an owned workspace.
pub struct RepoService {
    provider: Arc<dyn UnitOfWorkProvider>,
    limits: Limits,
}

impl RepoService {
    /// Creates a service with the default [`Limits`].
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self::with_limits(provider, Limits::default())
    }

    /// Creates a service with explicit limits.
    pub fn with_limits(provider: Arc<dyn UnitOfWorkProvider>, limits: Limits) -> Self {
        Self { provider, limits }
    }

    /// Creates a repo after checking ownership, the per-workspace limit,
    /// and name uniqueness within the workspace.
    #[instrument(skip(self, path, remote_url, metadata))]
    pub async fn create_repo(
        &self,
        workspace_id: WorkspaceId,
        user_id: UserProfileId,
        name: &str,
        path: Option<String>,
        remote_url: Option<String>,
        metadata: Option<Attributes>,
    ) -> DomainResult<Repo> {
        let uow = self.provider.begin().await?;
        owned_workspace(uow.as_ref(), workspace_id, user_id).await?;

        let counts = uow.workspaces().count_resources(workspace_id).await?;
        if counts.repos >= self.limits.max_repos_per_workspace {
            return Err(LimitExceededError::Repos {
                limit: self.limits.max_repos_per_workspace,
            }
            .into());
        }
        if uow
            .repos()
            .name_exists_in_workspace(workspace_id, name, None)
            .await?
        {
            return Err(AlreadyExistsError::RepoName {
                name: name.to_string(),
                workspace_id,
            }
            .into());
        }

        let repo = Repo::new(
            workspace_id,
            name,
            &path.unwrap_or_default(),
            remote_url,
            metadata.unwrap_or_default(),
        )?;
        let saved = uow.repos().save(&repo).await?;
        uow.commit().await?;

        info!(repo_id = %saved.id, %workspace_id, "repo created");
        Ok(saved)
    }

    /// Fetches a repo, enforcing the caller's [`AccessScope`] via its
    /// parent workspace.
    #[instrument(skip(self))]
    pub async fn get_repo(&self, repo_id: RepoId, scope: AccessScope) -> DomainResult<Repo> {
        let uow = self.provider.begin().await?;
        let repo = uow
            .repos()
            .get(repo_id)
            .await?
            .ok_or(NotFoundError::Repo(repo_id))?;
        check_scope(uow.as_ref(), repo.workspace_id, scope).await?;
        Ok(repo)
    }

    /// Lists the repos in a workspace, enforcing the caller's scope.
    #[instrument(skip(self))]
    pub async fn list_workspace_repos(
        &self,
        workspace_id: WorkspaceId,
        scope: AccessScope,
    ) -> DomainResult<Vec<Repo>> {
        let uow = self.provider.begin().await?;
        check_scope(uow.as_ref(), workspace_id, scope).await?;
        uow.repos().get_by_workspace(workspace_id).await
    }

    /// Applies a partial update to a repo in an owned workspace.
    ///
    /// A rename re-checks name uniqueness, excluding the repo itself. The
    /// remote url cannot be cleared here, only changed. Supplying
    /// `metadata` replaces the map wholesale.
    #[instrument(skip(self, path, remote_url, metadata))]
    pub async fn update_repo(
        &self,
        repo_id: RepoId,
        user_id: UserProfileId,
        name: Option<&str>,
        path: Option<String>,
        remote_url: Option<String>,
        metadata: Option<Attributes>,
    ) -> DomainResult<Repo> {
        let uow = self.provider.begin().await?;
        let mut repo = uow
            .repos()
            .get(repo_id)
            .await?
            .ok_or(NotFoundError::Repo(repo_id))?;
        owned_workspace(uow.as_ref(), repo.workspace_id, user_id).await?;

        if let Some(name) = name {
            if name != repo.name {
                if uow
                    .repos()
                    .name_exists_in_workspace(repo.workspace_id, name, Some(repo_id))
                    .await?
                {
                    return Err(AlreadyExistsError::RepoName {
                        name: name.to_string(),
                        workspace_id: repo.workspace_id,
                    }
                    .into());
                }
                repo.rename(name)?;
            }
        }
        if let Some(path) = path {
            repo.update_path(&path)?;
        }
        if let Some(remote_url) = remote_url {
            repo.update_remote_url(Some(remote_url))?;
        }
        if let Some(metadata) = metadata {
            repo.replace_metadata(metadata);
        }
        repo.touch();

        let saved = uow.repos().save(&repo).await?;
        uow.commit().await?;

        info!(%repo_id, "repo updated");
        Ok(saved)
    }

    /// Deletes a repo from an owned workspace.
    #[instrument(skip(self))]
    pub async fn delete_repo(&self, repo_id: RepoId, user_id: UserProfileId) -> DomainResult<()> {
        let uow = self.provider.begin().await?;
        let repo = uow
            .repos()
            .get(repo_id)
            .await?
            .ok_or(NotFoundError::Repo(repo_id))?;
        owned_workspace(uow.as_ref(), repo.workspace_id, user_id).await?;
        uow.repos().delete(repo_id).await?;
        uow.commit().await?;

        info!(%repo_id, "repo deleted");
        Ok(())
    }

    /// Records a sync by touching `last_synced`.
    ///
    /// Placeholder for future git integration; no remote interaction
    /// happens here.
    #[instrument(skip(self))]
    pub async fn sync_with_remote(
        &self,
        repo_id: RepoId,
        user_id: UserProfileId,
    ) -> DomainResult<Repo> {
        let uow = self.provider.begin().await?;
        let mut repo = uow
            .repos()
            .get(repo_id)
            .await?
            .ok_or(NotFoundError::Repo(repo_id))?;
        owned_workspace(uow.as_ref(), repo.workspace_id, user_id).await?;

        repo.mark_synced();

        let saved = uow.repos().save(&repo).await?;
        uow.commit().await?;

        info!(%repo_id, "repo synced with remote");
        Ok(saved)
    }
}

pub(crate) async fn check_scope(
    uow: &dyn UnitOfWork,
    workspace_id: WorkspaceId,
    scope: AccessScope,
) -> DomainResult<()> {
    let workspace = uow
        .workspaces()
        .get(workspace_id)
        .await?
        .ok_or(NotFoundError::Workspace(workspace_id))?;
    scope.check(&workspace)
}
