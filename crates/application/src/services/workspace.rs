use std::sync::Arc;

use tracing::{debug, info, instrument};

use symphony_domain::{
    Attributes, DomainResult, LimitExceededError, NotFoundError, ResourceCounts, SharedResources,
    UnitOfWork, UnitOfWorkProvider, UserProfileId, UserProfileRepository, Workspace, WorkspaceId,
    WorkspaceRepository, WorkspaceType,
};

use super::{ensure_owner, AccessScope, Limits};

/// Workspace lifecycle, ownership enforcement, and resource ceilings.
pub struct WorkspaceService {
    provider: Arc<dyn UnitOfWorkProvider>,
    limits: Limits,
}

impl WorkspaceService {
    /// Creates a service with the default [`Limits`].
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self::with_limits(provider, Limits::default())
    }

    /// Creates a service with explicit limits.
    pub fn with_limits(provider: Arc<dyn UnitOfWorkProvider>, limits: Limits) -> Self {
        Self { provider, limits }
    }

    /// Creates a workspace for an existing user, enforcing the per-user limit.
    #[instrument(skip(self, description, settings))]
    pub async fn create_workspace(
        &self,
        user_id: UserProfileId,
        name: &str,
        workspace_type: WorkspaceType,
        description: Option<String>,
        settings: Option<Attributes>,
    ) -> DomainResult<Workspace> {
        let uow = self.provider.begin().await?;
        if !uow.user_profiles().exists(user_id).await? {
            return Err(NotFoundError::UserProfile(user_id).into());
        }
        let count = uow.user_profiles().count_workspaces(user_id).await?;
        if count >= self.limits.max_workspaces_per_user {
            return Err(LimitExceededError::Workspaces {
                limit: self.limits.max_workspaces_per_user,
            }
            .into());
        }

        let workspace = Workspace::new(
            user_id,
            name,
            workspace_type,
            description,
            settings.unwrap_or_default(),
        )?;
        let saved = uow.workspaces().save(&workspace).await?;
        uow.commit().await?;

        info!(workspace_id = %saved.id, %user_id, "workspace created");
        Ok(saved)
    }

    /// Fetches a workspace, enforcing the caller's [`AccessScope`].
    #[instrument(skip(self))]
    pub async fn get_workspace(
        &self,
        workspace_id: WorkspaceId,
        scope: AccessScope,
    ) -> DomainResult<Workspace> {
        let uow = self.provider.begin().await?;
        let workspace = uow
            .workspaces()
            .get(workspace_id)
            .await?
            .ok_or(NotFoundError::Workspace(workspace_id))?;
        scope.check(&workspace)?;
        Ok(workspace)
    }

    /// Lists a user's workspaces, optionally filtered by type.
    #[instrument(skip(self))]
    pub async fn list_user_workspaces(
        &self,
        user_id: UserProfileId,
        workspace_type: Option<WorkspaceType>,
    ) -> DomainResult<Vec<Workspace>> {
        let uow = self.provider.begin().await?;
        if !uow.user_profiles().exists(user_id).await? {
            return Err(NotFoundError::UserProfile(user_id).into());
        }
        match workspace_type {
            Some(ty) => uow.workspaces().get_by_user_and_type(user_id, ty).await,
            None => uow.workspaces().get_by_user(user_id).await,
        }
    }

    /// Applies a partial update to an owned workspace.
    ///
    /// A provided settings or shared-resources map replaces the stored one
    /// wholesale; omitted fields are left untouched.
    #[instrument(skip(self, description, settings, shared_resources))]
    pub async fn update_workspace(
        &self,
        workspace_id: WorkspaceId,
        user_id: UserProfileId,
        name: Option<&str>,
        description: Option<String>,
        settings: Option<Attributes>,
        shared_resources: Option<SharedResources>,
    ) -> DomainResult<Workspace> {
        let uow = self.provider.begin().await?;
        let mut workspace = owned_workspace(uow.as_ref(), workspace_id, user_id).await?;

        if let Some(name) = name {
            workspace.rename(name)?;
        }
        if let Some(description) = description {
            workspace.update_description(Some(description));
        }
        if let Some(settings) = settings {
            workspace.replace_settings(settings);
        }
        if let Some(shared_resources) = shared_resources {
            workspace.replace_shared_resources(shared_resources);
        }
        workspace.touch();

        let saved = uow.workspaces().save(&workspace).await?;
        uow.commit().await?;

        info!(%workspace_id, "workspace updated");
        Ok(saved)
    }

    /// Deletes an owned workspace along with its repos and vaults.
    #[instrument(skip(self))]
    pub async fn delete_workspace(
        &self,
        workspace_id: WorkspaceId,
        user_id: UserProfileId,
    ) -> DomainResult<()> {
        let uow = self.provider.begin().await?;
        owned_workspace(uow.as_ref(), workspace_id, user_id).await?;
        uow.workspaces().delete(workspace_id).await?;
        uow.commit().await?;

        info!(%workspace_id, %user_id, "workspace deleted");
        Ok(())
    }

    /// Counts the resources attached to a workspace.
    #[instrument(skip(self))]
    pub async fn get_workspace_stats(
        &self,
        workspace_id: WorkspaceId,
    ) -> DomainResult<ResourceCounts> {
        let uow = self.provider.begin().await?;
        if !uow.workspaces().exists(workspace_id).await? {
            return Err(NotFoundError::Workspace(workspace_id).into());
        }
        let counts = uow.workspaces().count_resources(workspace_id).await?;
        debug!(%workspace_id, repos = counts.repos, vaults = counts.vaults, "stats computed");
        Ok(counts)
    }

    /// Whether the workspace is still under the repo ceiling.
    pub async fn can_add_repo(&self, workspace_id: WorkspaceId) -> DomainResult<bool> {
        let counts = self.get_workspace_stats(workspace_id).await?;
        Ok(counts.repos < self.limits.max_repos_per_workspace)
    }

    /// Whether the workspace is still under the vault ceiling.
    pub async fn can_add_vault(&self, workspace_id: WorkspaceId) -> DomainResult<bool> {
        let counts = self.get_workspace_stats(workspace_id).await?;
        Ok(counts.vaults < self.limits.max_vaults_per_workspace)
    }

    /// Fails with a limit error when the workspace cannot take another repo.
    pub async fn check_repo_limit(&self, workspace_id: WorkspaceId) -> DomainResult<()> {
        if !self.can_add_repo(workspace_id).await? {
            return Err(LimitExceededError::Repos {
                limit: self.limits.max_repos_per_workspace,
            }
            .into());
        }
        Ok(())
    }

    /// Fails with a limit error when the workspace cannot take another vault.
    pub async fn check_vault_limit(&self, workspace_id: WorkspaceId) -> DomainResult<()> {
        if !self.can_add_vault(workspace_id).await? {
            return Err(LimitExceededError::Vaults {
                limit: self.limits.max_vaults_per_workspace,
            }
            .into());
        }
        Ok(())
    }
}

/// Loads a workspace and verifies the acting user owns it.
pub(crate) async fn owned_workspace(
    uow: &dyn UnitOfWork,
    workspace_id: WorkspaceId,
    user_id: UserProfileId,
) -> DomainResult<Workspace> {
    let workspace = uow
        .workspaces()
        .get(workspace_id)
        .await?
        .ok_or(NotFoundError::Workspace(workspace_id))?;
    ensure_owner(&workspace, user_id)?;
    Ok(workspace)
}
