use std::sync::Arc;

use tracing::{info, instrument};

use symphony_domain::{
    AlreadyExistsError, Attributes, DomainResult, LimitExceededError, NotFoundError, UnitOfWork,
    UnitOfWorkProvider, UserProfileId, Vault, VaultId, VaultRepository, WorkspaceId,
    WorkspaceRepository,
};

use super::repo::check_scope;
use super::workspace::owned_workspace;
use super::{AccessScope, Limits};

/// Vault lifecycle and lock state inside an owned workspace.
pub struct VaultService {
    provider: Arc<dyn UnitOfWorkProvider>,
    limits: Limits,
}

impl VaultService {
    /// Creates a service with the default [`Limits`].
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self::with_limits(provider, Limits::default())
    }

    /// Creates a service with explicit limits.
    pub fn with_limits(provider: Arc<dyn UnitOfWorkProvider>, limits: Limits) -> Self {
        Self { provider, limits }
    }

    /// Creates a vault after checking ownership, the per-workspace limit,
    /// and name uniqueness within the workspace.
    #[instrument(skip(self, path, metadata))]
    pub async fn create_vault(
        &self,
        workspace_id: WorkspaceId,
        user_id: UserProfileId,
        name: &str,
        path: &str,
        metadata: Option<Attributes>,
    ) -> DomainResult<Vault> {
        let uow = self.provider.begin().await?;
        owned_workspace(uow.as_ref(), workspace_id, user_id).await?;

        let counts = uow.workspaces().count_resources(workspace_id).await?;
        if counts.vaults >= self.limits.max_vaults_per_workspace {
            return Err(LimitExceededError::Vaults {
                limit: self.limits.max_vaults_per_workspace,
            }
            .into());
        }
        if uow
            .vaults()
            .name_exists_in_workspace(workspace_id, name, None)
            .await?
        {
            return Err(AlreadyExistsError::VaultName {
                name: name.to_string(),
                workspace_id,
            }
            .into());
        }

        let vault = Vault::new(workspace_id, name, path, metadata.unwrap_or_default())?;
        let saved = uow.vaults().save(&vault).await?;
        uow.commit().await?;

        info!(vault_id = %saved.id, %workspace_id, "vault created");
        Ok(saved)
    }

    /// Fetches a vault, enforcing the caller's [`AccessScope`] via its
    /// parent workspace.
    #[instrument(skip(self))]
    pub async fn get_vault(&self, vault_id: VaultId, scope: AccessScope) -> DomainResult<Vault> {
        let uow = self.provider.begin().await?;
        let vault = uow
            .vaults()
            .get(vault_id)
            .await?
            .ok_or(NotFoundError::Vault(vault_id))?;
        check_scope(uow.as_ref(), vault.workspace_id, scope).await?;
        Ok(vault)
    }

    /// Lists the vaults in a workspace, enforcing the caller's scope.
    #[instrument(skip(self))]
    pub async fn list_workspace_vaults(
        &self,
        workspace_id: WorkspaceId,
        scope: AccessScope,
    ) -> DomainResult<Vec<Vault>> {
        let uow = self.provider.begin().await?;
        check_scope(uow.as_ref(), workspace_id, scope).await?;
        uow.vaults().get_by_workspace(workspace_id).await
    }

    /// Applies a partial update to a vault in an owned workspace.
    ///
    /// A rename re-checks name uniqueness, excluding the vault itself.
    /// Supplying `metadata` replaces the map wholesale.
    #[instrument(skip(self, path, metadata))]
    pub async fn update_vault(
        &self,
        vault_id: VaultId,
        user_id: UserProfileId,
        name: Option<&str>,
        path: Option<String>,
        metadata: Option<Attributes>,
    ) -> DomainResult<Vault> {
        let uow = self.provider.begin().await?;
        let mut vault = uow
            .vaults()
            .get(vault_id)
            .await?
            .ok_or(NotFoundError::Vault(vault_id))?;
        owned_workspace(uow.as_ref(), vault.workspace_id, user_id).await?;

        if let Some(name) = name {
            if name != vault.name {
                if uow
                    .vaults()
                    .name_exists_in_workspace(vault.workspace_id, name, Some(vault_id))
                    .await?
                {
                    return Err(AlreadyExistsError::VaultName {
                        name: name.to_string(),
                        workspace_id: vault.workspace_id,
                    }
                    .into());
                }
                vault.rename(name)?;
            }
        }
        if let Some(path) = path {
            vault.update_path(&path)?;
        }
        if let Some(metadata) = metadata {
            vault.replace_metadata(metadata);
        }
        vault.touch();

        let saved = uow.vaults().save(&vault).await?;
        uow.commit().await?;

        info!(%vault_id, "vault updated");
        Ok(saved)
    }

    /// Deletes a vault from an owned workspace.
    #[instrument(skip(self))]
    pub async fn delete_vault(&self, vault_id: VaultId, user_id: UserProfileId) -> DomainResult<()> {
        let uow = self.provider.begin().await?;
        let vault = uow
            .vaults()
            .get(vault_id)
            .await?
            .ok_or(NotFoundError::Vault(vault_id))?;
        owned_workspace(uow.as_ref(), vault.workspace_id, user_id).await?;
        uow.vaults().delete(vault_id).await?;
        uow.commit().await?;

        info!(%vault_id, "vault deleted");
        Ok(())
    }

    /// Locks a vault. Locking an already locked vault is a no-op.
    #[instrument(skip(self))]
    pub async fn lock_vault(&self, vault_id: VaultId, user_id: UserProfileId) -> DomainResult<Vault> {
        self.set_locked(vault_id, user_id, true).await
    }

    /// Unlocks a vault. Unlocking an already unlocked vault is a no-op.
    #[instrument(skip(self))]
    pub async fn unlock_vault(
        &self,
        vault_id: VaultId,
        user_id: UserProfileId,
    ) -> DomainResult<Vault> {
        self.set_locked(vault_id, user_id, false).await
    }

    async fn set_locked(
        &self,
        vault_id: VaultId,
        user_id: UserProfileId,
        locked: bool,
    ) -> DomainResult<Vault> {
        let uow = self.provider.begin().await?;
        let mut vault = uow
            .vaults()
            .get(vault_id)
            .await?
            .ok_or(NotFoundError::Vault(vault_id))?;
        owned_workspace(uow.as_ref(), vault.workspace_id, user_id).await?;

        if locked {
            vault.lock();
        } else {
            vault.unlock();
        }

        let saved = uow.vaults().save(&vault).await?;
        uow.commit().await?;

        info!(%vault_id, locked, "vault lock state set");
        Ok(saved)
    }
}
