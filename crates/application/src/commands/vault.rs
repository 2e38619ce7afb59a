//! Vault commands and their handlers.

use std::sync::Arc;

use async_trait::async_trait;

use symphony_domain::{Attributes, UnitOfWorkProvider, UserProfileId, VaultId, WorkspaceId};

use crate::dto::VaultDto;
use crate::services::VaultService;
use crate::ApplicationResult;

use super::{Command, CommandHandler};

/// Creates a vault inside an owned workspace.
#[derive(Debug, Clone)]
pub struct CreateVaultCommand {
    /// Parent workspace.
    pub workspace_id: WorkspaceId,
    /// Acting user; must own the workspace.
    pub user_id: UserProfileId,
    /// Display name, unique within the workspace.
    pub name: String,
    /// Local path.
    pub path: String,
    /// Initial metadata, if any.
    pub metadata: Option<Attributes>,
}

impl Command for CreateVaultCommand {
    type Output = VaultDto;
}

/// Partially updates a vault in an owned workspace.
#[derive(Debug, Clone)]
pub struct UpdateVaultCommand {
    /// Vault to update.
    pub vault_id: VaultId,
    /// Acting user; must own the parent workspace.
    pub user_id: UserProfileId,
    /// New name, when renaming.
    pub name: Option<String>,
    /// New path, when provided.
    pub path: Option<String>,
    /// Replacement metadata map, when provided.
    pub metadata: Option<Attributes>,
}

impl Command for UpdateVaultCommand {
    type Output = VaultDto;
}

/// Deletes a vault from an owned workspace.
#[derive(Debug, Clone)]
pub struct DeleteVaultCommand {
    /// Vault to delete.
    pub vault_id: VaultId,
    /// Acting user; must own the parent workspace.
    pub user_id: UserProfileId,
}

impl Command for DeleteVaultCommand {
    type Output = ();
}

/// Locks a vault; idempotent.
#[derive(Debug, Clone)]
pub struct LockVaultCommand {
    /// Vault to lock.
    pub vault_id: VaultId,
    /// Acting user; must own the parent workspace.
    pub user_id: UserProfileId,
}

impl Command for LockVaultCommand {
    type Output = VaultDto;
}

/// Unlocks a vault; idempotent.
#[derive(Debug, Clone)]
pub struct UnlockVaultCommand {
    /// Vault to unlock.
    pub vault_id: VaultId,
    /// Acting user; must own the parent workspace.
    pub user_id: UserProfileId,
}

impl Command for UnlockVaultCommand {
    type Output = VaultDto;
}

/// Handler for [`CreateVaultCommand`].
pub struct CreateVaultHandler {
    service: VaultService,
}

impl CreateVaultHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: VaultService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<CreateVaultCommand> for CreateVaultHandler {
    async fn handle(&self, command: CreateVaultCommand) -> ApplicationResult<VaultDto> {
        let vault = self
            .service
            .create_vault(
                command.workspace_id,
                command.user_id,
                &command.name,
                &command.path,
                command.metadata,
            )
            .await?;
        Ok(VaultDto::from(vault))
    }
}

/// Handler for [`UpdateVaultCommand`].
pub struct UpdateVaultHandler {
    service: VaultService,
}

impl UpdateVaultHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: VaultService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateVaultCommand> for UpdateVaultHandler {
    async fn handle(&self, command: UpdateVaultCommand) -> ApplicationResult<VaultDto> {
        let vault = self
            .service
            .update_vault(
                command.vault_id,
                command.user_id,
                command.name.as_deref(),
                command.path,
                command.metadata,
            )
            .await?;
        Ok(VaultDto::from(vault))
    }
}

/// Handler for [`DeleteVaultCommand`].
pub struct DeleteVaultHandler {
    service: VaultService,
}

impl DeleteVaultHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: VaultService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteVaultCommand> for DeleteVaultHandler {
    async fn handle(&self, command: DeleteVaultCommand) -> ApplicationResult<()> {
        self.service
            .delete_vault(command.vault_id, command.user_id)
            .await?;
        Ok(())
    }
}

/// Handler for [`LockVaultCommand`].
pub struct LockVaultHandler {
    service: VaultService,
}

impl LockVaultHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: VaultService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<LockVaultCommand> for LockVaultHandler {
    async fn handle(&self, command: LockVaultCommand) -> ApplicationResult<VaultDto> {
        let vault = self
            .service
            .lock_vault(command.vault_id, command.user_id)
            .await?;
        Ok(VaultDto::from(vault))
    }
}

/// Handler for [`UnlockVaultCommand`].
pub struct UnlockVaultHandler {
    service: VaultService,
}

impl UnlockVaultHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: VaultService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<UnlockVaultCommand> for UnlockVaultHandler {
    async fn handle(&self, command: UnlockVaultCommand) -> ApplicationResult<VaultDto> {
        let vault = self
            .service
            .unlock_vault(command.vault_id, command.user_id)
            .await?;
        Ok(VaultDto::from(vault))
    }
}
