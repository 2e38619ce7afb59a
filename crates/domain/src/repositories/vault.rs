//! Vault repository port.

use crate::errors::DomainResult;
use crate::identifiers::{VaultId, WorkspaceId};
use crate::vault::Vault;
use async_trait::async_trait;

/// Repository port for the Vault aggregate.
#[async_trait]
pub trait VaultRepository: Send + Sync {
    /// Retrieve a vault by id.
    async fn get(&self, id: VaultId) -> DomainResult<Option<Vault>>;

    /// Save a vault (create or overwrite, keyed by id).
    async fn save(&self, vault: &Vault) -> DomainResult<Vault>;

    /// Delete a vault by id. No-op if the id is absent.
    async fn delete(&self, id: VaultId) -> DomainResult<()>;

    /// Check whether a vault exists.
    async fn exists(&self, id: VaultId) -> DomainResult<bool>;

    /// Get all vaults in a workspace.
    async fn get_by_workspace(&self, workspace_id: WorkspaceId) -> DomainResult<Vec<Vault>>;

    /// Find a vault by name within a workspace.
    async fn get_by_name(
        &self,
        workspace_id: WorkspaceId,
        name: &str,
    ) -> DomainResult<Option<Vault>>;

    /// Check whether a vault name is taken within a workspace, optionally
    /// excluding one vault (for updates).
    async fn name_exists_in_workspace(
        &self,
        workspace_id: WorkspaceId,
        name: &str,
        exclude: Option<VaultId>,
    ) -> DomainResult<bool>;

    /// Count the vaults in a workspace.
    async fn count_by_workspace(&self, workspace_id: WorkspaceId) -> DomainResult<usize>;
}
