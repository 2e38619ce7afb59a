//! Vault queries and their handlers.

use std::sync::Arc;

use async_trait::async_trait;

use symphony_domain::{UnitOfWorkProvider, VaultId, WorkspaceId};

use crate::dto::VaultDto;
use crate::services::{AccessScope, VaultService};
use crate::ApplicationResult;

use super::{Query, QueryHandler};

/// Fetches a vault under an access scope.
#[derive(Debug, Clone)]
pub struct GetVaultQuery {
    /// Vault to fetch.
    pub vault_id: VaultId,
    /// Who the read is performed as.
    pub scope: AccessScope,
}

impl Query for GetVaultQuery {
    type Output = VaultDto;
}

/// Lists the vaults in a workspace under an access scope.
#[derive(Debug, Clone)]
pub struct ListWorkspaceVaultsQuery {
    /// Workspace to list.
    pub workspace_id: WorkspaceId,
    /// Who the read is performed as.
    pub scope: AccessScope,
}

impl Query for ListWorkspaceVaultsQuery {
    type Output = Vec<VaultDto>;
}

/// Handler for [`GetVaultQuery`].
pub struct GetVaultHandler {
    service: VaultService,
}

impl GetVaultHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: VaultService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<GetVaultQuery> for GetVaultHandler {
    async fn handle(&self, query: GetVaultQuery) -> ApplicationResult<VaultDto> {
        let vault = self.service.get_vault(query.vault_id, query.scope).await?;
        Ok(VaultDto::from(vault))
    }
}

/// Handler for [`ListWorkspaceVaultsQuery`].
pub struct ListWorkspaceVaultsHandler {
    service: VaultService,
}

impl ListWorkspaceVaultsHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: VaultService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<ListWorkspaceVaultsQuery> for ListWorkspaceVaultsHandler {
    async fn handle(&self, query: ListWorkspaceVaultsQuery) -> ApplicationResult<Vec<VaultDto>> {
        let vaults = self
            .service
            .list_workspace_vaults(query.workspace_id, query.scope)
            .await?;
        Ok(vaults.into_iter().map(VaultDto::from).collect())
    }
}
