//! Workspace queries and their handlers.

use std::sync::Arc;

use async_trait::async_trait;

use symphony_domain::{UnitOfWorkProvider, UserProfileId, WorkspaceId, WorkspaceType};

use crate::dto::{WorkspaceDto, WorkspaceStatsDto};
use crate::services::{AccessScope, WorkspaceService};
use crate::ApplicationResult;

use super::{Query, QueryHandler};

/// Fetches a workspace under an access scope.
#[derive(Debug, Clone)]
pub struct GetWorkspaceQuery {
    /// Workspace to fetch.
    pub workspace_id: WorkspaceId,
    /// Who the read is performed as.
    pub scope: AccessScope,
}

impl Query for GetWorkspaceQuery {
    type Output = WorkspaceDto;
}

/// Lists a user's workspaces, optionally filtered by type.
#[derive(Debug, Clone)]
pub struct ListUserWorkspacesQuery {
    /// Owning user.
    pub user_id: UserProfileId,
    /// Restrict to a single type, when set.
    pub workspace_type: Option<WorkspaceType>,
}

impl Query for ListUserWorkspacesQuery {
    type Output = Vec<WorkspaceDto>;
}

/// Counts the resources inside a workspace.
#[derive(Debug, Clone)]
pub struct GetWorkspaceStatsQuery {
    /// Workspace to count.
    pub workspace_id: WorkspaceId,
}

impl Query for GetWorkspaceStatsQuery {
    type Output = WorkspaceStatsDto;
}

/// Handler for [`GetWorkspaceQuery`].
pub struct GetWorkspaceHandler {
    service: WorkspaceService,
}

impl GetWorkspaceHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: WorkspaceService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<GetWorkspaceQuery> for GetWorkspaceHandler {
    async fn handle(&self, query: GetWorkspaceQuery) -> ApplicationResult<WorkspaceDto> {
        let workspace = self
            .service
            .get_workspace(query.workspace_id, query.scope)
            .await?;
        Ok(WorkspaceDto::from(workspace))
    }
}

/// Handler for [`ListUserWorkspacesQuery`].
pub struct ListUserWorkspacesHandler {
    service: WorkspaceService,
}

impl ListUserWorkspacesHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: WorkspaceService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<ListUserWorkspacesQuery> for ListUserWorkspacesHandler {
    async fn handle(&self, query: ListUserWorkspacesQuery) -> ApplicationResult<Vec<WorkspaceDto>> {
        let workspaces = self
            .service
            .list_user_workspaces(query.user_id, query.workspace_type)
            .await?;
        Ok(workspaces.into_iter().map(WorkspaceDto::from).collect())
    }
}

/// Handler for [`GetWorkspaceStatsQuery`].
pub struct GetWorkspaceStatsHandler {
    service: WorkspaceService,
}

impl GetWorkspaceStatsHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: WorkspaceService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<GetWorkspaceStatsQuery> for GetWorkspaceStatsHandler {
    async fn handle(&self, query: GetWorkspaceStatsQuery) -> ApplicationResult<WorkspaceStatsDto> {
        let counts = self.service.get_workspace_stats(query.workspace_id).await?;
        Ok(WorkspaceStatsDto::from_counts(query.workspace_id, counts))
    }
}
