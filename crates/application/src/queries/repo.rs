//! Repo queries and their handlers.

use std::sync::Arc;

use async_trait::async_trait;

use symphony_domain::{RepoId, UnitOfWorkProvider, WorkspaceId};

use crate::dto::RepoDto;
use crate::services::{AccessScope, RepoService};
use crate::ApplicationResult;

use super::{Query, QueryHandler};

/// Fetches a repo under an access scope.
#[derive(Debug, Clone)]
pub struct GetRepoQuery {
    /// Repo to fetch.
    pub repo_id: RepoId,
    /// Who the read is performed as.
    pub scope: AccessScope,
}

impl Query for GetRepoQuery {
    type Output = RepoDto;
}

/// Lists the repos in a workspace under an access scope.
#[derive(Debug, Clone)]
pub struct ListWorkspaceReposQuery {
    /// Workspace to list.
    pub workspace_id: WorkspaceId,
    /// Who the read is performed as.
    pub scope: AccessScope,
}

impl Query for ListWorkspaceReposQuery {
    type Output = Vec<RepoDto>;
}

/// Handler for [`GetRepoQuery`].
pub struct GetRepoHandler {
    service: RepoService,
}

impl GetRepoHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: RepoService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<GetRepoQuery> for GetRepoHandler {
    async fn handle(&self, query: GetRepoQuery) -> ApplicationResult<RepoDto> {
        let repo = self.service.get_repo(query.repo_id, query.scope).await?;
        Ok(RepoDto::from(repo))
    }
}

/// Handler for [`ListWorkspaceReposQuery`].
pub struct ListWorkspaceReposHandler {
    service: RepoService,
}

impl ListWorkspaceReposHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: RepoService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<ListWorkspaceReposQuery> for ListWorkspaceReposHandler {
    async fn handle(&self, query: ListWorkspaceReposQuery) -> ApplicationResult<Vec<RepoDto>> {
        let repos = self
            .service
            .list_workspace_repos(query.workspace_id, query.scope)
            .await?;
        Ok(repos.into_iter().map(RepoDto::from).collect())
    }
}
