//! Repo commands and their handlers.

use std::sync::Arc;

use async_trait::async_trait;

use symphony_domain::{Attributes, RepoId, UnitOfWorkProvider, UserProfileId, WorkspaceId};

use crate::dto::RepoDto;
use crate::services::RepoService;
use crate::ApplicationResult;

use super::{Command, CommandHandler};

/// Creates a repo inside an owned workspace.
#[derive(Debug, Clone)]
pub struct CreateRepoCommand {
    /// Parent workspace.
    pub workspace_id: WorkspaceId,
    /// Acting user; must own the workspace.
    pub user_id: UserProfileId,
    /// Display name, unique within the workspace.
    pub name: String,
    /// Local path; required to be non-blank.
    pub path: Option<String>,
    /// Optional remote url.
    pub remote_url: Option<String>,
    /// Initial metadata, if any.
    pub metadata: Option<Attributes>,
}

impl Command for CreateRepoCommand {
    type Output = RepoDto;
}

/// Partially updates a repo in an owned workspace.
#[derive(Debug, Clone)]
pub struct UpdateRepoCommand {
    /// Repo to update.
    pub repo_id: RepoId,
    /// Acting user; must own the parent workspace.
    pub user_id: UserProfileId,
    /// New name, when renaming.
    pub name: Option<String>,
    /// New path, when provided.
    pub path: Option<String>,
    /// New remote url, when provided.
    pub remote_url: Option<String>,
    /// Replacement metadata map, when provided.
    pub metadata: Option<Attributes>,
}

impl Command for UpdateRepoCommand {
    type Output = RepoDto;
}

/// Deletes a repo from an owned workspace.
#[derive(Debug, Clone)]
pub struct DeleteRepoCommand {
    /// Repo to delete.
    pub repo_id: RepoId,
    /// Acting user; must own the parent workspace.
    pub user_id: UserProfileId,
}

impl Command for DeleteRepoCommand {
    type Output = ();
}

/// Touches the repo's `last_synced` timestamp.
#[derive(Debug, Clone)]
pub struct SyncRepoCommand {
    /// Repo to sync.
    pub repo_id: RepoId,
    /// Acting user; must own the parent workspace.
    pub user_id: UserProfileId,
}

impl Command for SyncRepoCommand {
    type Output = RepoDto;
}

/// Handler for [`CreateRepoCommand`].
pub struct CreateRepoHandler {
    service: RepoService,
}

impl CreateRepoHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: RepoService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<CreateRepoCommand> for CreateRepoHandler {
    async fn handle(&self, command: CreateRepoCommand) -> ApplicationResult<RepoDto> {
        let repo = self
            .service
            .create_repo(
                command.workspace_id,
                command.user_id,
                &command.name,
                command.path,
                command.remote_url,
                command.metadata,
            )
            .await?;
        Ok(RepoDto::from(repo))
    }
}

/// Handler for [`UpdateRepoCommand`].
pub struct UpdateRepoHandler {
    service: RepoService,
}

impl UpdateRepoHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: RepoService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateRepoCommand> for UpdateRepoHandler {
    async fn handle(&self, command: UpdateRepoCommand) -> ApplicationResult<RepoDto> {
        let repo = self
            .service
            .update_repo(
                command.repo_id,
                command.user_id,
                command.name.as_deref(),
                command.path,
                command.remote_url,
                command.metadata,
            )
            .await?;
        Ok(RepoDto::from(repo))
    }
}

/// Handler for [`DeleteRepoCommand`].
pub struct DeleteRepoHandler {
    service: RepoService,
}

impl DeleteRepoHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: RepoService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteRepoCommand> for DeleteRepoHandler {
    async fn handle(&self, command: DeleteRepoCommand) -> ApplicationResult<()> {
        self.service
            .delete_repo(command.repo_id, command.user_id)
            .await?;
        Ok(())
    }
}

/// Handler for [`SyncRepoCommand`].
pub struct SyncRepoHandler {
    service: RepoService,
}

impl SyncRepoHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: RepoService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<SyncRepoCommand> for SyncRepoHandler {
    async fn handle(&self, command: SyncRepoCommand) -> ApplicationResult<RepoDto> {
        let repo = self
            .service
            .sync_with_remote(command.repo_id, command.user_id)
            .await?;
        Ok(RepoDto::from(repo))
    }
}
