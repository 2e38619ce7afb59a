//! Workspace commands and their handlers.

use std::sync::Arc;

use async_trait::async_trait;

use symphony_domain::{
    Attributes, SharedResources, UnitOfWorkProvider, UserProfileId, WorkspaceId, WorkspaceType,
};

use crate::dto::WorkspaceDto;
use crate::services::WorkspaceService;
use crate::ApplicationResult;

use super::{Command, CommandHandler};

/// Creates a workspace for a user.
#[derive(Debug, Clone)]
pub struct CreateWorkspaceCommand {
    /// Owning user.
    pub user_id: UserProfileId,
    /// Display name.
    pub name: String,
    /// Workspace category.
    pub workspace_type: WorkspaceType,
    /// Optional description.
    pub description: Option<String>,
    /// Initial settings, if any.
    pub settings: Option<Attributes>,
}

impl Command for CreateWorkspaceCommand {
    type Output = WorkspaceDto;
}

/// Partially updates an owned workspace.
#[derive(Debug, Clone)]
pub struct UpdateWorkspaceCommand {
    /// Workspace to update.
    pub workspace_id: WorkspaceId,
    /// Acting user; must own the workspace.
    pub user_id: UserProfileId,
    /// New name, when renaming.
    pub name: Option<String>,
    /// New description, when provided.
    pub description: Option<String>,
    /// Replacement settings, when provided.
    pub settings: Option<Attributes>,
    /// Replacement shared-resource map, when provided.
    pub shared_resources: Option<SharedResources>,
}

impl Command for UpdateWorkspaceCommand {
    type Output = WorkspaceDto;
}

/// Deletes an owned workspace and its resources.
#[derive(Debug, Clone)]
pub struct DeleteWorkspaceCommand {
    /// Workspace to delete.
    pub workspace_id: WorkspaceId,
    /// Acting user; must own the workspace.
    pub user_id: UserProfileId,
}

impl Command for DeleteWorkspaceCommand {
    type Output = ();
}

/// Handler for [`CreateWorkspaceCommand`].
pub struct CreateWorkspaceHandler {
    service: WorkspaceService,
}

impl CreateWorkspaceHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: WorkspaceService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<CreateWorkspaceCommand> for CreateWorkspaceHandler {
    async fn handle(&self, command: CreateWorkspaceCommand) -> ApplicationResult<WorkspaceDto> {
        let workspace = self
            .service
            .create_workspace(
                command.user_id,
                &command.name,
                command.workspace_type,
                command.description,
                command.settings,
            )
            .await?;
        Ok(WorkspaceDto::from(workspace))
    }
}

/// Handler for [`UpdateWorkspaceCommand`].
pub struct UpdateWorkspaceHandler {
    service: WorkspaceService,
}

impl UpdateWorkspaceHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: WorkspaceService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateWorkspaceCommand> for UpdateWorkspaceHandler {
    async fn handle(&self, command: UpdateWorkspaceCommand) -> ApplicationResult<WorkspaceDto> {
        let workspace = self
            .service
            .update_workspace(
                command.workspace_id,
                command.user_id,
                command.name.as_deref(),
                command.description,
                command.settings,
                command.shared_resources,
            )
            .await?;
        Ok(WorkspaceDto::from(workspace))
    }
}

/// Handler for [`DeleteWorkspaceCommand`].
pub struct DeleteWorkspaceHandler {
    service: WorkspaceService,
}

impl DeleteWorkspaceHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: WorkspaceService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteWorkspaceCommand> for DeleteWorkspaceHandler {
    async fn handle(&self, command: DeleteWorkspaceCommand) -> ApplicationResult<()> {
        self.service
            .delete_workspace(command.workspace_id, command.user_id)
            .await?;
        Ok(())
    }
}
