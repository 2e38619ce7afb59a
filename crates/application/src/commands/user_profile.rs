//! User profile commands and their handlers.

use std::sync::Arc;

use async_trait::async_trait;

use symphony_domain::{Attributes, UnitOfWorkProvider, UserProfileId};

use crate::dto::UserProfileDto;
use crate::services::UserProfileService;
use crate::ApplicationResult;

use super::{Command, CommandHandler};

/// Creates a new user profile.
#[derive(Debug, Clone)]
pub struct CreateUserProfileCommand {
    /// Requested username.
    pub username: String,
    /// Requested email.
    pub email: String,
    /// Initial preferences, if any.
    pub preferences: Option<Attributes>,
}

impl Command for CreateUserProfileCommand {
    type Output = UserProfileDto;
}

/// Partially updates an existing profile.
#[derive(Debug, Clone)]
pub struct UpdateUserProfileCommand {
    /// Profile to update.
    pub user_id: UserProfileId,
    /// New username, when changing it.
    pub username: Option<String>,
    /// New email, when changing it.
    pub email: Option<String>,
    /// Replacement preferences, when provided.
    pub preferences: Option<Attributes>,
}

impl Command for UpdateUserProfileCommand {
    type Output = UserProfileDto;
}

/// Deletes a profile and everything it owns.
#[derive(Debug, Clone)]
pub struct DeleteUserProfileCommand {
    /// Profile to delete.
    pub user_id: UserProfileId,
}

impl Command for DeleteUserProfileCommand {
    type Output = ();
}

/// Handler for [`CreateUserProfileCommand`].
pub struct CreateUserProfileHandler {
    service: UserProfileService,
}

impl CreateUserProfileHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: UserProfileService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<CreateUserProfileCommand> for CreateUserProfileHandler {
    async fn handle(&self, command: CreateUserProfileCommand) -> ApplicationResult<UserProfileDto> {
        let profile = self
            .service
            .create_user_profile(&command.username, &command.email, command.preferences)
            .await?;
        Ok(UserProfileDto::from(profile))
    }
}

/// Handler for [`UpdateUserProfileCommand`].
pub struct UpdateUserProfileHandler {
    service: UserProfileService,
}

impl UpdateUserProfileHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: UserProfileService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateUserProfileCommand> for UpdateUserProfileHandler {
    async fn handle(&self, command: UpdateUserProfileCommand) -> ApplicationResult<UserProfileDto> {
        let profile = self
            .service
            .update_user_profile(
                command.user_id,
                command.username.as_deref(),
                command.email.as_deref(),
                command.preferences,
            )
            .await?;
        Ok(UserProfileDto::from(profile))
    }
}

/// Handler for [`DeleteUserProfileCommand`].
pub struct DeleteUserProfileHandler {
    service: UserProfileService,
}

impl DeleteUserProfileHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: UserProfileService::new(provider),
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteUserProfileCommand> for DeleteUserProfileHandler {
    async fn handle(&self, command: DeleteUserProfileCommand) -> ApplicationResult<()> {
        self.service.delete_user_profile(command.user_id).await?;
        Ok(())
    }
}
