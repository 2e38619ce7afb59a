//! Top-level wiring for the message surface.

use std::sync::Arc;

use tracing::info;

use symphony_domain::UnitOfWorkProvider;

use crate::commands::{
    CommandBus, CreateRepoCommand, CreateRepoHandler, CreateUserProfileCommand,
    CreateUserProfileHandler, CreateVaultCommand, CreateVaultHandler, CreateWorkspaceCommand,
    CreateWorkspaceHandler, DeleteRepoCommand, DeleteRepoHandler, DeleteUserProfileCommand,
    DeleteUserProfileHandler, DeleteVaultCommand, DeleteVaultHandler, DeleteWorkspaceCommand,
    DeleteWorkspaceHandler, LockVaultCommand, LockVaultHandler, SyncRepoCommand, SyncRepoHandler,
    UnlockVaultCommand, UnlockVaultHandler, UpdateRepoCommand, UpdateRepoHandler,
    UpdateUserProfileCommand, UpdateUserProfileHandler, UpdateVaultCommand, UpdateVaultHandler,
    UpdateWorkspaceCommand, UpdateWorkspaceHandler,
};
use crate::queries::{
    GetRepoHandler, GetRepoQuery, GetUserProfileByEmailHandler, GetUserProfileByEmailQuery,
    GetUserProfileByUsernameHandler, GetUserProfileByUsernameQuery, GetUserProfileHandler,
    GetUserProfileQuery, GetVaultHandler, GetVaultQuery, GetWorkspaceHandler, GetWorkspaceQuery,
    GetWorkspaceStatsHandler, GetWorkspaceStatsQuery, ListUserWorkspacesHandler,
    ListUserWorkspacesQuery, ListWorkspaceReposHandler, ListWorkspaceReposQuery,
    ListWorkspaceVaultsHandler, ListWorkspaceVaultsQuery, QueryBus,
};

/// Fully wired command and query buses over a single storage backend.
///
/// This is the composition root of the application layer: construct one of
/// these around a [`UnitOfWorkProvider`] and every supported command and
/// query is ready to dispatch.
pub struct ApplicationService {
    commands: CommandBus,
    queries: QueryBus,
}

impl ApplicationService {
    /// Wires every handler against the given provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        let mut commands = CommandBus::new();
        commands.register::<CreateUserProfileCommand>(Arc::new(CreateUserProfileHandler::new(
            provider.clone(),
        )));
        commands.register::<UpdateUserProfileCommand>(Arc::new(UpdateUserProfileHandler::new(
            provider.clone(),
        )));
        commands.register::<DeleteUserProfileCommand>(Arc::new(DeleteUserProfileHandler::new(
            provider.clone(),
        )));
        commands.register::<CreateWorkspaceCommand>(Arc::new(CreateWorkspaceHandler::new(
            provider.clone(),
        )));
        commands.register::<UpdateWorkspaceCommand>(Arc::new(UpdateWorkspaceHandler::new(
            provider.clone(),
        )));
        commands.register::<DeleteWorkspaceCommand>(Arc::new(DeleteWorkspaceHandler::new(
            provider.clone(),
        )));
        commands.register::<CreateRepoCommand>(Arc::new(CreateRepoHandler::new(provider.clone())));
        commands.register::<UpdateRepoCommand>(Arc::new(UpdateRepoHandler::new(provider.clone())));
        commands.register::<DeleteRepoCommand>(Arc::new(DeleteRepoHandler::new(provider.clone())));
        commands.register::<SyncRepoCommand>(Arc::new(SyncRepoHandler::new(provider.clone())));
        commands.register::<CreateVaultCommand>(Arc::new(CreateVaultHandler::new(provider.clone())));
        commands.register::<UpdateVaultCommand>(Arc::new(UpdateVaultHandler::new(provider.clone())));
        commands.register::<DeleteVaultCommand>(Arc::new(DeleteVaultHandler::new(provider.clone())));
        commands.register::<LockVaultCommand>(Arc::new(LockVaultHandler::new(provider.clone())));
        commands.register::<UnlockVaultCommand>(Arc::new(UnlockVaultHandler::new(provider.clone())));

        let mut queries = QueryBus::new();
        queries.register::<GetUserProfileQuery>(Arc::new(GetUserProfileHandler::new(
            provider.clone(),
        )));
        queries.register::<GetUserProfileByUsernameQuery>(Arc::new(
            GetUserProfileByUsernameHandler::new(provider.clone()),
        ));
        queries.register::<GetUserProfileByEmailQuery>(Arc::new(GetUserProfileByEmailHandler::new(
            provider.clone(),
        )));
        queries.register::<GetWorkspaceQuery>(Arc::new(GetWorkspaceHandler::new(provider.clone())));
        queries.register::<ListUserWorkspacesQuery>(Arc::new(ListUserWorkspacesHandler::new(
            provider.clone(),
        )));
        queries.register::<GetWorkspaceStatsQuery>(Arc::new(GetWorkspaceStatsHandler::new(
            provider.clone(),
        )));
        queries.register::<GetRepoQuery>(Arc::new(GetRepoHandler::new(provider.clone())));
        queries.register::<ListWorkspaceReposQuery>(Arc::new(ListWorkspaceReposHandler::new(
            provider.clone(),
        )));
        queries.register::<GetVaultQuery>(Arc::new(GetVaultHandler::new(provider.clone())));
        queries.register::<ListWorkspaceVaultsQuery>(Arc::new(ListWorkspaceVaultsHandler::new(
            provider,
        )));

        info!("application service wired");
        Self { commands, queries }
    }

    /// The command bus.
    pub fn commands(&self) -> &CommandBus {
        &self.commands
    }

    /// The query bus.
    pub fn queries(&self) -> &QueryBus {
        &self.queries
    }
}
