//! Command side of the message surface.
//!
//! Commands are plain structs describing a state change; each command type
//! maps to exactly one handler. The bus is keyed by [`TypeId`], so dispatch
//! of an unregistered command fails loudly instead of being silently
//! dropped.

mod repo;
mod user_profile;
mod vault;
mod workspace;

pub use repo::{
    CreateRepoCommand, CreateRepoHandler, DeleteRepoCommand, DeleteRepoHandler, SyncRepoCommand,
    SyncRepoHandler, UpdateRepoCommand, UpdateRepoHandler,
};
pub use user_profile::{
    CreateUserProfileCommand, CreateUserProfileHandler, DeleteUserProfileCommand,
    DeleteUserProfileHandler, UpdateUserProfileCommand, UpdateUserProfileHandler,
};
pub use vault::{
    CreateVaultCommand, CreateVaultHandler, DeleteVaultCommand, DeleteVaultHandler,
    LockVaultCommand, LockVaultHandler, UnlockVaultCommand, UnlockVaultHandler,
    UpdateVaultCommand, UpdateVaultHandler,
};
pub use workspace::{
    CreateWorkspaceCommand, CreateWorkspaceHandler, DeleteWorkspaceCommand,
    DeleteWorkspaceHandler, UpdateWorkspaceCommand, UpdateWorkspaceHandler,
};

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{ApplicationError, ApplicationResult};

/// A state-changing request with a typed result.
pub trait Command: Send + 'static {
    /// What the handler produces on success.
    type Output: Send + 'static;
}

/// Handles a single command type.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    /// Executes the command.
    async fn handle(&self, command: C) -> ApplicationResult<C::Output>;
}

/// Type-indexed command dispatcher.
#[derive(Default)]
pub struct CommandBus {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl CommandBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for `C`, replacing any previous one.
    pub fn register<C: Command>(&mut self, handler: Arc<dyn CommandHandler<C>>) {
        debug!(command = std::any::type_name::<C>(), "command handler registered");
        self.handlers.insert(TypeId::of::<C>(), Box::new(handler));
    }

    /// Dispatches a command to its registered handler.
    pub async fn execute<C: Command>(&self, command: C) -> ApplicationResult<C::Output> {
        let handler = self
            .handlers
            .get(&TypeId::of::<C>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn CommandHandler<C>>>())
            .ok_or(ApplicationError::HandlerNotRegistered(
                std::any::type_name::<C>(),
            ))?;
        handler.handle(command).await
    }
}
