//! Application layer for the Symphony management core.
//!
//! Sits between callers and the domain: services orchestrate unit-of-work
//! transactions around domain entities, while the command and query buses
//! offer a message-style surface that returns serializable DTOs instead of
//! live entities.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;
pub mod dto;
pub mod queries;
pub mod services;

mod application_service;

pub use application_service::ApplicationService;
pub use commands::{Command, CommandBus, CommandHandler};
pub use queries::{Query, QueryBus, QueryHandler};
pub use services::{AccessScope, Limits};

use symphony_domain::DomainError;

/// Errors surfaced by the application layer.
///
/// Domain failures pass through untouched so callers keep access to
/// [`DomainError::error_code`] and [`DomainError::http_status`]; the only
/// failure the application layer adds on its own is dispatching a message
/// nobody registered a handler for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationError {
    /// A domain rule or storage operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The bus received a command or query with no registered handler.
    #[error("no handler registered for {0}")]
    HandlerNotRegistered(&'static str),
}

/// Convenience alias for application-layer results.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
