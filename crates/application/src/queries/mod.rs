//! Query side of the message surface.
//!
//! Queries never mutate state; handlers open a unit of work for a consistent
//! read and drop it without committing. Dispatch mirrors the command bus:
//! type-indexed, failing loudly on unregistered query types.

mod repo;
mod user_profile;
mod vault;
mod workspace;

pub use repo::{GetRepoHandler, GetRepoQuery, ListWorkspaceReposHandler, ListWorkspaceReposQuery};
pub use user_profile::{
    GetUserProfileByEmailHandler, GetUserProfileByEmailQuery, GetUserProfileByUsernameHandler,
    GetUserProfileByUsernameQuery, GetUserProfileHandler, GetUserProfileQuery,
};
pub use vault::{
    GetVaultHandler, GetVaultQuery, ListWorkspaceVaultsHandler, ListWorkspaceVaultsQuery,
};
pub use workspace::{
    GetWorkspaceHandler, GetWorkspaceQuery, GetWorkspaceStatsHandler, GetWorkspaceStatsQuery,
    ListUserWorkspacesHandler, ListUserWorkspacesQuery,
};

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{ApplicationError, ApplicationResult};

/// A read-only request with a typed result.
pub trait Query: Send + 'static {
    /// What the handler produces on success.
    type Output: Send + 'static;
}

/// Handles a single query type.
#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    /// Executes the query.
    async fn handle(&self, query: Q) -> ApplicationResult<Q::Output>;
}

/// Type-indexed query dispatcher.
#[derive(Default)]
pub struct QueryBus {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl QueryBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for `Q`, replacing any previous one.
    pub fn register<Q: Query>(&mut self, handler: Arc<dyn QueryHandler<Q>>) {
        debug!(query = std::any::type_name::<Q>(), "query handler registered");
        self.handlers.insert(TypeId::of::<Q>(), Box::new(handler));
    }

    /// Dispatches a query to its registered handler.
    pub async fn execute<Q: Query>(&self, query: Q) -> ApplicationResult<Q::Output> {
        let handler = self
            .handlers
            .get(&TypeId::of::<Q>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn QueryHandler<Q>>>())
            .ok_or(ApplicationError::HandlerNotRegistered(
                std::any::type_name::<Q>(),
            ))?;
        handler.handle(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountWords(&'static str);
    impl Query for CountWords {
        type Output = usize;
    }

    struct CountWordsHandler;
    #[async_trait]
    impl QueryHandler<CountWords> for CountWordsHandler {
        async fn handle(&self, query: CountWords) -> ApplicationResult<usize> {
            Ok(query.0.split_whitespace().count())
        }
    }

    #[tokio::test]
    async fn dispatches_to_registered_handler() {
        let mut bus = QueryBus::new();
        bus.register::<CountWords>(Arc::new(CountWordsHandler));
        assert_eq!(bus.execute(CountWords("one two three")).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn unregistered_query_fails_loudly() {
        let bus = QueryBus::new();
        let err = bus.execute(CountWords("hello")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::HandlerNotRegistered(_)));
    }
}
