//! Unit of Work: the transaction boundary of the domain.
//!
//! A unit of work bundles the four repositories over one underlying
//! transaction. `commit` and `rollback` consume the unit of work, so using a
//! repository after the scope is closed is a compile error rather than a
//! runtime one. Dropping an uncommitted unit of work discards its writes.
//!
//! Nesting is not supported: every domain-service method opens exactly one
//! top-level unit of work through a [`UnitOfWorkProvider`].

use crate::errors::DomainResult;
use crate::repositories::{
    RepoRepository, UserProfileRepository, VaultRepository, WorkspaceRepository,
};
use async_trait::async_trait;

/// A transactional scope over the four aggregate repositories.
///
/// The repositories returned by the accessors are bound to this scope's
/// transaction; writes through them become visible to other scopes only
/// after [`UnitOfWork::commit`].
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// The user-profile repository bound to this transaction.
    fn user_profiles(&self) -> &dyn UserProfileRepository;

    /// The workspace repository bound to this transaction.
    fn workspaces(&self) -> &dyn WorkspaceRepository;

    /// The repo repository bound to this transaction.
    fn repos(&self) -> &dyn RepoRepository;

    /// The vault repository bound to this transaction.
    fn vaults(&self) -> &dyn VaultRepository;

    /// Persist all changes made through the bound repositories.
    async fn commit(self: Box<Self>) -> DomainResult<()>;

    /// Discard all changes made through the bound repositories.
    async fn rollback(self: Box<Self>) -> DomainResult<()>;
}

/// Opens fresh unit-of-work scopes.
///
/// Domain services hold a provider and open one scope per method call, so
/// every operation is independently transactional.
#[async_trait]
pub trait UnitOfWorkProvider: Send + Sync {
    /// Begin a new top-level unit of work.
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;
}
