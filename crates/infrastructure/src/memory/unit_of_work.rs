//! Snapshot-based unit of work over the in-memory store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use symphony_domain::{
    unit_of_work::UnitOfWork, DomainResult, RepoRepository, UserProfileRepository, VaultRepository,
    WorkspaceRepository,
};
use tracing::debug;

use super::repositories::{
    MemoryRepoRepository, MemoryUserProfileRepository, MemoryVaultRepository,
    MemoryWorkspaceRepository,
};
use super::StoreState;

/// A unit of work whose repositories operate on a private snapshot of the
/// store.
///
/// `commit` publishes the snapshot back to the shared state; dropping the
/// unit of work (or calling `rollback`) discards it.
pub struct MemoryUnitOfWork {
    shared: Arc<RwLock<StoreState>>,
    working: Arc<RwLock<StoreState>>,
    user_profiles: MemoryUserProfileRepository,
    workspaces: MemoryWorkspaceRepository,
    repos: MemoryRepoRepository,
    vaults: MemoryVaultRepository,
}

impl MemoryUnitOfWork {
    pub(crate) fn begin(shared: Arc<RwLock<StoreState>>) -> Self {
        let snapshot = shared.read().clone();
        let working = Arc::new(RwLock::new(snapshot));
        Self {
            user_profiles: MemoryUserProfileRepository::new(working.clone()),
            workspaces: MemoryWorkspaceRepository::new(working.clone()),
            repos: MemoryRepoRepository::new(working.clone()),
            vaults: MemoryVaultRepository::new(working.clone()),
            shared,
            working,
        }
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    fn user_profiles(&self) -> &dyn UserProfileRepository {
        &self.user_profiles
    }

    fn workspaces(&self) -> &dyn WorkspaceRepository {
        &self.workspaces
    }

    fn repos(&self) -> &dyn RepoRepository {
        &self.repos
    }

    fn vaults(&self) -> &dyn VaultRepository {
        &self.vaults
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let working = self.working.read().clone();
        *self.shared.write() = working;
        debug!("memory unit of work committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        // The working snapshot is dropped with self; the shared state was
        // never touched.
        debug!("memory unit of work rolled back");
        Ok(())
    }
}
