//! Shared committed state and the store handle.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use symphony_domain::{
    repo::Repo, unit_of_work::UnitOfWork, unit_of_work::UnitOfWorkProvider,
    user_profile::UserProfile, vault::Vault, workspace::Workspace, DomainResult, UserProfileId,
    WorkspaceId,
};
use uuid::Uuid;

use super::MemoryUnitOfWork;

/// The four aggregate tables, keyed by id.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoreState {
    pub(crate) user_profiles: HashMap<Uuid, UserProfile>,
    pub(crate) workspaces: HashMap<Uuid, Workspace>,
    pub(crate) repos: HashMap<Uuid, Repo>,
    pub(crate) vaults: HashMap<Uuid, Vault>,
}

impl StoreState {
    /// Remove a user profile and cascade to everything it owns.
    pub(crate) fn remove_user_profile(&mut self, id: UserProfileId) {
        if self.user_profiles.remove(id.as_uuid()).is_some() {
            let owned: Vec<WorkspaceId> = self
                .workspaces
                .values()
                .filter(|w| w.user_profile_id == id)
                .map(|w| w.id)
                .collect();
            for workspace_id in owned {
                self.remove_workspace(workspace_id);
            }
        }
    }

    /// Remove a workspace and cascade to its repos and vaults.
    pub(crate) fn remove_workspace(&mut self, id: WorkspaceId) {
        if self.workspaces.remove(id.as_uuid()).is_some() {
            self.repos.retain(|_, r| r.workspace_id != id);
            self.vaults.retain(|_, v| v.workspace_id != id);
        }
    }
}

/// Handle to an in-memory store.
///
/// Cloning the handle shares the underlying state, so several services (or
/// an application service with both buses) can run against one store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn state(&self) -> Arc<RwLock<StoreState>> {
        self.state.clone()
    }
}

#[async_trait]
impl UnitOfWorkProvider for MemoryStore {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        Ok(Box::new(MemoryUnitOfWork::begin(self.state())))
    }
}
