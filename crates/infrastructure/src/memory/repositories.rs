//! Repository implementations over the working snapshot.
//!
//! Each repository holds a handle to the unit of work's private snapshot;
//! nothing here touches the shared store directly. Listings are sorted by
//! creation time (then id) so results are deterministic.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use symphony_domain::{
    repo::Repo, user_profile::UserProfile, vault::Vault, workspace::Workspace,
    workspace::WorkspaceType, DomainResult, RepoId, RepoRepository, ResourceCounts, UserProfileId,
    UserProfileRepository, VaultId, VaultRepository, WorkspaceId, WorkspaceRepository,
};

use super::StoreState;

pub(crate) struct MemoryUserProfileRepository {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryUserProfileRepository {
    pub(crate) fn new(state: Arc<RwLock<StoreState>>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl UserProfileRepository for MemoryUserProfileRepository {
    async fn get(&self, id: UserProfileId) -> DomainResult<Option<UserProfile>> {
        Ok(self.state.read().user_profiles.get(id.as_uuid()).cloned())
    }

    async fn save(&self, profile: &UserProfile) -> DomainResult<UserProfile> {
        self.state
            .write()
            .user_profiles
            .insert(profile.id.into_uuid(), profile.clone());
        Ok(profile.clone())
    }

    async fn delete(&self, id: UserProfileId) -> DomainResult<()> {
        self.state.write().remove_user_profile(id);
        Ok(())
    }

    async fn exists(&self, id: UserProfileId) -> DomainResult<bool> {
        Ok(self.state.read().user_profiles.contains_key(id.as_uuid()))
    }

    async fn get_by_username(&self, username: &str) -> DomainResult<Option<UserProfile>> {
        Ok(self
            .state
            .read()
            .user_profiles
            .values()
            .find(|p| p.username == username)
            .cloned())
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<UserProfile>> {
        Ok(self
            .state
            .read()
            .user_profiles
            .values()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn username_exists(
        &self,
        username: &str,
        exclude: Option<UserProfileId>,
    ) -> DomainResult<bool> {
        Ok(self
            .state
            .read()
            .user_profiles
            .values()
            .any(|p| p.username == username && Some(p.id) != exclude))
    }

    async fn email_exists(
        &self,
        email: &str,
        exclude: Option<UserProfileId>,
    ) -> DomainResult<bool> {
        Ok(self
            .state
            .read()
            .user_profiles
            .values()
            .any(|p| p.email == email && Some(p.id) != exclude))
    }

    async fn count_workspaces(&self, user_id: UserProfileId) -> DomainResult<usize> {
        Ok(self
            .state
            .read()
            .workspaces
            .values()
            .filter(|w| w.user_profile_id == user_id)
            .count())
    }
}

pub(crate) struct MemoryWorkspaceRepository {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryWorkspaceRepository {
    pub(crate) fn new(state: Arc<RwLock<StoreState>>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl WorkspaceRepository for MemoryWorkspaceRepository {
    async fn get(&self, id: WorkspaceId) -> DomainResult<Option<Workspace>> {
        Ok(self.state.read().workspaces.get(id.as_uuid()).cloned())
    }

    async fn save(&self, workspace: &Workspace) -> DomainResult<Workspace> {
        self.state
            .write()
            .workspaces
            .insert(workspace.id.into_uuid(), workspace.clone());
        Ok(workspace.clone())
    }

    async fn delete(&self, id: WorkspaceId) -> DomainResult<()> {
        self.state.write().remove_workspace(id);
        Ok(())
    }

    async fn exists(&self, id: WorkspaceId) -> DomainResult<bool> {
        Ok(self.state.read().workspaces.contains_key(id.as_uuid()))
    }

    async fn get_by_user(&self, user_id: UserProfileId) -> DomainResult<Vec<Workspace>> {
        let mut workspaces: Vec<Workspace> = self
            .state
            .read()
            .workspaces
            .values()
            .filter(|w| w.user_profile_id == user_id)
            .cloned()
            .collect();
        workspaces.sort_by_key(|w| (w.created_at, w.id.into_uuid()));
        Ok(workspaces)
    }

    async fn get_by_user_and_type(
        &self,
        user_id: UserProfileId,
        workspace_type: WorkspaceType,
    ) -> DomainResult<Vec<Workspace>> {
        let mut workspaces: Vec<Workspace> = self
            .state
            .read()
            .workspaces
            .values()
            .filter(|w| w.user_profile_id == user_id && w.workspace_type == workspace_type)
            .cloned()
            .collect();
        workspaces.sort_by_key(|w| (w.created_at, w.id.into_uuid()));
        Ok(workspaces)
    }

    async fn count_resources(&self, workspace_id: WorkspaceId) -> DomainResult<ResourceCounts> {
        let state = self.state.read();
        Ok(ResourceCounts {
            repos: state
                .repos
                .values()
                .filter(|r| r.workspace_id == workspace_id)
                .count(),
            vaults: state
                .vaults
                .values()
                .filter(|v| v.workspace_id == workspace_id)
                .count(),
        })
    }

    async fn has_active_resources(&self, workspace_id: WorkspaceId) -> DomainResult<bool> {
        let counts = self.count_resources(workspace_id).await?;
        Ok(counts.total() > 0)
    }
}

pub(crate) struct MemoryRepoRepository {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryRepoRepository {
    pub(crate) fn new(state: Arc<RwLock<StoreState>>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl RepoRepository for MemoryRepoRepository {
    async fn get(&self, id: RepoId) -> DomainResult<Option<Repo>> {
        Ok(self.state.read().repos.get(id.as_uuid()).cloned())
    }

    async fn save(&self, repo: &Repo) -> DomainResult<Repo> {
        self.state
            .write()
            .repos
            .insert(repo.id.into_uuid(), repo.clone());
        Ok(repo.clone())
    }

    async fn delete(&self, id: RepoId) -> DomainResult<()> {
        self.state.write().repos.remove(id.as_uuid());
        Ok(())
    }

    async fn exists(&self, id: RepoId) -> DomainResult<bool> {
        Ok(self.state.read().repos.contains_key(id.as_uuid()))
    }

    async fn get_by_workspace(&self, workspace_id: WorkspaceId) -> DomainResult<Vec<Repo>> {
        let mut repos: Vec<Repo> = self
            .state
            .read()
            .repos
            .values()
            .filter(|r| r.workspace_id == workspace_id)
            .cloned()
            .collect();
        repos.sort_by_key(|r| (r.created_at, r.id.into_uuid()));
        Ok(repos)
    }

    async fn get_by_name(
        &self,
        workspace_id: WorkspaceId,
        name: &str,
    ) -> DomainResult<Option<Repo>> {
        Ok(self
            .state
            .read()
            .repos
            .values()
            .find(|r| r.workspace_id == workspace_id && r.name == name)
            .cloned())
    }

    async fn name_exists_in_workspace(
        &self,
        workspace_id: WorkspaceId,
        name: &str,
        exclude: Option<RepoId>,
    ) -> DomainResult<bool> {
        Ok(self
            .state
            .read()
            .repos
            .values()
            .any(|r| r.workspace_id == workspace_id && r.name == name && Some(r.id) != exclude))
    }

    async fn count_by_workspace(&self, workspace_id: WorkspaceId) -> DomainResult<usize> {
        Ok(self
            .state
            .read()
            .repos
            .values()
            .filter(|r| r.workspace_id == workspace_id)
            .count())
    }
}

pub(crate) struct MemoryVaultRepository {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryVaultRepository {
    pub(crate) fn new(state: Arc<RwLock<StoreState>>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl VaultRepository for MemoryVaultRepository {
    async fn get(&self, id: VaultId) -> DomainResult<Option<Vault>> {
        Ok(self.state.read().vaults.get(id.as_uuid()).cloned())
    }

    async fn save(&self, vault: &Vault) -> DomainResult<Vault> {
        self.state
            .write()
            .vaults
            .insert(vault.id.into_uuid(), vault.clone());
        Ok(vault.clone())
    }

    async fn delete(&self, id: VaultId) -> DomainResult<()> {
        self.state.write().vaults.remove(id.as_uuid());
        Ok(())
    }

    async fn exists(&self, id: VaultId) -> DomainResult<bool> {
        Ok(self.state.read().vaults.contains_key(id.as_uuid()))
    }

    async fn get_by_workspace(&self, workspace_id: WorkspaceId) -> DomainResult<Vec<Vault>> {
        let mut vaults: Vec<Vault> = self
            .state
            .read()
            .vaults
            .values()
            .filter(|v| v.workspace_id == workspace_id)
            .cloned()
            .collect();
        vaults.sort_by_key(|v| (v.created_at, v.id.into_uuid()));
        Ok(vaults)
    }

    async fn get_by_name(
        &self,
        workspace_id: WorkspaceId,
        name: &str,
    ) -> DomainResult<Option<Vault>> {
        Ok(self
            .state
            .read()
            .vaults
            .values()
            .find(|v| v.workspace_id == workspace_id && v.name == name)
            .cloned())
    }

    async fn name_exists_in_workspace(
        &self,
        workspace_id: WorkspaceId,
        name: &str,
        exclude: Option<VaultId>,
    ) -> DomainResult<bool> {
        Ok(self
            .state
            .read()
            .vaults
            .values()
            .any(|v| v.workspace_id == workspace_id && v.name == name && Some(v.id) != exclude))
    }

    async fn count_by_workspace(&self, workspace_id: WorkspaceId) -> DomainResult<usize> {
        Ok(self
            .state
            .read()
            .vaults
            .values()
            .filter(|v| v.workspace_id == workspace_id)
            .count())
    }
}
