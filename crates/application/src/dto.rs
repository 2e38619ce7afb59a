//! Data transfer objects returned by the command and query buses.
//!
//! DTOs are plain serializable snapshots of domain entities; callers never
//! receive live entities across the bus boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use symphony_domain::{
    Attributes, Repo, RepoId, ResourceCounts, SharedResources, UserProfile, UserProfileId, Vault,
    VaultId, Workspace, WorkspaceId, WorkspaceType,
};

/// Snapshot of a [`UserProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileDto {
    /// Profile id.
    pub id: UserProfileId,
    /// Unique username.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Free-form preference map.
    pub preferences: Attributes,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for UserProfileDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            email: profile.email,
            preferences: profile.preferences,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Snapshot of a [`Workspace`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceDto {
    /// Workspace id.
    pub id: WorkspaceId,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning user.
    pub user_profile_id: UserProfileId,
    /// Workspace category.
    pub workspace_type: WorkspaceType,
    /// Free-form settings map.
    pub settings: Attributes,
    /// Resources shared out of this workspace, keyed by kind.
    pub shared_resources: SharedResources,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Workspace> for WorkspaceDto {
    fn from(workspace: Workspace) -> Self {
        Self {
            id: workspace.id,
            name: workspace.name,
            description: workspace.description,
            user_profile_id: workspace.user_profile_id,
            workspace_type: workspace.workspace_type,
            settings: workspace.settings,
            shared_resources: workspace.shared_resources,
            created_at: workspace.created_at,
            updated_at: workspace.updated_at,
        }
    }
}

/// Snapshot of a [`Repo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoDto {
    /// Repo id.
    pub id: RepoId,
    /// Display name, unique within the workspace.
    pub name: String,
    /// Local path.
    pub path: String,
    /// Parent workspace.
    pub workspace_id: WorkspaceId,
    /// Optional remote url.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    /// Free-form metadata map.
    pub metadata: Attributes,
    /// When the repo was last synced, if ever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synced: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Repo> for RepoDto {
    fn from(repo: Repo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            path: repo.path,
            workspace_id: repo.workspace_id,
            remote_url: repo.remote_url,
            metadata: repo.metadata,
            last_synced: repo.last_synced,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        }
    }
}

/// Snapshot of a [`Vault`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultDto {
    /// Vault id.
    pub id: VaultId,
    /// Display name, unique within the workspace.
    pub name: String,
    /// Local path.
    pub path: String,
    /// Parent workspace.
    pub workspace_id: WorkspaceId,
    /// Free-form metadata map.
    pub metadata: Attributes,
    /// Whether the vault is currently locked.
    pub is_locked: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Vault> for VaultDto {
    fn from(vault: Vault) -> Self {
        Self {
            id: vault.id,
            name: vault.name,
            path: vault.path,
            workspace_id: vault.workspace_id,
            metadata: vault.metadata,
            is_locked: vault.is_locked,
            created_at: vault.created_at,
            updated_at: vault.updated_at,
        }
    }
}

/// Resource counts for a single workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceStatsDto {
    /// The workspace counted.
    pub workspace_id: WorkspaceId,
    /// Number of repos.
    pub repo_count: usize,
    /// Number of vaults.
    pub vault_count: usize,
    /// Repos plus vaults.
    pub total_resources: usize,
}

impl WorkspaceStatsDto {
    /// Builds stats from raw counts.
    pub fn from_counts(workspace_id: WorkspaceId, counts: ResourceCounts) -> Self {
        Self {
            workspace_id,
            repo_count: counts.repos,
            vault_count: counts.vaults,
            total_resources: counts.total(),
        }
    }
}
