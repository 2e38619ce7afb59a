//! Fluent builder pattern for constructing test data.
//!
//! Builders construct entities directly, bypassing constructor validation,
//! so tests can create both valid and deliberately inconsistent instances.

use chrono::Utc;
use symphony_domain::{
    Attributes, Repo, RepoId, SharedResources, UserProfile, UserProfileId, Vault, VaultId,
    Workspace, WorkspaceId, WorkspaceType,
};

/// Builder for creating UserProfile test instances
#[derive(Clone)]
pub struct UserProfileBuilder {
    id: UserProfileId,
    username: String,
    email: String,
    preferences: Attributes,
}

impl UserProfileBuilder {
    pub fn new() -> Self {
        Self {
            id: UserProfileId::new(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            preferences: Attributes::new(),
        }
    }

    pub fn with_id(mut self, id: UserProfileId) -> Self {
        self.id = id;
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_preference(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.preferences.insert(key.into(), value);
        self
    }

    pub fn build(self) -> UserProfile {
        let now = Utc::now();
        UserProfile {
            id: self.id,
            username: self.username,
            email: self.email,
            preferences: self.preferences,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for UserProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating Workspace test instances
#[derive(Clone)]
pub struct WorkspaceBuilder {
    id: WorkspaceId,
    name: String,
    description: Option<String>,
    user_profile_id: UserProfileId,
    workspace_type: WorkspaceType,
    settings: Attributes,
    shared_resources: SharedResources,
}

impl WorkspaceBuilder {
    pub fn new() -> Self {
        Self {
            id: WorkspaceId::new(),
            name: "Test Workspace".to_string(),
            description: None,
            user_profile_id: UserProfileId::new(),
            workspace_type: WorkspaceType::General,
            settings: Attributes::new(),
            shared_resources: SharedResources::new(),
        }
    }

    pub fn with_id(mut self, id: WorkspaceId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_user_profile_id(mut self, user_profile_id: UserProfileId) -> Self {
        self.user_profile_id = user_profile_id;
        self
    }

    pub fn with_workspace_type(mut self, workspace_type: WorkspaceType) -> Self {
        self.workspace_type = workspace_type;
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Workspace {
        let now = Utc::now();
        Workspace {
            id: self.id,
            name: self.name,
            description: self.description,
            user_profile_id: self.user_profile_id,
            workspace_type: self.workspace_type,
            settings: self.settings,
            shared_resources: self.shared_resources,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for WorkspaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating Repo test instances
#[derive(Clone)]
pub struct RepoBuilder {
    id: RepoId,
    name: String,
    path: String,
    workspace_id: WorkspaceId,
    remote_url: Option<String>,
    metadata: Attributes,
}

impl RepoBuilder {
    pub fn new() -> Self {
        Self {
            id: RepoId::new(),
            name: "test-repo".to_string(),
            path: "/tmp/test-repo".to_string(),
            workspace_id: WorkspaceId::new(),
            remote_url: None,
            metadata: Attributes::new(),
        }
    }

    pub fn with_id(mut self, id: RepoId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_workspace_id(mut self, workspace_id: WorkspaceId) -> Self {
        self.workspace_id = workspace_id;
        self
    }

    pub fn with_remote_url(mut self, remote_url: impl Into<String>) -> Self {
        self.remote_url = Some(remote_url.into());
        self
    }

    pub fn build(self) -> Repo {
        let now = Utc::now();
        Repo {
            id: self.id,
            name: self.name,
            path: self.path,
            workspace_id: self.workspace_id,
            remote_url: self.remote_url,
            metadata: self.metadata,
            last_synced: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for RepoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating Vault test instances
#[derive(Clone)]
pub struct VaultBuilder {
    id: VaultId,
    name: String,
    path: String,
    workspace_id: WorkspaceId,
    metadata: Attributes,
    is_locked: bool,
}

impl VaultBuilder {
    pub fn new() -> Self {
        Self {
            id: VaultId::new(),
            name: "test-vault".to_string(),
            path: "/tmp/test-vault".to_string(),
            workspace_id: WorkspaceId::new(),
            metadata: Attributes::new(),
            is_locked: false,
        }
    }

    pub fn with_id(mut self, id: VaultId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_workspace_id(mut self, workspace_id: WorkspaceId) -> Self {
        self.workspace_id = workspace_id;
        self
    }

    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    pub fn build(self) -> Vault {
        let now = Utc::now();
        Vault {
            id: self.id,
            name: self.name,
            path: self.path,
            workspace_id: self.workspace_id,
            metadata: self.metadata,
            is_locked: self.is_locked,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for VaultBuilder {
    fn default() -> Self {
        Self::new()
    }
}
