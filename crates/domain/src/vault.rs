//! Vault aggregate: secure-storage metadata within a workspace.
//!
//! Purely metadata: no file access or encryption happens here. A vault is
//! either locked or unlocked; both transitions are explicit and idempotent.

use crate::errors::ValidationError;
use crate::identifiers::{VaultId, WorkspaceId};
use crate::validation;
use crate::Attributes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vault aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    /// Unique identifier
    pub id: VaultId,
    /// Vault name, unique within its workspace
    pub name: String,
    /// Filesystem path of the vault storage
    pub path: String,
    /// The workspace this vault belongs to
    pub workspace_id: WorkspaceId,
    /// Arbitrary vault metadata
    #[serde(default)]
    pub metadata: Attributes,
    /// Whether the vault is currently locked
    #[serde(default)]
    pub is_locked: bool,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (UTC)
    pub updated_at: DateTime<Utc>,
}

impl Vault {
    /// Create a new vault (unlocked), validating name and path.
    pub fn new(
        workspace_id: WorkspaceId,
        name: impl Into<String>,
        path: impl Into<String>,
        metadata: Attributes,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let path = path.into();
        validation::validate_resource_name(&name)?;
        validation::validate_path(&path)?;

        let now = Utc::now();
        Ok(Self {
            id: VaultId::new(),
            name,
            path,
            workspace_id,
            metadata,
            is_locked: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rename the vault. The proposed name is validated before the stored
    /// field is touched.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validation::validate_resource_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Move the vault storage to a new path.
    pub fn update_path(&mut self, path: impl Into<String>) -> Result<(), ValidationError> {
        let path = path.into();
        validation::validate_path(&path)?;
        self.path = path;
        self.touch();
        Ok(())
    }

    /// Replace the metadata map wholesale.
    pub fn replace_metadata(&mut self, metadata: Attributes) {
        self.metadata = metadata;
        self.touch();
    }

    /// Lock the vault. Locking an already-locked vault is a no-op.
    pub fn lock(&mut self) {
        if !self.is_locked {
            self.is_locked = true;
            self.touch();
        }
    }

    /// Unlock the vault. Unlocking an already-unlocked vault is a no-op.
    pub fn unlock(&mut self) {
        if self.is_locked {
            self.is_locked = false;
            self.touch();
        }
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
