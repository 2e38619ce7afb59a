//! Repo aggregate: git repository metadata within a workspace.
//!
//! Purely metadata: no filesystem or git access happens here. Syncing with a
//! remote only touches the `last_synced` timestamp.

use crate::errors::ValidationError;
use crate::identifiers::{RepoId, WorkspaceId};
use crate::validation;
use crate::Attributes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repo aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    /// Unique identifier
    pub id: RepoId,
    /// Repo name, unique within its workspace
    pub name: String,
    /// Local filesystem path of the checkout
    pub path: String,
    /// The workspace this repo belongs to
    pub workspace_id: WorkspaceId,
    /// Optional git remote URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    /// Arbitrary repo metadata
    #[serde(default)]
    pub metadata: Attributes,
    /// When the repo was last synced with its remote, if ever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synced: Option<DateTime<Utc>>,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (UTC)
    pub updated_at: DateTime<Utc>,
}

impl Repo {
    /// Create a new repo, validating name, path, and remote URL.
    pub fn new(
        workspace_id: WorkspaceId,
        name: impl Into<String>,
        path: impl Into<String>,
        remote_url: Option<String>,
        metadata: Attributes,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let path = path.into();
        validation::validate_resource_name(&name)?;
        validation::validate_path(&path)?;
        if let Some(url) = remote_url.as_deref() {
            validation::validate_remote_url(url)?;
        }

        let now = Utc::now();
        Ok(Self {
            id: RepoId::new(),
            name,
            path,
            workspace_id,
            remote_url,
            metadata,
            last_synced: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rename the repo. The proposed name is validated before the stored
    /// field is touched.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validation::validate_resource_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Move the checkout to a new path.
    pub fn update_path(&mut self, path: impl Into<String>) -> Result<(), ValidationError> {
        let path = path.into();
        validation::validate_path(&path)?;
        self.path = path;
        self.touch();
        Ok(())
    }

    /// Set or clear the remote URL.
    pub fn update_remote_url(&mut self, remote_url: Option<String>) -> Result<(), ValidationError> {
        if let Some(url) = remote_url.as_deref() {
            validation::validate_remote_url(url)?;
        }
        self.remote_url = remote_url;
        self.touch();
        Ok(())
    }

    /// Replace the metadata map wholesale.
    pub fn replace_metadata(&mut self, metadata: Attributes) {
        self.metadata = metadata;
        self.touch();
    }

    /// Record a sync with the remote.
    ///
    /// Placeholder for real git integration: only the timestamp moves.
    pub fn mark_synced(&mut self) {
        self.last_synced = Some(Utc::now());
        self.touch();
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> Repo {
        Repo::new(WorkspaceId::new(), "proj1", "/p", None, Attributes::new()).unwrap()
    }

    #[test]
    fn construction_validates_fields() {
        let ws = WorkspaceId::new();
        assert!(Repo::new(ws, "proj1", "/p", None, Attributes::new()).is_ok());
        assert!(Repo::new(ws, "a/b", "/p", None, Attributes::new()).is_err());
        assert!(Repo::new(ws, "proj1", "", None, Attributes::new()).is_err());
        assert!(Repo::new(
            ws,
            "proj1",
            "/p",
            Some("ftp://host/x".into()),
            Attributes::new()
        )
        .is_err());
        assert!(Repo::new(
            ws,
            "proj1",
            "/p",
            Some("git@github.com:acme/proj1.git".into()),
            Attributes::new()
        )
        .is_ok());
    }

    #[test]
    fn update_remote_url_can_clear() {
        let mut r = repo();
        r.update_remote_url(Some("https://github.com/acme/proj1.git".into()))
            .unwrap();
        assert!(r.remote_url.is_some());
        r.update_remote_url(None).unwrap();
        assert!(r.remote_url.is_none());
    }

    #[test]
    fn invalid_rename_keeps_old_name() {
        let mut r = repo();
        assert!(r.rename("bad:name").is_err());
        assert_eq!(r.name, "proj1");
    }

    #[test]
    fn mark_synced_sets_timestamp() {
        let mut r = repo();
        assert!(r.last_synced.is_none());
        r.mark_synced();
        assert!(r.last_synced.is_some());
    }
}
