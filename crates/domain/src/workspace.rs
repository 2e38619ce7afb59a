//! Workspace aggregate: an independent working context.
//!
//! A workspace references its owner through `user_profile_id` but is not
//! held by the profile in memory. Repos and vaults inside a workspace are
//! likewise reconstructed by repository queries, never through pointers, so
//! the object graph is always acyclic.

use crate::errors::ValidationError;
use crate::identifiers::{UserProfileId, WorkspaceId};
use crate::validation;
use crate::{Attributes, SharedResources};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The kind of working context a workspace represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceType {
    /// General-purpose workspace
    #[default]
    General,
    /// Client-facing work
    Client,
    /// Personal projects
    Personal,
    /// Research and experiments
    Research,
}

impl WorkspaceType {
    /// The canonical lowercase name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Client => "client",
            Self::Personal => "personal",
            Self::Research => "research",
        }
    }
}

impl fmt::Display for WorkspaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkspaceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "client" => Ok(Self::Client),
            "personal" => Ok(Self::Personal),
            "research" => Ok(Self::Research),
            other => Err(ValidationError::InvalidWorkspaceType(other.to_string())),
        }
    }
}

/// Workspace aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique identifier
    pub id: WorkspaceId,
    /// Workspace name (1-255 characters, non-blank)
    pub name: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning user profile (a reference, not a containment pointer)
    pub user_profile_id: UserProfileId,
    /// The kind of working context
    pub workspace_type: WorkspaceType,
    /// Arbitrary workspace settings
    #[serde(default)]
    pub settings: Attributes,
    /// Links to global resources, keyed by resource type
    #[serde(default)]
    pub shared_resources: SharedResources,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (UTC)
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    /// Create a new workspace for the given owner, validating the name.
    pub fn new(
        user_profile_id: UserProfileId,
        name: impl Into<String>,
        workspace_type: WorkspaceType,
        description: Option<String>,
        settings: Attributes,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validation::validate_workspace_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: WorkspaceId::new(),
            name,
            description,
            user_profile_id,
            workspace_type,
            settings,
            shared_resources: SharedResources::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rename the workspace. The proposed name is validated before the
    /// stored field is touched.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validation::validate_workspace_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Set or clear the description.
    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    /// Merge the given entries into the settings map.
    pub fn update_settings(&mut self, updates: Attributes) {
        self.settings.extend(updates);
        self.touch();
    }

    /// Replace the settings map wholesale.
    pub fn replace_settings(&mut self, settings: Attributes) {
        self.settings = settings;
        self.touch();
    }

    /// Replace all shared-resource links.
    pub fn replace_shared_resources(&mut self, shared_resources: SharedResources) {
        self.shared_resources = shared_resources;
        self.touch();
    }

    /// Link a global resource to this workspace.
    ///
    /// Adding an already-linked resource is a no-op.
    pub fn add_shared_resource(&mut self, resource_id: Uuid, resource_type: impl Into<String>) {
        let ids = self.shared_resources.entry(resource_type.into()).or_default();
        if !ids.contains(&resource_id) {
            ids.push(resource_id);
            self.touch();
        }
    }

    /// Remove the link to a global resource, if present.
    pub fn remove_shared_resource(&mut self, resource_id: Uuid, resource_type: &str) {
        if let Some(ids) = self.shared_resources.get_mut(resource_type) {
            if let Some(pos) = ids.iter().position(|id| *id == resource_id) {
                ids.remove(pos);
                self.touch();
            }
        }
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> Workspace {
        Workspace::new(
            UserProfileId::new(),
            "Lab",
            WorkspaceType::Research,
            None,
            Attributes::new(),
        )
        .unwrap()
    }

    #[test]
    fn construction_validates_name() {
        let owner = UserProfileId::new();
        assert!(Workspace::new(owner, "Lab", WorkspaceType::General, None, Attributes::new()).is_ok());
        assert!(Workspace::new(owner, "  ", WorkspaceType::General, None, Attributes::new()).is_err());
        assert!(Workspace::new(
            owner,
            "x".repeat(256),
            WorkspaceType::General,
            None,
            Attributes::new()
        )
        .is_err());
    }

    #[test]
    fn rename_rejects_invalid_name() {
        let mut ws = workspace();
        assert!(ws.rename("").is_err());
        assert_eq!(ws.name, "Lab");
        assert!(ws.rename("Lab 2").is_ok());
        assert_eq!(ws.name, "Lab 2");
    }

    #[test]
    fn workspace_type_round_trip() {
        for ty in [
            WorkspaceType::General,
            WorkspaceType::Client,
            WorkspaceType::Personal,
            WorkspaceType::Research,
        ] {
            assert_eq!(ty.as_str().parse::<WorkspaceType>().unwrap(), ty);
        }
        assert!("staging".parse::<WorkspaceType>().is_err());
    }

    #[test]
    fn add_shared_resource_is_idempotent() {
        let mut ws = workspace();
        let resource = Uuid::now_v7();

        ws.add_shared_resource(resource, "template");
        ws.add_shared_resource(resource, "template");
        assert_eq!(ws.shared_resources["template"], vec![resource]);

        ws.remove_shared_resource(resource, "template");
        assert!(ws.shared_resources["template"].is_empty());

        // Removing from an unknown type is a no-op
        ws.remove_shared_resource(resource, "contact");
    }

    #[test]
    fn update_settings_merges() {
        let mut ws = workspace();
        ws.update_settings(Attributes::from_iter([(
            "color".to_string(),
            serde_json::json!("blue"),
        )]));
        ws.update_settings(Attributes::from_iter([(
            "layout".to_string(),
            serde_json::json!("grid"),
        )]));
        assert_eq!(ws.settings.len(), 2);
    }
}
