//! Test fixtures for generating domain entities with realistic data.
//!
//! Fixture functions go through the real constructors, so everything they
//! return satisfies domain validation.

use fake::{
    faker::{
        internet::en::{FreeEmail, Username},
        lorem::en::{Sentence, Word},
    },
    Fake,
};
use serde_json::json;
use symphony_domain::{
    Attributes, Repo, UserProfile, UserProfileId, Vault, Workspace, WorkspaceId, WorkspaceType,
};

/// Create a test user profile with random username and email
pub fn create_test_user_profile() -> UserProfile {
    // fake usernames can contain dots or be too short; prefix and sanitize
    let raw: String = Username().fake();
    let sanitized: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let username = format!("user_{sanitized}");

    let mut preferences = Attributes::new();
    preferences.insert("theme".to_string(), json!("dark"));

    UserProfile::new(&username, &FreeEmail().fake::<String>(), preferences)
        .unwrap_or_else(|e| panic!("fixture profile should validate: {e}"))
}

/// Create a test workspace owned by the given user
pub fn create_test_workspace(user_profile_id: UserProfileId) -> Workspace {
    create_test_workspace_of_type(user_profile_id, WorkspaceType::General)
}

/// Create a test workspace of a specific type
pub fn create_test_workspace_of_type(
    user_profile_id: UserProfileId,
    workspace_type: WorkspaceType,
) -> Workspace {
    let name = format!("{} workspace", Word().fake::<String>());
    Workspace::new(
        user_profile_id,
        &name,
        workspace_type,
        Some(Sentence(3..8).fake()),
        Attributes::new(),
    )
    .unwrap_or_else(|e| panic!("fixture workspace should validate: {e}"))
}

/// Create a test repo inside the given workspace
pub fn create_test_repo(workspace_id: WorkspaceId) -> Repo {
    let name = format!("repo-{}", Word().fake::<String>());
    Repo::new(
        workspace_id,
        &name,
        &format!("/tmp/{name}"),
        Some("https://github.com/example/repo.git".to_string()),
        Attributes::new(),
    )
    .unwrap_or_else(|e| panic!("fixture repo should validate: {e}"))
}

/// Create a test vault inside the given workspace
pub fn create_test_vault(workspace_id: WorkspaceId) -> Vault {
    let name = format!("vault-{}", Word().fake::<String>());
    Vault::new(
        workspace_id,
        &name,
        &format!("/tmp/{name}"),
        Attributes::new(),
    )
    .unwrap_or_else(|e| panic!("fixture vault should validate: {e}"))
}
