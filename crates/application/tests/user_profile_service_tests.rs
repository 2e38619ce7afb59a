//! Service-level tests for user profile lifecycle and uniqueness rules.

use std::sync::Arc;

use serde_json::json;
use symphony_application::services::UserProfileService;
use symphony_application::Limits;
use symphony_domain::{
    Attributes, DomainError, UnitOfWork, UnitOfWorkProvider, UserProfileRepository,
    ValidationError, WorkspaceRepository,
};
use symphony_infrastructure::MemoryStore;
use symphony_testing::fixtures::create_test_workspace;

fn service() -> (UserProfileService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (UserProfileService::new(store.clone()), store)
}

#[tokio::test]
async fn create_and_fetch_profile() {
    let (service, _) = service();
    let created = service
        .create_user_profile("alice", "alice@example.com", None)
        .await
        .unwrap();

    let fetched = service.get_user_profile(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let by_username = service
        .get_user_profile_by_username("alice")
        .await
        .unwrap();
    assert_eq!(by_username.id, created.id);

    let by_email = service
        .get_user_profile_by_email("alice@example.com")
        .await
        .unwrap();
    assert_eq!(by_email.id, created.id);
}

#[tokio::test]
async fn lookup_by_unknown_username_or_email_is_not_found() {
    let (service, _) = service();

    let err = service
        .get_user_profile_by_username("ghost")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert_eq!(err.http_status(), 404);

    let err = service
        .get_user_profile_by_email("ghost@example.com")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn invalid_username_is_rejected_before_any_write() {
    let (service, store) = service();
    let err = service
        .create_user_profile("ab", "ab@example.com", None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationError::InvalidUsername(_))
    ));

    let uow = store.begin().await.unwrap();
    assert!(uow
        .user_profiles()
        .get_by_email("ab@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn duplicate_username_reported_before_duplicate_email() {
    let (service, _) = service();
    service
        .create_user_profile("alice", "alice@example.com", None)
        .await
        .unwrap();

    // collides on both fields; the username conflict wins
    let err = service
        .create_user_profile("alice", "alice@example.com", None)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_EXISTS");
    assert!(err.to_string().contains("username"));
    assert_eq!(err.http_status(), 409);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let (service, _) = service();
    service
        .create_user_profile("alice", "alice@example.com", None)
        .await
        .unwrap();

    let err = service
        .create_user_profile("bob", "alice@example.com", None)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_EXISTS");
    assert!(err.to_string().contains("email"));
}

#[tokio::test]
async fn update_replaces_preferences_wholesale() {
    let (service, _) = service();
    let mut initial = Attributes::new();
    initial.insert("theme".to_string(), json!("dark"));
    initial.insert("lang".to_string(), json!("en"));
    let created = service
        .create_user_profile("alice", "alice@example.com", Some(initial))
        .await
        .unwrap();

    let mut replacement = Attributes::new();
    replacement.insert("theme".to_string(), json!("light"));
    let updated = service
        .update_user_profile(created.id, None, None, Some(replacement))
        .await
        .unwrap();

    assert_eq!(updated.preferences["theme"], json!("light"));
    // replacement drops keys the new map does not carry
    assert!(!updated.preferences.contains_key("lang"));
}

#[tokio::test]
async fn update_to_own_username_is_not_a_conflict() {
    let (service, _) = service();
    let created = service
        .create_user_profile("alice", "alice@example.com", None)
        .await
        .unwrap();

    let updated = service
        .update_user_profile(created.id, Some("alice"), Some("alice@example.com"), None)
        .await
        .unwrap();
    assert_eq!(updated.username, "alice");
}

#[tokio::test]
async fn update_to_taken_username_fails_and_keeps_old_value() {
    let (service, _) = service();
    service
        .create_user_profile("alice", "alice@example.com", None)
        .await
        .unwrap();
    let bob = service
        .create_user_profile("bob", "bob@example.com", None)
        .await
        .unwrap();

    let err = service
        .update_user_profile(bob.id, Some("alice"), None, None)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_EXISTS");

    let fetched = service.get_user_profile(bob.id).await.unwrap();
    assert_eq!(fetched.username, "bob");
}

#[tokio::test]
async fn delete_missing_profile_is_not_found() {
    let (service, _) = service();
    let err = service
        .delete_user_profile(symphony_domain::UserProfileId::new())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn deleting_a_profile_cascades_to_its_workspaces() {
    let (service, store) = service();
    let alice = service
        .create_user_profile("alice", "alice@example.com", None)
        .await
        .unwrap();
    let workspaces =
        symphony_application::services::WorkspaceService::new(store.clone());
    let ws = workspaces
        .create_workspace(
            alice.id,
            "Lab",
            symphony_domain::WorkspaceType::General,
            None,
            None,
        )
        .await
        .unwrap();

    service.delete_user_profile(alice.id).await.unwrap();

    let err = workspaces
        .get_workspace(ws.id, symphony_application::AccessScope::Unchecked)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn workspace_limit_boundary() {
    let store = Arc::new(MemoryStore::new());
    let limits = Limits {
        max_workspaces_per_user: 2,
        ..Limits::default()
    };
    let service = UserProfileService::with_limits(store.clone(), limits);
    let profile = service
        .create_user_profile("alice", "alice@example.com", None)
        .await
        .unwrap();

    assert!(service.can_create_workspace(profile.id).await.unwrap());

    let uow = store.begin().await.unwrap();
    uow.workspaces()
        .save(&create_test_workspace(profile.id))
        .await
        .unwrap();
    uow.workspaces()
        .save(&create_test_workspace(profile.id))
        .await
        .unwrap();
    uow.commit().await.unwrap();

    assert!(!service.can_create_workspace(profile.id).await.unwrap());
    let err = service.check_workspace_limit(profile.id).await.unwrap_err();
    assert_eq!(err.error_code(), "WORKSPACE_LIMIT_EXCEEDED");
    assert_eq!(err.http_status(), 422);
    assert!(!err.is_retryable());
}
