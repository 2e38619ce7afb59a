//! Service-level tests for workspace lifecycle, ownership, and limits.

use std::sync::Arc;

use serde_json::json;
use symphony_application::services::{UserProfileService, WorkspaceService};
use symphony_application::{AccessScope, Limits};
use symphony_domain::{
    Attributes, RepoRepository, SharedResources, UnitOfWork, UnitOfWorkProvider, UserProfile,
    UserProfileId, VaultRepository, WorkspaceRepository, WorkspaceType,
};
use symphony_infrastructure::MemoryStore;
use symphony_testing::fixtures::{create_test_repo, create_test_vault};

struct Ctx {
    store: Arc<MemoryStore>,
    workspaces: WorkspaceService,
    alice: UserProfile,
    bob: UserProfile,
}

async fn ctx() -> Ctx {
    let store = Arc::new(MemoryStore::new());
    let profiles = UserProfileService::new(store.clone());
    let alice = profiles
        .create_user_profile("alice", "alice@example.com", None)
        .await
        .unwrap();
    let bob = profiles
        .create_user_profile("bob", "bob@example.com", None)
        .await
        .unwrap();
    Ctx {
        workspaces: WorkspaceService::new(store.clone()),
        store,
        alice,
        bob,
    }
}

#[tokio::test]
async fn create_get_and_list() {
    let ctx = ctx().await;
    let ws = ctx
        .workspaces
        .create_workspace(
            ctx.alice.id,
            "Research Lab",
            WorkspaceType::Research,
            Some("experiments".to_string()),
            None,
        )
        .await
        .unwrap();
    assert_eq!(ws.workspace_type, WorkspaceType::Research);
    assert_eq!(ws.description.as_deref(), Some("experiments"));

    let fetched = ctx
        .workspaces
        .get_workspace(ws.id, AccessScope::Owner(ctx.alice.id))
        .await
        .unwrap();
    assert_eq!(fetched, ws);

    let all = ctx
        .workspaces
        .list_user_workspaces(ctx.alice.id, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 1);

    let filtered = ctx
        .workspaces
        .list_user_workspaces(ctx.alice.id, Some(WorkspaceType::Client))
        .await
        .unwrap();
    assert!(filtered.is_empty());
}

#[tokio::test]
async fn create_for_missing_user_is_not_found() {
    let ctx = ctx().await;
    let err = ctx
        .workspaces
        .create_workspace(
            UserProfileId::new(),
            "Lab",
            WorkspaceType::General,
            None,
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn reads_enforce_the_owner_scope() {
    let ctx = ctx().await;
    let ws = ctx
        .workspaces
        .create_workspace(ctx.alice.id, "Lab", WorkspaceType::General, None, None)
        .await
        .unwrap();

    let err = ctx
        .workspaces
        .get_workspace(ws.id, AccessScope::Owner(ctx.bob.id))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "WORKSPACE_NOT_OWNED_BY_USER");
    assert_eq!(err.http_status(), 403);

    // internal callers may skip the check
    let fetched = ctx
        .workspaces
        .get_workspace(ws.id, AccessScope::Unchecked)
        .await
        .unwrap();
    assert_eq!(fetched.id, ws.id);
}

#[tokio::test]
async fn update_is_owner_only_and_replaces_maps() {
    let ctx = ctx().await;
    let mut settings = Attributes::new();
    settings.insert("color".to_string(), json!("blue"));
    settings.insert("notify".to_string(), json!(true));
    let ws = ctx
        .workspaces
        .create_workspace(
            ctx.alice.id,
            "Lab",
            WorkspaceType::General,
            None,
            Some(settings),
        )
        .await
        .unwrap();

    let err = ctx
        .workspaces
        .update_workspace(ws.id, ctx.bob.id, Some("Stolen"), None, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "WORKSPACE_NOT_OWNED_BY_USER");

    let mut replacement = Attributes::new();
    replacement.insert("color".to_string(), json!("red"));
    let mut shared = SharedResources::new();
    shared.insert("datasets".to_string(), vec![uuid::Uuid::new_v4()]);
    let updated = ctx
        .workspaces
        .update_workspace(
            ws.id,
            ctx.alice.id,
            Some("Renamed Lab"),
            Some("now described".to_string()),
            Some(replacement),
            Some(shared),
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed Lab");
    assert_eq!(updated.description.as_deref(), Some("now described"));
    assert_eq!(updated.settings["color"], json!("red"));
    assert!(!updated.settings.contains_key("notify"));
    assert_eq!(updated.shared_resources["datasets"].len(), 1);
}

#[tokio::test]
async fn rename_to_blank_is_rejected() {
    let ctx = ctx().await;
    let ws = ctx
        .workspaces
        .create_workspace(ctx.alice.id, "Lab", WorkspaceType::General, None, None)
        .await
        .unwrap();

    let err = ctx
        .workspaces
        .update_workspace(ws.id, ctx.alice.id, Some("   "), None, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");

    // the stored name is untouched
    let fetched = ctx
        .workspaces
        .get_workspace(ws.id, AccessScope::Unchecked)
        .await
        .unwrap();
    assert_eq!(fetched.name, "Lab");
}

#[tokio::test]
async fn delete_cascades_even_when_workspace_is_populated() {
    let ctx = ctx().await;
    let ws = ctx
        .workspaces
        .create_workspace(ctx.alice.id, "Lab", WorkspaceType::General, None, None)
        .await
        .unwrap();

    let repo = create_test_repo(ws.id);
    let vault = create_test_vault(ws.id);
    let uow = ctx.store.begin().await.unwrap();
    uow.repos().save(&repo).await.unwrap();
    uow.vaults().save(&vault).await.unwrap();
    uow.commit().await.unwrap();

    ctx.workspaces
        .delete_workspace(ws.id, ctx.alice.id)
        .await
        .unwrap();

    let uow = ctx.store.begin().await.unwrap();
    assert!(!uow.workspaces().exists(ws.id).await.unwrap());
    assert!(!uow.repos().exists(repo.id).await.unwrap());
    assert!(!uow.vaults().exists(vault.id).await.unwrap());
}

#[tokio::test]
async fn delete_is_owner_only() {
    let ctx = ctx().await;
    let ws = ctx
        .workspaces
        .create_workspace(ctx.alice.id, "Lab", WorkspaceType::General, None, None)
        .await
        .unwrap();

    let err = ctx
        .workspaces
        .delete_workspace(ws.id, ctx.bob.id)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "WORKSPACE_NOT_OWNED_BY_USER");

    assert!(ctx
        .workspaces
        .get_workspace(ws.id, AccessScope::Unchecked)
        .await
        .is_ok());
}

#[tokio::test]
async fn stats_and_resource_limits() {
    let ctx = ctx().await;
    let limits = Limits {
        max_repos_per_workspace: 1,
        max_vaults_per_workspace: 1,
        ..Limits::default()
    };
    let workspaces = WorkspaceService::with_limits(ctx.store.clone(), limits);
    let ws = workspaces
        .create_workspace(ctx.alice.id, "Lab", WorkspaceType::General, None, None)
        .await
        .unwrap();

    assert!(workspaces.can_add_repo(ws.id).await.unwrap());
    assert!(workspaces.can_add_vault(ws.id).await.unwrap());

    let uow = ctx.store.begin().await.unwrap();
    uow.repos().save(&create_test_repo(ws.id)).await.unwrap();
    uow.vaults().save(&create_test_vault(ws.id)).await.unwrap();
    uow.commit().await.unwrap();

    let counts = workspaces.get_workspace_stats(ws.id).await.unwrap();
    assert_eq!(counts.repos, 1);
    assert_eq!(counts.vaults, 1);
    assert_eq!(counts.total(), 2);

    assert!(!workspaces.can_add_repo(ws.id).await.unwrap());
    let err = workspaces.check_repo_limit(ws.id).await.unwrap_err();
    assert_eq!(err.error_code(), "REPO_LIMIT_EXCEEDED");
    let err = workspaces.check_vault_limit(ws.id).await.unwrap_err();
    assert_eq!(err.error_code(), "VAULT_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn fifty_first_workspace_hits_the_default_limit() {
    let ctx = ctx().await;
    for i in 0..50 {
        ctx.workspaces
            .create_workspace(
                ctx.alice.id,
                &format!("workspace {i}"),
                WorkspaceType::General,
                None,
                None,
            )
            .await
            .unwrap();
    }

    let err = ctx
        .workspaces
        .create_workspace(ctx.alice.id, "one too many", WorkspaceType::General, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "WORKSPACE_LIMIT_EXCEEDED");

    // the other user is unaffected
    assert!(ctx
        .workspaces
        .create_workspace(ctx.bob.id, "bob's", WorkspaceType::General, None, None)
        .await
        .is_ok());
}
