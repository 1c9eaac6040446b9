use ledgerly::AppError;
use ledgerly::db::models::{AccountPatch, NewAccount};
use ledgerly::db::sqlite::AccountStorage;
use sqlx::sqlite::SqlitePoolOptions;

async fn fresh_storage() -> AccountStorage {
    // A single connection keeps the in-memory database shared for the
    // lifetime of the test.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    let storage = AccountStorage::new(pool);
    storage.init_schema().await.expect("schema init failed");
    storage
}

fn named(name: &str) -> NewAccount {
    NewAccount {
        name: name.to_string(),
        status: None,
        tags: None,
        owner: None,
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let storage = fresh_storage().await;

    let created = storage.create(named("Alice")).await.expect("create failed");
    assert_eq!(created.name, "Alice");
    assert_eq!(created.status, "active");

    let fetched = storage.get_by_id(created.id).await.expect("get failed");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_returns_all_in_insertion_order() {
    let storage = fresh_storage().await;
    for name in ["A", "B", "C"] {
        storage.create(named(name)).await.expect("create failed");
    }

    let all = storage.list().await.expect("list failed");
    assert_eq!(all.len(), 3);
    let names: Vec<&str> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn list_on_empty_table_is_empty() {
    let storage = fresh_storage().await;
    let all = storage.list().await.expect("list failed");
    assert!(all.is_empty());
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let storage = fresh_storage().await;
    let err = storage.get_by_id(42).await.expect_err("expected an error");
    assert!(matches!(err, AppError::AccountNotFound(42)));
}

#[tokio::test]
async fn update_overwrites_given_fields_and_keeps_the_rest() {
    let storage = fresh_storage().await;
    let created = storage
        .create(NewAccount {
            name: "Old".to_string(),
            status: None,
            tags: Some("vip".to_string()),
            owner: Some("me".to_string()),
        })
        .await
        .expect("create failed");

    let updated = storage
        .update_by_id(
            created.id,
            AccountPatch {
                name: Some("New".to_string()),
                ..AccountPatch::default()
            },
        )
        .await
        .expect("update failed");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "New");
    assert_eq!(updated.tags.as_deref(), Some("vip"));
    assert_eq!(updated.owner.as_deref(), Some("me"));
    assert_eq!(updated.created_at, created.created_at);

    let fetched = storage.get_by_id(created.id).await.expect("get failed");
    assert_eq!(fetched.name, "New");
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let storage = fresh_storage().await;
    let err = storage
        .update_by_id(
            7,
            AccountPatch {
                name: Some("X".to_string()),
                ..AccountPatch::default()
            },
        )
        .await
        .expect_err("expected an error");
    assert!(matches!(err, AppError::AccountNotFound(7)));
}

#[tokio::test]
async fn delete_removes_permanently() {
    let storage = fresh_storage().await;
    let created = storage.create(named("Gone")).await.expect("create failed");

    storage
        .delete_by_id(created.id)
        .await
        .expect("delete failed");

    let err = storage
        .get_by_id(created.id)
        .await
        .expect_err("expected an error");
    assert!(matches!(err, AppError::AccountNotFound(_)));
    assert!(storage.list().await.expect("list failed").is_empty());
}

#[tokio::test]
async fn delete_missing_is_not_found() {
    let storage = fresh_storage().await;
    let err = storage
        .delete_by_id(99)
        .await
        .expect_err("expected an error");
    assert!(matches!(err, AppError::AccountNotFound(99)));
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let storage = fresh_storage().await;
    let first = storage.create(named("First")).await.expect("create failed");
    storage
        .delete_by_id(first.id)
        .await
        .expect("delete failed");

    let second = storage
        .create(named("Second"))
        .await
        .expect("create failed");
    assert!(second.id > first.id);
}
