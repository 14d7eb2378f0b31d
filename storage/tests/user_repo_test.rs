//! Integration tests for [`storage::UserRepository`].
//!
//! Covers save/lookup, duplicate usernames, listing, and last-login updates
//! against a tempfile-backed SQLite database.

use chrono::{Duration, Utc};
use storage::{SqlitePoolManager, StorageError, UserRecord, UserRepository};
use tempfile::TempDir;

async fn create_test_repo() -> (TempDir, UserRepository) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let pool = SqlitePoolManager::new(db_path.to_str().expect("utf-8 path"))
        .await
        .expect("Failed to create pool");
    let repo = UserRepository::new(pool)
        .await
        .expect("Failed to create repository");
    (temp_dir, repo)
}

fn test_user(username: &str) -> UserRecord {
    UserRecord::new(
        username.to_string(),
        "argon2-hash".to_string(),
        "Test".to_string(),
        "Testy".to_string(),
        "+14155551111".to_string(),
    )
}

/// **Test: Save then look up a user by username.**
///
/// **Setup:** Empty DB; save one user.
/// **Action:** `get_user_by_username("test1")`.
/// **Expected:** Returns `Some(user)` with all stored fields intact,
/// including the password hash and timestamps.
#[tokio::test]
async fn test_save_and_get_user() {
    let (_tmp, repo) = create_test_repo().await;

    let user = test_user("test1");
    repo.save(&user).await.expect("Failed to save user");

    let found = repo
        .get_user_by_username("test1")
        .await
        .expect("Failed to query")
        .expect("User should exist");

    assert_eq!(found.username, "test1");
    assert_eq!(found.password_hash, "argon2-hash");
    assert_eq!(found.first_name, "Test");
    assert_eq!(found.last_name, "Testy");
    assert_eq!(found.phone, "+14155551111");
    assert_eq!(found.join_at, found.last_login_at);
}

/// **Test: Look up a username nobody has.**
///
/// **Setup:** Empty DB.
/// **Action:** `get_user_by_username("missing")`.
/// **Expected:** Returns `None`.
#[tokio::test]
async fn test_get_user_not_found() {
    let (_tmp, repo) = create_test_repo().await;

    let found = repo
        .get_user_by_username("missing")
        .await
        .expect("Failed to query");

    assert!(found.is_none());
}

/// **Test: Saving a taken username is classified as AlreadyExists.**
///
/// **Setup:** Save user "test1".
/// **Action:** Save a second record with the same username.
/// **Expected:** `StorageError::AlreadyExists`, not a bare database error.
#[tokio::test]
async fn test_duplicate_username_already_exists() {
    let (_tmp, repo) = create_test_repo().await;

    repo.save(&test_user("test1")).await.expect("Failed to save user");

    let result = repo.save(&test_user("test1")).await;
    assert!(matches!(result, Err(StorageError::AlreadyExists(_))));
}

/// **Test: Listing returns every user, ordered by username.**
///
/// **Setup:** Save users "bravo", "alpha", "charlie".
/// **Action:** `get_all_users()`.
/// **Expected:** Three users in username order.
#[tokio::test]
async fn test_get_all_users_ordered() {
    let (_tmp, repo) = create_test_repo().await;

    for username in ["bravo", "alpha", "charlie"] {
        repo.save(&test_user(username)).await.expect("Failed to save user");
    }

    let users = repo.get_all_users().await.expect("Failed to list users");

    let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(usernames, vec!["alpha", "bravo", "charlie"]);
}

/// **Test: touch_last_login moves last_login_at and nothing else.**
///
/// **Setup:** Save user "test1".
/// **Action:** `touch_last_login("test1", join_at + 1h)`, then re-read.
/// **Expected:** last_login_at is later than join_at; join_at unchanged.
#[tokio::test]
async fn test_touch_last_login() {
    let (_tmp, repo) = create_test_repo().await;

    let user = test_user("test1");
    repo.save(&user).await.expect("Failed to save user");

    repo.touch_last_login("test1", Utc::now() + Duration::hours(1))
        .await
        .expect("Failed to touch last login");

    let found = repo
        .get_user_by_username("test1")
        .await
        .expect("Failed to query")
        .expect("User should exist");

    assert!(found.last_login_at > found.join_at);
}

/// **Test: touch_last_login on an unknown user is NotFound.**
///
/// **Setup:** Empty DB.
/// **Action:** `touch_last_login("missing", now)`.
/// **Expected:** `StorageError::NotFound`.
#[tokio::test]
async fn test_touch_last_login_not_found() {
    let (_tmp, repo) = create_test_repo().await;

    let result = repo.touch_last_login("missing", Utc::now()).await;
    assert!(matches!(result, Err(StorageError::NotFound(_))));
}
