//! Web API Folder Tests
//!
//! Integration tests for the folder hierarchy endpoints.

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum_test::TestServer;
use cabinet::folder::{FileRepository, FolderRepository, NewFileRecord, NewFolder};
use cabinet::web::handlers::AppState;
use cabinet::web::middleware::JwtState;
use cabinet::web::router::create_router;
use cabinet::Database;
use serde_json::{json, Value};
use std::sync::Arc;

const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only";

/// Create a test server with an in-memory database.
async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db.clone(), TEST_JWT_SECRET, 900));
    let jwt_state = Arc::new(JwtState::new(TEST_JWT_SECRET));

    let router = create_router(app_state, jwt_state, &[]);
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Register a user, log in, and return (token, user_id).
async fn setup_user(server: &TestServer, db: &Database, username: &str) -> (String, i64) {
    server
        .post("/api/auth/register")
        .json(&json!({
            "username": username,
            "password": "password123",
            "nickname": username
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "username": username,
            "password": "password123"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let token = body["token"].as_str().unwrap().to_string();

    let user = cabinet::user::UserRepository::new(db.pool())
        .get_by_username(username)
        .await
        .unwrap()
        .unwrap();

    (token, user.id)
}

/// Seed a root folder directly through the repository (the HTTP surface
/// only creates folders under an existing parent).
async fn seed_root_folder(db: &Database, name: &str, owner_id: i64) -> i64 {
    FolderRepository::new(db.pool())
        .create(&NewFolder::new(name, owner_id))
        .await
        .unwrap()
        .id
}

// ============================================================================
// Folder Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_folder() {
    let (server, db) = create_test_server().await;
    let (token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    let response = server
        .post(&format!("/api/folders/{}", root_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "folder_name": "Docs" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["folder_id"].is_i64());
    assert_eq!(body["folder_name"], "Docs");
    assert_eq!(body["folder_owner"], user_id);
}

#[tokio::test]
async fn test_create_duplicate_folder_name_conflicts() {
    let (server, db) = create_test_server().await;
    let (token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    server
        .post(&format!("/api/folders/{}", root_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "folder_name": "Docs" }))
        .await
        .assert_status_ok();

    // Second "Docs" under the same parent must be rejected, not 200
    let response = server
        .post(&format!("/api/folders/{}", root_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "folder_name": "Docs" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_create_same_name_under_different_parent() {
    let (server, db) = create_test_server().await;
    let (token, user_id) = setup_user(&server, &db, "alice").await;
    let root_a = seed_root_folder(&db, "Root A", user_id).await;
    let root_b = seed_root_folder(&db, "Root B", user_id).await;

    for parent in [root_a, root_b] {
        server
            .post(&format!("/api/folders/{}", parent))
            .add_header(AUTHORIZATION, format!("Bearer {}", token))
            .json(&json!({ "folder_name": "Docs" }))
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn test_create_folder_under_missing_parent() {
    let (server, db) = create_test_server().await;
    let (token, _user_id) = setup_user(&server, &db, "alice").await;

    let response = server
        .post("/api/folders/9999")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "folder_name": "Orphan" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_folder_empty_name() {
    let (server, db) = create_test_server().await;
    let (token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    for bad in ["", "   "] {
        let response = server
            .post(&format!("/api/folders/{}", root_id))
            .add_header(AUTHORIZATION, format!("Bearer {}", token))
            .json(&json!({ "folder_name": bad }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_create_folder_requires_auth() {
    let (server, db) = create_test_server().await;
    let (_token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    let response = server
        .post(&format!("/api/folders/{}", root_id))
        .json(&json!({ "folder_name": "Docs" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Folder Listing Tests
// ============================================================================

#[tokio::test]
async fn test_get_folder_contents() {
    let (server, db) = create_test_server().await;
    let (token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    let folder_repo = FolderRepository::new(db.pool());
    let child_a = folder_repo
        .create(&NewFolder::new("Child A", user_id).with_parent(root_id))
        .await
        .unwrap();
    let child_b = folder_repo
        .create(&NewFolder::new("Child B", user_id).with_parent(root_id))
        .await
        .unwrap();
    // Grandchild must not show up in the root listing
    folder_repo
        .create(&NewFolder::new("Grandchild", user_id).with_parent(child_a.id))
        .await
        .unwrap();

    let file_repo = FileRepository::new(db.pool());
    file_repo
        .create(&NewFileRecord::new(root_id, "readme.txt", 64, user_id))
        .await
        .unwrap();
    // A file in a child folder must not show up either
    file_repo
        .create(&NewFileRecord::new(child_b.id, "nested.txt", 32, user_id))
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/folders/{}", root_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let folders = body["folders"].as_array().unwrap();
    let files = body["files"].as_array().unwrap();

    assert_eq!(folders.len(), 2);
    let names: Vec<&str> = folders.iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"Child A"));
    assert!(names.contains(&"Child B"));

    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["filename"], "readme.txt");
    assert_eq!(files[0]["size"], 64);
}

#[tokio::test]
async fn test_get_empty_folder() {
    let (server, db) = create_test_server().await;
    let (token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    let response = server
        .get(&format!("/api/folders/{}", root_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["folders"].as_array().unwrap().len(), 0);
    assert_eq!(body["files"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_missing_folder() {
    let (server, db) = create_test_server().await;
    let (token, _user_id) = setup_user(&server, &db, "alice").await;

    let response = server
        .get("/api/folders/9999")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Folder does not exist");
}

#[tokio::test]
async fn test_get_folder_requires_auth() {
    let (server, db) = create_test_server().await;
    let (_token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    let response = server.get(&format!("/api/folders/{}", root_id)).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Folder Deletion Tests
// ============================================================================

#[tokio::test]
async fn test_delete_folder() {
    let (server, db) = create_test_server().await;
    let (token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    let response = server
        .delete(&format!("/api/folders/{}", root_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["response"], "Folder Root removed");

    // Subsequent GET on the deleted id is a 404
    let response = server
        .get(&format!("/api/folders/{}", root_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_folder_cascades() {
    let (server, db) = create_test_server().await;
    let (token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    let folder_repo = FolderRepository::new(db.pool());
    let child = folder_repo
        .create(&NewFolder::new("Child", user_id).with_parent(root_id))
        .await
        .unwrap();
    let grandchild = folder_repo
        .create(&NewFolder::new("Grandchild", user_id).with_parent(child.id))
        .await
        .unwrap();

    let file_repo = FileRepository::new(db.pool());
    file_repo
        .create(&NewFileRecord::new(grandchild.id, "deep.txt", 16, user_id))
        .await
        .unwrap();

    server
        .delete(&format!("/api/folders/{}", root_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await
        .assert_status_ok();

    // The whole subtree is gone, files included
    assert!(folder_repo.get_by_id(child.id).await.unwrap().is_none());
    assert!(folder_repo
        .get_by_id(grandchild.id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        file_repo.count_by_folder(grandchild.id).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_delete_missing_folder() {
    let (server, db) = create_test_server().await;
    let (token, _user_id) = setup_user(&server, &db, "alice").await;

    let response = server
        .delete("/api/folders/9999")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_folder_requires_auth() {
    let (server, db) = create_test_server().await;
    let (_token, user_id) = setup_user(&server, &db, "alice").await;
    let root_id = seed_root_folder(&db, "Root", user_id).await;

    let response = server.delete(&format!("/api/folders/{}", root_id)).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Cross-user Access
// ============================================================================

#[tokio::test]
async fn test_any_authenticated_user_may_operate_on_any_folder() {
    let (server, db) = create_test_server().await;
    let (_alice_token, alice_id) = setup_user(&server, &db, "alice").await;
    let (bob_token, _bob_id) = setup_user(&server, &db, "bobby").await;
    let root_id = seed_root_folder(&db, "Alices Root", alice_id).await;

    // Authentication is the only gate; ownership is not checked
    let response = server
        .get(&format!("/api/folders/{}", root_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", bob_token))
        .await;

    response.assert_status_ok();
}
