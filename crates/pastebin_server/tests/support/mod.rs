//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use pastebin_server::{create_app, AppState, Config, Database};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

pub(crate) fn test_config_for_db_path(db_path: &Path) -> Config {
    Config {
        port: 0,
        db_path: db_path.to_str().expect("db path").to_string(),
        max_paste_size: 10_000_000,
        test_mode: false,
    }
}

pub(crate) fn test_server_for_config(config: Config) -> TestServer {
    let db = Database::new(config.db_path.as_str()).expect("open db");
    let state = AppState::with_database(config, db);
    let app = create_app(state, false);
    TestServer::new(app).expect("server")
}

pub(crate) fn lazy_test_server_for_config(config: Config) -> TestServer {
    let app = create_app(AppState::new(config), false);
    TestServer::new(app).expect("server")
}

pub(crate) fn setup_test_server() -> (TestServer, TempDir) {
    setup_test_server_with(|_| {})
}

pub(crate) fn setup_test_server_with(configure: impl FnOnce(&mut Config)) -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("db");
    let mut config = test_config_for_db_path(&db_path);
    configure(&mut config);
    (test_server_for_config(config), temp_dir)
}

/// Create a paste through the API and return its id.
pub(crate) async fn create_paste(server: &TestServer, body: Value) -> String {
    let response = server.post("/api/pastes").json(&body).await;
    assert_eq!(response.status_code(), axum::http::StatusCode::CREATED);
    let created: Value = response.json();
    created["id"].as_str().expect("id").to_string()
}
