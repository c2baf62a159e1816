//! Test utilities for integration tests
use std::fs;
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use agenda::api::AppState;
use agenda::api::app;
use agenda::core::AppConfig;
use agenda::core::db::{async_db, initialize_db};

/// Creates a test application router over a throwaway database.
pub async fn test_app() -> Router {
    // Keep the directory around for the lifetime of the test process;
    // the db connection holds the file open.
    let dir = tempfile::tempdir()
        .expect("Failed to create temp dir")
        .keep();

    let db_path = dir.join("db");
    fs::create_dir_all(&db_path).expect("Failed to create db directory");
    let db_path = db_path.display().to_string();

    let db = async_db(&db_path)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to migrate db");
        Ok(())
    })
    .await
    .unwrap();

    let app_config = AppConfig {
        db_path,
        web_ui_path: dir.join("web-ui").display().to_string(),
        api_base_url: String::from("http://localhost:5000"),
    };
    let app_state = AppState::new(db, app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
