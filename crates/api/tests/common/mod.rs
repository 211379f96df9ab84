#![allow(dead_code)]

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use flate2::read::GzDecoder;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use lifejournal_api::config::{LogFormat, Protocol, ServerConfig};
use lifejournal_api::router::build_app_router;
use lifejournal_api::state::AppState;
use lifejournal_db::{Backend, SqliteRepository};

/// Build a test `ServerConfig` whose static and upload directories live
/// under `root`.
pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        protocol: Protocol::Http,
        backend: Backend::Sqlite,
        database_target: "sqlite::memory:".to_string(),
        static_dir: root.join("static"),
        upload_dir: root.join("uploads"),
        tls_cert_path: root.join("cert.pem"),
        tls_key_path: root.join("private.key"),
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        log_format: LogFormat::Text,
    }
}

/// A router over a private in-memory store plus handles for seeding it.
pub struct TestApp {
    pub router: Router,
    pub repo: Arc<SqliteRepository>,
    pub config: ServerConfig,
    /// Keeps the static/upload directories alive for the test's duration.
    pub dir: TempDir,
}

impl TestApp {
    /// Run raw SQL against the backing store.
    pub async fn seed(&self, sql: &str) {
        sqlx::raw_sql(sql)
            .execute(self.repo.pool())
            .await
            .unwrap_or_else(|e| panic!("seed failed: {e}\n{sql}"));
    }
}

/// Build the full application router with the production middleware stack.
pub async fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("static")).unwrap();
    let config = test_config(dir.path());

    let repo = Arc::new(SqliteRepository::in_memory().await.unwrap());
    let state = AppState {
        repo: repo.clone(),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        repo,
        config,
        dir,
    }
}

pub async fn get(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &TestApp, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub const BOUNDARY: &str = "lifejournal-test-boundary";

/// POST a multipart form; each part is `(field, file_name, bytes)`.
pub async fn post_multipart(app: &TestApp, uri: &str, parts: &[(&str, &str, &[u8])]) -> Response {
    let mut body = Vec::new();
    for (field, file_name, bytes) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Decompress a gzip body and parse it as JSON.
pub async fn gzip_body_json(response: Response) -> serde_json::Value {
    let compressed = body_bytes(response).await;
    let mut json = String::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_string(&mut json)
        .unwrap();
    serde_json::from_str(&json).unwrap()
}
