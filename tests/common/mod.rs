use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use texfab_api::auth::{AuthConfig, AuthService};
use texfab_api::config::AppConfig;
use texfab_api::db;
use texfab_api::services::AppServices;
use texfab_api::storage::MediaStore;
use texfab_api::{app_router, AppState};

const TEST_JWT_SECRET: &str =
    "test_secret_key_for_integration_tests_only_padded_to_sixty_four_chars__";

/// Harness spinning up the full application router over a scratch SQLite
/// database and media directory. Each instance is fully isolated.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _scratch: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let scratch = tempfile::tempdir().expect("scratch dir");
        let db_path = scratch.path().join("texfab_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            TEST_JWT_SECRET.to_string(),
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;
        cfg.media_root = scratch.path().join("media").display().to_string();

        let pool = db::establish_connection(&cfg)
            .await
            .expect("test database");
        db::run_migrations(&pool).await.expect("migrations");

        let db_arc = Arc::new(pool);
        let auth = Arc::new(AuthService::new(AuthConfig::from_app_config(&cfg)));
        let media = MediaStore::new(cfg.media_root.clone());
        let services = AppServices::new(db_arc.clone(), auth.clone(), media);

        let state = AppState {
            db: db_arc,
            config: cfg,
            auth,
            services,
        };
        let router = app_router(state.clone());

        Self {
            router,
            state,
            _scratch: scratch,
        }
    }

    /// Register a user and return a bearer token for them.
    pub async fn signup(&self, username: &str) -> String {
        let response = self
            .request(
                Method::POST,
                "/api/v1/auth/signup",
                None,
                Some(json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": "s3cret-password",
                    "password2": "s3cret-password",
                })),
            )
            .await;
        assert_eq!(response.status(), 201, "signup should succeed");
        let body = response_json(response).await;
        body["token"].as_str().expect("token in response").to_string()
    }

    /// Send a JSON request, optionally authenticated.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        self.router.clone().oneshot(request).await.expect("response")
    }

    /// Submit a material form as multipart, with `embed=1` so mutations
    /// answer with JSON instead of a redirect.
    pub async fn submit_material(
        &self,
        method: Method,
        path: &str,
        token: &str,
        fields: &[(&str, &str)],
        image: Option<(&str, &[u8])>,
    ) -> Response {
        let mut all_fields: Vec<(&str, &str)> = fields.to_vec();
        all_fields.push(("embed", "1"));
        let (content_type, body) = multipart_form(&all_fields, image);

        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .expect("multipart request");

        self.router.clone().oneshot(request).await.expect("response")
    }
}

/// Encode fields (and an optional `image` file part) as a multipart body.
pub fn multipart_form(
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> (String, Vec<u8>) {
    const BOUNDARY: &str = "texfab-test-boundary";

    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

pub async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json response")
    }
}

/// Field names reported in a validation-error response body.
pub fn error_fields(body: &Value) -> Vec<String> {
    body["fields"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e["field"].as_str().map(ToString::to_string))
                .collect()
        })
        .unwrap_or_default()
}
