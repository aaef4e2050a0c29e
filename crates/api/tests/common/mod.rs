#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use launchpad_api::board_cache::BoardCache;
use launchpad_api::config::ServerConfig;
use launchpad_api::describe::{DescribeError, DescriptionGenerator};
use launchpad_api::router::build_app_router;
use launchpad_api::state::AppState;

/// `Cookie` header value of a logged-in browser.
pub const SESSION_COOKIE: &str = "def_auth_session=true";

/// Build a test `ServerConfig` with safe defaults and no AI client.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session_cookie_secure: false,
        gemini: None,
    }
}

/// Build the full application router using the given database pool.
///
/// The returned router owns one board cache; clone it to send several
/// requests against the same cache.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_describer(pool, None)
}

pub fn build_test_app_with_describer(
    pool: PgPool,
    describer: Option<Arc<dyn DescriptionGenerator>>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        board: Arc::new(BoardCache::new()),
        describer,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Description stubs
// ---------------------------------------------------------------------------

/// Always answers with the same description.
pub struct FixedDescriber(pub &'static str);

#[async_trait]
impl DescriptionGenerator for FixedDescriber {
    async fn describe(&self, _app_name: &str, _url: &str) -> Result<String, DescribeError> {
        Ok(self.0.to_string())
    }
}

/// Always fails as if the remote API rejected the call.
pub struct FailingDescriber;

#[async_trait]
impl DescriptionGenerator for FailingDescriber {
    async fn describe(&self, _app_name: &str, _url: &str) -> Result<String, DescribeError> {
        Err(DescribeError::HttpStatus(503))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request, optionally with a JSON body and a `Cookie` header.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// GET with the session cookie.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(SESSION_COOKIE)).await
}

/// GET without any cookie.
pub async fn get_anonymous(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// POST a JSON body with the session cookie.
pub async fn post_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json), Some(SESSION_COOKIE)).await
}

/// POST a JSON body without any cookie.
pub async fn post_json_anonymous(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json), None).await
}

/// POST with no body and no cookie (login, logout).
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, None).await
}

/// PUT a JSON body with the session cookie.
pub async fn put_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json), Some(SESSION_COOKIE)).await
}

/// DELETE with the session cookie.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(SESSION_COOKIE)).await
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a category through the API and return its id.
pub async fn create_category(app: &Router, name: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a sub-category through the API and return its id.
pub async fn create_sub_category(app: &Router, category_id: i64, name: &str) -> i64 {
    let response = post_json(
        app.clone(),
        &format!("/api/v1/categories/{category_id}/sub-categories"),
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an app through the API and return its JSON.
pub async fn create_app(app: &Router, name: &str, category_id: i64, sub_category_id: i64) -> Value {
    let response = post_json(
        app.clone(),
        "/api/v1/apps",
        serde_json::json!({
            "name": name,
            "url": format!("{}.example.com", name.to_lowercase()),
            "categoryId": category_id,
            "subCategoryId": sub_category_id,
        }),
    )
    .await;
    body_json(response).await["data"].clone()
}
