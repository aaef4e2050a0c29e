use axum::routing::{post, put};
use axum::Router;

use crate::handlers::{apps, describe};
use crate::state::AppState;

/// App entry routes mounted at `/apps`.
///
/// ```text
/// POST   /             -> create_app
/// PUT    /{id}         -> update_app
/// DELETE /{id}         -> delete_app
/// POST   /describe     -> describe_app
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(apps::create_app))
        .route("/describe", post(describe::describe_app))
        .route("/{id}", put(apps::update_app).delete(apps::delete_app))
}
