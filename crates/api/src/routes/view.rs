use axum::routing::{get, post};
use axum::Router;

use crate::handlers::view;
use crate::state::AppState;

/// View-model routes mounted at `/view`.
///
/// ```text
/// GET    /             -> get_view
/// POST   /categories   -> submit_category_modal
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view::get_view))
        .route("/categories", post(view::submit_category_modal))
}
