use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Category routes mounted at `/categories`.
///
/// ```text
/// POST   /                                  -> create_category
/// DELETE /{id}                              -> delete_category
/// POST   /{id}/sub-categories               -> create_sub_category
/// DELETE /{id}/sub-categories/{sub_id}      -> delete_sub_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(categories::create_category))
        .route("/{id}", delete(categories::delete_category))
        .route(
            "/{id}/sub-categories",
            post(categories::create_sub_category),
        )
        .route(
            "/{id}/sub-categories/{sub_id}",
            delete(categories::delete_sub_category),
        )
}
