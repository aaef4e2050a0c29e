use axum::routing::{get, post};
use axum::Router;

use crate::handlers::board;
use crate::state::AppState;

/// Board routes mounted at `/board`.
///
/// ```text
/// GET    /          -> get_board
/// POST   /reload    -> reload_board
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(board::get_board))
        .route("/reload", post(board::reload_board))
}
