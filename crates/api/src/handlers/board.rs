//! Handlers for reading the cached board.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/board
///
/// The merged board, loaded on first use if the cache is empty.
pub async fn get_board(
    _session: Session,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let board = state.board.snapshot(&state.pool).await;
    Ok(Json(DataResponse { data: board }))
}

/// POST /api/v1/board/reload
///
/// Re-fetch the board from the store.
pub async fn reload_board(
    _session: Session,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let board = state.board.reload(&state.pool).await;

    tracing::debug!(
        categories = board.categories.len(),
        apps = board.apps.len(),
        "Board reloaded"
    );

    Ok(Json(DataResponse { data: board }))
}
