//! Handlers for the session gate.
//!
//! Logging in sets the flag cookie and loads the board into the shared cache;
//! logging out clears both. There is no credential check.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::board::Board;
use launchpad_core::session;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::session::has_session;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
    pub board: Board,
}

/// POST /api/v1/auth/login
///
/// Set the session flag and fetch the board.
pub async fn login(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let board = state.board.reload(&state.pool).await;

    tracing::info!(
        categories = board.categories.len(),
        apps = board.apps.len(),
        "Session started"
    );

    let cookie = session::set_cookie(state.config.session_cookie_secure);
    Ok((
        [(SET_COOKIE, cookie)],
        Json(DataResponse {
            data: LoginResponse {
                authenticated: true,
                board,
            },
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Clear the session flag and drop the cached board.
pub async fn logout(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.board.clear().await;

    tracing::info!("Session ended");

    let cookie = session::clear_cookie(state.config.session_cookie_secure);
    Ok((
        [(SET_COOKIE, cookie)],
        Json(DataResponse {
            data: SessionStatus {
                authenticated: false,
            },
        }),
    ))
}

/// GET /api/v1/auth/session
///
/// Report whether the request carries the session flag.
pub async fn session_status(headers: HeaderMap) -> Json<DataResponse<SessionStatus>> {
    Json(DataResponse {
        data: SessionStatus {
            authenticated: has_session(&headers),
        },
    })
}
