use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Session routes mounted at `/auth`. None of them require a session.
///
/// ```text
/// POST   /login     -> login
/// POST   /logout    -> logout
/// GET    /session   -> session_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::session_status))
}
