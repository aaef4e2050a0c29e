//! Cookie-based session gate for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use launchpad_core::error::CoreError;
use launchpad_core::session::{cookie_value, is_authenticated, SESSION_KEY};

use crate::error::AppError;
use crate::state::AppState;

/// Marker extracted when the request carries a valid session cookie.
///
/// Use this as an extractor parameter in any handler that requires a session:
///
/// ```ignore
/// async fn my_handler(_session: Session) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Session;

/// Whether any `Cookie` header carries a valid session flag.
pub fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|header| is_authenticated(cookie_value(SESSION_KEY, header)))
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if has_session(&parts.headers) {
            Ok(Session)
        } else {
            Err(AppError::Core(CoreError::Unauthorized(
                "Not logged in".into(),
            )))
        }
    }
}
