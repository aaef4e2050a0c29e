//! Handler for AI-suggested app descriptions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    /// `None` when no generator is configured or the call failed.
    pub description: Option<String>,
}

/// POST /api/v1/apps/describe
///
/// Suggest a short description for an app name and URL. Never fails once
/// the input is valid: generator problems are logged and answered with
/// `null`.
pub async fn describe_app(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<DescribeRequest>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    let url = input.url.trim();
    if name.is_empty() || url.is_empty() {
        return Err(AppError::BadRequest(
            "Both name and url are required to suggest a description".into(),
        ));
    }

    let description = match &state.describer {
        None => {
            tracing::debug!("No description generator configured");
            None
        }
        Some(describer) => match describer.describe(name, url).await {
            Ok(description) => Some(description),
            Err(e) => {
                tracing::error!(error = %e, "Description generation failed");
                None
            }
        },
    };

    Ok(Json(DataResponse {
        data: DescribeResponse { description },
    }))
}
