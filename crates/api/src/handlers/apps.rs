//! Handlers for app entries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::board::AppEntry;
use launchpad_core::draft::{AppDraft, ValidAppDraft};
use launchpad_core::error::CoreError;
use launchpad_core::types::DbId;
use launchpad_db::models::app::{CreateApp, UpdateApp};
use launchpad_db::repositories::{AppRepo, SubCategoryRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

/// Validate a form submission and check its sub-category against the store.
async fn validate_draft(state: &AppState, input: &AppDraft) -> AppResult<ValidAppDraft> {
    let draft = input.validate()?;
    let parent = SubCategoryRepo::find_by_id(&state.pool, draft.sub_category_id)
        .await?
        .map(|row| row.category_id);
    draft.check_parent(parent)?;
    Ok(draft)
}

/// POST /api/v1/apps
///
/// The new entry is prepended to the board.
pub async fn create_app(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<AppDraft>,
) -> AppResult<impl IntoResponse> {
    let draft = validate_draft(&state, &input).await?;
    let row = AppRepo::create(&state.pool, &CreateApp::from(draft)).await?;
    let entry = AppEntry::from(row);

    tracing::info!(
        app_id = entry.id,
        category_id = entry.category_id,
        sub_category_id = entry.sub_category_id,
        "App created"
    );

    let mirrored = entry.clone();
    state.board.apply(|board| board.prepend_app(mirrored)).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /api/v1/apps/{id}
///
/// Replace every editable field of an entry; it keeps its board position.
pub async fn update_app(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AppDraft>,
) -> AppResult<impl IntoResponse> {
    let draft = validate_draft(&state, &input).await?;
    let entry = AppRepo::update(&state.pool, id, &UpdateApp::from(draft))
        .await?
        .map(AppEntry::from)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "App", id }))?;

    tracing::info!(app_id = id, "App updated");

    let mirrored = entry.clone();
    state.board.apply(|board| board.replace_app(mirrored)).await;

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/apps/{id}
pub async fn delete_app(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AppRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "App", id }));
    }

    state.board.apply(|board| board.remove_app(id)).await;
    tracing::info!(app_id = id, "App deleted");

    Ok(StatusCode::NO_CONTENT)
}
