//! Handlers for categories and sub-categories.
//!
//! Every write goes to the store first; the returned row is then mirrored
//! into the cached board.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::board::{Category, SubCategory, DEFAULT_SUB_CATEGORY_NAME};
use launchpad_core::draft::NameDraft;
use launchpad_core::error::CoreError;
use launchpad_core::types::DbId;
use launchpad_db::models::category::CreateCategory;
use launchpad_db::models::sub_category::CreateSubCategory;
use launchpad_db::repositories::{CategoryRepo, SubCategoryRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    /// Also create a `Main` sub-category under the new category.
    #[serde(default)]
    pub with_default_sub_category: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubCategoryRequest {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Shared write paths
// ---------------------------------------------------------------------------

/// Insert a category, optionally seeded with a `Main` sub-category, and
/// mirror it into the board.
///
/// A failed `Main` insert is logged; the category itself is still returned.
pub(crate) async fn insert_category(
    state: &AppState,
    name: NameDraft,
    with_default_sub_category: bool,
) -> AppResult<Category> {
    let row = CategoryRepo::create(
        &state.pool,
        &CreateCategory {
            name: name.into_inner(),
        },
    )
    .await?;
    let mut category = Category::from(row);

    tracing::info!(category_id = category.id, "Category created");

    if with_default_sub_category {
        let input = CreateSubCategory {
            category_id: category.id,
            name: DEFAULT_SUB_CATEGORY_NAME.to_string(),
        };
        match SubCategoryRepo::create(&state.pool, &input).await {
            Ok(row) => category.sub_categories.push(row.into()),
            Err(e) => tracing::error!(
                category_id = category.id,
                error = %e,
                "Failed to create default sub-category"
            ),
        }
    }

    let mirrored = category.clone();
    state.board.apply(|board| board.insert_category(mirrored)).await;

    Ok(category)
}

/// Insert a sub-category under an existing category and mirror it.
pub(crate) async fn insert_sub_category(
    state: &AppState,
    category_id: DbId,
    name: NameDraft,
) -> AppResult<SubCategory> {
    CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))?;

    let row = SubCategoryRepo::create(
        &state.pool,
        &CreateSubCategory {
            category_id,
            name: name.into_inner(),
        },
    )
    .await?;
    let sub_category = SubCategory::from(row);

    tracing::info!(
        category_id,
        sub_category_id = sub_category.id,
        "Sub-category created"
    );

    let mirrored = sub_category.clone();
    state
        .board
        .apply(|board| board.insert_sub_category(category_id, mirrored))
        .await;

    Ok(sub_category)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// POST /api/v1/categories
pub async fn create_category(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    let name = NameDraft::parse(&input.name)?;
    let category = insert_category(&state, name, input.with_default_sub_category).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// DELETE /api/v1/categories/{id}
///
/// Removes the category with its sub-categories and apps.
pub async fn delete_category(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    state.board.apply(|board| board.remove_category(id)).await;
    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Sub-categories
// ---------------------------------------------------------------------------

/// POST /api/v1/categories/{id}/sub-categories
pub async fn create_sub_category(
    _session: Session,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Json(input): Json<CreateSubCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    let name = NameDraft::parse(&input.name)?;
    let sub_category = insert_sub_category(&state, category_id, name).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: sub_category })))
}

/// DELETE /api/v1/categories/{id}/sub-categories/{sub_id}
///
/// Removes the sub-category with its apps.
pub async fn delete_sub_category(
    _session: Session,
    State(state): State<AppState>,
    Path((category_id, sub_category_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    if !SubCategoryRepo::delete(&state.pool, category_id, sub_category_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SubCategory",
            id: sub_category_id,
        }));
    }

    state
        .board
        .apply(|board| board.remove_sub_category(category_id, sub_category_id))
        .await;
    tracing::info!(category_id, sub_category_id, "Sub-category deleted");

    Ok(StatusCode::NO_CONTENT)
}
