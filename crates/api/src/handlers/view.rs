//! Handlers for the view model.
//!
//! The client sends its current view state and search term; the server
//! answers with everything the screen shows for it, computed against the
//! cached board.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::board::{Board, Category, SubCategory};
use launchpad_core::draft::NameDraft;
use launchpad_core::error::CoreError;
use launchpad_core::filter::{displayed_content, empty_message, DisplayedContent};
use launchpad_core::types::DbId;
use launchpad_core::view::{
    AddAction, Breadcrumb, CategoryCreateTarget, Heading, NavTab, ViewKind, ViewState,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::categories::{insert_category, insert_sub_category};
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /view`. Ids a view doesn't use are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewQuery {
    pub view: Option<String>,
    pub category_id: Option<DbId>,
    pub sub_category_id: Option<DbId>,
    pub group_id: Option<DbId>,
    #[serde(default)]
    pub term: String,
}

impl ViewQuery {
    fn view_state(&self) -> AppResult<ViewState> {
        let kind = match self.view.as_deref() {
            Some(raw) => raw.parse::<ViewKind>()?,
            None => ViewKind::Home,
        };
        Ok(ViewState::from_parts(
            kind,
            self.category_id,
            self.sub_category_id,
            self.group_id,
        )?)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub view: ViewState,
    pub term: String,
    pub nav_tab: Option<NavTab>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub heading: Heading,
    pub add_action: Option<AddAction>,
    pub category_modal_label: &'static str,
    pub content: DisplayedContent,
    /// Set only when `content` is empty and the view has an empty-state text.
    pub empty_message: Option<String>,
}

/// Build the view model for `view` and `term` against `board`.
pub fn render_view(board: &Board, view: ViewState, term: String) -> ViewModel {
    let content = displayed_content(board, &view, &term);
    let empty = if content.is_empty() {
        empty_message(&view, &term)
    } else {
        None
    };

    ViewModel {
        view,
        nav_tab: view.nav_tab(),
        breadcrumbs: view.breadcrumbs(board),
        heading: view.heading(board, content.len()),
        add_action: view.add_action(board),
        category_modal_label: view.category_modal_label(),
        content,
        empty_message: empty,
        term,
    }
}

/// GET /api/v1/view
///
/// A GRID_GROUP view of a category that is not on the board is a 404.
pub async fn get_view(
    _session: Session,
    State(state): State<AppState>,
    Query(params): Query<ViewQuery>,
) -> AppResult<impl IntoResponse> {
    let view = params.view_state()?;
    let board = state.board.snapshot(&state.pool).await;
    if let ViewState::GridGroup { group_id } = view {
        if view.current_category(&board).is_none() {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Category",
                id: group_id,
            }));
        }
    }
    Ok(Json(DataResponse {
        data: render_view(&board, view, params.term),
    }))
}

// ---------------------------------------------------------------------------
// Category modal
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CategoryModalRequest {
    pub view: ViewState,
    pub name: String,
}

/// What a category-modal submission created.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryModalResult {
    Category(Category),
    SubCategory(SubCategory),
}

/// POST /api/v1/view/categories
///
/// Submit the category modal from a view. HOME creates a category, GRID a
/// category with a `Main` sub-category, CATEGORY a sub-category of the
/// current category. Other views ignore the submission and answer
/// `data: null`.
pub async fn submit_category_modal(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<CategoryModalRequest>,
) -> AppResult<impl IntoResponse> {
    let name = NameDraft::parse(&input.name)?;

    let created = match input.view.category_create_target() {
        Some(CategoryCreateTarget::MainCategory {
            with_default_sub_category,
        }) => Some(CategoryModalResult::Category(
            insert_category(&state, name, with_default_sub_category).await?,
        )),
        Some(CategoryCreateTarget::SubCategory { category_id }) => {
            Some(CategoryModalResult::SubCategory(
                insert_sub_category(&state, category_id, name).await?,
            ))
        }
        None => {
            tracing::debug!(view = %input.view.kind(), "Category modal ignored in this view");
            None
        }
    };

    let status = if created.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: created })))
}
