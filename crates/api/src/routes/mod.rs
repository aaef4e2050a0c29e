pub mod apps;
pub mod auth;
pub mod board;
pub mod categories;
pub mod health;
pub mod view;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth                                      login, logout, session status
/// /board                                     cached board, reload
/// /view                                      view model, category modal
/// /categories                                create, delete
/// /categories/{id}/sub-categories            create
/// /categories/{id}/sub-categories/{sub_id}   delete
/// /apps                                      create
/// /apps/{id}                                 update, delete
/// /apps/describe                             AI description suggestion
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/board", board::router())
        .nest("/view", view::router())
        .nest("/categories", categories::router())
        .nest("/apps", apps::router())
}
