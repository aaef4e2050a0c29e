//! Integration tests for app entry endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_app_normalizes_urls(pool: PgPool) {
    let app = common::build_test_app(pool);
    let work = common::create_category(&app, "Work").await;
    let mail = common::create_sub_category(&app, work, "Mail").await;

    let response = post_json(
        app,
        "/api/v1/apps",
        serde_json::json!({
            "name": " Inbox ",
            "url": "mail.example.com",
            "aiStudioUrl": "aistudio.google.com/app/1",
            "description": "Team mail",
            "categoryId": work,
            "subCategoryId": mail,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let entry = &json["data"];
    assert_eq!(entry["name"], "Inbox");
    assert_eq!(entry["url"], "https://mail.example.com");
    assert_eq!(entry["aiStudioUrl"], "https://aistudio.google.com/app/1");
    assert_eq!(entry["description"], "Team mail");
    assert!(entry["createdAt"].as_i64().unwrap() > 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_ai_studio_url_is_omitted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let work = common::create_category(&app, "Work").await;
    let mail = common::create_sub_category(&app, work, "Mail").await;

    let response = post_json(
        app,
        "/api/v1/apps",
        serde_json::json!({
            "name": "Inbox",
            "url": "http://mail.example.com",
            "aiStudioUrl": "  ",
            "categoryId": work,
            "subCategoryId": mail,
        }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["url"], "http://mail.example.com");
    assert!(json["data"].get("aiStudioUrl").is_none());
    assert_eq!(json["data"]["description"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_app_requires_both_selections(pool: PgPool) {
    let app = common::build_test_app(pool);
    let work = common::create_category(&app, "Work").await;

    let response = post_json(
        app,
        "/api/v1/apps",
        serde_json::json!({ "name": "Inbox", "url": "x.com", "categoryId": work }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Please select both a Category and a Sub-Category");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_app_rejects_mismatched_sub_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let work = common::create_category(&app, "Work").await;
    let play = common::create_category(&app, "Play").await;
    let games = common::create_sub_category(&app, play, "Games").await;

    let response = post_json(
        app.clone(),
        "/api/v1/apps",
        serde_json::json!({
            "name": "Chess", "url": "chess.com", "categoryId": work, "subCategoryId": games,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/api/v1/apps",
        serde_json::json!({
            "name": "Chess", "url": "chess.com", "categoryId": play, "subCategoryId": 999999,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_apps_are_prepended_to_loaded_board(pool: PgPool) {
    let app = common::build_test_app(pool);
    let work = common::create_category(&app, "Work").await;
    let mail = common::create_sub_category(&app, work, "Mail").await;
    common::create_app(&app, "Inbox", work, mail).await;
    get(app.clone(), "/api/v1/board").await;

    common::create_app(&app, "Calendar", work, mail).await;

    let json = body_json(get(app, "/api/v1/board").await).await;
    let names: Vec<_> = json["data"]["apps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Calendar", "Inbox"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_app_moves_it_between_buckets(pool: PgPool) {
    let app = common::build_test_app(pool);
    let work = common::create_category(&app, "Work").await;
    let mail = common::create_sub_category(&app, work, "Mail").await;
    let docs = common::create_sub_category(&app, work, "Docs").await;
    let entry = common::create_app(&app, "Inbox", work, mail).await;
    let id = entry["id"].as_i64().unwrap();
    get(app.clone(), "/api/v1/board").await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/apps/{id}"),
        serde_json::json!({
            "name": "Handbook", "url": "wiki.example.com", "description": "Docs",
            "categoryId": work, "subCategoryId": docs,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Handbook");
    assert_eq!(json["data"]["createdAt"], entry["createdAt"]);

    let uri = format!("/api/v1/view?view=SUBCATEGORY&categoryId={work}&subCategoryId={docs}");
    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(json["data"]["content"]["items"][0]["name"], "Handbook");

    let uri = format!("/api/v1/view?view=SUBCATEGORY&categoryId={work}&subCategoryId={mail}");
    let json = body_json(get(app, &uri).await).await;
    assert!(json["data"]["content"]["items"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_app_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let work = common::create_category(&app, "Work").await;
    let mail = common::create_sub_category(&app, work, "Mail").await;

    let response = put_json(
        app,
        "/api/v1/apps/999999",
        serde_json::json!({
            "name": "Ghost", "url": "ghost.com", "categoryId": work, "subCategoryId": mail,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_app_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let work = common::create_category(&app, "Work").await;
    let mail = common::create_sub_category(&app, work, "Mail").await;
    let id = common::create_app(&app, "Inbox", work, mail).await["id"]
        .as_i64()
        .unwrap();

    let response = delete(app.clone(), &format!("/api/v1/apps/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(app, &format!("/api/v1/apps/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
