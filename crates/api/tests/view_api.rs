//! Integration tests for the view model and the view-aware category modal.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::Value;
use sqlx::PgPool;

fn item_names(json: &Value) -> Vec<String> {
    json["data"]["content"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

/// `Work` with `Mail` (Inbox, Calendar) and `Docs` (Wiki); `Play` with
/// `Games` (Chess). Returns (work, mail, docs, play).
async fn seed(app: &axum::Router) -> (i64, i64, i64, i64) {
    let work = common::create_category(app, "Work").await;
    let mail = common::create_sub_category(app, work, "Mail").await;
    let docs = common::create_sub_category(app, work, "Docs").await;
    let play = common::create_category(app, "Play").await;
    let games = common::create_sub_category(app, play, "Games").await;
    common::create_app(app, "Inbox", work, mail).await;
    common::create_app(app, "Calendar", work, mail).await;
    common::create_app(app, "Wiki", work, docs).await;
    common::create_app(app, "Chess", play, games).await;
    (work, mail, docs, play)
}

// ---------------------------------------------------------------------------
// GET /view
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn home_lists_categories_with_section_counts(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let json = body_json(get(app, "/api/v1/view").await).await;
    let data = &json["data"];
    assert_eq!(data["view"]["type"], "HOME");
    assert_eq!(data["navTab"], "HOME");
    assert_eq!(data["heading"]["title"], "LAUNCHPAD");
    assert_eq!(data["addAction"]["kind"], "CREATE_CATEGORY");
    assert_eq!(data["categoryModalLabel"], "Category");
    assert_eq!(data["content"]["kind"], "CATEGORIES");
    assert_eq!(data["content"]["items"][0]["sectionCount"], 2);
    assert_eq!(item_names(&json), ["Work", "Play"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_substring(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let json = body_json(get(app.clone(), "/api/v1/view?view=HOME&term=pL").await).await;
    assert_eq!(item_names(&json), ["Play"]);

    let json = body_json(get(app, "/api/v1/view?view=GRID&term=CAL").await).await;
    assert_eq!(item_names(&json), ["Calendar"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_view_shows_sub_categories(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (work, ..) = seed(&app).await;

    let json = body_json(get(app, &format!("/api/v1/view?view=CATEGORY&categoryId={work}")).await)
        .await;
    let data = &json["data"];
    assert_eq!(data["heading"]["title"], "Work");
    assert_eq!(data["heading"]["subtitle"], "2 In Section");
    assert!(data["navTab"].is_null());
    assert_eq!(data["addAction"]["kind"], "CREATE_SUB_CATEGORY");
    assert_eq!(data["addAction"]["parentName"], "Work");
    assert_eq!(data["categoryModalLabel"], "Sub-Category");
    assert_eq!(data["content"]["items"][0]["appCount"], 2);
    assert_eq!(item_names(&json), ["Mail", "Docs"]);

    let crumbs: Vec<_> = data["breadcrumbs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(crumbs, ["HUB", "Work"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sub_category_view_searches_name_and_description(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (work, mail, ..) = seed(&app).await;

    let uri = format!("/api/v1/view?view=SUBCATEGORY&categoryId={work}&subCategoryId={mail}");
    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(json["data"]["heading"]["subtitle"], "2 Active Apps");
    assert_eq!(json["data"]["addAction"]["kind"], "CREATE_APP");
    assert_eq!(json["data"]["addAction"]["initialSubCategoryId"], mail);

    let json = body_json(get(app, &format!("{uri}&term=inb")).await).await;
    assert_eq!(item_names(&json), ["Inbox"]);
    assert_eq!(json["data"]["heading"]["subtitle"], "1 Active Apps");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn jump_view_shows_recent_then_matches(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let json = body_json(get(app.clone(), "/api/v1/view?view=JUMP").await).await;
    assert_eq!(json["data"]["navTab"], "JUMP");
    assert!(json["data"]["addAction"].is_null());
    assert_eq!(item_names(&json), ["Chess", "Wiki", "Calendar", "Inbox"]);

    let json = body_json(get(app, "/api/v1/view?view=jump&term=zzz").await).await;
    assert!(item_names(&json).is_empty());
    assert_eq!(json["data"]["emptyMessage"], "No apps found matching \"zzz\"");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn grid_group_limits_to_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (work, mail, ..) = seed(&app).await;

    let json = body_json(get(app, &format!("/api/v1/view?view=GRID_GROUP&groupId={work}")).await)
        .await;
    let data = &json["data"];
    assert_eq!(data["navTab"], "GRID");
    assert_eq!(data["heading"]["subtitle"], "Group Content");
    assert_eq!(data["addAction"]["initialCategoryId"], work);
    assert_eq!(data["addAction"]["initialSubCategoryId"], mail);
    assert_eq!(item_names(&json).len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn grid_group_of_unknown_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = get(app, "/api/v1/view?view=GRID_GROUP&groupId=999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_view_query_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/view?view=SIDEWAYS").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/api/v1/view?view=SUBCATEGORY&categoryId=1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// POST /view/categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn modal_on_home_creates_plain_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/view/categories",
        serde_json::json!({ "view": { "type": "HOME" }, "name": "Work" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["kind"], "CATEGORY");
    assert_eq!(json["data"]["item"]["name"], "Work");
    assert!(json["data"]["item"]["subCategories"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn modal_on_grid_adds_main_sub_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app.clone(),
        "/api/v1/view/categories",
        serde_json::json!({ "view": { "type": "GRID" }, "name": "Tools" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["item"]["subCategories"][0]["name"], "Main");

    let json = body_json(get(app, "/api/v1/view?view=HOME").await).await;
    assert_eq!(json["data"]["content"]["items"][0]["sectionCount"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn modal_on_category_creates_sub_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let work = common::create_category(&app, "Work").await;

    let response = post_json(
        app.clone(),
        "/api/v1/view/categories",
        serde_json::json!({
            "view": { "type": "CATEGORY", "categoryId": work },
            "name": "Docs",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["kind"], "SUB_CATEGORY");
    assert_eq!(json["data"]["item"]["name"], "Docs");

    let json = body_json(get(app, &format!("/api/v1/view?view=CATEGORY&categoryId={work}")).await)
        .await;
    assert_eq!(item_names(&json), ["Docs"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn modal_is_ignored_in_other_views(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app.clone(),
        "/api/v1/view/categories",
        serde_json::json!({ "view": { "type": "JUMP" }, "name": "Nowhere" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].is_null());

    let json = body_json(get(app, "/api/v1/board").await).await;
    assert!(json["data"]["categories"].as_array().unwrap().is_empty());
}
