//! Repository for the `apps` table.

use launchpad_core::types::{now_millis, DbId};
use sqlx::PgPool;

use crate::models::app::{AppRow, CreateApp, UpdateApp};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, url, ai_studio_url, description, category_id, sub_category_id, created_at";

/// Provides CRUD operations for app entries.
pub struct AppRepo;

impl AppRepo {
    /// List all apps, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<AppRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apps ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, AppRow>(&query).fetch_all(pool).await
    }

    /// Find an app by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AppRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apps WHERE id = $1");
        sqlx::query_as::<_, AppRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new app entry stamped with the current time.
    pub async fn create(pool: &PgPool, input: &CreateApp) -> Result<AppRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO apps
                (name, url, ai_studio_url, description, category_id, sub_category_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppRow>(&query)
            .bind(&input.name)
            .bind(&input.url)
            .bind(&input.ai_studio_url)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.sub_category_id)
            .bind(now_millis())
            .fetch_one(pool)
            .await
    }

    /// Replace an app's editable fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateApp,
    ) -> Result<Option<AppRow>, sqlx::Error> {
        let query = format!(
            "UPDATE apps SET
                name = $2,
                url = $3,
                ai_studio_url = $4,
                description = $5,
                category_id = $6,
                sub_category_id = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.url)
            .bind(&input.ai_studio_url)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.sub_category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an app by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM apps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
