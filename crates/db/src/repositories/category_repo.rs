//! Repository for the `categories` table.

use launchpad_core::types::{now_millis, DbId};
use sqlx::PgPool;

use crate::models::category::{CategoryRow, CreateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides create/read/delete operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new category stamped with the current time.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<CategoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, created_at)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(&input.name)
            .bind(now_millis())
            .fetch_one(pool)
            .await
    }

    /// Delete a category; its sub-categories and apps go with it.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
