//! Repository for the `sub_categories` table.

use launchpad_core::types::{now_millis, DbId};
use sqlx::PgPool;

use crate::models::sub_category::{CreateSubCategory, SubCategoryRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, name, created_at";

/// Provides create/read/delete operations for sub-categories.
pub struct SubCategoryRepo;

impl SubCategoryRepo {
    /// List every sub-category in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SubCategoryRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM sub_categories ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, SubCategoryRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the sub-categories of one category in creation order.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<SubCategoryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sub_categories
             WHERE category_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, SubCategoryRow>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Find a sub-category by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SubCategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sub_categories WHERE id = $1");
        sqlx::query_as::<_, SubCategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new sub-category stamped with the current time.
    ///
    /// Fails with a foreign-key violation if the parent category is missing.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubCategory,
    ) -> Result<SubCategoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO sub_categories (category_id, name, created_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubCategoryRow>(&query)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(now_millis())
            .fetch_one(pool)
            .await
    }

    /// Delete a sub-category of the given category; its apps go with it.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, category_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sub_categories WHERE id = $1 AND category_id = $2")
            .bind(id)
            .bind(category_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
