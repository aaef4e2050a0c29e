//! Category row model.

use launchpad_core::board::Category;
use launchpad_core::types::{DbId, EpochMillis};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryRow {
    pub id: DbId,
    pub name: String,
    pub created_at: EpochMillis,
}

/// DTO for creating a new category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(row.id, row.name)
    }
}
