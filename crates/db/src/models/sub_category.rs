//! Sub-category row model.

use launchpad_core::board::SubCategory;
use launchpad_core::types::{DbId, EpochMillis};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sub_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubCategoryRow {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub created_at: EpochMillis,
}

/// DTO for creating a new sub-category.
#[derive(Debug, Clone)]
pub struct CreateSubCategory {
    pub category_id: DbId,
    pub name: String,
}

impl From<SubCategoryRow> for SubCategory {
    fn from(row: SubCategoryRow) -> Self {
        SubCategory {
            id: row.id,
            name: row.name,
        }
    }
}
