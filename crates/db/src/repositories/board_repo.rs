//! Loads the whole board in one pass.
//!
//! Fetch failures are logged and swallowed: the affected part of the board
//! simply stays empty.

use launchpad_core::board::{AppEntry, Board, Category};
use sqlx::PgPool;

use crate::models::category::CategoryRow;
use crate::models::sub_category::SubCategoryRow;
use crate::repositories::{AppRepo, CategoryRepo, SubCategoryRepo};

/// Reads the board snapshot from the three tables.
pub struct BoardRepo;

impl BoardRepo {
    /// Fetch categories (with their sub-categories) and all apps.
    ///
    /// Never fails. A category or sub-category query error yields no
    /// categories; an apps query error yields no apps.
    pub async fn load(pool: &PgPool) -> Board {
        let categories = match Self::fetch_categories(pool).await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching categories");
                Vec::new()
            }
        };

        let apps = match AppRepo::list(pool).await {
            Ok(rows) => rows.into_iter().map(AppEntry::from).collect(),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching apps");
                Vec::new()
            }
        };

        tracing::debug!(
            categories = categories.len(),
            apps = apps.len(),
            "Board loaded"
        );

        Board::new(categories, apps)
    }

    async fn fetch_categories(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let categories = CategoryRepo::list(pool).await?;
        let sub_categories = SubCategoryRepo::list(pool).await?;
        Ok(merge_categories(categories, sub_categories))
    }
}

/// Nest sub-categories under their parents, keeping both lists' order.
///
/// Sub-categories whose parent is not in `categories` are dropped.
pub fn merge_categories(
    categories: Vec<CategoryRow>,
    sub_categories: Vec<SubCategoryRow>,
) -> Vec<Category> {
    let mut merged: Vec<Category> = categories.into_iter().map(Category::from).collect();
    for row in sub_categories {
        if let Some(parent) = merged.iter_mut().find(|c| c.id == row.category_id) {
            parent.sub_categories.push(row.into());
        }
    }
    merged
}
