//! The launchpad board: categories, their sub-categories, and app entries.
//!
//! A [`Board`] is the in-memory snapshot fetched from the store at login.
//! Successful writes are mirrored into it so later views see them without a
//! refetch.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, EpochMillis};

/// Shown on an app card when the entry has no description.
pub const FALLBACK_DESCRIPTION: &str = "Launch Application";

/// Name of the sub-category created alongside a category added from the grid.
pub const DEFAULT_SUB_CATEGORY_NAME: &str = "Main";

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub sub_categories: Vec<SubCategory>,
}

impl Category {
    /// A freshly created category has no sub-categories yet.
    pub fn new(id: DbId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sub_categories: Vec::new(),
        }
    }
}

/// A launchable web application pinned to one category / sub-category pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    pub id: DbId,
    pub name: String,
    pub url: String,
    pub description: String,
    pub category_id: DbId,
    pub sub_category_id: DbId,
    pub created_at: EpochMillis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_studio_url: Option<String>,
}

impl AppEntry {
    /// Text for the card subtitle.
    pub fn display_description(&self) -> &str {
        if self.description.is_empty() {
            FALLBACK_DESCRIPTION
        } else {
            &self.description
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub categories: Vec<Category>,
    pub apps: Vec<AppEntry>,
}

impl Board {
    pub fn new(categories: Vec<Category>, apps: Vec<AppEntry>) -> Self {
        Self { categories, apps }
    }

    pub fn category(&self, id: DbId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn sub_category(&self, category_id: DbId, sub_category_id: DbId) -> Option<&SubCategory> {
        self.category(category_id)?
            .sub_categories
            .iter()
            .find(|s| s.id == sub_category_id)
    }

    pub fn app(&self, id: DbId) -> Option<&AppEntry> {
        self.apps.iter().find(|a| a.id == id)
    }

    /// First sub-category of a category, used to preselect the app form.
    pub fn default_sub_category(&self, category_id: DbId) -> Option<&SubCategory> {
        self.category(category_id)?.sub_categories.first()
    }

    /// Number of apps filed under a sub-category.
    ///
    /// Only the sub-category id is compared; ids are unique across categories.
    pub fn app_count_for_sub_category(&self, sub_category_id: DbId) -> usize {
        self.apps
            .iter()
            .filter(|a| a.sub_category_id == sub_category_id)
            .count()
    }

    // -- Mirrored mutations ------------------------------------------------

    // A mirrored insert may race a board load that already picked up the
    // same row, so inserts replace an entry with the same id instead of
    // adding a second one.

    /// Append a category at the end of the list, or replace it in place if
    /// its id is already on the board.
    pub fn insert_category(&mut self, category: Category) {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => *slot = category,
            None => self.categories.push(category),
        }
    }

    /// Append a sub-category to its parent, or replace it in place if its id
    /// is already there. Returns `false` if the parent is not on the board.
    pub fn insert_sub_category(&mut self, category_id: DbId, sub_category: SubCategory) -> bool {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == category_id) else {
            return false;
        };
        match category
            .sub_categories
            .iter_mut()
            .find(|s| s.id == sub_category.id)
        {
            Some(slot) => *slot = sub_category,
            None => category.sub_categories.push(sub_category),
        }
        true
    }

    /// Newly added apps go to the front. An app already on the board is
    /// replaced where it stands.
    pub fn prepend_app(&mut self, app: AppEntry) {
        if !self.replace_app(app.clone()) {
            self.apps.insert(0, app);
        }
    }

    /// Replace an existing app in place. Returns `false` if it is unknown.
    pub fn replace_app(&mut self, app: AppEntry) -> bool {
        match self.apps.iter_mut().find(|a| a.id == app.id) {
            Some(slot) => {
                *slot = app;
                true
            }
            None => false,
        }
    }

    pub fn remove_app(&mut self, id: DbId) -> bool {
        let before = self.apps.len();
        self.apps.retain(|a| a.id != id);
        self.apps.len() != before
    }

    /// Remove a category together with the apps filed under it.
    pub fn remove_category(&mut self, id: DbId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return false;
        }
        self.apps.retain(|a| a.category_id != id);
        true
    }

    /// Remove a sub-category together with the apps filed under it.
    pub fn remove_sub_category(&mut self, category_id: DbId, id: DbId) -> bool {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == category_id) else {
            return false;
        };
        let before = category.sub_categories.len();
        category.sub_categories.retain(|s| s.id != id);
        if category.sub_categories.len() == before {
            return false;
        }
        self.apps.retain(|a| a.sub_category_id != id);
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
