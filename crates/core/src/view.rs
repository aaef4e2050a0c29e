//! View-state navigation for the launchpad.
//!
//! A [`ViewState`] is the client's current mode. Everything the screen needs
//! besides the filtered content (breadcrumbs, heading, the primary "add"
//! button, the highlighted navigation tab) is derived from it and the board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Category, SubCategory};
use crate::error::CoreError;
use crate::types::DbId;

/// Root label of the breadcrumb trail.
pub const HUB_LABEL: &str = "HUB";

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewState {
    #[default]
    #[serde(rename = "HOME")]
    Home,
    #[serde(rename = "CATEGORY", rename_all = "camelCase")]
    Category { category_id: DbId },
    #[serde(rename = "SUBCATEGORY", rename_all = "camelCase")]
    SubCategory {
        category_id: DbId,
        sub_category_id: DbId,
    },
    #[serde(rename = "JUMP")]
    Jump,
    #[serde(rename = "GRID")]
    Grid,
    #[serde(rename = "GRID_GROUP", rename_all = "camelCase")]
    GridGroup { group_id: DbId },
}

/// The tag of a [`ViewState`] without its ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Category,
    SubCategory,
    Jump,
    Grid,
    GridGroup,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Home => "HOME",
            ViewKind::Category => "CATEGORY",
            ViewKind::SubCategory => "SUBCATEGORY",
            ViewKind::Jump => "JUMP",
            ViewKind::Grid => "GRID",
            ViewKind::GridGroup => "GRID_GROUP",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HOME" => Ok(ViewKind::Home),
            "CATEGORY" => Ok(ViewKind::Category),
            "SUBCATEGORY" => Ok(ViewKind::SubCategory),
            "JUMP" => Ok(ViewKind::Jump),
            "GRID" => Ok(ViewKind::Grid),
            "GRID_GROUP" => Ok(ViewKind::GridGroup),
            other => Err(CoreError::Validation(format!("Unknown view type '{other}'"))),
        }
    }
}

/// Navigation tab highlighted in the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavTab {
    Home,
    Jump,
    Grid,
}

/// One step in the breadcrumb trail. `target` is the view a click leads to;
/// the last crumb is not clickable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub label: String,
    pub target: Option<ViewState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

/// What the primary "add" button of a view opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddAction {
    CreateCategory,
    #[serde(rename_all = "camelCase")]
    CreateSubCategory {
        category_id: DbId,
        parent_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    CreateApp {
        initial_category_id: Option<DbId>,
        initial_sub_category_id: Option<DbId>,
    },
}

/// What a category-modal submission creates in a given view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryCreateTarget {
    /// A top-level category, optionally seeded with a `Main` sub-category.
    MainCategory { with_default_sub_category: bool },
    /// A sub-category under the given category.
    SubCategory { category_id: DbId },
}

impl ViewState {
    /// Build a view state from its tag and loose ids (query-string form).
    pub fn from_parts(
        kind: ViewKind,
        category_id: Option<DbId>,
        sub_category_id: Option<DbId>,
        group_id: Option<DbId>,
    ) -> Result<Self, CoreError> {
        let require = |value: Option<DbId>, field: &str| {
            value.ok_or_else(|| {
                CoreError::Validation(format!("{kind} view requires '{field}'"))
            })
        };

        Ok(match kind {
            ViewKind::Home => ViewState::Home,
            ViewKind::Category => ViewState::Category {
                category_id: require(category_id, "categoryId")?,
            },
            ViewKind::SubCategory => ViewState::SubCategory {
                category_id: require(category_id, "categoryId")?,
                sub_category_id: require(sub_category_id, "subCategoryId")?,
            },
            ViewKind::Jump => ViewState::Jump,
            ViewKind::Grid => ViewState::Grid,
            ViewKind::GridGroup => ViewState::GridGroup {
                group_id: require(group_id, "groupId")?,
            },
        })
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            ViewState::Home => ViewKind::Home,
            ViewState::Category { .. } => ViewKind::Category,
            ViewState::SubCategory { .. } => ViewKind::SubCategory,
            ViewState::Jump => ViewKind::Jump,
            ViewState::Grid => ViewKind::Grid,
            ViewState::GridGroup { .. } => ViewKind::GridGroup,
        }
    }

    /// Views that belong to the hierarchical launchpad (with breadcrumbs).
    pub fn is_hierarchical(&self) -> bool {
        matches!(
            self,
            ViewState::Home | ViewState::Category { .. } | ViewState::SubCategory { .. }
        )
    }

    pub fn current_category<'a>(&self, board: &'a Board) -> Option<&'a Category> {
        match *self {
            ViewState::Category { category_id } | ViewState::SubCategory { category_id, .. } => {
                board.category(category_id)
            }
            ViewState::GridGroup { group_id } => board.category(group_id),
            _ => None,
        }
    }

    pub fn current_sub_category<'a>(&self, board: &'a Board) -> Option<&'a SubCategory> {
        match *self {
            ViewState::SubCategory {
                category_id,
                sub_category_id,
            } => board.sub_category(category_id, sub_category_id),
            _ => None,
        }
    }

    pub fn breadcrumbs(&self, board: &Board) -> Vec<Breadcrumb> {
        if !self.is_hierarchical() {
            return Vec::new();
        }

        let mut crumbs = vec![Breadcrumb {
            label: HUB_LABEL.to_string(),
            target: Some(ViewState::Home),
        }];
        if let Some(category) = self.current_category(board) {
            crumbs.push(Breadcrumb {
                label: category.name.clone(),
                target: Some(ViewState::Category {
                    category_id: category.id,
                }),
            });
        }
        if let Some(sub_category) = self.current_sub_category(board) {
            crumbs.push(Breadcrumb {
                label: sub_category.name.clone(),
                target: None,
            });
        }
        crumbs
    }

    /// Title and subtitle. `displayed_len` is the number of items the view
    /// currently shows after filtering.
    pub fn heading(&self, board: &Board, displayed_len: usize) -> Heading {
        let category_name = || {
            self.current_category(board)
                .map(|c| c.name.clone())
                .unwrap_or_default()
        };

        let (title, subtitle) = match self {
            ViewState::Home => ("LAUNCHPAD".to_string(), "Active Units".to_string()),
            ViewState::Category { .. } => {
                let sections = self
                    .current_category(board)
                    .map_or(0, |c| c.sub_categories.len());
                (category_name(), format!("{sections} In Section"))
            }
            ViewState::SubCategory { .. } => (
                self.current_sub_category(board)
                    .map(|s| s.name.clone())
                    .unwrap_or_default(),
                format!("{displayed_len} Active Apps"),
            ),
            ViewState::Jump => (
                "JUMP".to_string(),
                "Quickly access any application".to_string(),
            ),
            ViewState::Grid => ("GRID".to_string(), "All Applications".to_string()),
            ViewState::GridGroup { .. } => (category_name(), "Group Content".to_string()),
        };

        Heading { title, subtitle }
    }

    pub fn nav_tab(&self) -> Option<NavTab> {
        match self {
            ViewState::Home => Some(NavTab::Home),
            ViewState::Jump => Some(NavTab::Jump),
            ViewState::Grid | ViewState::GridGroup { .. } => Some(NavTab::Grid),
            ViewState::Category { .. } | ViewState::SubCategory { .. } => None,
        }
    }

    /// The primary add button of this view, if it has one.
    pub fn add_action(&self, board: &Board) -> Option<AddAction> {
        match *self {
            ViewState::Home => Some(AddAction::CreateCategory),
            ViewState::Category { category_id } => Some(AddAction::CreateSubCategory {
                category_id,
                parent_name: board.category(category_id).map(|c| c.name.clone()),
            }),
            ViewState::SubCategory {
                category_id,
                sub_category_id,
            } => Some(AddAction::CreateApp {
                initial_category_id: Some(category_id),
                initial_sub_category_id: Some(sub_category_id),
            }),
            ViewState::Grid => Some(AddAction::CreateApp {
                initial_category_id: None,
                initial_sub_category_id: None,
            }),
            ViewState::GridGroup { group_id } => Some(AddAction::CreateApp {
                initial_category_id: Some(group_id),
                initial_sub_category_id: board.default_sub_category(group_id).map(|s| s.id),
            }),
            ViewState::Jump => None,
        }
    }

    /// What submitting the category modal creates from this view.
    ///
    /// `None` means the submission has no effect here.
    pub fn category_create_target(&self) -> Option<CategoryCreateTarget> {
        match *self {
            ViewState::Home => Some(CategoryCreateTarget::MainCategory {
                with_default_sub_category: false,
            }),
            ViewState::Grid => Some(CategoryCreateTarget::MainCategory {
                with_default_sub_category: true,
            }),
            ViewState::Category { category_id } => {
                Some(CategoryCreateTarget::SubCategory { category_id })
            }
            _ => None,
        }
    }

    /// Label of the category modal: `Category` or `Sub-Category`.
    pub fn category_modal_label(&self) -> &'static str {
        match self {
            ViewState::Home | ViewState::Grid => "Category",
            _ => "Sub-Category",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
