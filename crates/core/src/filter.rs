//! Search filtering for every view.
//!
//! Matching is a case-insensitive substring test, recomputed in full on every
//! keystroke or navigation change; the lists are small.

use serde::Serialize;

use crate::board::{AppEntry, Board};
use crate::types::DbId;
use crate::view::ViewState;

/// Number of recent apps the jump view shows before anything is typed.
pub const JUMP_RECENT_LIMIT: usize = 10;

/// A category tile on the launchpad home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
    pub id: DbId,
    pub name: String,
    pub section_count: usize,
}

/// A sub-category tile inside a category view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryCard {
    pub id: DbId,
    pub name: String,
    pub app_count: usize,
}

/// An app tile: the entry plus the subtitle its card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCard {
    #[serde(flatten)]
    pub entry: AppEntry,
    pub subtitle: String,
}

impl From<&AppEntry> for AppCard {
    fn from(entry: &AppEntry) -> Self {
        Self {
            subtitle: entry.display_description().to_string(),
            entry: entry.clone(),
        }
    }
}

/// The list a view displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayedContent {
    Categories(Vec<CategoryCard>),
    SubCategories(Vec<SubCategoryCard>),
    Apps(Vec<AppCard>),
}

impl DisplayedContent {
    pub fn len(&self) -> usize {
        match self {
            DisplayedContent::Categories(items) => items.len(),
            DisplayedContent::SubCategories(items) => items.len(),
            DisplayedContent::Apps(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Case-insensitive substring test. `term_lower` must already be lowercase.
pub fn matches(text: &str, term_lower: &str) -> bool {
    text.to_lowercase().contains(term_lower)
}

fn app_matches(app: &AppEntry, term_lower: &str) -> bool {
    matches(&app.name, term_lower) || matches(&app.description, term_lower)
}

fn filter_apps<'a>(
    apps: impl Iterator<Item = &'a AppEntry>,
    term_lower: &str,
) -> Vec<AppCard> {
    apps.filter(|app| app_matches(app, term_lower))
        .map(AppCard::from)
        .collect()
}

/// Apps ordered newest first, capped at [`JUMP_RECENT_LIMIT`].
pub fn recent_apps(apps: &[AppEntry]) -> Vec<AppCard> {
    let mut recent: Vec<&AppEntry> = apps.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.into_iter().take(JUMP_RECENT_LIMIT).map(AppCard::from).collect()
}

/// Compute what `view` shows for the search `term`.
pub fn displayed_content(board: &Board, view: &ViewState, term: &str) -> DisplayedContent {
    let term_lower = term.to_lowercase();

    match *view {
        ViewState::Home => DisplayedContent::Categories(
            board
                .categories
                .iter()
                .filter(|c| matches(&c.name, &term_lower))
                .map(|c| CategoryCard {
                    id: c.id,
                    name: c.name.clone(),
                    section_count: c.sub_categories.len(),
                })
                .collect(),
        ),
        ViewState::Category { category_id } => {
            let cards = board
                .category(category_id)
                .map(|category| {
                    category
                        .sub_categories
                        .iter()
                        .filter(|s| matches(&s.name, &term_lower))
                        .map(|s| SubCategoryCard {
                            id: s.id,
                            name: s.name.clone(),
                            app_count: board.app_count_for_sub_category(s.id),
                        })
                        .collect()
                })
                .unwrap_or_default();
            DisplayedContent::SubCategories(cards)
        }
        ViewState::SubCategory {
            category_id,
            sub_category_id,
        } => DisplayedContent::Apps(filter_apps(
            board
                .apps
                .iter()
                .filter(|a| a.category_id == category_id && a.sub_category_id == sub_category_id),
            &term_lower,
        )),
        ViewState::Jump if term.is_empty() => DisplayedContent::Apps(recent_apps(&board.apps)),
        ViewState::Jump | ViewState::Grid => {
            DisplayedContent::Apps(filter_apps(board.apps.iter(), &term_lower))
        }
        ViewState::GridGroup { group_id } => DisplayedContent::Apps(filter_apps(
            board.apps.iter().filter(|a| a.category_id == group_id),
            &term_lower,
        )),
    }
}

/// Text shown when a view has nothing to display, if the view has one.
pub fn empty_message(view: &ViewState, term: &str) -> Option<String> {
    match view {
        ViewState::Jump if term.is_empty() => Some("Start typing to search...".to_string()),
        ViewState::Jump => Some(format!("No apps found matching \"{term}\"")),
        ViewState::Grid => Some("No apps found.".to_string()),
        ViewState::GridGroup { .. } => Some("No apps in this group yet.".to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
