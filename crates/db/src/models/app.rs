//! App entry row model and DTOs.

use launchpad_core::board::AppEntry;
use launchpad_core::draft::ValidAppDraft;
use launchpad_core::types::{DbId, EpochMillis};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `apps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppRow {
    pub id: DbId,
    pub name: String,
    pub url: String,
    pub ai_studio_url: Option<String>,
    pub description: String,
    pub category_id: DbId,
    pub sub_category_id: DbId,
    pub created_at: EpochMillis,
}

/// DTO for inserting an app entry.
#[derive(Debug, Clone)]
pub struct CreateApp {
    pub name: String,
    pub url: String,
    pub ai_studio_url: Option<String>,
    pub description: String,
    pub category_id: DbId,
    pub sub_category_id: DbId,
}

/// DTO for editing an app entry. Every field is replaced; `created_at` is
/// kept.
#[derive(Debug, Clone)]
pub struct UpdateApp {
    pub name: String,
    pub url: String,
    pub ai_studio_url: Option<String>,
    pub description: String,
    pub category_id: DbId,
    pub sub_category_id: DbId,
}

impl From<ValidAppDraft> for CreateApp {
    fn from(draft: ValidAppDraft) -> Self {
        Self {
            name: draft.name,
            url: draft.url,
            ai_studio_url: draft.ai_studio_url,
            description: draft.description,
            category_id: draft.category_id,
            sub_category_id: draft.sub_category_id,
        }
    }
}

impl From<ValidAppDraft> for UpdateApp {
    fn from(draft: ValidAppDraft) -> Self {
        Self {
            name: draft.name,
            url: draft.url,
            ai_studio_url: draft.ai_studio_url,
            description: draft.description,
            category_id: draft.category_id,
            sub_category_id: draft.sub_category_id,
        }
    }
}

impl From<AppRow> for AppEntry {
    fn from(row: AppRow) -> Self {
        AppEntry {
            id: row.id,
            name: row.name,
            url: row.url,
            description: row.description,
            category_id: row.category_id,
            sub_category_id: row.sub_category_id,
            created_at: row.created_at,
            ai_studio_url: row.ai_studio_url,
        }
    }
}
