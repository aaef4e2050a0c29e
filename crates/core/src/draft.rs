//! Form drafts for the create/edit flows.
//!
//! Raw submissions are validated and normalized here before anything is
//! written to the store.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a category, sub-category or app name.
pub const MAX_NAME_LEN: usize = 200;

/// Prefix a scheme unless the value already starts with `http`.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// A trimmed, non-empty name for a category or sub-category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDraft(String);

impl NameDraft {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("Name must not be empty".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CoreError::Validation(format!(
                "Name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Raw app form submission, used for both create and edit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub ai_studio_url: Option<String>,
    #[serde(default)]
    pub description: String,
    pub category_id: Option<DbId>,
    pub sub_category_id: Option<DbId>,
}

/// An app draft that passed validation, with normalized URLs. The
/// description is kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAppDraft {
    pub name: String,
    pub url: String,
    pub ai_studio_url: Option<String>,
    pub description: String,
    pub category_id: DbId,
    pub sub_category_id: DbId,
}

impl AppDraft {
    pub fn validate(&self) -> Result<ValidAppDraft, CoreError> {
        let (Some(category_id), Some(sub_category_id)) = (self.category_id, self.sub_category_id)
        else {
            return Err(CoreError::Validation(
                "Please select both a Category and a Sub-Category".into(),
            ));
        };

        let name = NameDraft::parse(&self.name)?.into_inner();

        if self.url.trim().is_empty() {
            return Err(CoreError::Validation("Website URL must not be empty".into()));
        }

        let ai_studio_url = self
            .ai_studio_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(normalize_url);

        Ok(ValidAppDraft {
            name,
            url: normalize_url(&self.url),
            ai_studio_url,
            description: self.description.clone(),
            category_id,
            sub_category_id,
        })
    }
}

impl ValidAppDraft {
    /// Ensure the selected sub-category exists and belongs to the selected
    /// category. `parent_category_id` is the stored parent of
    /// `sub_category_id`, or `None` when no such sub-category exists.
    pub fn check_parent(&self, parent_category_id: Option<DbId>) -> Result<(), CoreError> {
        match parent_category_id {
            None => Err(CoreError::NotFound {
                entity: "SubCategory",
                id: self.sub_category_id,
            }),
            Some(parent) if parent != self.category_id => Err(CoreError::Validation(format!(
                "Sub-category {} does not belong to category {}",
                self.sub_category_id, self.category_id
            ))),
            Some(_) => Ok(()),
        }
    }
}
