//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - A create DTO for inserts (and an update DTO where edits exist)
//! - A conversion into the matching `launchpad_core::board` entity

pub mod app;
pub mod category;
pub mod sub_category;
