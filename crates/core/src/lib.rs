//! Launchpad domain layer.
//!
//! Pure logic shared by the database and API crates: the entity types, the
//! in-memory board snapshot, view-state navigation, search filtering, form
//! drafts, the session flag and the description prompt. Nothing in here
//! touches the network or the database.

pub mod board;
pub mod describe;
pub mod draft;
pub mod error;
pub mod filter;
pub mod session;
pub mod types;
pub mod view;
