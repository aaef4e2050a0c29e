//! Launchpad API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! board cache and the description client) so integration tests and the
//! binary entrypoint can both access them.

pub mod board_cache;
pub mod config;
pub mod describe;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
