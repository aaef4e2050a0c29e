pub mod apps;
pub mod auth;
pub mod board;
pub mod categories;
pub mod describe;
pub mod view;
