//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod app_repo;
pub mod board_repo;
pub mod category_repo;
pub mod sub_category_repo;

pub use app_repo::AppRepo;
pub use board_repo::BoardRepo;
pub use category_repo::CategoryRepo;
pub use sub_category_repo::SubCategoryRepo;
