// crates/citydb-core/src/lib.rs

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod text;
pub mod users;
pub mod view;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{DbError, Result};
pub use crate::model::{City, CityDb, CityRaw};
pub use crate::users::{sample_users, User};
pub use crate::view::{CityPage, PAGE_SIZE};
