// crates/citydb-core/src/error.rs
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum DbError {
    /// A lookup for a row that does not exist (e.g. unknown city id).
    #[error("not found: {0}")]
    NotFound(String),

    /// Pagination input the caller must fix: pages are 1-based.
    #[error("invalid page number {0}: pages start at 1")]
    InvalidPage(usize),

    /// A page size of zero makes every slice empty and no page valid.
    #[error("invalid page size {0}")]
    InvalidPageSize(usize),

    /// A record in the source dataset violated a structural invariant
    /// (duplicate id, negative or non-finite population).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;
