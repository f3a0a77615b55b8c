use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`CityDb::stats`](crate::CityDb::stats); the counts reflect the
/// materialized in-memory database after load-time validation and sorting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub countries: usize,
    pub pages: usize,
}
