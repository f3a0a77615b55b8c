// crates/citydb-core/src/users.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user row in the demo users table.
///
/// `enabled` is tri-state: `None` means "unknown/unspecified" and is
/// rendered (and serialized) differently from `Some(false)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub dob: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// The fixed three-row users dataset.
///
/// Constructed fresh on every call; there is nothing to cache or persist.
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John".to_owned(),
            dob: date(1990, 1, 1),
            enabled: Some(true),
        },
        User {
            id: 2,
            name: "Jane".to_owned(),
            dob: date(1991, 1, 1),
            enabled: Some(false),
        },
        User {
            id: 3,
            name: "Jack".to_owned(),
            dob: date(1992, 1, 1),
            enabled: None,
        },
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Only called with the literal dates above, which are all valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
