// crates/citydb-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{DbError, Result};

/// Raw city structure as it comes from JSON.
///
/// This type mirrors the field vocabulary of the external dataset
/// (`city`, `city_ascii`, `lat`, `lng`, ...). It is only an ingestion
/// shape; the public API exposes the normalized [`City`].
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub id: u32,
    pub city: String,
    pub city_ascii: String,
    pub lat: f64,
    pub lng: f64,
    pub country: String,
    pub iso2: String,
    pub iso3: String,
    #[serde(default)]
    pub admin_name: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    pub population: f64,
}

/// A city entry in the normalized database.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    /// Stable dataset id; unique across the collection.
    pub id: u32,
    pub name: String,
    pub name_ascii: String,
    pub lat: f64,
    pub lng: f64,
    pub country: String,
    pub iso2: String,
    pub iso3: String,
    pub admin_name: Option<String>,
    /// Capital designation from the dataset ("primary", "admin", "minor").
    pub capital: Option<String>,
    /// Non-negative; the collection's descending sort key.
    pub population: f64,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_ascii(&self) -> &str {
        &self.name_ascii
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn iso2(&self) -> &str {
        &self.iso2
    }

    pub fn iso3(&self) -> &str {
        &self.iso3
    }

    pub fn admin_name(&self) -> Option<&str> {
        self.admin_name.as_deref()
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    pub fn population(&self) -> f64 {
        self.population
    }
}

/// Top-level database structure.
///
/// Holds the full city collection sorted by population descending, plus the
/// id index into it. Immutable after construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityDb {
    pub(crate) cities: Vec<City>,
    /// id -> position in `cities`.
    pub(crate) by_id: HashMap<u32, usize>,
}

impl CityDb {
    /// Convert raw JSON records into a `CityDb`.
    ///
    /// Validates every record, sorts by population descending (stable, so
    /// ties keep their source order) and builds the id index. Duplicate ids
    /// and negative or non-finite populations are load-time errors, not
    /// silently tolerated.
    pub fn from_raw(raw: Vec<CityRaw>) -> Result<Self> {
        let mut cities: Vec<City> = Vec::with_capacity(raw.len());
        for r in raw {
            if !r.population.is_finite() || r.population < 0.0 {
                return Err(DbError::InvalidRecord(format!(
                    "city {} ({}) has invalid population {}",
                    r.id, r.city, r.population
                )));
            }
            cities.push(City {
                id: r.id,
                name: r.city,
                name_ascii: r.city_ascii,
                lat: r.lat,
                lng: r.lng,
                country: r.country,
                iso2: r.iso2,
                iso3: r.iso3,
                admin_name: r.admin_name,
                capital: r.capital,
                population: r.population,
            });
        }

        // Stable sort: equal populations keep their dataset order.
        cities.sort_by(|a, b| b.population.total_cmp(&a.population));

        let mut by_id = HashMap::with_capacity(cities.len());
        for (pos, city) in cities.iter().enumerate() {
            if by_id.insert(city.id, pos).is_some() {
                return Err(DbError::InvalidRecord(format!(
                    "duplicate city id {}",
                    city.id
                )));
            }
        }

        Ok(CityDb { cities, by_id })
    }

    /// All cities, ordered by population descending.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
