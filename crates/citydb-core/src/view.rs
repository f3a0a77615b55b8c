// crates/citydb-core/src/view.rs
//
// Read-side operations on the loaded database: pagination, id lookup and
// name search. Each is a pure function of the cached data and its inputs.

use std::collections::HashSet;

use crate::common::DbStats;
use crate::error::{DbError, Result};
use crate::model::{City, CityDb};
use crate::text::fold_key;

/// Fixed page size for the city listing.
pub const PAGE_SIZE: usize = 50;

/// One page of the city listing, plus the metadata a pagination UI needs.
#[derive(Debug, Clone, Copy)]
pub struct CityPage<'a> {
    pub rows: &'a [City],
    /// 1-based page number this slice corresponds to.
    pub page: usize,
    pub page_size: usize,
    /// Total row count across all pages.
    pub total: usize,
}

impl<'a> CityPage<'a> {
    /// Number of pages in the collection at this page size.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }
}

impl CityDb {
    /// Return one page of the population-sorted listing.
    ///
    /// Pages are 1-based; `page < 1` is a validation error. Pages past the
    /// end of the data return an empty slice, not an error.
    pub fn page(&self, page: usize) -> Result<CityPage<'_>> {
        self.page_with_size(page, PAGE_SIZE)
    }

    /// Same as [`CityDb::page`] with a caller-chosen page size.
    pub fn page_with_size(&self, page: usize, page_size: usize) -> Result<CityPage<'_>> {
        if page < 1 {
            return Err(DbError::InvalidPage(page));
        }
        if page_size == 0 {
            return Err(DbError::InvalidPageSize(page_size));
        }

        let total = self.cities.len();
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);

        Ok(CityPage {
            rows: &self.cities[start..end],
            page,
            page_size,
            total,
        })
    }

    /// Lookup a city by its dataset id.
    pub fn city(&self, id: u32) -> Result<&City> {
        self.by_id
            .get(&id)
            .map(|&pos| &self.cities[pos])
            .ok_or_else(|| DbError::NotFound(format!("no city with id {id}")))
    }

    /// First city whose name (or ASCII name) equals the query on folded form.
    pub fn find_by_name(&self, name: &str) -> Option<&City> {
        let q = fold_key(name);
        if q.is_empty() {
            return None;
        }
        self.cities
            .iter()
            .find(|c| fold_key(&c.name) == q || fold_key(&c.name_ascii) == q)
    }

    /// All cities whose folded name contains the folded query.
    ///
    /// Linear scan; the collection is small enough that no index is needed.
    pub fn find_by_substring(&self, substr: &str) -> Vec<&City> {
        let q = fold_key(substr);
        let mut out = Vec::new();
        if q.is_empty() {
            return out;
        }

        for c in &self.cities {
            if fold_key(&c.name).contains(&q) || fold_key(&c.name_ascii).contains(&q) {
                out.push(c);
            }
        }
        out
    }

    pub fn stats(&self) -> DbStats {
        let countries: HashSet<&str> = self.cities.iter().map(|c| c.iso2.as_str()).collect();
        DbStats {
            cities: self.cities.len(),
            countries: countries.len(),
            pages: self.cities.len().div_ceil(PAGE_SIZE),
        }
    }
}
