// crates/citydb-core/src/loader.rs
use crate::error::{DbError, Result};
use crate::model::{CityDb, CityRaw};
use flate2::read::GzDecoder;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// Single in-process cache so we only read and sort once per process.
static CITY_DB_CACHE: OnceCell<CityDb> = OnceCell::new();

impl CityDb {
    /// Load the database from the bundled dataset.
    ///
    /// - Tries to read `data/cities.bin` (bincode cache).
    /// - If that fails, falls back to `data/cities.json.gz`, builds the
    ///   `CityDb`, and writes the `.bin` cache.
    ///
    /// The result is cached process-wide: repeated calls return the same
    /// data without touching the filesystem again. Concurrent first calls
    /// are safe; the `OnceCell` guarantees a single stored value.
    ///
    /// The paths are resolved relative to the crate root
    /// (`CARGO_MANIFEST_DIR`), so this works both when running from the
    /// project and when using the crate as a dependency, as long as the
    /// `data/` directory is shipped alongside.
    pub fn load() -> Result<&'static Self> {
        CITY_DB_CACHE.get_or_try_init(load_from_disk)
    }

    /// Load from an explicit `.json.gz` file, bypassing the process cache.
    ///
    /// Used by the CLI's `--input` flag; does not write a binary cache.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = read_raw(path)?;
        CityDb::from_raw(raw)
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities.json.gz"
    }
}

/// Internal helper that actually reads from disk and builds the DB.
fn load_from_disk() -> Result<CityDb> {
    let data_dir = CityDb::default_data_dir();
    let json_path = data_dir.join(CityDb::default_dataset_filename());
    let bin_path = data_dir.join("cities.bin");

    // 1) Try binary cache first
    if let Ok(bytes) = std::fs::read(&bin_path) {
        if let Ok(db) = bincode::deserialize::<CityDb>(&bytes) {
            return Ok(db);
        }
    }

    // 2) Fallback: read gzipped JSON and build
    let raw = read_raw(&json_path)?;
    let db = CityDb::from_raw(raw)?;

    // 3) Best-effort: write cache (ignore errors)
    if let Ok(bin) = bincode::serialize(&db) {
        let _ = std::fs::write(&bin_path, bin);
    }

    Ok(db)
}

/// Opens a gzipped JSON file and parses it into raw records.
fn read_raw(path: &Path) -> Result<Vec<CityRaw>> {
    let file = File::open(path).map_err(|_| {
        DbError::NotFound(format!("dataset not found at path: {}", path.display()))
    })?;

    let gz = GzDecoder::new(file);
    let reader = BufReader::new(gz);

    let raw: Vec<CityRaw> = serde_json::from_reader(reader)?;
    Ok(raw)
}
