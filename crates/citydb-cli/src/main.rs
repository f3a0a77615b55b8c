//! citydb-cli — Command-line interface for citydb-core
//!
//! This binary provides a simple way to inspect the bundled city table and
//! the demo users table from your terminal. It supports printing basic
//! statistics, listing cities page by page, looking up a single city by id,
//! searching cities by a substring, and listing the fixed users table.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ citydb stats
//!
//! - List the first page of cities (50 rows, population descending)
//!   $ citydb cities
//!   $ citydb cities --page 2
//!
//! - Show details for a city by its dataset id
//!   $ citydb city 1392685764
//!
//! - Search cities by substring
//!   $ citydb find paulo
//!
//! - List the demo users table
//!   $ citydb users
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the compressed dataset bundled with the
//! `citydb-core` crate and automatically caches a binary version next to it
//! for fast subsequent runs. Use `--input <path>` to point to a custom
//! `.json.gz` dataset.
mod args;

use crate::args::{CliArgs, Commands};
use citydb_core::{sample_users, CityDb};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Custom input bypasses the process-wide cache; the bundled default
    // goes through it.
    let custom;
    let db: &CityDb = match args.input {
        Some(path) => {
            custom = CityDb::load_from_path(&path)?;
            &custom
        }
        None => CityDb::load()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
            println!("  Pages: {}", stats.pages);
        }

        Commands::Cities { page } => {
            let page = db.page(page)?;
            for c in page.rows {
                println!(
                    "{:>12}  {:<28} {:<20} {:>12}",
                    c.id,
                    c.name(),
                    c.country(),
                    c.population() as u64
                );
            }
            println!(
                "page {} of {} ({} cities total)",
                page.page,
                page.page_count(),
                page.total
            );
        }

        Commands::City { id } => match db.city(id) {
            Ok(c) => {
                println!("City: {}", c.name());
                println!("ASCII name: {}", c.name_ascii());
                println!("Country: {} ({} / {})", c.country(), c.iso2(), c.iso3());
                println!("Admin region: {}", c.admin_name().unwrap_or("-"));
                println!("Capital: {}", c.capital().unwrap_or("-"));
                println!("Latitude: {}", c.lat);
                println!("Longitude: {}", c.lng);
                println!("Population: {}", c.population() as u64);
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Find { query } => {
            let matches = db.find_by_substring(&query);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for c in matches {
                    println!("{} — {} ({})", c.name(), c.country(), c.id);
                }
            }
        }

        Commands::Users => {
            for u in sample_users() {
                let enabled = match u.enabled {
                    Some(true) => "yes",
                    Some(false) => "no",
                    // Absent is rendered distinctly from "no".
                    None => "-",
                };
                println!("{:>3}  {:<8} {}  {}", u.id, u.name, u.dob, enabled);
            }
        }
    }

    Ok(())
}
