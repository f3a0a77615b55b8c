use clap::{Parser, Subcommand};

/// CLI arguments for citydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "CLI for browsing the citydb-core city and users tables"
)]
pub struct CliArgs {
    /// Path to an input JSON.gz dataset (default: the bundled cities.json.gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List one page of cities, sorted by population descending
    Cities {
        /// 1-based page number
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,
    },

    /// Show details for a city by its dataset id
    City {
        /// Dataset id (e.g. 1392685764)
        id: u32,
    },

    /// Search for cities whose name contains a substring
    Find {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },

    /// List the fixed demo users table
    Users,
}
