//! citydb-cli
//! ==========
//!
//! Command-line interface for the `citydb-core` city and users tables.
//!
//! This crate primarily provides a binary (`citydb-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! citydb-cli --help
//! citydb-cli stats
//! citydb-cli cities --page 2
//! citydb-cli city 1392685764
//! citydb-cli users
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! `citydb-core` crate directly.

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
