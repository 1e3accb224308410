//! Persistent article/alias store (SQLite via sqlx).
//!
//! Holds the articles (with their ten custom-field alias slots) and the flat
//! key/value preference rows. All alias queries live here: exact-match
//! lookup, the CTE-backed admin listing, and the diagnostics scans.

pub mod articles;
pub mod db;
pub mod listing;
pub mod lookup;
pub mod prefs;
pub mod types;

pub use db::*;
pub use types::*;
