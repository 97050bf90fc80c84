//! Domain types shared by the database and API crates.
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod format;
pub mod tenancy;
pub mod types;
