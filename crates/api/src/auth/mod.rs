//! Access-token verification.
//!
//! - [`jwt`] -- HS256 access-token validation (and minting, for tests and tooling).

pub mod jwt;
