//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod hotel_repo;
pub mod preparation_repo;

pub use hotel_repo::HotelRepo;
pub use preparation_repo::PreparationRepo;
