//! Row models and response shapes.
//!
//! Every struct here is read-only: rows are written by the kitchen operations
//! workflows upstream of this service.

pub mod preparation;
