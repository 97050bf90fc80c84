//! Response envelopes for the preparation endpoints.
//!
//! Every preparation response is `{ "message": ..., <payload>: ... }`, on
//! success and on failure alike, so clients never have to branch on shape.
//! The payload key is `preparations` for the list and `preparation` for the
//! detail view.

use galley_core::types::DbId;
use galley_db::models::preparation::{PreparationDetail, PreparationSummary};
use serde::Serialize;

use crate::error::AppError;

pub const LIST_OK_MESSAGE: &str = "Kitchen preparations retrieved successfully";
pub const DETAIL_OK_MESSAGE: &str = "Kitchen preparation detail retrieved successfully";

/// Stand-in for the underlying error text when details are not exposed.
const REDACTED_ERROR: &str = "internal error";

/// `{ "message": ..., "preparations": [...] }`
#[derive(Debug, Serialize)]
pub struct PreparationListResponse {
    pub message: String,
    pub preparations: Vec<PreparationSummary>,
}

impl PreparationListResponse {
    pub fn ok(preparations: Vec<PreparationSummary>) -> Self {
        Self {
            message: LIST_OK_MESSAGE.to_string(),
            preparations,
        }
    }

    /// Failure envelope: an empty list and a message naming the hotel.
    pub fn failed(hotel_id: DbId) -> Self {
        Self {
            message: format!(
                "Unable to process kitchen preparations request (hotel_id={hotel_id})"
            ),
            preparations: Vec::new(),
        }
    }
}

/// `{ "message": ..., "preparation": {...} | null }`
#[derive(Debug, Serialize)]
pub struct PreparationDetailResponse {
    pub message: String,
    pub preparation: Option<PreparationDetail>,
}

impl PreparationDetailResponse {
    pub fn ok(preparation: PreparationDetail) -> Self {
        Self {
            message: DETAIL_OK_MESSAGE.to_string(),
            preparation: Some(preparation),
        }
    }

    pub fn not_found(preparation_id: DbId) -> Self {
        Self {
            message: format!("Kitchen preparation not found (id={preparation_id})"),
            preparation: None,
        }
    }

    /// Failure envelope. The error text is only included when `expose_details`
    /// is set.
    pub fn failed(err: &AppError, expose_details: bool) -> Self {
        let detail = if expose_details {
            err.to_string()
        } else {
            REDACTED_ERROR.to_string()
        };
        Self {
            message: format!("Error retrieving kitchen preparation detail: {detail}"),
            preparation: None,
        }
    }
}
