//! Stable textual forms for values that leave the API.
//!
//! The serializers are meant for `#[serde(serialize_with = ...)]` on response
//! models so the wire format does not depend on chrono's serde defaults.

use chrono::NaiveDate;
use serde::Serializer;

use crate::types::Timestamp;

/// Calendar dates render as `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render a timestamp as RFC 3339 (`2024-05-01T09:30:00+00:00`).
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339()
}

/// Normalize a decimal amount for output.
///
/// Missing, NaN and negative values collapse to `0.0` so the field is always
/// a non-negative number.
pub fn amount_or_zero(amount: Option<f64>) -> f64 {
    match amount {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// `serialize_with` helper for `Option<NaiveDate>`; `None` becomes `null`.
pub fn serialize_date_opt<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&format_date(*date)),
        None => serializer.serialize_none(),
    }
}

/// `serialize_with` helper for `Option<Timestamp>`; `None` becomes `null`.
pub fn serialize_timestamp_opt<S>(
    ts: &Option<Timestamp>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ts {
        Some(ts) => serializer.serialize_str(&format_timestamp(ts)),
        None => serializer.serialize_none(),
    }
}
