//! Kitchen preparation models.
//!
//! A preparation is the kitchen task behind one catered event. It owns a set
//! of preparation items (one per dish) and each item owns the ingredient
//! requirements needed to cook it.

use chrono::NaiveDate;
use galley_core::format::{amount_or_zero, serialize_date_opt, serialize_timestamp_opt};
use galley_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One row of the preparation list.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PreparationSummary {
    pub id: DbId,
    pub event_name: Option<String>,
    #[serde(serialize_with = "serialize_date_opt")]
    pub event_date: Option<NaiveDate>,
    /// Already `HH:MM` text when it leaves the database.
    pub event_time: Option<String>,
    pub guest_count: Option<i32>,
    pub status: Option<String>,
    pub progress: Option<f64>,
}

/// The full preparation row used by the detail view.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PreparationRecord {
    pub id: DbId,
    pub event_name: Option<String>,
    #[serde(serialize_with = "serialize_date_opt")]
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<String>,
    pub guest_count: Option<i32>,
    pub status: Option<String>,
    pub progress: Option<f64>,
    pub notes: Option<String>,
    #[serde(serialize_with = "serialize_timestamp_opt")]
    pub created_at: Option<Timestamp>,
    #[serde(serialize_with = "serialize_timestamp_opt")]
    pub updated_at: Option<Timestamp>,
}

/// A dish line within a preparation.
///
/// `dish_name` and `dish_category` come from a left join and are `None` when
/// the dish has been removed from the catalog.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PreparationItem {
    pub id: DbId,
    pub preparation_id: DbId,
    pub dish_id: DbId,
    pub dish_name: Option<String>,
    pub dish_category: Option<String>,
    pub quantity: Option<i32>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// An ingredient requirement row as read from the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct IngredientRequirementRow {
    pub id: DbId,
    pub preparation_item_id: DbId,
    pub ingredient_id: DbId,
    pub ingredient_name: Option<String>,
    pub ingredient_category: Option<String>,
    pub required_amount: Option<f64>,
    pub unit: Option<String>,
    pub status: Option<String>,
}

/// An ingredient requirement as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientRequirement {
    pub id: DbId,
    pub preparation_item_id: DbId,
    pub ingredient_id: DbId,
    pub ingredient_name: Option<String>,
    pub ingredient_category: Option<String>,
    /// Never null: a missing amount is reported as `0`.
    pub required_amount: f64,
    pub unit: Option<String>,
    pub status: Option<String>,
}

impl From<IngredientRequirementRow> for IngredientRequirement {
    fn from(row: IngredientRequirementRow) -> Self {
        Self {
            id: row.id,
            preparation_item_id: row.preparation_item_id,
            ingredient_id: row.ingredient_id,
            ingredient_name: row.ingredient_name,
            ingredient_category: row.ingredient_category,
            required_amount: amount_or_zero(row.required_amount),
            unit: row.unit,
            status: row.status,
        }
    }
}

/// A preparation with its items and ingredient requirements attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparationDetail {
    #[serde(flatten)]
    pub preparation: PreparationRecord,
    pub preparation_items: Vec<PreparationItem>,
    pub ingredient_requirements: Vec<IngredientRequirement>,
}

impl PreparationDetail {
    /// Attach child rows to their preparation.
    ///
    /// Both child queries already filter by preparation lineage, so the lists
    /// are attached flat and in the order they were read.
    pub fn assemble(
        preparation: PreparationRecord,
        items: Vec<PreparationItem>,
        requirements: Vec<IngredientRequirementRow>,
    ) -> Self {
        Self {
            preparation,
            preparation_items: items,
            ingredient_requirements: requirements
                .into_iter()
                .map(IngredientRequirement::from)
                .collect(),
        }
    }
}
