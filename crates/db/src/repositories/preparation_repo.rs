//! Repository for kitchen preparations and their child tables.
//!
//! The three kitchen tables live in the tenant's schema (see
//! [`TenantContext::table`]). The `dishes` and `ingredients` catalogs are
//! shared across tenants and always read unqualified. The only value that
//! reaches these queries from a request is the preparation id, which is bound
//! as `$1`.

use galley_core::tenancy::TenantContext;
use galley_core::types::DbId;
use sqlx::PgPool;

use crate::models::preparation::{
    IngredientRequirementRow, PreparationDetail, PreparationItem, PreparationRecord,
    PreparationSummary,
};

pub const PREPARATIONS_TABLE: &str = "kitchen_preparations";
pub const ITEMS_TABLE: &str = "kitchen_preparation_items";
pub const REQUIREMENTS_TABLE: &str = "ingredient_requirements";

/// Shared catalogs, never tenant-qualified.
const DISHES_TABLE: &str = "dishes";
const INGREDIENTS_TABLE: &str = "ingredients";

/// Columns shared by the list and detail queries (`kp` alias).
///
/// Casting a TIME to `VARCHAR(5)` truncates `HH:MM:SS` to `HH:MM`. Numeric
/// columns are cast so they decode as `f64`.
const SUMMARY_COLUMNS: &str = "\
    kp.id, kp.event_name, kp.event_date, \
    CAST(kp.event_time AS VARCHAR(5)) AS event_time, \
    kp.guest_count, kp.status, \
    CAST(kp.progress AS DOUBLE PRECISION) AS progress";

/// Build the preparation list query, most recent event first.
///
/// Ordering uses the qualified `kp.event_time` so it sorts on the TIME column
/// rather than the `HH:MM` output alias. Postgres puts NULLs first under
/// `DESC`, so undated preparations lead the list.
pub fn list_query(tenant: &TenantContext) -> String {
    let table = tenant.table(PREPARATIONS_TABLE);
    format!(
        "SELECT {SUMMARY_COLUMNS} \
         FROM {table} kp \
         ORDER BY kp.event_date DESC, kp.event_time DESC, kp.id DESC"
    )
}

/// Build the single-preparation query.
pub fn detail_query(tenant: &TenantContext) -> String {
    let table = tenant.table(PREPARATIONS_TABLE);
    format!(
        "SELECT {SUMMARY_COLUMNS}, kp.notes, kp.created_at, kp.updated_at \
         FROM {table} kp \
         WHERE kp.id = $1"
    )
}

/// Build the preparation items query.
///
/// Left join so an item survives the deletion of its dish.
pub fn items_query(tenant: &TenantContext) -> String {
    let items = tenant.table(ITEMS_TABLE);
    format!(
        "SELECT kpi.id, kpi.preparation_id, kpi.dish_id, kpi.quantity, kpi.status, kpi.notes, \
                d.name AS dish_name, d.category AS dish_category \
         FROM {items} kpi \
         LEFT JOIN {DISHES_TABLE} d ON kpi.dish_id = d.id \
         WHERE kpi.preparation_id = $1 \
         ORDER BY kpi.id"
    )
}

/// Build the ingredient requirements query.
///
/// Requirements are selected through a membership subquery on the items
/// table, and left-joined so they survive the deletion of their ingredient.
pub fn requirements_query(tenant: &TenantContext) -> String {
    let requirements = tenant.table(REQUIREMENTS_TABLE);
    let items = tenant.table(ITEMS_TABLE);
    format!(
        "SELECT ir.id, ir.preparation_item_id, ir.ingredient_id, \
                CAST(ir.required_amount AS DOUBLE PRECISION) AS required_amount, \
                ir.unit, ir.status, \
                i.name AS ingredient_name, i.category AS ingredient_category \
         FROM {requirements} ir \
         LEFT JOIN {INGREDIENTS_TABLE} i ON ir.ingredient_id = i.id \
         WHERE ir.preparation_item_id IN ( \
             SELECT id FROM {items} WHERE preparation_id = $1 \
         ) \
         ORDER BY ir.id"
    )
}

/// Read-only access to kitchen preparations.
pub struct PreparationRepo;

impl PreparationRepo {
    /// List every preparation in the tenant namespace, most recent event first.
    pub async fn list(
        pool: &PgPool,
        tenant: &TenantContext,
    ) -> Result<Vec<PreparationSummary>, sqlx::Error> {
        let query = list_query(tenant);
        sqlx::query_as::<_, PreparationSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a preparation with its items and ingredient requirements.
    ///
    /// Returns `None` without touching the child tables when the preparation
    /// does not exist.
    pub async fn find_detail(
        pool: &PgPool,
        tenant: &TenantContext,
        id: DbId,
    ) -> Result<Option<PreparationDetail>, sqlx::Error> {
        let query = detail_query(tenant);
        let Some(preparation) = sqlx::query_as::<_, PreparationRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let items_sql = items_query(tenant);
        let requirements_sql = requirements_query(tenant);
        let (items, requirements) = futures::try_join!(
            sqlx::query_as::<_, PreparationItem>(&items_sql)
                .bind(id)
                .fetch_all(pool),
            sqlx::query_as::<_, IngredientRequirementRow>(&requirements_sql)
                .bind(id)
                .fetch_all(pool),
        )?;

        tracing::debug!(
            hotel_id = tenant.hotel_id(),
            preparation_id = id,
            items = items.len(),
            requirements = requirements.len(),
            "Loaded preparation detail"
        );

        Ok(Some(PreparationDetail::assemble(
            preparation,
            items,
            requirements,
        )))
    }
}
