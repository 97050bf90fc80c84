//! Repository for the shared `hotels` registry.

use galley_core::types::DbId;
use sqlx::PgPool;

/// Looks up tenant metadata in the shared namespace.
pub struct HotelRepo;

impl HotelRepo {
    /// Return the raw schema name registered for a hotel.
    ///
    /// `None` covers both an unknown hotel and a hotel without a dedicated
    /// schema; either way the caller falls back to the shared namespace.
    /// The value is unvalidated; pass it through
    /// [`TenantContext::resolve`](galley_core::tenancy::TenantContext::resolve).
    pub async fn resolve_schema(
        pool: &PgPool,
        hotel_id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT schema_name FROM hotels WHERE id = $1")
                .bind(hotel_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.and_then(|(schema_name,)| schema_name))
    }

    /// Count hotels in the registry, split by whether they have a dedicated
    /// schema. Returns `(total, with_schema)`.
    pub async fn registry_counts(pool: &PgPool) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE NULLIF(TRIM(schema_name), '') IS NOT NULL) \
             FROM hotels",
        )
        .fetch_one(pool)
        .await
    }
}
