//! Handlers for the `/{hotel_id}/preparations` resource.
//!
//! Both handlers do their work in an inner function returning [`AppResult`]
//! and pattern-match the outcome into the uniform envelope, so no error
//! escapes as a bare `{error, code}` body. Authentication failures are the
//! exception: [`AuthUser`] rejects before the handler runs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use galley_core::error::CoreError;
use galley_core::tenancy::{validate_hotel_id, TenantContext};
use galley_core::types::DbId;
use galley_db::models::preparation::{PreparationDetail, PreparationSummary};
use galley_db::repositories::{HotelRepo, PreparationRepo};
use galley_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{PreparationDetailResponse, PreparationListResponse};
use crate::state::AppState;

/// Resolve the namespace a hotel's kitchen tables live in.
///
/// One registry lookup per request; nothing is cached.
pub async fn resolve_tenant(pool: &DbPool, hotel_id: DbId) -> AppResult<TenantContext> {
    validate_hotel_id(hotel_id)?;
    let raw = HotelRepo::resolve_schema(pool, hotel_id).await?;
    let tenant = TenantContext::resolve(hotel_id, raw.as_deref())?;
    tracing::debug!(
        hotel_id,
        schema = tenant.schema().map(|s| s.as_str()).unwrap_or("<shared>"),
        "Resolved tenant schema"
    );
    Ok(tenant)
}

async fn load_list(pool: &DbPool, hotel_id: DbId) -> AppResult<Vec<PreparationSummary>> {
    let tenant = resolve_tenant(pool, hotel_id).await?;
    Ok(PreparationRepo::list(pool, &tenant).await?)
}

async fn load_detail(
    pool: &DbPool,
    hotel_id: DbId,
    preparation_id: DbId,
) -> AppResult<PreparationDetail> {
    let tenant = resolve_tenant(pool, hotel_id).await?;
    PreparationRepo::find_detail(pool, &tenant, preparation_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "KitchenPreparation",
            id: preparation_id,
        }))
}

/// GET /api/v1/{hotel_id}/preparations
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(hotel_id): Path<DbId>,
) -> (StatusCode, Json<PreparationListResponse>) {
    match load_list(&state.pool, hotel_id).await {
        Ok(preparations) => {
            tracing::debug!(
                hotel_id,
                user_id = auth.user_id,
                count = preparations.len(),
                "Listed kitchen preparations"
            );
            (
                StatusCode::OK,
                Json(PreparationListResponse::ok(preparations)),
            )
        }
        Err(err) => {
            tracing::error!(hotel_id, error = %err, "Failed to list kitchen preparations");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PreparationListResponse::failed(hotel_id)),
            )
        }
    }
}

/// GET /api/v1/{hotel_id}/preparations/{preparation_id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((hotel_id, preparation_id)): Path<(DbId, DbId)>,
) -> (StatusCode, Json<PreparationDetailResponse>) {
    match load_detail(&state.pool, hotel_id, preparation_id).await {
        Ok(detail) => {
            tracing::debug!(
                hotel_id,
                preparation_id,
                user_id = auth.user_id,
                role = %auth.role,
                "Fetched kitchen preparation detail"
            );
            (StatusCode::OK, Json(PreparationDetailResponse::ok(detail)))
        }
        Err(AppError::Core(CoreError::NotFound { .. })) => (
            StatusCode::NOT_FOUND,
            Json(PreparationDetailResponse::not_found(preparation_id)),
        ),
        Err(err) => {
            tracing::error!(
                hotel_id,
                preparation_id,
                error = %err,
                "Failed to fetch kitchen preparation detail"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PreparationDetailResponse::failed(
                    &err,
                    state.config.expose_error_details,
                )),
            )
        }
    }
}
