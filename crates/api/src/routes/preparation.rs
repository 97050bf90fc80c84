//! Route definitions for the kitchen preparation resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::preparation;
use crate::state::AppState;

/// Routes mounted at `/{hotel_id}/preparations`.
///
/// ```text
/// GET    /                                  -> list
/// GET    /{preparation_id}                  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(preparation::list))
        .route("/{preparation_id}", get(preparation::get_by_id))
}
