pub mod health;
pub mod preparation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /{hotel_id}/preparations                         list (auth required)
/// /{hotel_id}/preparations/{preparation_id}        detail (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/{hotel_id}/preparations", preparation::router())
}
