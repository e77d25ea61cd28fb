use axum::routing::{get, post};
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// Routes mounted at `/customers`.
///
/// ```text
/// POST /            -> create
/// GET  /{id}        -> get_by_id
/// GET  /{id}/cart   -> open_cart
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(customers::create))
        .route("/{id}", get(customers::get_by_id))
        .route("/{id}/cart", get(customers::open_cart))
}
