//! Route definitions for carts and their line items.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::carts;
use crate::state::AppState;

/// Routes mounted at `/carts`.
///
/// ```text
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}/items              -> set_item
/// PUT    /{id}/items/{item_id}    -> update_item
/// DELETE /{id}/items/{item_id}    -> remove_item
/// POST   /{id}/order              -> place_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(carts::create))
        .route("/{id}", get(carts::get_by_id))
        .route("/{id}/items", put(carts::set_item))
        .route(
            "/{id}/items/{item_id}",
            put(carts::update_item).delete(carts::remove_item),
        )
        .route("/{id}/order", post(carts::place_order))
}
