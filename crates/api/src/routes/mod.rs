pub mod albums;
pub mod carts;
pub mod customers;
pub mod health;
pub mod storefront;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /customers                           create
/// /customers/{id}                      get
/// /customers/{id}/cart                 open cart of a customer
///
/// /carts                               create
/// /carts/{id}                          get (with line items)
/// /carts/{id}/items                    set line item (PUT)
/// /carts/{id}/items/{item_id}          change qty (PUT), remove (DELETE)
/// /carts/{id}/order                    place order (POST)
///
/// /albums/offers                       offers of the week
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/carts", carts::router())
        .nest("/albums", albums::router())
}
