//! Handlers for the `/carts` resource.
//!
//! Line writes go through [`CartProductRepo`], which re-prices the line and
//! re-totals the cart in one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use musicshop_core::cart::ProductRef;
use musicshop_core::error::CoreError;
use musicshop_core::types::DbId;
use musicshop_db::models::cart::CreateCart;
use musicshop_db::models::cart_product::{SetCartLine, UpdateCartLine};
use musicshop_db::repositories::{CartProductRepo, CartRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/carts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCart>,
) -> AppResult<impl IntoResponse> {
    let cart = CartRepo::create(&state.pool, &input).await?;
    tracing::info!(cart_id = cart.id, owner_id = ?cart.owner_id, "Cart created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: cart })))
}

/// GET /api/v1/carts/{id}
///
/// The cart with its line items.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let cart = CartRepo::find_with_products(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Cart", id })?;
    Ok(Json(DataResponse { data: cart }))
}

/// PUT /api/v1/carts/{id}/items
///
/// Set the quantity of a product in the cart. The product kind is checked
/// before anything is written: kinds without a price answer 422.
pub async fn set_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetCartLine>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRef::parse(&input.product_kind, input.product_id)?;
    let written =
        CartProductRepo::set_line_item(&state.pool, input.customer_id, id, product, input.qty)
            .await?;
    Ok(Json(DataResponse { data: written }))
}

/// PUT /api/v1/carts/{id}/items/{item_id}
pub async fn update_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCartLine>,
) -> AppResult<impl IntoResponse> {
    ensure_line_in_cart(&state, id, item_id).await?;
    let written = CartProductRepo::update_qty(&state.pool, item_id, input.qty).await?;
    Ok(Json(DataResponse { data: written }))
}

/// DELETE /api/v1/carts/{id}/items/{item_id}
pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    CartProductRepo::remove_line_item(&state.pool, id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/carts/{id}/order
pub async fn place_order(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let cart = CartRepo::mark_in_order(&state.pool, id).await?;
    tracing::info!(
        cart_id = cart.id,
        total_products = cart.total_products,
        final_price = %cart.final_price,
        "Cart ordered"
    );
    Ok(Json(DataResponse { data: cart }))
}

async fn ensure_line_in_cart(state: &AppState, cart_id: DbId, item_id: DbId) -> AppResult<()> {
    match CartProductRepo::find_by_id(&state.pool, item_id).await? {
        Some(line) if line.cart_id == cart_id => Ok(()),
        _ => Err(CoreError::NotFound {
            entity: "CartProduct",
            id: item_id,
        }
        .into()),
    }
}
