//! Cart engine: repository for the `cart_products` table.
//!
//! Every write re-prices the line from the referenced product's current unit
//! price and re-totals the parent cart, all in one transaction. A line's
//! price is a snapshot: later product price changes do not touch it until
//! the line is written again.

use musicshop_core::cart::{line_total, validate_quantity, ProductRef};
use musicshop_core::error::CoreError;
use musicshop_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::begin_write;
use crate::error::DbResult;
use crate::models::cart::Cart;
use crate::models::cart_product::CartProduct;
use crate::repositories::{CartRepo, ProductRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, cart_id, product_kind, product_id, qty, final_price, \
                       created_at, updated_at";

/// A written line together with the cart it belongs to, after re-totalling.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LineWrite {
    pub line: CartProduct,
    pub cart: Cart,
}

/// Provides the cart line operations.
pub struct CartProductRepo;

impl CartProductRepo {
    /// Set the quantity of a product in a cart, adding the line if needed.
    ///
    /// `final_price = qty × unit price` is computed from the product as read
    /// inside the transaction. Fails with:
    /// - `Validation` for a non-positive quantity, a cart owned by someone
    ///   else, or a cart total that would leave the stored range;
    /// - `Conflict` for a cart that is already ordered;
    /// - `NotFound` for a missing cart or product.
    pub async fn set_line_item(
        pool: &SqlitePool,
        customer_id: Option<DbId>,
        cart_id: DbId,
        product: ProductRef,
        qty: i32,
    ) -> DbResult<LineWrite> {
        validate_quantity(qty)?;

        let mut tx = begin_write(pool).await?;
        load_writable_cart(&mut tx, customer_id, cart_id).await?;
        let line = write_line(&mut tx, customer_id, cart_id, product, qty).await?;
        let cart = recalculated(&mut tx, cart_id).await?;
        tx.commit().await?;

        tracing::info!(
            cart_id,
            line_id = line.id,
            product_kind = %product.kind,
            product_id = product.id,
            qty,
            final_price = %line.final_price,
            "Cart line set"
        );
        Ok(LineWrite { line, cart })
    }

    /// Change the quantity of an existing line, re-pricing it at the
    /// product's current price.
    pub async fn update_qty(pool: &SqlitePool, line_id: DbId, qty: i32) -> DbResult<LineWrite> {
        validate_quantity(qty)?;

        let mut tx = begin_write(pool).await?;
        let existing = Self::find_by_id_in(&mut tx, line_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "CartProduct",
                id: line_id,
            })?;
        let product = existing.product()?;
        load_writable_cart(&mut tx, existing.customer_id, existing.cart_id).await?;
        let line = write_line(&mut tx, existing.customer_id, existing.cart_id, product, qty).await?;
        let cart = recalculated(&mut tx, existing.cart_id).await?;
        tx.commit().await?;
        Ok(LineWrite { line, cart })
    }

    /// Remove a line from a cart and re-total the cart.
    ///
    /// Returns the updated cart; `NotFound` if the line is not in that cart.
    pub async fn remove_line_item(
        pool: &SqlitePool,
        cart_id: DbId,
        line_id: DbId,
    ) -> DbResult<Cart> {
        let mut tx = begin_write(pool).await?;
        let cart = CartRepo::find_by_id_in(&mut tx, cart_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Cart",
                id: cart_id,
            })?;
        if cart.in_order {
            return Err(CoreError::Conflict(format!("Cart {cart_id} is already ordered")).into());
        }

        let result = sqlx::query("DELETE FROM cart_products WHERE id = $1 AND cart_id = $2")
            .bind(line_id)
            .bind(cart_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "CartProduct",
                id: line_id,
            }
            .into());
        }

        let cart = recalculated(&mut tx, cart_id).await?;
        tx.commit().await?;
        tracing::info!(cart_id, line_id, "Cart line removed");
        Ok(cart)
    }

    /// Find a line by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<CartProduct>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::find_by_id_in(&mut conn, id).await
    }

    /// Find a line by internal ID on an existing connection or transaction.
    pub async fn find_by_id_in(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<CartProduct>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cart_products WHERE id = $1");
        sqlx::query_as::<_, CartProduct>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List the lines of a cart in insertion order.
    pub async fn list_for_cart(
        pool: &SqlitePool,
        cart_id: DbId,
    ) -> Result<Vec<CartProduct>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cart_products WHERE cart_id = $1 ORDER BY id");
        sqlx::query_as::<_, CartProduct>(&query)
            .bind(cart_id)
            .fetch_all(pool)
            .await
    }
}

/// Load a cart and check that `customer_id` may change its lines.
async fn load_writable_cart(
    conn: &mut SqliteConnection,
    customer_id: Option<DbId>,
    cart_id: DbId,
) -> DbResult<Cart> {
    let cart = CartRepo::find_by_id_in(conn, cart_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Cart",
            id: cart_id,
        })?;
    if cart.owner_id != customer_id {
        return Err(CoreError::Validation(format!(
            "Cart {cart_id} does not belong to this customer"
        ))
        .into());
    }
    if cart.in_order {
        return Err(CoreError::Conflict(format!("Cart {cart_id} is already ordered")).into());
    }
    Ok(cart)
}

/// Price and upsert one line keyed by (cart, product).
async fn write_line(
    conn: &mut SqliteConnection,
    customer_id: Option<DbId>,
    cart_id: DbId,
    product: ProductRef,
    qty: i32,
) -> DbResult<CartProduct> {
    let resolved = ProductRepo::resolve_in(&mut *conn, product)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id: product.id,
        })?;
    let final_price = line_total(&resolved, qty)?;

    let query = format!(
        "INSERT INTO cart_products (customer_id, cart_id, product_kind, product_id, qty, final_price) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         ON CONFLICT (cart_id, product_kind, product_id) DO UPDATE SET \
            qty = excluded.qty, \
            final_price = excluded.final_price, \
            updated_at = CURRENT_TIMESTAMP \
         RETURNING {COLUMNS}"
    );
    let line = sqlx::query_as::<_, CartProduct>(&query)
        .bind(customer_id)
        .bind(cart_id)
        .bind(product.kind.as_str())
        .bind(product.id)
        .bind(qty)
        .bind(final_price)
        .fetch_one(&mut *conn)
        .await?;
    Ok(line)
}

async fn recalculated(conn: &mut SqliteConnection, cart_id: DbId) -> DbResult<Cart> {
    CartRepo::recalculate_in(conn, cart_id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Cart",
                id: cart_id,
            }
            .into()
        })
}
