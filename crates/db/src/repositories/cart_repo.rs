//! Repository for the `carts` table.
//!
//! The aggregate columns (`total_products`, `final_price`) are only written by
//! [`CartRepo::recalculate_in`], which the cart engine calls inside the same
//! transaction as every line change.

use musicshop_core::cart::CartTotals;
use musicshop_core::error::CoreError;
use musicshop_core::money::Money;
use musicshop_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::begin_write;
use crate::error::DbResult;
use crate::models::cart::{Cart, CartWithProducts, CreateCart};
use crate::repositories::{CartProductRepo, CustomerRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, total_products, final_price, in_order, for_anonymous_user, \
                       created_at, updated_at";

/// Provides data access for carts and their aggregates.
pub struct CartRepo;

impl CartRepo {
    /// Create an empty cart.
    ///
    /// A cart needs an owner unless it is flagged for an anonymous user.
    pub async fn create(pool: &SqlitePool, input: &CreateCart) -> DbResult<Cart> {
        match input.owner_id {
            None if !input.for_anonymous_user => {
                return Err(CoreError::Validation(
                    "A cart without an owner must be marked for an anonymous user".into(),
                )
                .into());
            }
            Some(owner_id) => {
                if CustomerRepo::find_by_id(pool, owner_id).await?.is_none() {
                    return Err(CoreError::NotFound {
                        entity: "Customer",
                        id: owner_id,
                    }
                    .into());
                }
            }
            None => {}
        }

        let query = format!(
            "INSERT INTO carts (owner_id, for_anonymous_user) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let cart = sqlx::query_as::<_, Cart>(&query)
            .bind(input.owner_id)
            .bind(input.for_anonymous_user)
            .fetch_one(pool)
            .await?;
        Ok(cart)
    }

    /// Find a cart by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Cart>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::find_by_id_in(&mut conn, id).await
    }

    /// Find a cart by internal ID on an existing connection or transaction.
    pub async fn find_by_id_in(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Cart>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM carts WHERE id = $1");
        sqlx::query_as::<_, Cart>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a cart together with its lines.
    pub async fn find_with_products(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<CartWithProducts>, sqlx::Error> {
        let Some(cart) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let products = CartProductRepo::list_for_cart(pool, id).await?;
        Ok(Some(CartWithProducts { cart, products }))
    }

    /// The customer's most recent cart that has not been ordered yet.
    pub async fn find_open_for_customer(
        pool: &SqlitePool,
        customer_id: DbId,
    ) -> Result<Option<Cart>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM carts \
             WHERE owner_id = $1 AND in_order = 0 \
             ORDER BY id DESC LIMIT 1"
        );
        sqlx::query_as::<_, Cart>(&query)
            .bind(customer_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a cart as ordered. An ordered cart no longer accepts line changes.
    pub async fn mark_in_order(pool: &SqlitePool, id: DbId) -> DbResult<Cart> {
        let mut tx = begin_write(pool).await?;
        let cart = Self::find_by_id_in(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Cart", id })?;
        if cart.in_order {
            return Err(CoreError::Conflict(format!("Cart {id} is already ordered")).into());
        }
        if cart.total_products == 0 {
            return Err(CoreError::Validation(format!("Cart {id} is empty")).into());
        }

        let query = format!(
            "UPDATE carts SET in_order = 1, updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        let cart = sqlx::query_as::<_, Cart>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(cart)
    }

    /// Recompute a cart's aggregate from its lines.
    ///
    /// Returns `None` if the cart does not exist.
    pub async fn recalculate(pool: &SqlitePool, id: DbId) -> DbResult<Option<Cart>> {
        let mut tx = begin_write(pool).await?;
        let cart = Self::recalculate_in(&mut tx, id).await?;
        tx.commit().await?;
        Ok(cart)
    }

    /// Recompute a cart's aggregate on an existing connection or transaction.
    ///
    /// A total that does not fit the stored range is a validation error and
    /// leaves the row untouched.
    pub async fn recalculate_in(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> DbResult<Option<Cart>> {
        let prices: Vec<Money> =
            sqlx::query_scalar("SELECT final_price FROM cart_products WHERE cart_id = $1")
                .bind(id)
                .fetch_all(&mut *conn)
                .await?;
        let totals = CartTotals::from_line_prices(prices)?;

        let query = format!(
            "UPDATE carts SET \
                total_products = $2, \
                final_price = $3, \
                updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let cart = sqlx::query_as::<_, Cart>(&query)
            .bind(id)
            .bind(totals.total_products)
            .bind(totals.final_price)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(cart)
    }

    /// Delete a cart with its lines.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM carts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
