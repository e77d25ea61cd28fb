//! Cart line model and DTOs.

use musicshop_core::cart::{ProductKind, ProductRef};
use musicshop_core::error::CoreError;
use musicshop_core::money::Money;
use musicshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cart_products` table.
///
/// `(product_kind, product_id)` is the polymorphic product reference;
/// use [`CartProduct::product`] for the typed form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CartProduct {
    pub id: DbId,
    pub customer_id: Option<DbId>,
    pub cart_id: DbId,
    pub product_kind: String,
    pub product_id: DbId,
    pub qty: i32,
    pub final_price: Money,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartProduct {
    /// Typed product reference of this line.
    pub fn product(&self) -> Result<ProductRef, CoreError> {
        ProductRef::parse(&self.product_kind, self.product_id)
    }

    pub fn is_kind(&self, kind: ProductKind) -> bool {
        self.product_kind == kind.as_str()
    }
}

/// Request body for setting a cart line.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCartLine {
    pub customer_id: Option<DbId>,
    pub product_kind: String,
    pub product_id: DbId,
    pub qty: i32,
}

/// Request body for changing the quantity of an existing line.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCartLine {
    pub qty: i32,
}
