//! Cart model and DTOs.

use musicshop_core::cart::CartTotals;
use musicshop_core::money::Money;
use musicshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::cart_product::CartProduct;

/// A row from the `carts` table.
///
/// `total_products` and `final_price` are maintained by the cart engine and
/// always reflect the cart's current lines.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cart {
    pub id: DbId,
    pub owner_id: Option<DbId>,
    pub total_products: i32,
    pub final_price: Money,
    pub in_order: bool,
    pub for_anonymous_user: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_products: self.total_products,
            final_price: self.final_price,
        }
    }
}

/// DTO for creating a cart. A cart without an owner must be anonymous.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCart {
    pub owner_id: Option<DbId>,
    #[serde(default)]
    pub for_anonymous_user: bool,
}

/// A cart together with its lines.
#[derive(Debug, Clone, Serialize)]
pub struct CartWithProducts {
    #[serde(flatten)]
    pub cart: Cart,
    pub products: Vec<CartProduct>,
}
