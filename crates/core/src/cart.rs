//! Cart pricing rules.
//!
//! A cart line references one priced product through a [`ProductRef`]: a
//! closed [`ProductKind`] tag plus the product's row id. The stored line
//! price is a snapshot, `qty × unit price` at the time the line is written.
//! The cart aggregate is the line count and the sum of line prices.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::Money;
use crate::types::DbId;

/// Upper bound on the quantity of a single line.
pub const MAX_LINE_QTY: i32 = 10_000;

/// Catalog entity kinds that exist but carry no price.
const UNPRICED_KINDS: &[&str] = &["artist", "genre", "member", "media_type"];

/// Kinds of product a cart line can reference.
///
/// The string form is what is stored in `cart_products.product_kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Album,
}

impl ProductKind {
    pub const ALL: &'static [ProductKind] = &[ProductKind::Album];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Album => "album",
        }
    }

    /// Parse a kind tag.
    ///
    /// Tags naming a catalog entity without a price yield
    /// `CoreError::Capability`; anything else unknown is a validation error.
    pub fn parse(tag: &str) -> Result<Self, CoreError> {
        if let Some(kind) = Self::ALL.iter().copied().find(|k| k.as_str() == tag) {
            return Ok(kind);
        }
        if UNPRICED_KINDS.contains(&tag) {
            return Err(CoreError::Capability(format!(
                "'{tag}' does not have a price and cannot be added to a cart"
            )));
        }
        Err(CoreError::Validation(format!(
            "Unknown product kind '{tag}'. Valid kinds: {}",
            Self::ALL
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed reference to one priced product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRef {
    pub kind: ProductKind,
    pub id: DbId,
}

impl ProductRef {
    pub fn album(id: DbId) -> Self {
        Self {
            kind: ProductKind::Album,
            id,
        }
    }

    /// Build a reference from an untyped `(kind, id)` pair.
    pub fn parse(kind: &str, id: DbId) -> Result<Self, CoreError> {
        Ok(Self {
            kind: ProductKind::parse(kind)?,
            id,
        })
    }
}

/// Anything that can be placed in a cart.
pub trait Priced {
    fn unit_price(&self) -> Money;
}

/// Validate a line quantity: a positive integer no larger than [`MAX_LINE_QTY`].
pub fn validate_quantity(qty: i32) -> Result<(), CoreError> {
    if qty <= 0 {
        return Err(CoreError::Validation(format!(
            "Quantity must be a positive integer, got {qty}"
        )));
    }
    if qty > MAX_LINE_QTY {
        return Err(CoreError::Validation(format!(
            "Quantity must be at most {MAX_LINE_QTY}, got {qty}"
        )));
    }
    Ok(())
}

/// Price of a line: `qty × unit price`.
pub fn line_total(product: &impl Priced, qty: i32) -> Result<Money, CoreError> {
    validate_quantity(qty)?;
    product
        .unit_price()
        .checked_mul_qty(i64::from(qty))
        .ok_or_else(|| CoreError::Validation("Line total is out of range".into()))
}

/// Derived cart aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Number of line items in the cart.
    pub total_products: i32,
    pub final_price: Money,
}

impl CartTotals {
    pub const EMPTY: CartTotals = CartTotals {
        total_products: 0,
        final_price: Money::ZERO,
    };

    /// Aggregate the stored prices of a cart's lines.
    ///
    /// Fails with a validation error when the sum is out of range.
    pub fn from_line_prices(prices: impl IntoIterator<Item = Money>) -> Result<Self, CoreError> {
        prices.into_iter().try_fold(Self::EMPTY, |acc, price| {
            let final_price = acc
                .final_price
                .checked_add(price)
                .ok_or_else(|| CoreError::Validation("Cart total is out of range".into()))?;
            Ok(CartTotals {
                total_products: acc.total_products + 1,
                final_price,
            })
        })
    }
}
