//! Resolution of polymorphic product references.
//!
//! Maps each [`ProductKind`] to the table that stores that kind of product.
//! Adding a product kind means adding a variant and an arm here.

use musicshop_core::cart::{Priced, ProductKind, ProductRef};
use musicshop_core::money::Money;
use serde::Serialize;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::album::Album;
use crate::repositories::AlbumRepo;

/// A resolved, priceable product.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricedProduct {
    Album(Album),
}

impl PricedProduct {
    pub fn product_ref(&self) -> ProductRef {
        match self {
            PricedProduct::Album(album) => ProductRef::album(album.id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PricedProduct::Album(album) => &album.name,
        }
    }
}

impl Priced for PricedProduct {
    fn unit_price(&self) -> Money {
        match self {
            PricedProduct::Album(album) => album.unit_price(),
        }
    }
}

/// Looks up products by typed reference.
pub struct ProductRepo;

impl ProductRepo {
    /// Resolve a product reference. Returns `None` if the product does not exist.
    pub async fn resolve(
        pool: &SqlitePool,
        product: ProductRef,
    ) -> Result<Option<PricedProduct>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::resolve_in(&mut conn, product).await
    }

    /// Resolve a product reference on an existing connection or transaction.
    pub async fn resolve_in(
        conn: &mut SqliteConnection,
        product: ProductRef,
    ) -> Result<Option<PricedProduct>, sqlx::Error> {
        match product.kind {
            ProductKind::Album => Ok(AlbumRepo::find_by_id_in(conn, product.id)
                .await?
                .map(PricedProduct::Album)),
        }
    }
}
