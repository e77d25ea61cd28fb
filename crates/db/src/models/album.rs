//! Album model and DTOs.
//!
//! Albums are the only priced product in the catalog; see [`Priced`].

use chrono::NaiveDate;
use musicshop_core::cart::Priced;
use musicshop_core::money::Money;
use musicshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `albums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub artist_id: DbId,
    pub name: String,
    pub media_type_id: DbId,
    pub songs_list: String,
    pub release_date: NaiveDate,
    pub slug: String,
    pub description: String,
    pub stock: i32,
    pub price: Money,
    pub offer_of_the_week: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Priced for Album {
    fn unit_price(&self) -> Money {
        self.price
    }
}

/// DTO for creating a new album.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlbum {
    pub artist_id: DbId,
    pub name: String,
    pub media_type_id: DbId,
    pub songs_list: Option<String>,
    pub release_date: NaiveDate,
    pub slug: String,
    pub description: Option<String>,
    pub stock: Option<i32>,
    pub price: Money,
    pub offer_of_the_week: Option<bool>,
}

/// DTO for updating an album. All fields optional; the owning artist is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlbum {
    pub name: Option<String>,
    pub media_type_id: Option<DbId>,
    pub songs_list: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub stock: Option<i32>,
    pub price: Option<Money>,
    pub offer_of_the_week: Option<bool>,
}
