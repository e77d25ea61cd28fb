//! Shared fixtures for repository integration tests.
//!
//! Each test gets its own SQLite file in a temp directory with all
//! migrations applied, so foreign keys, triggers and constraints behave as
//! in production.

#![allow(dead_code)]

use chrono::NaiveDate;
use musicshop_core::money::Money;
use musicshop_core::types::DbId;
use musicshop_db::models::album::{Album, CreateAlbum};
use musicshop_db::models::artist::{Artist, CreateArtist};
use musicshop_db::models::cart::{Cart, CreateCart};
use musicshop_db::models::customer::{CreateCustomer, Customer};
use musicshop_db::models::genre::{CreateGenre, Genre};
use musicshop_db::models::media_type::{CreateMediaType, MediaType};
use musicshop_db::repositories::{
    AlbumRepo, ArtistRepo, CartRepo, CustomerRepo, GenreRepo, MediaTypeRepo,
};
use musicshop_db::DbPool;
use tempfile::TempDir;

/// Test database that is removed when dropped.
pub struct TestDb {
    pub pool: DbPool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = musicshop_db::create_pool(&db_url)
            .await
            .expect("Failed to create pool");
        musicshop_db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn media_type(pool: &DbPool, name: &str) -> MediaType {
    MediaTypeRepo::create(
        pool,
        &CreateMediaType {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn genre(pool: &DbPool, slug: &str) -> Genre {
    GenreRepo::create(
        pool,
        &CreateGenre {
            name: slug.to_uppercase(),
            slug: slug.to_string(),
        },
    )
    .await
    .unwrap()
}

pub fn new_artist(genre_id: DbId, slug: &str) -> CreateArtist {
    CreateArtist {
        name: slug.replace('-', " "),
        genre_id,
        slug: slug.to_string(),
        member_ids: Vec::new(),
    }
}

pub async fn artist(pool: &DbPool, genre_id: DbId, slug: &str) -> Artist {
    ArtistRepo::create(pool, &new_artist(genre_id, slug))
        .await
        .unwrap()
}

pub fn new_album(artist_id: DbId, media_type_id: DbId, slug: &str, cents: i64) -> CreateAlbum {
    CreateAlbum {
        artist_id,
        name: slug.replace('-', " "),
        media_type_id,
        songs_list: None,
        release_date: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
        slug: slug.to_string(),
        description: None,
        stock: None,
        price: Money::from_cents(cents),
        offer_of_the_week: None,
    }
}

pub async fn album(
    pool: &DbPool,
    artist_id: DbId,
    media_type_id: DbId,
    slug: &str,
    cents: i64,
) -> Album {
    AlbumRepo::create(pool, &new_album(artist_id, media_type_id, slug, cents))
        .await
        .unwrap()
}

pub async fn customer(pool: &DbPool, name: &str) -> Customer {
    CustomerRepo::create(
        pool,
        &CreateCustomer {
            name: name.to_string(),
            phone: None,
            address: None,
        },
    )
    .await
    .unwrap()
}

pub async fn cart_for(pool: &DbPool, owner_id: DbId) -> Cart {
    CartRepo::create(
        pool,
        &CreateCart {
            owner_id: Some(owner_id),
            for_anonymous_user: false,
        },
    )
    .await
    .unwrap()
}

/// A priced album with everything it depends on.
pub struct Catalog {
    pub media_type: MediaType,
    pub genre: Genre,
    pub artist: Artist,
    pub album: Album,
}

/// Seed one album priced at 19.99 by artist `the-band` in genre `rock`.
pub async fn seed_catalog(pool: &DbPool) -> Catalog {
    let media_type = media_type(pool, "CD").await;
    let genre = genre(pool, "rock").await;
    let artist = artist(pool, genre.id, "the-band").await;
    let album = album(pool, artist.id, media_type.id, "first-light", 1999).await;
    Catalog {
        media_type,
        genre,
        artist,
        album,
    }
}
