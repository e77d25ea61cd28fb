//! Repository for the `albums` table.
//!
//! Album slugs are unique per artist, so detail lookups are always scoped by
//! the owning artist. Deleting an album also removes cart lines that
//! reference it (see the `trg_albums_remove_cart_lines` trigger).

use musicshop_core::catalog::{validate_name, validate_price, validate_stock, MAX_ALBUM_NAME_LEN};
use musicshop_core::slug::validate_slug;
use musicshop_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::error::DbResult;
use crate::models::album::{Album, CreateAlbum, UpdateAlbum};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_id, name, media_type_id, songs_list, release_date, slug, \
                       description, stock, price, offer_of_the_week, created_at, updated_at";

/// Provides CRUD operations for albums.
pub struct AlbumRepo;

impl AlbumRepo {
    /// Insert a new album, returning the created row.
    ///
    /// A slug already used by the same artist fails with a unique violation.
    pub async fn create(pool: &SqlitePool, input: &CreateAlbum) -> DbResult<Album> {
        validate_name("Album name", &input.name, MAX_ALBUM_NAME_LEN)?;
        validate_slug(&input.slug)?;
        validate_price(input.price)?;
        if let Some(stock) = input.stock {
            validate_stock(stock)?;
        }

        let query = format!(
            "INSERT INTO albums \
                (artist_id, name, media_type_id, songs_list, release_date, slug, \
                 description, stock, price, offer_of_the_week) \
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6, COALESCE($7, ''), \
                     COALESCE($8, 1), $9, COALESCE($10, 0)) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Album>(&query)
            .bind(input.artist_id)
            .bind(&input.name)
            .bind(input.media_type_id)
            .bind(&input.songs_list)
            .bind(input.release_date)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.stock)
            .bind(input.price)
            .bind(input.offer_of_the_week)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find an album by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::find_by_id_in(&mut conn, id).await
    }

    /// Find an album by its internal ID on an existing connection or transaction.
    pub async fn find_by_id_in(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find an album by slug within one artist's discography.
    pub async fn find_by_slug(
        pool: &SqlitePool,
        artist_id: DbId,
        slug: &str,
    ) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE artist_id = $1 AND slug = $2");
        sqlx::query_as::<_, Album>(&query)
            .bind(artist_id)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List an artist's albums, newest release first.
    pub async fn list_by_artist(
        pool: &SqlitePool,
        artist_id: DbId,
    ) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM albums WHERE artist_id = $1 \
             ORDER BY release_date DESC, name"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// List albums flagged as offer of the week.
    pub async fn list_offers_of_the_week(pool: &SqlitePool) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM albums WHERE offer_of_the_week = 1 \
             ORDER BY release_date DESC, name"
        );
        sqlx::query_as::<_, Album>(&query).fetch_all(pool).await
    }

    /// Update an album. Only non-`None` fields are applied.
    ///
    /// Existing cart lines keep the price they were written with.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateAlbum,
    ) -> DbResult<Option<Album>> {
        if let Some(name) = &input.name {
            validate_name("Album name", name, MAX_ALBUM_NAME_LEN)?;
        }
        if let Some(slug) = &input.slug {
            validate_slug(slug)?;
        }
        if let Some(price) = input.price {
            validate_price(price)?;
        }
        if let Some(stock) = input.stock {
            validate_stock(stock)?;
        }

        let query = format!(
            "UPDATE albums SET \
                name = COALESCE($2, name), \
                media_type_id = COALESCE($3, media_type_id), \
                songs_list = COALESCE($4, songs_list), \
                release_date = COALESCE($5, release_date), \
                slug = COALESCE($6, slug), \
                description = COALESCE($7, description), \
                stock = COALESCE($8, stock), \
                price = COALESCE($9, price), \
                offer_of_the_week = COALESCE($10, offer_of_the_week), \
                updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.media_type_id)
            .bind(&input.songs_list)
            .bind(input.release_date)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.stock)
            .bind(input.price)
            .bind(input.offer_of_the_week)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete an album. Cart lines referencing it are removed and their carts
    /// re-totalled.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
