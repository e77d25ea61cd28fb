//! Repository for the `artists` table and the `artist_members` junction.
//!
//! Artist slugs are globally unique. Deleting an artist removes its albums
//! and memberships.

use musicshop_core::catalog::{validate_name, MAX_ARTIST_NAME_LEN};
use musicshop_core::slug::validate_artist_slug;
use musicshop_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::error::DbResult;
use crate::models::artist::{Artist, CreateArtist, UpdateArtist};
use crate::models::member::Member;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genre_id, slug, created_at, updated_at";

/// Provides CRUD operations for artists and their members.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist with its initial members, returning the created row.
    ///
    /// Runs in a transaction so a bad member id leaves no partial artist.
    pub async fn create(pool: &SqlitePool, input: &CreateArtist) -> DbResult<Artist> {
        validate_name("Artist name", &input.name, MAX_ARTIST_NAME_LEN)?;
        validate_artist_slug(&input.slug)?;

        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO artists (name, genre_id, slug) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(input.genre_id)
            .bind(&input.slug)
            .fetch_one(&mut *tx)
            .await?;
        insert_members(&mut tx, artist.id, &input.member_ids).await?;
        tx.commit().await?;
        Ok(artist)
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an artist by its slug.
    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE slug = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all artists ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY name");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// List the artists of one genre ordered by name.
    pub async fn list_by_genre(
        pool: &SqlitePool,
        genre_id: DbId,
    ) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE genre_id = $1 ORDER BY name");
        sqlx::query_as::<_, Artist>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await
    }

    /// Update an artist. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateArtist,
    ) -> DbResult<Option<Artist>> {
        if let Some(name) = &input.name {
            validate_name("Artist name", name, MAX_ARTIST_NAME_LEN)?;
        }
        if let Some(slug) = &input.slug {
            validate_artist_slug(slug)?;
        }
        let query = format!(
            "UPDATE artists SET \
                name = COALESCE($2, name), \
                genre_id = COALESCE($3, genre_id), \
                slug = COALESCE($4, slug), \
                updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.genre_id)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Replace the member set of an artist.
    pub async fn set_members(
        pool: &SqlitePool,
        artist_id: DbId,
        member_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM artist_members WHERE artist_id = $1")
            .bind(artist_id)
            .execute(&mut *tx)
            .await?;
        insert_members(&mut tx, artist_id, member_ids).await?;
        tx.commit().await
    }

    /// List the members of an artist ordered by name.
    pub async fn list_members(
        pool: &SqlitePool,
        artist_id: DbId,
    ) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            "SELECT m.id, m.name, m.slug, m.created_at, m.updated_at \
             FROM members m \
             JOIN artist_members am ON am.member_id = m.id \
             WHERE am.artist_id = $1 \
             ORDER BY m.name",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    /// Delete an artist together with its albums.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn insert_members(
    conn: &mut SqliteConnection,
    artist_id: DbId,
    member_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    for member_id in member_ids {
        sqlx::query(
            "INSERT INTO artist_members (artist_id, member_id) VALUES ($1, $2) \
             ON CONFLICT (artist_id, member_id) DO NOTHING",
        )
        .bind(artist_id)
        .bind(member_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
