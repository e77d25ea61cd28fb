//! Repository for the `genres` table.
//!
//! Deleting a genre cascades to its artists and, through them, their albums.

use musicshop_core::catalog::{validate_name, MAX_GENRE_NAME_LEN};
use musicshop_core::slug::validate_slug;
use musicshop_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::genre::{CreateGenre, Genre, UpdateGenre};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides CRUD operations for music genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    ///
    /// A duplicate slug fails with a unique violation.
    pub async fn create(pool: &SqlitePool, input: &CreateGenre) -> DbResult<Genre> {
        validate_name("Genre name", &input.name, MAX_GENRE_NAME_LEN)?;
        validate_slug(&input.slug)?;
        let query = format!("INSERT INTO genres (name, slug) VALUES ($1, $2) RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find a genre by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a genre by slug.
    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE slug = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all genres ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY name");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Update a genre. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateGenre,
    ) -> DbResult<Option<Genre>> {
        if let Some(name) = &input.name {
            validate_name("Genre name", name, MAX_GENRE_NAME_LEN)?;
        }
        if let Some(slug) = &input.slug {
            validate_slug(slug)?;
        }
        let query = format!(
            "UPDATE genres SET \
                name = COALESCE($2, name), \
                slug = COALESCE($3, slug), \
                updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete a genre together with its artists and their albums.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
