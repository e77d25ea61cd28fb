//! Repository for the `media_types` table.

use musicshop_core::catalog::{validate_name, MAX_MEDIA_TYPE_NAME_LEN};
use musicshop_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::media_type::{CreateMediaType, MediaType, UpdateMediaType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for media types.
pub struct MediaTypeRepo;

impl MediaTypeRepo {
    /// Insert a new media type, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateMediaType) -> DbResult<MediaType> {
        validate_name("Media type name", &input.name, MAX_MEDIA_TYPE_NAME_LEN)?;
        let query = format!("INSERT INTO media_types (name) VALUES ($1) RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, MediaType>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find a media type by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<MediaType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_types WHERE id = $1");
        sqlx::query_as::<_, MediaType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all media types ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<MediaType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_types ORDER BY name");
        sqlx::query_as::<_, MediaType>(&query).fetch_all(pool).await
    }

    /// Update a media type. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMediaType,
    ) -> DbResult<Option<MediaType>> {
        if let Some(name) = &input.name {
            validate_name("Media type name", name, MAX_MEDIA_TYPE_NAME_LEN)?;
        }
        let query = format!(
            "UPDATE media_types SET \
                name = COALESCE($2, name), \
                updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MediaType>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete a media type. Fails with a foreign-key violation while albums use it.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
