//! Repository for the `members` table.

use musicshop_core::catalog::{validate_name, MAX_MEMBER_NAME_LEN};
use musicshop_core::slug::validate_slug;
use musicshop_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::member::{CreateMember, Member, UpdateMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides CRUD operations for band members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    ///
    /// A duplicate slug fails with a unique violation.
    pub async fn create(pool: &SqlitePool, input: &CreateMember) -> DbResult<Member> {
        validate_name("Member name", &input.name, MAX_MEMBER_NAME_LEN)?;
        validate_slug(&input.slug)?;
        let query = format!("INSERT INTO members (name, slug) VALUES ($1, $2) RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, Member>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find a member by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a member by slug.
    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE slug = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all members ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members ORDER BY name");
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    /// Update a member. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMember,
    ) -> DbResult<Option<Member>> {
        if let Some(name) = &input.name {
            validate_name("Member name", name, MAX_MEMBER_NAME_LEN)?;
        }
        if let Some(slug) = &input.slug {
            validate_slug(slug)?;
        }
        let query = format!(
            "UPDATE members SET \
                name = COALESCE($2, name), \
                slug = COALESCE($3, slug), \
                updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete a member. Artist memberships are removed with it.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
