//! Artist model and DTOs.
//!
//! An artist belongs to exactly one genre and has any number of members
//! (the `artist_members` junction table).

use musicshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub genre_id: DbId,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub genre_id: DbId,
    pub slug: String,
    #[serde(default)]
    pub member_ids: Vec<DbId>,
}

/// DTO for updating an artist. Members are managed via `set_members`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub genre_id: Option<DbId>,
    pub slug: Option<String>,
}
