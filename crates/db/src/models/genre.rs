//! Music genre model and DTOs.

use musicshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
    pub slug: String,
}

/// DTO for updating a genre. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGenre {
    pub name: Option<String>,
    pub slug: Option<String>,
}
