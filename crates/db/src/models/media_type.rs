//! Media type (CD, vinyl, cassette, ...) model and DTOs.

use musicshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaType {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new media type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMediaType {
    pub name: String,
}

/// DTO for updating a media type.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMediaType {
    pub name: Option<String>,
}
