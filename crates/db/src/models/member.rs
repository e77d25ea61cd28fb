//! Band member model and DTOs.

use musicshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub slug: String,
}

/// DTO for updating a member. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub slug: Option<String>,
}
