//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod album;
pub mod artist;
pub mod cart;
pub mod cart_product;
pub mod customer;
pub mod genre;
pub mod media_type;
pub mod member;
