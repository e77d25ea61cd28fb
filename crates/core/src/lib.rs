//! Domain layer for the musicshop storefront.
//!
//! No I/O lives here: identifiers, errors, money arithmetic, slug rules,
//! catalog field validation and cart pricing. Both the repository layer and
//! the HTTP layer depend on this crate.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod slug;
pub mod types;
