//! Request handlers.
//!
//! Handlers delegate to the repositories in `musicshop_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod albums;
pub mod carts;
pub mod customers;
pub mod storefront;
