//! Success envelope shared by the storefront pages and the JSON API.
//!
//! Errors use a different shape, `{ "error", "code" }`; see
//! [`AppError`](crate::error::AppError).

use serde::Serialize;

/// `{ "data": T }` wrapper for every successful JSON body.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
