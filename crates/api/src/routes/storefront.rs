//! Route definitions for the storefront pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::storefront;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// Slug routes answer with and without the trailing slash.
///
/// ```text
/// GET /                              -> home
/// GET /{artist_slug}/                -> artist_detail
/// GET /{artist_slug}/{album_slug}/   -> album_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(storefront::home))
        .route("/{artist_slug}", get(storefront::artist_detail))
        .route("/{artist_slug}/", get(storefront::artist_detail))
        .route("/{artist_slug}/{album_slug}", get(storefront::album_detail))
        .route("/{artist_slug}/{album_slug}/", get(storefront::album_detail))
}
