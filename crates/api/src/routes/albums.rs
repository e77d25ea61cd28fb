use axum::routing::get;
use axum::Router;

use crate::handlers::albums;
use crate::state::AppState;

/// Routes mounted at `/albums`.
///
/// ```text
/// GET /offers   -> offers
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/offers", get(albums::offers))
}
