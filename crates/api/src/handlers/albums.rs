use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use musicshop_db::repositories::AlbumRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/albums/offers
///
/// Albums flagged as offer of the week, newest release first.
pub async fn offers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let albums = AlbumRepo::list_offers_of_the_week(&state.pool).await?;
    Ok(Json(DataResponse { data: albums }))
}
