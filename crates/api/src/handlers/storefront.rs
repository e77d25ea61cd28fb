//! Handlers for the storefront pages: landing, artist detail, album detail.
//!
//! Artists are addressed by their globally unique slug. Albums are addressed
//! by their slug within the artist, so `/a/vol-1/` and `/b/vol-1/` are two
//! different albums.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use musicshop_core::error::CoreError;
use musicshop_db::models::album::Album;
use musicshop_db::models::artist::Artist;
use musicshop_db::models::genre::Genre;
use musicshop_db::models::media_type::MediaType;
use musicshop_db::models::member::Member;
use musicshop_db::repositories::{AlbumRepo, ArtistRepo, GenreRepo, MediaTypeRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub shop: &'static str,
    pub version: &'static str,
    pub routes: &'static [&'static str],
}

/// Artist page: the artist with its genre, members and albums.
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub genre: Genre,
    pub members: Vec<Member>,
    pub albums: Vec<Album>,
}

/// Album page: the album with its artist and media type.
#[derive(Debug, Serialize)]
pub struct AlbumDetail {
    #[serde(flatten)]
    pub album: Album,
    pub artist: Artist,
    pub media_type: MediaType,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
pub async fn home() -> impl IntoResponse {
    Json(DataResponse {
        data: HomePage {
            shop: "musicshop",
            version: env!("CARGO_PKG_VERSION"),
            routes: &[
                "/{artist_slug}/",
                "/{artist_slug}/{album_slug}/",
                "/api/v1/albums/offers",
            ],
        },
    })
}

/// GET /{artist_slug}/
pub async fn artist_detail(
    State(state): State<AppState>,
    Path(artist_slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let artist = find_artist(&state, &artist_slug).await?;

    let genre = GenreRepo::find_by_id(&state.pool, artist.genre_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Genre",
            id: artist.genre_id,
        })?;
    let members = ArtistRepo::list_members(&state.pool, artist.id).await?;
    let albums = AlbumRepo::list_by_artist(&state.pool, artist.id).await?;

    Ok(Json(DataResponse {
        data: ArtistDetail {
            artist,
            genre,
            members,
            albums,
        },
    }))
}

/// GET /{artist_slug}/{album_slug}/
pub async fn album_detail(
    State(state): State<AppState>,
    Path((artist_slug, album_slug)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let artist = find_artist(&state, &artist_slug).await?;

    let album = AlbumRepo::find_by_slug(&state.pool, artist.id, &album_slug)
        .await?
        .ok_or_else(|| CoreError::SlugNotFound {
            entity: "Album",
            slug: album_slug,
        })?;
    let media_type = MediaTypeRepo::find_by_id(&state.pool, album.media_type_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "MediaType",
            id: album.media_type_id,
        })?;

    Ok(Json(DataResponse {
        data: AlbumDetail {
            album,
            artist,
            media_type,
        },
    }))
}

async fn find_artist(state: &AppState, slug: &str) -> AppResult<Artist> {
    let artist = ArtistRepo::find_by_slug(&state.pool, slug)
        .await?
        .ok_or_else(|| CoreError::SlugNotFound {
            entity: "Artist",
            slug: slug.to_string(),
        })?;
    Ok(artist)
}
