//! Shared helpers for HTTP integration tests.
//!
//! Every test app runs against its own SQLite file with migrations applied
//! and uses [`build_app_router`], the same middleware stack as production.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use musicshop_api::config::ServerConfig;
use musicshop_api::router::build_app_router;
use musicshop_api::state::AppState;
use musicshop_core::money::Money;
use musicshop_db::models::album::{Album, CreateAlbum};
use musicshop_db::models::artist::{Artist, CreateArtist};
use musicshop_db::models::genre::{CreateGenre, Genre};
use musicshop_db::models::media_type::{CreateMediaType, MediaType};
use musicshop_db::models::member::CreateMember;
use musicshop_db::repositories::{AlbumRepo, ArtistRepo, GenreRepo, MediaTypeRepo, MemberRepo};
use musicshop_db::DbPool;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
    }
}

/// A router over a throwaway database. The database file lives as long as
/// this value.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = musicshop_db::create_pool(&db_url)
            .await
            .expect("Failed to create pool");
        musicshop_db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let config = test_config();
        let state = AppState {
            pool: pool.clone(),
            config: Arc::new(config.clone()),
        };

        Self {
            router: build_app_router(state, &config),
            pool,
            _temp_dir: temp_dir,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        send(self.router.clone(), Method::GET, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        send(self.router.clone(), Method::POST, uri, Some(body)).await
    }

    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> Response {
        send(self.router.clone(), Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        send(self.router.clone(), Method::DELETE, uri, None).await
    }
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the parsed body.
pub async fn expect_json(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Catalog fixtures
// ---------------------------------------------------------------------------

pub struct Catalog {
    pub media_type: MediaType,
    pub genre: Genre,
    pub artist: Artist,
    pub album: Album,
}

/// Seed the artist `the-band` (genre `rock`, members Ann and Bob) with the
/// album `first-light` on CD at 19.99.
pub async fn seed_catalog(pool: &DbPool) -> Catalog {
    let media_type = MediaTypeRepo::create(pool, &CreateMediaType { name: "CD".into() })
        .await
        .unwrap();
    let genre = GenreRepo::create(
        pool,
        &CreateGenre {
            name: "Rock".into(),
            slug: "rock".into(),
        },
    )
    .await
    .unwrap();

    let mut member_ids = Vec::new();
    for (name, slug) in [("Ann", "ann"), ("Bob", "bob")] {
        let member = MemberRepo::create(
            pool,
            &CreateMember {
                name: name.into(),
                slug: slug.into(),
            },
        )
        .await
        .unwrap();
        member_ids.push(member.id);
    }

    let artist = ArtistRepo::create(
        pool,
        &CreateArtist {
            name: "The Band".into(),
            genre_id: genre.id,
            slug: "the-band".into(),
            member_ids,
        },
    )
    .await
    .unwrap();
    let album = add_album(pool, &artist, &media_type, "first-light", 1999).await;

    Catalog {
        media_type,
        genre,
        artist,
        album,
    }
}

pub async fn add_album(
    pool: &DbPool,
    artist: &Artist,
    media_type: &MediaType,
    slug: &str,
    cents: i64,
) -> Album {
    AlbumRepo::create(
        pool,
        &CreateAlbum {
            artist_id: artist.id,
            name: slug.replace('-', " "),
            media_type_id: media_type.id,
            songs_list: Some("Intro\nOutro".into()),
            release_date: chrono::NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
            slug: slug.to_string(),
            description: None,
            stock: Some(5),
            price: Money::from_cents(cents),
            offer_of_the_week: None,
        },
    )
    .await
    .unwrap()
}

pub async fn add_artist(pool: &DbPool, genre: &Genre, slug: &str) -> Artist {
    ArtistRepo::create(
        pool,
        &CreateArtist {
            name: slug.to_uppercase(),
            genre_id: genre.id,
            slug: slug.to_string(),
            member_ids: Vec::new(),
        },
    )
    .await
    .unwrap()
}
