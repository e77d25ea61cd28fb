//! Integration tests for the storefront pages.

mod common;

use axum::http::StatusCode;
use common::{body_json, expect_json, TestApp};

#[tokio::test]
async fn home_page_returns_ok() {
    let app = TestApp::new().await;

    let json = expect_json(app.get("/").await, StatusCode::OK).await;
    assert_eq!(json["data"]["shop"], "musicshop");
    assert!(json["data"]["routes"].is_array());
}

#[tokio::test]
async fn artist_page_lists_genre_members_and_albums() {
    let app = TestApp::new().await;
    let catalog = common::seed_catalog(&app.pool).await;

    let json = expect_json(app.get("/the-band/").await, StatusCode::OK).await;
    let data = &json["data"];
    assert_eq!(data["id"], catalog.artist.id);
    assert_eq!(data["name"], "The Band");
    assert_eq!(data["slug"], "the-band");
    assert_eq!(data["genre"]["slug"], "rock");

    let members: Vec<_> = data["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(members, vec!["Ann", "Bob"]);

    let albums = data["albums"].as_array().unwrap();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0]["slug"], "first-light");
    assert_eq!(albums[0]["price"], "19.99");
}

#[tokio::test]
async fn artist_page_answers_without_trailing_slash() {
    let app = TestApp::new().await;
    common::seed_catalog(&app.pool).await;

    let response = app.get("/the-band").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_artist_returns_404() {
    let app = TestApp::new().await;
    common::seed_catalog(&app.pool).await;

    let json = expect_json(app.get("/nonexistent-artist/").await, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Artist 'nonexistent-artist' not found");
}

#[tokio::test]
async fn album_page_includes_artist_and_media_type() {
    let app = TestApp::new().await;
    let catalog = common::seed_catalog(&app.pool).await;

    let json = expect_json(app.get("/the-band/first-light/").await, StatusCode::OK).await;
    let data = &json["data"];
    assert_eq!(data["id"], catalog.album.id);
    assert_eq!(data["price"], "19.99");
    assert_eq!(data["stock"], 5);
    assert_eq!(data["release_date"], "2021-03-14");
    assert_eq!(data["artist"]["slug"], "the-band");
    assert_eq!(data["media_type"]["name"], "CD");

    let response = app.get("/the-band/first-light").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn album_slug_is_scoped_to_its_artist() {
    let app = TestApp::new().await;
    let catalog = common::seed_catalog(&app.pool).await;
    let other = common::add_artist(&app.pool, &catalog.genre, "other-band").await;
    let theirs = common::add_album(&app.pool, &other, &catalog.media_type, "vol-1", 1500).await;
    let ours = common::add_album(
        &app.pool,
        &catalog.artist,
        &catalog.media_type,
        "vol-1",
        900,
    )
    .await;

    let json = expect_json(app.get("/other-band/vol-1/").await, StatusCode::OK).await;
    assert_eq!(json["data"]["id"], theirs.id);
    assert_eq!(json["data"]["price"], "15.00");

    let json = expect_json(app.get("/the-band/vol-1/").await, StatusCode::OK).await;
    assert_eq!(json["data"]["id"], ours.id);

    // An existing album slug under the wrong artist is not found.
    let response = app.get("/other-band/first-light/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_album_returns_404() {
    let app = TestApp::new().await;
    common::seed_catalog(&app.pool).await;

    let response = app.get("/the-band/no-such-album/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Album 'no-such-album' not found");
}

#[tokio::test]
async fn offers_of_the_week_are_listed() {
    let app = TestApp::new().await;
    common::seed_catalog(&app.pool).await;

    let json = expect_json(app.get("/api/v1/albums/offers").await, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
