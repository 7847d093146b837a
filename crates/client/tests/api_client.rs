//! Gateway tests against an in-process stub API.

mod common;

use assert_matches::assert_matches;
use gamestore_client::api::{ClientError, GameStoreClient};
use gamestore_client::types::GamePayload;
use rust_decimal::Decimal;

fn forza() -> GamePayload {
    GamePayload {
        name: "Forza".to_string(),
        genre_id: 1,
        price: Decimal::new(4999, 2),
        release_date: chrono::NaiveDate::from_ymd_opt(2023, 10, 10).unwrap(),
    }
}

#[tokio::test]
async fn lists_games_and_genres() {
    let (url, _) = common::spawn_stub(common::Catalog::seeded()).await;
    let client = GameStoreClient::new(url);

    let games = client.get_games().await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Halo");
    assert_eq!(games[0].genre, "Action");
    assert_eq!(games[0].price, Decimal::new(5999, 2));

    let genres = client.get_genres().await.unwrap();
    assert_eq!(genres.len(), 2);
    assert_eq!(genres[1].name, "RPG");
}

#[tokio::test]
async fn create_then_get_returns_same_fields() {
    let (url, _) = common::spawn_stub(common::Catalog::seeded()).await;
    let client = GameStoreClient::new(url);

    let created = client.create_game(&forza()).await.unwrap();
    assert_eq!(created.name, "Forza");
    assert_eq!(created.price, Decimal::new(4999, 2));

    let fetched = client.get_game(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_and_delete_return_unit() {
    let (url, catalog) = common::spawn_stub(common::Catalog::seeded()).await;
    let client = GameStoreClient::new(url);

    let mut payload = forza();
    payload.name = "Halo Infinite".to_string();
    client.update_game(1, &payload).await.unwrap();
    assert_eq!(catalog.lock().unwrap().games[&1].name, "Halo Infinite");

    client.delete_game(1).await.unwrap();
    assert!(catalog.lock().unwrap().games.is_empty());

    // Deleting again still succeeds.
    client.delete_game(1).await.unwrap();
}

#[tokio::test]
async fn missing_game_is_a_status_error() {
    let (url, _) = common::spawn_stub(common::Catalog::seeded()).await;
    let client = GameStoreClient::new(url);

    let err = client.get_game(99_999).await.unwrap_err();
    assert_matches!(err, ClientError::Status { status: 404, .. });
    assert_eq!(err.status(), Some(404));

    let err = client.update_game(99_999, &forza()).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn rejected_create_carries_response_body() {
    let (url, _) = common::spawn_stub(common::Catalog::seeded()).await;
    let client = GameStoreClient::new(url);

    let mut payload = forza();
    payload.name = String::new();
    let err = client.create_game(&payload).await.unwrap_err();
    assert_matches!(err, ClientError::Status { status: 400, ref body } if body.contains("name"));
}

#[tokio::test]
async fn server_errors_and_transport_errors_are_distinguished() {
    let client = GameStoreClient::new(common::spawn_failing().await);
    assert_matches!(
        client.get_genres().await,
        Err(ClientError::Status { status: 500, .. })
    );

    let client = GameStoreClient::new(common::unreachable_url().await);
    assert_matches!(client.get_games().await, Err(ClientError::Request(_)));
}
