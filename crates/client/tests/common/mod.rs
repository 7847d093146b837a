#![allow(dead_code)]

//! In-process stand-in for the GameStore API.
//!
//! Serves the same routes and status codes as the real server from an
//! in-memory catalog, on an ephemeral localhost port.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use gamestore_client::types::{GameDetails, GamePayload, GameSummary, Genre};
use rust_decimal::Decimal;

#[derive(Debug, Default)]
pub struct Catalog {
    pub games: BTreeMap<i64, GameDetails>,
    pub genres: Vec<Genre>,
    next_id: i64,
}

impl Catalog {
    /// Two genres and one game, mirroring a freshly seeded database.
    pub fn seeded() -> Self {
        let mut catalog = Catalog {
            genres: vec![
                Genre { id: 1, name: "Action".to_string() },
                Genre { id: 2, name: "RPG".to_string() },
            ],
            ..Default::default()
        };
        catalog.insert(GamePayload {
            name: "Halo".to_string(),
            genre_id: 1,
            price: Decimal::new(5999, 2),
            release_date: chrono::NaiveDate::from_ymd_opt(2001, 11, 15).unwrap(),
        });
        catalog
    }

    fn insert(&mut self, payload: GamePayload) -> GameDetails {
        self.next_id += 1;
        let game = GameDetails {
            id: self.next_id,
            name: payload.name,
            genre_id: payload.genre_id,
            price: payload.price,
            release_date: payload.release_date,
        };
        self.games.insert(game.id, game.clone());
        game
    }
}

pub type SharedCatalog = Arc<Mutex<Catalog>>;

async fn list_games(State(catalog): State<SharedCatalog>) -> Json<Vec<GameSummary>> {
    let catalog = catalog.lock().unwrap();
    let games = catalog
        .games
        .values()
        .map(|g| GameSummary {
            id: g.id,
            name: g.name.clone(),
            genre: catalog
                .genres
                .iter()
                .find(|ge| ge.id == g.genre_id)
                .map(|ge| ge.name.clone())
                .unwrap_or_default(),
            price: g.price,
            release_date: g.release_date,
        })
        .collect();
    Json(games)
}

async fn get_game(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<i64>,
) -> Result<Json<GameDetails>, StatusCode> {
    catalog
        .lock()
        .unwrap()
        .games
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_game(
    State(catalog): State<SharedCatalog>,
    Json(payload): Json<GamePayload>,
) -> impl IntoResponse {
    if payload.name.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "name is required").into_response();
    }
    let game = catalog.lock().unwrap().insert(payload);
    let location = format!("/games/{}", game.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(game)).into_response()
}

async fn update_game(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<i64>,
    Json(payload): Json<GamePayload>,
) -> StatusCode {
    let mut catalog = catalog.lock().unwrap();
    match catalog.games.get_mut(&id) {
        Some(game) => {
            game.name = payload.name;
            game.genre_id = payload.genre_id;
            game.price = payload.price;
            game.release_date = payload.release_date;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_game(State(catalog): State<SharedCatalog>, Path(id): Path<i64>) -> StatusCode {
    catalog.lock().unwrap().games.remove(&id);
    StatusCode::NO_CONTENT
}

async fn list_genres(State(catalog): State<SharedCatalog>) -> Json<Vec<Genre>> {
    Json(catalog.lock().unwrap().genres.clone())
}

/// Serve `router` on 127.0.0.1 with an ephemeral port, returning its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Start a stub API backed by `catalog`.
pub async fn spawn_stub(catalog: Catalog) -> (String, SharedCatalog) {
    let shared = Arc::new(Mutex::new(catalog));
    let router = Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", get(get_game).put(update_game).delete(delete_game))
        .route("/genres", get(list_genres))
        .with_state(Arc::clone(&shared));
    (serve(router).await, shared)
}

/// Start a server that answers every request with 500.
pub async fn spawn_failing() -> String {
    let router = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    serve(router).await
}

/// A base URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
