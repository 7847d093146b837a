pub mod games;
pub mod genres;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                 list, create
/// /games/{id}            get, replace, delete
///
/// /genres                list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .nest("/genres", genres::router())
}
