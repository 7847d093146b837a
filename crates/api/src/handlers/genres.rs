//! Handlers for the `/genres` resource.

use axum::extract::State;
use axum::Json;
use gamestore_db::models::genre::Genre;
use gamestore_db::repositories::GenreRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}
