//! Handlers for the `/games` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use gamestore_core::error::CoreError;
use gamestore_core::types::DbId;
use gamestore_db::models::game::{CreateGame, Game, GameSummary, UpdateGame};
use gamestore_db::repositories::GameRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Game", id })
}

/// GET /games
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GameSummary>>> {
    let games = GameRepo::list_summaries(&state.pool).await?;
    Ok(Json(games))
}

/// GET /games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Game>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(game))
}

/// POST /games
///
/// Responds with the created game and a `Location` header pointing at it.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateGame>,
) -> AppResult<impl IntoResponse> {
    let game = GameRepo::create(&state.pool, &input).await?;

    tracing::info!(game_id = game.id, name = %game.name, "Game created");

    let location = format!("/games/{}", game.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(game)))
}

/// PUT /games/{id}
///
/// Replaces all four mutable fields. Validation runs before the lookup, so an
/// invalid payload for a missing id is a 400, not a 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateGame>,
) -> AppResult<StatusCode> {
    let mut game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    game.apply_update(&input);
    GameRepo::save(&state.pool, &game).await?;

    tracing::info!(game_id = id, "Game updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /games/{id}
///
/// Always 204; deleting an id that does not exist is not an error.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GameRepo::delete(&state.pool, id).await?;

    tracing::info!(game_id = id, deleted, "Game delete requested");

    Ok(StatusCode::NO_CONTENT)
}
