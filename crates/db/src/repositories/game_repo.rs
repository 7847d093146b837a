//! Repository for the `games` table.

use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{CreateGame, Game, GameSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genre_id, price, release_date";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (name, genre_id, price, release_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.name)
            .bind(input.genre_id)
            .bind(input.price)
            .bind(input.release_date)
            .fetch_one(pool)
            .await
    }

    /// Find a game by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all games joined with their genre name, ordered by id.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<GameSummary>, sqlx::Error> {
        sqlx::query_as::<_, GameSummary>(
            "SELECT g.id, g.name, ge.name AS genre, g.price, g.release_date
             FROM games g
             JOIN genres ge ON ge.id = g.genre_id
             ORDER BY g.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Write every mutable field of `game` back to its row.
    ///
    /// Fails with `RowNotFound` if the row was removed after it was loaded.
    pub async fn save(pool: &PgPool, game: &Game) -> Result<Game, sqlx::Error> {
        let query = format!(
            "UPDATE games SET
                name = $2,
                genre_id = $3,
                price = $4,
                release_date = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(game.id)
            .bind(&game.name)
            .bind(game.genre_id)
            .bind(game.price)
            .bind(game.release_date)
            .fetch_one(pool)
            .await
    }

    /// Delete a game by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of rows in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM games")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
