//! Repository for the `genres` table.

use sqlx::PgPool;

use crate::models::genre::Genre;

/// Read access to genres, plus the insert used by the baseline seed.
pub struct GenreRepo;

impl GenreRepo {
    /// List every genre ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find the first genre (lowest id) with the given name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE name = $1 ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert a genre, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Number of rows in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM genres")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
