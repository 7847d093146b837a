//! Integration tests for the baseline seed routine.

use gamestore_db::repositories::{GameRepo, GenreRepo};
use gamestore_db::seed::{baseline_game_names, seed_baseline, SeedReport, BASELINE_GENRES};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_populates_empty_tables(pool: PgPool) {
    let report = seed_baseline(&pool).await.unwrap();

    assert_eq!(
        report,
        SeedReport {
            genres_inserted: BASELINE_GENRES.len(),
            games_inserted: baseline_game_names().count(),
        }
    );

    let genres = GenreRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, BASELINE_GENRES);

    let games = GameRepo::list_summaries(&pool).await.unwrap();
    for name in baseline_game_names() {
        assert_eq!(games.iter().filter(|g| g.name == name).count(), 1, "{name}");
    }
    let rpg = games.iter().find(|g| g.name == "Epic RPG Quest").unwrap();
    assert_eq!(rpg.genre, "RPG");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    seed_baseline(&pool).await.unwrap();
    let second = seed_baseline(&pool).await.unwrap();

    assert_eq!(second, SeedReport::default());
    assert_eq!(GenreRepo::count(&pool).await.unwrap(), BASELINE_GENRES.len() as i64);
    assert_eq!(
        GameRepo::count(&pool).await.unwrap(),
        baseline_game_names().count() as i64
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_leaves_existing_genres_alone(pool: PgPool) {
    GenreRepo::create(&pool, "Puzzle").await.unwrap();

    let report = seed_baseline(&pool).await.unwrap();

    // Genres were not empty, and no default game can find its genre.
    assert_eq!(report, SeedReport::default());
    assert_eq!(GenreRepo::count(&pool).await.unwrap(), 1);
    assert_eq!(GameRepo::count(&pool).await.unwrap(), 0);
}
