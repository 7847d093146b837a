//! Baseline seed data.
//!
//! [`seed_baseline`] is called once at process start, after migrations. Each
//! table is only seeded while it is empty, so repeated calls are no-ops.

use gamestore_core::types::{Date, Price};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::game::CreateGame;
use crate::repositories::{GameRepo, GenreRepo};

/// Genres inserted into an empty `genres` table.
pub const BASELINE_GENRES: [&str; 5] = ["Action", "Adventure", "RPG", "Strategy", "Sports"];

/// A default game, referencing its genre by name.
struct BaselineGame {
    name: &'static str,
    genre: &'static str,
    price: Price,
    release_date: (i32, u32, u32),
}

const BASELINE_GAMES: [BaselineGame; 3] = [
    BaselineGame {
        name: "Super Action Game",
        genre: "Action",
        price: Decimal::from_parts(4999, 0, 0, false, 2),
        release_date: (2023, 5, 1),
    },
    BaselineGame {
        name: "Epic RPG Quest",
        genre: "RPG",
        price: Decimal::from_parts(5999, 0, 0, false, 2),
        release_date: (2012, 1, 12),
    },
    BaselineGame {
        name: "Counter-Strike: Global Offensive",
        genre: "Action",
        price: Decimal::from_parts(3999, 0, 0, false, 2),
        release_date: (2016, 12, 9),
    },
];

/// Row counts inserted by a single [`seed_baseline`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub genres_inserted: usize,
    pub games_inserted: usize,
}

/// Names of the games inserted into an empty `games` table.
pub fn baseline_game_names() -> impl Iterator<Item = &'static str> {
    BASELINE_GAMES.iter().map(|g| g.name)
}

/// Insert default genres and games into whichever tables are empty.
///
/// A default game whose genre cannot be found by name (because `genres`
/// already held custom rows) is skipped with a warning.
pub async fn seed_baseline(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    if GenreRepo::count(pool).await? == 0 {
        for name in BASELINE_GENRES {
            GenreRepo::create(pool, name).await?;
            report.genres_inserted += 1;
        }
    }

    if GameRepo::count(pool).await? == 0 {
        for game in &BASELINE_GAMES {
            let Some(genre) = GenreRepo::find_by_name(pool, game.genre).await? else {
                tracing::warn!(game = game.name, genre = game.genre, "Seed genre missing, skipping game");
                continue;
            };
            let (year, month, day) = game.release_date;
            let input = CreateGame {
                name: Some(game.name.to_string()),
                genre_id: Some(genre.id),
                price: Some(game.price),
                release_date: Date::from_ymd_opt(year, month, day),
            };
            GameRepo::create(pool, &input).await?;
            report.games_inserted += 1;
        }
    }

    tracing::info!(
        genres_inserted = report.genres_inserted,
        games_inserted = report.games_inserted,
        "Baseline seed applied",
    );

    Ok(report)
}
