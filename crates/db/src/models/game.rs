//! Game entity model and DTOs.

use gamestore_core::types::{Date, DbId, Price};
use gamestore_core::validation::{validate_genre_id, validate_not_blank, validate_price, NAME_MAX_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A game row from the `games` table (the detail shape).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub name: String,
    pub genre_id: DbId,
    pub price: Price,
    pub release_date: Date,
}

impl Game {
    /// Overwrite every mutable field from an update payload.
    ///
    /// A validated payload has every field set; a field left as `None`
    /// keeps the stored value.
    pub fn apply_update(&mut self, input: &UpdateGame) {
        if let Some(name) = &input.name {
            self.name.clone_from(name);
        }
        if let Some(genre_id) = input.genre_id {
            self.genre_id = genre_id;
        }
        if let Some(price) = input.price {
            self.price = price;
        }
        if let Some(release_date) = input.release_date {
            self.release_date = release_date;
        }
    }
}

/// A game joined with its genre name, used for list views.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: DbId,
    pub name: String,
    pub genre: String,
    pub price: Price,
    pub release_date: Date,
}

/// DTO for creating a new game.
///
/// Every field is optional on the wire so a missing field is reported by
/// validation, per field, instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    #[validate(
        required(message = "Name is required"),
        length(max = NAME_MAX_LEN, message = "Name must be at most 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Genre id is required"),
        custom(function = "validate_genre_id")
    )]
    pub genre_id: Option<DbId>,
    #[validate(
        required(message = "Price is required"),
        custom(function = "validate_price")
    )]
    pub price: Option<Price>,
    #[validate(required(message = "Release date is required"))]
    pub release_date: Option<Date>,
}

/// DTO for replacing a game. Every field is required, same rules as create.
pub type UpdateGame = CreateGame;
