//! Editable state behind the create and edit screens.

use gamestore_core::error::CoreError;
use gamestore_core::types::{Date, DbId, Price};
use gamestore_core::validation::{validate_genre_id, validate_not_blank, validate_price, NAME_MAX_LEN};
use validator::ValidationError;

use crate::types::{GameDetails, GamePayload};

/// Field values as typed by the user.
///
/// `release_date` is kept as text so a half-typed date is representable; it
/// is parsed in [`GameForm::to_payload`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameForm {
    pub name: String,
    pub genre_id: DbId,
    pub price: Price,
    pub release_date: String,
    editing: Option<DbId>,
}

impl GameForm {
    /// Empty form for a new game, optionally with a genre already picked.
    pub fn for_create(preselected_genre_id: Option<DbId>) -> Self {
        Self {
            name: String::new(),
            genre_id: preselected_genre_id.unwrap_or(0),
            price: Price::ZERO,
            release_date: String::new(),
            editing: None,
        }
    }

    /// Form pre-filled from an existing game.
    pub fn for_edit(game: &GameDetails) -> Self {
        Self {
            name: game.name.clone(),
            genre_id: game.genre_id,
            price: game.price,
            release_date: game.release_date.format("%Y-%m-%d").to_string(),
            editing: Some(game.id),
        }
    }

    /// Id of the game being edited, `None` when creating.
    pub fn editing_id(&self) -> Option<DbId> {
        self.editing
    }

    /// Check every field and build the request body.
    ///
    /// Applies the same rules as the server so obviously bad input never
    /// leaves the client. The first failing field is reported. The name is
    /// sent exactly as typed; the server does not trim it either.
    pub fn to_payload(&self) -> Result<GamePayload, CoreError> {
        validate_not_blank(&self.name).map_err(to_core)?;
        if self.name.chars().count() as u64 > NAME_MAX_LEN {
            return Err(CoreError::Validation(format!(
                "Name must be at most {NAME_MAX_LEN} characters"
            )));
        }
        validate_genre_id(&self.genre_id).map_err(to_core)?;
        validate_price(&self.price).map_err(to_core)?;
        let release_date = parse_release_date(&self.release_date)?;

        Ok(GamePayload {
            name: self.name.clone(),
            genre_id: self.genre_id,
            price: self.price,
            release_date,
        })
    }
}

/// Accepts `YYYY-MM-DD`, ignoring any trailing time component.
fn parse_release_date(raw: &str) -> Result<Date, CoreError> {
    let date_part = raw.trim().split('T').next().unwrap_or_default();
    if date_part.is_empty() {
        return Err(CoreError::Validation("Release date is required".into()));
    }
    Date::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("Release date '{raw}' is not a valid date")))
}

fn to_core(err: ValidationError) -> CoreError {
    let message = err
        .message
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string());
    CoreError::Validation(message)
}
