//! Field validators for game payloads.
//!
//! These plug into `#[validate(custom(function = ...))]` on the request DTOs
//! and are reused by the client form so both sides reject the same input.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::types::{DbId, Price};

/// Maximum length of a game name, in characters.
pub const NAME_MAX_LEN: u64 = 50;

/// Smallest genre id accepted in a game payload.
pub const GENRE_ID_MIN: DbId = 1;

/// Largest genre id accepted in a game payload.
pub const GENRE_ID_MAX: DbId = 50;

/// Lowest accepted price (inclusive).
pub const PRICE_MIN: Price = Decimal::ONE;

/// Highest accepted price (inclusive).
pub const PRICE_MAX: Price = Decimal::ONE_HUNDRED;

/// Most decimal places a price may carry; the column is `NUMERIC(18, 2)`.
pub const PRICE_MAX_SCALE: u32 = 2;

/// Validates that a name contains at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Name is required".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a price falls within `[PRICE_MIN, PRICE_MAX]` and has at
/// most [`PRICE_MAX_SCALE`] decimal places, so it is stored without rounding.
///
/// # Examples
///
/// ```ignore
/// validate_price(&Decimal::new(4999, 2)) // Ok (49.99)
/// validate_price(&Decimal::ZERO)         // Err - below minimum
/// validate_price(&Decimal::new(49999, 3)) // Err - 49.999 has three decimals
/// ```
pub fn validate_price(price: &Price) -> Result<(), ValidationError> {
    if *price < PRICE_MIN || *price > PRICE_MAX {
        let mut err = ValidationError::new("range");
        err.message = Some(format!("Price must be between {PRICE_MIN} and {PRICE_MAX} (got {price})").into());
        err.add_param("min".into(), &PRICE_MIN.to_string());
        err.add_param("max".into(), &PRICE_MAX.to_string());
        return Err(err);
    }
    if price.normalize().scale() > PRICE_MAX_SCALE {
        let mut err = ValidationError::new("scale");
        err.message =
            Some(format!("Price must have at most {PRICE_MAX_SCALE} decimal places (got {price})").into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a genre id lies in `[GENRE_ID_MIN, GENRE_ID_MAX]`.
pub fn validate_genre_id(genre_id: &DbId) -> Result<(), ValidationError> {
    if !(GENRE_ID_MIN..=GENRE_ID_MAX).contains(genre_id) {
        let mut err = ValidationError::new("range");
        err.message = Some(
            format!("Genre id must be between {GENRE_ID_MIN} and {GENRE_ID_MAX} (got {genre_id})")
                .into(),
        );
        return Err(err);
    }
    Ok(())
}
