//! Request extractors shared by the handlers.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs [`Validate`] on the payload.
///
/// Malformed JSON and wrong field types are rejected as
/// [`AppError::BadRequest`]; rule violations, including missing required
/// fields, become [`AppError::Validation`] with per-field messages.
///
/// ```ignore
/// async fn create(ValidJson(input): ValidJson<CreateGame>) -> AppResult<StatusCode> {
///     // `input` has already passed validation here.
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}
