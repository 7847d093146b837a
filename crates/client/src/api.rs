//! REST client for the GameStore HTTP endpoints.
//!
//! One method per endpoint, using [`reqwest`]. Any non-2xx response becomes
//! [`ClientError::Status`]; the caller decides how to surface it.

use gamestore_core::types::DbId;

use crate::config::ClientConfig;
use crate::types::{GameDetails, GamePayload, GameSummary, Genre};

/// HTTP client for a GameStore API.
#[derive(Debug, Clone)]
pub struct GameStoreClient {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the GameStore REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("GameStore API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ClientError {
    /// The HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

impl GameStoreClient {
    /// Create a new API client.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:3000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET /games`
    pub async fn get_games(&self) -> Result<Vec<GameSummary>, ClientError> {
        let response = self
            .client
            .get(format!("{}/games", self.api_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /games/{id}`
    pub async fn get_game(&self, id: DbId) -> Result<GameDetails, ClientError> {
        let response = self
            .client
            .get(format!("{}/games/{id}", self.api_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `POST /games`, returning the created game.
    pub async fn create_game(&self, game: &GamePayload) -> Result<GameDetails, ClientError> {
        let response = self
            .client
            .post(format!("{}/games", self.api_url))
            .json(game)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `PUT /games/{id}`
    pub async fn update_game(&self, id: DbId, game: &GamePayload) -> Result<(), ClientError> {
        let response = self
            .client
            .put(format!("{}/games/{id}", self.api_url))
            .json(game)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// `DELETE /games/{id}`
    pub async fn delete_game(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/games/{id}", self.api_url))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// `GET /genres`
    pub async fn get_genres(&self) -> Result<Vec<Genre>, ClientError> {
        let response = self
            .client
            .get(format!("{}/genres", self.api_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClientError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
