//! Wire types exchanged with the API.

use gamestore_core::types::{Date, DbId, Price};
use serde::{Deserialize, Serialize};

/// List representation of a game, genre resolved to its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: DbId,
    pub name: String,
    pub genre: String,
    pub price: Price,
    pub release_date: Date,
}

/// Full representation of a game, including the raw genre id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    pub id: DbId,
    pub name: String,
    pub genre_id: DbId,
    pub price: Price,
    pub release_date: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// Body of a create or replace request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    pub name: String,
    pub genre_id: DbId,
    pub price: Price,
    pub release_date: Date,
}
