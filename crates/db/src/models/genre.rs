//! Genre entity model.

use gamestore_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A genre row from the `genres` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}
