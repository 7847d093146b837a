//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` record structs matching database rows
//! - `Deserialize` + `Validate` request DTOs for inserts and updates

pub mod game;
pub mod genre;
