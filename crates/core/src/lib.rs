//! Shared types, errors and field validators for the GameStore workspace.

pub mod error;
pub mod types;
pub mod validation;
