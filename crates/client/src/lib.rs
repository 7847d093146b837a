//! Client side of the game catalog.
//!
//! [`api::GameStoreClient`] mirrors the HTTP surface one method per endpoint.
//! [`app::App`] composes it with the view state machine, the game form and
//! the notification queue.

pub mod api;
pub mod app;
pub mod config;
pub mod form;
pub mod notifications;
pub mod types;
pub mod view;
