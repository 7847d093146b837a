use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Genre routes mounted at `/genres`. Genres are read-only.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(genres::list))
}
