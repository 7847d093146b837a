//! Which screen the client is showing.
//!
//! ```text
//!            select            edit
//!   List ───────────► Details ──────► Edit
//!    ▲ │ add new                        │
//!    │ └──────────► Create              │
//!    └──── save / cancel / back ◄───────┘
//! ```
//!
//! Deleting the game shown in `Details` also returns to `List`. There is no
//! terminal state.

use gamestore_core::types::DbId;

use crate::types::GameDetails;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    List,
    Create {
        preselected_genre_id: Option<DbId>,
    },
    Edit(GameDetails),
    Details(GameDetails),
}

/// Current view plus a counter bumped whenever the list must reload.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    current: View,
    refresh_counter: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &View {
        &self.current
    }

    pub fn refresh_counter(&self) -> u64 {
        self.refresh_counter
    }

    pub fn is_form(&self) -> bool {
        matches!(self.current, View::Create { .. } | View::Edit(_))
    }

    /// The game shown in `Details` or being edited, if any.
    pub fn selected(&self) -> Option<&GameDetails> {
        match &self.current {
            View::Details(game) | View::Edit(game) => Some(game),
            _ => None,
        }
    }

    pub fn select(&mut self, game: GameDetails) {
        self.current = View::Details(game);
    }

    pub fn edit(&mut self, game: GameDetails) {
        self.current = View::Edit(game);
    }

    pub fn create(&mut self, preselected_genre_id: Option<DbId>) {
        self.current = View::Create {
            preselected_genre_id,
        };
    }

    /// A form was saved: back to the list, which must reload.
    pub fn save(&mut self) {
        self.refresh_counter += 1;
        self.current = View::List;
    }

    pub fn cancel(&mut self) {
        self.current = View::List;
    }

    pub fn back(&mut self) {
        self.current = View::List;
    }

    /// A game was deleted. Leaves `Details` only when it showed that game.
    pub fn on_deleted(&mut self, id: DbId) {
        if matches!(&self.current, View::Details(game) if game.id == id) {
            self.current = View::List;
        }
    }
}
