//! Root composition of the client.
//!
//! [`App`] owns the gateway, the current view, the open form, cached lists
//! and the notification queue. Every user action is one method; failures are
//! logged and turned into an error toast, never returned. Elapsed toasts are
//! dropped whenever a new one is queued; a render loop that wants them gone
//! sooner calls `notifications_mut().expire(now)` itself.

use std::time::Instant;

use gamestore_core::types::DbId;

use crate::api::GameStoreClient;
use crate::form::GameForm;
use crate::notifications::{ConfirmAction, NotificationQueue};
use crate::types::{GameDetails, GameSummary, Genre};
use crate::view::{View, ViewState};

const DELETE_PROMPT: &str = "Are you sure you want to delete this game?";

pub struct App {
    client: GameStoreClient,
    view: ViewState,
    notifications: NotificationQueue,
    form: Option<GameForm>,
    games: Vec<GameSummary>,
    genres: Vec<Genre>,
}

impl App {
    pub fn new(client: GameStoreClient) -> Self {
        Self {
            client,
            view: ViewState::new(),
            notifications: NotificationQueue::new(),
            form: None,
            games: Vec::new(),
            genres: Vec::new(),
        }
    }

    pub fn view(&self) -> &View {
        self.view.current()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    pub fn form(&self) -> Option<&GameForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut GameForm> {
        self.form.as_mut()
    }

    pub fn games(&self) -> &[GameSummary] {
        &self.games
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Fetch the initial genre and game lists.
    pub async fn start(&mut self) {
        self.load_genres().await;
        self.refresh_games().await;
    }

    pub async fn load_genres(&mut self) {
        match self.client.get_genres().await {
            Ok(genres) => self.genres = genres,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load genres");
                self.notify_error("Failed to load genres");
            }
        }
    }

    pub async fn refresh_games(&mut self) {
        match self.client.get_games().await {
            Ok(games) => self.games = games,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load games");
                self.notify_error("Failed to load games");
            }
        }
    }

    /// Show the details of a game.
    pub async fn select_game(&mut self, id: DbId) {
        if let Some(game) = self.fetch_details(id).await {
            self.view.select(game);
        }
    }

    /// Open the edit form, reusing the details already on screen when they
    /// belong to the same game.
    pub async fn edit_game(&mut self, id: DbId) {
        let shown = self.view.selected().filter(|g| g.id == id).cloned();
        let game = match shown {
            Some(game) => game,
            None => match self.fetch_details(id).await {
                Some(game) => game,
                None => return,
            },
        };
        self.form = Some(GameForm::for_edit(&game));
        self.view.edit(game);
    }

    /// Open an empty create form, optionally pre-selecting a genre.
    pub fn start_create(&mut self, preselected_genre_id: Option<DbId>) {
        self.form = Some(GameForm::for_create(preselected_genre_id));
        self.view.create(preselected_genre_id);
    }

    /// Submit the open form. On success returns to the list and reloads it;
    /// on failure stays on the form.
    pub async fn save_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };

        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.notify_error(err.to_string());
                return;
            }
        };

        let result = match form.editing_id() {
            Some(id) => self
                .client
                .update_game(id, &payload)
                .await
                .map(|()| "Game updated successfully")
                .map_err(|err| (err, "Failed to update game")),
            None => self
                .client
                .create_game(&payload)
                .await
                .map(|_| "Game created successfully")
                .map_err(|err| (err, "Failed to create game")),
        };

        match result {
            Ok(message) => {
                self.notify_success(message);
                self.form = None;
                self.view.save();
                self.refresh_games().await;
            }
            Err((err, message)) => {
                tracing::warn!(error = %err, "{message}");
                self.notify_error(message);
            }
        }
    }

    pub fn cancel(&mut self) {
        self.form = None;
        self.view.cancel();
    }

    pub fn back(&mut self) {
        self.form = None;
        self.view.back();
    }

    /// Ask the user to confirm deleting a game.
    pub fn request_delete(&mut self, id: DbId) {
        self.notifications
            .request_confirmation(DELETE_PROMPT, ConfirmAction::DeleteGame(id));
    }

    /// Run the action behind the open confirmation prompt, if any.
    pub async fn confirm(&mut self) {
        let Some(action) = self.notifications.confirm() else {
            return;
        };
        match action {
            ConfirmAction::DeleteGame(id) => self.delete_game(id).await,
        }
    }

    pub fn dismiss_confirmation(&mut self) {
        self.notifications.cancel_confirmation();
    }

    async fn delete_game(&mut self, id: DbId) {
        match self.client.delete_game(id).await {
            Ok(()) => {
                self.games.retain(|g| g.id != id);
                self.view.on_deleted(id);
                self.notify_success("Game deleted successfully");
            }
            Err(err) => {
                tracing::warn!(error = %err, game_id = id, "Failed to delete game");
                self.notify_error("Failed to delete game");
            }
        }
    }

    fn notify_success(&mut self, message: impl Into<String>) {
        self.notifications.expire(Instant::now());
        self.notifications.success(message);
    }

    fn notify_error(&mut self, message: impl Into<String>) {
        self.notifications.expire(Instant::now());
        self.notifications.error(message);
    }

    async fn fetch_details(&mut self, id: DbId) -> Option<GameDetails> {
        match self.client.get_game(id).await {
            Ok(game) => Some(game),
            Err(err) => {
                tracing::warn!(error = %err, game_id = id, "Failed to load game details");
                self.notify_error("Failed to load game details");
                None
            }
        }
    }
}
