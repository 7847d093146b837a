//! Toasts and confirmation prompts.
//!
//! [`NotificationQueue`] is a plain value owned by the root [`App`](crate::app::App);
//! components receive it by reference instead of reaching for a global.

use std::time::{Duration, Instant};

use gamestore_core::types::DbId;

/// How long a toast stays visible unless a duration is given.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// Zero means the toast stays until dismissed.
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    fn is_expired(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Action to run once a confirmation prompt is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteGame(DbId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
    pub action: ConfirmAction,
}

/// Pending toasts plus at most one open confirmation prompt.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    confirmation: Option<Confirmation>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast with [`DEFAULT_TOAST_DURATION`], returning its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.push_with_duration(message, kind, DEFAULT_TOAST_DURATION)
    }

    pub fn push_with_duration(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            duration,
            created_at: Instant::now(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Error)
    }

    /// Remove a toast by id. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose duration has elapsed at `now`. Returns how many
    /// were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        before - self.toasts.len()
    }

    /// Toasts in the order they were pushed.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Open a confirmation prompt, replacing any prompt already open.
    pub fn request_confirmation(&mut self, message: impl Into<String>, action: ConfirmAction) {
        self.confirmation = Some(Confirmation {
            message: message.into(),
            action,
        });
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Accept the open prompt, handing back the action to run.
    pub fn confirm(&mut self) -> Option<ConfirmAction> {
        self.confirmation.take().map(|c| c.action)
    }

    /// Close the open prompt without running it. Returns `false` if none was open.
    pub fn cancel_confirmation(&mut self) -> bool {
        self.confirmation.take().is_some()
    }
}
