// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! Toasts are kept in arrival order. The first [`MAX_VISIBLE`] are on
//! screen; the rest wait for a slot and start aging only once shown.

use super::notification::{Notification, Severity, ToastId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(ToastId),
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a toast. Warnings and errors are also logged.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.key(), args = ?notification.args(), "toast");
            }
            Severity::Error => {
                tracing::error!(key = notification.key(), args = ?notification.args(), "toast");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.key(), "toast");
            }
        }
        self.entries.push_back(notification);
        self.reveal(Instant::now());
    }

    /// Removes a toast. Returns `true` if it was present.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id() != id);
        self.reveal(Instant::now());
        self.entries.len() < before
    }

    /// Drops every toast with the given key, shown or waiting.
    ///
    /// Used once the condition a toast reported is gone.
    pub fn retract(&mut self, key: &str) {
        self.entries.retain(|n| n.key() != key);
        self.reveal(Instant::now());
    }

    /// Removes the toasts whose lifetime ended at `now`.
    pub fn expire(&mut self, now: Instant) {
        self.entries.retain(|n| !n.is_expired(now));
        self.reveal(now);
    }

    pub fn update(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().take(MAX_VISIBLE)
    }

    #[cfg(test)]
    fn waiting(&self) -> usize {
        self.entries.len().saturating_sub(MAX_VISIBLE)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn reveal(&mut self, now: Instant) {
        for notification in self.entries.iter_mut().take(MAX_VISIBLE) {
            notification.mark_shown(now);
        }
    }
}
